use std::rc::Rc;

use log::{debug, info, warn};
use yew::prelude::*;

use super::{Content, Language, LocaleSource};
use crate::config::{DEFAULT_LANGUAGE, LANGUAGE_STORAGE_KEY};
use crate::storage::PreferenceStore;

/// Active display language plus the storage it is persisted to.
///
/// Constructed once in `App`, handed down through a `ContextProvider`, and
/// read by sections through [`use_language`].
#[derive(Clone)]
pub struct LanguageStore {
    current: Language,
    storage: Rc<dyn PreferenceStore>,
}

impl LanguageStore {
    /// Resolves the starting language: stored choice, then client locale, then the default.
    pub fn init(storage: Rc<dyn PreferenceStore>, locale: &dyn LocaleSource) -> Self {
        let current = match storage.get(LANGUAGE_STORAGE_KEY) {
            Ok(Some(saved)) => Language::from_code(&saved),
            Ok(None) => None,
            Err(e) => {
                warn!("Could not read saved language: {}", e);
                None
            }
        }
        .map(|lang| {
            info!("Using saved language {}", lang);
            lang
        })
        .or_else(|| {
            let lang = locale.language_tag().and_then(|tag| Language::from_locale(&tag))?;
            info!("Using client locale language {}", lang);
            Some(lang)
        })
        .unwrap_or_else(|| {
            info!("Falling back to default language {}", DEFAULT_LANGUAGE);
            DEFAULT_LANGUAGE
        });

        Self { current, storage }
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    pub fn content(&self) -> &'static Content {
        Content::for_language(self.current)
    }

    pub fn set_language(&mut self, lang: Language) {
        debug!("Switching language {} -> {}", self.current, lang);
        self.current = lang;
        if let Err(e) = self.storage.set(LANGUAGE_STORAGE_KEY, lang.code()) {
            warn!("Language preference not saved: {}", e);
        }
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.current.opposite());
    }
}

impl PartialEq for LanguageStore {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

pub enum LanguageAction {
    Set(Language),
    Toggle,
}

impl Reducible for LanguageStore {
    type Action = LanguageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LanguageAction::Set(lang) => next.set_language(lang),
            LanguageAction::Toggle => next.toggle_language(),
        }
        Rc::new(next)
    }
}

pub type LanguageContext = UseReducerHandle<LanguageStore>;

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("use_language called outside the language ContextProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::language::tests::FixedLocale;
    use crate::storage::tests::{MemoryStorage, UnavailableStorage};

    fn store_with(storage: &Rc<MemoryStorage>, locale: FixedLocale) -> LanguageStore {
        LanguageStore::init(storage.clone(), &locale)
    }

    fn saved(storage: &MemoryStorage) -> Option<String> {
        storage.get(LANGUAGE_STORAGE_KEY).unwrap()
    }

    #[test]
    fn saved_choice_beats_locale() {
        let storage = Rc::new(MemoryStorage::with_item(LANGUAGE_STORAGE_KEY, "ru"));
        let store = store_with(&storage, FixedLocale::new("en-US"));
        assert_eq!(store.current_language(), Language::Ru);
    }

    #[test]
    fn english_locale_without_saved_choice() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(&storage, FixedLocale::new("en-US"));
        assert_eq!(store.current_language(), Language::En);
        // Inference alone never writes.
        assert_eq!(saved(&storage), None);
    }

    #[test]
    fn unknown_locale_falls_back_to_russian() {
        let storage = Rc::new(MemoryStorage::new());
        assert_eq!(
            store_with(&storage, FixedLocale::new("fr-FR")).current_language(),
            Language::Ru
        );
        assert_eq!(
            store_with(&storage, FixedLocale::default()).current_language(),
            Language::Ru
        );
    }

    #[test]
    fn uppercase_english_locale_is_not_recognised() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(&storage, FixedLocale::new("EN-GB"));
        assert_eq!(store.current_language(), Language::Ru);
    }

    #[test]
    fn invalid_saved_value_is_ignored() {
        let storage = Rc::new(MemoryStorage::with_item(LANGUAGE_STORAGE_KEY, "de"));
        let store = store_with(&storage, FixedLocale::new("en-GB"));
        assert_eq!(store.current_language(), Language::En);
    }

    #[test]
    fn set_language_persists_and_switches_content() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = store_with(&storage, FixedLocale::new("ru-RU"));
        store.set_language(Language::En);
        assert_eq!(store.current_language(), Language::En);
        assert_eq!(saved(&storage).as_deref(), Some("en"));
        assert!(std::ptr::eq(store.content(), Content::for_language(Language::En)));
        assert_eq!(store.content().nav.contact, "Contact");
    }

    #[test]
    fn setting_same_language_twice_is_idempotent() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = store_with(&storage, FixedLocale::default());
        store.set_language(Language::En);
        let before = store.clone();
        store.set_language(Language::En);
        assert_eq!(store, before);
        assert_eq!(saved(&storage).as_deref(), Some("en"));
    }

    #[test]
    fn double_toggle_restores_language_and_saved_value() {
        let storage = Rc::new(MemoryStorage::with_item(LANGUAGE_STORAGE_KEY, "en"));
        let mut store = store_with(&storage, FixedLocale::default());
        store.toggle_language();
        assert_eq!(store.current_language(), Language::Ru);
        assert_eq!(saved(&storage).as_deref(), Some("ru"));
        store.toggle_language();
        assert_eq!(store.current_language(), Language::En);
        assert_eq!(saved(&storage).as_deref(), Some("en"));
    }

    #[test]
    fn unavailable_storage_degrades_silently() {
        let mut store = LanguageStore::init(Rc::new(UnavailableStorage), &FixedLocale::new("en-US"));
        assert_eq!(store.current_language(), Language::En);
        store.set_language(Language::Ru);
        assert_eq!(store.current_language(), Language::Ru);
        store.toggle_language();
        assert_eq!(store.current_language(), Language::En);
    }

    #[test]
    fn reducer_produces_new_state_without_touching_old() {
        let storage = Rc::new(MemoryStorage::new());
        let first = Rc::new(store_with(&storage, FixedLocale::default()));
        let second = first.clone().reduce(LanguageAction::Toggle);
        assert_eq!(first.current_language(), Language::Ru);
        assert_eq!(second.current_language(), Language::En);

        let third = second.clone().reduce(LanguageAction::Set(Language::En));
        assert_eq!(*third, *second);
        assert_eq!(saved(&storage).as_deref(), Some("en"));
    }
}
