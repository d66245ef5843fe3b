use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ru, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Exact two-letter code, as written to storage.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "ru" => Some(Language::Ru),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn opposite(self) -> Language {
        match self {
            Language::Ru => Language::En,
            Language::En => Language::Ru,
        }
    }

    /// Infers a language from a client locale tag such as `en-US`.
    ///
    /// Only a lowercase `en` prefix is recognised; every other locale, `EN-GB`
    /// included, is left to the caller's fallback.
    pub fn from_locale(tag: &str) -> Option<Language> {
        if tag.get(..2)? == "en" {
            Some(Language::En)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Where the client's preferred locale comes from.
pub trait LocaleSource {
    fn language_tag(&self) -> Option<String>;
}

/// `navigator.language`
#[derive(Debug, Default, Clone, Copy)]
pub struct NavigatorLocale;

impl LocaleSource for NavigatorLocale {
    fn language_tag(&self) -> Option<String> {
        window().and_then(|w| w.navigator().language())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A fixed locale tag, `None` meaning the client reports nothing.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct FixedLocale(pub(crate) Option<String>);

    impl FixedLocale {
        pub(crate) fn new(tag: &str) -> Self {
            FixedLocale(Some(tag.to_string()))
        }
    }

    impl LocaleSource for FixedLocale {
        fn language_tag(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn opposite_is_an_involution() {
        assert_eq!(Language::Ru.opposite(), Language::En);
        assert_eq!(Language::En.opposite().opposite(), Language::En);
    }

    #[test]
    fn locale_inference_uses_prefix_only() {
        assert_eq!(Language::from_locale("en-US"), Some(Language::En));
        assert_eq!(Language::from_locale("en"), Some(Language::En));
        assert_eq!(Language::from_locale("EN-gb"), None);
        assert_eq!(Language::from_locale("fr-FR"), None);
        assert_eq!(Language::from_locale("ru-RU"), None);
        assert_eq!(Language::from_locale("e"), None);
        assert_eq!(Language::from_locale(""), None);
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let parsed: Language = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(parsed, Language::Ru);
    }
}
