mod content;
mod en;
mod language;
mod ru;
mod store;

pub use content::*;
pub use language::{Language, LocaleSource, NavigatorLocale};
pub use store::{use_language, LanguageAction, LanguageContext, LanguageStore};
