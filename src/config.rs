use log::Level;

use crate::i18n::Language;

pub const LANGUAGE_STORAGE_KEY: &str = "hiborg-lang";
pub const CONSENT_STORAGE_KEY: &str = "cookie-consent";
pub const DEFAULT_LANGUAGE: Language = Language::Ru;

pub const CONTACT_EMAIL: &str = "info@tiski.by";
pub const MAIN_SITE_URL: &str = "https://tiski.by";
pub const WHATSAPP_URL: &str = "https://wa.me/375447247736";
pub const PHONE_HREF: &str = "tel:+375447247736";

pub const BANNER_SHOW_DELAY_MS: u32 = 1_500;
pub const CONTACT_RESET_DELAY_MS: u32 = 3_000;
pub const SHOWCASE_ROTATE_INTERVAL_MS: u32 = 4_000;

/// Shrinks the viewport's bottom edge so elements have to be 50px in before they count.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
