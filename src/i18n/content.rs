//! Shape of the localized string table.
//!
//! Every language provides one `Content` value with the same shape: same
//! fields, same list lengths, same order. Nothing enforces that at compile
//! time beyond the struct itself, so the list lengths are covered by a test.

use serde::Serialize;

use super::{en, ru, Language};

#[derive(Debug, PartialEq, Serialize)]
pub struct Content {
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub benefits: Benefits,
    pub products: Products,
    pub showcase: Showcase,
    pub why_us: WhyUs,
    pub faq: Faq,
    pub testimonials: Testimonials,
    pub partners: Partners,
    pub contact: Contact,
    pub cookie: Cookie,
    pub floating: Floating,
    pub footer: Footer,
}

impl Content {
    pub fn for_language(lang: Language) -> &'static Content {
        match lang {
            Language::Ru => &ru::RU,
            Language::En => &en::EN,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Nav {
    pub about: &'static str,
    pub benefits: &'static str,
    pub products: &'static str,
    pub why_us: &'static str,
    pub faq: &'static str,
    pub partners: &'static str,
    pub contact: &'static str,
    pub toggle_menu: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub cta_secondary: &'static str,
    pub years: &'static str,
    pub clients: &'static str,
    pub scroll_hint: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct About {
    pub title: &'static str,
    pub description: &'static str,
    pub mission: &'static str,
    pub values: AboutValues,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AboutValues {
    pub quality: Card,
    pub reliability: Card,
    pub affordability: Card,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Benefits {
    pub title: &'static str,
    pub items: &'static [Card],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub count: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Products {
    pub title: &'static str,
    pub description: &'static str,
    pub categories: &'static [Category],
    pub cta: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ShowcaseItem {
    pub image: &'static str,
    pub name: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Showcase {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub go_to_slide: &'static str,
    pub items: &'static [ShowcaseItem],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct WhyUs {
    pub title: &'static str,
    pub reasons: &'static [Card],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Faq {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [FaqEntry],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Testimonials {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [Testimonial],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Partners {
    pub title: &'static str,
    pub description: &'static str,
    pub where_to_buy: &'static str,
    pub where_to_buy_desc: &'static str,
    pub main_site: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ContactFormLabels {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
    pub sent: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ContactInfo {
    pub address: &'static str,
    pub address_value: &'static str,
    pub warehouse: &'static str,
    pub warehouse_value: &'static str,
    pub phones: &'static str,
    pub email: &'static str,
}

/// Subject and body labels for the pre-filled email.
#[derive(Debug, PartialEq, Serialize)]
pub struct MailTemplate {
    pub subject: &'static str,
    pub greeting: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Contact {
    pub title: &'static str,
    pub description: &'static str,
    pub form: ContactFormLabels,
    pub info: ContactInfo,
    pub mail: MailTemplate,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct PolicySection {
    pub heading: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Cookie {
    pub text: &'static str,
    pub policy_link: &'static str,
    pub accept: &'static str,
    pub decline: &'static str,
    pub close: &'static str,
    pub policy_title: &'static str,
    pub policy: &'static [PolicySection],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Floating {
    pub toggle: &'static str,
    pub whatsapp: &'static str,
    pub call: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Footer {
    pub company: &'static str,
    pub rights: &'static str,
    pub main_site: &'static str,
    pub privacy: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    /// Replaces every leaf with `null`, keeping object keys and array lengths.
    fn shape(value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), shape(v)))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(items.iter().map(shape).collect()),
            _ => Value::Null,
        }
    }

    fn shape_of(lang: Language) -> Value {
        shape(&serde_json::to_value(Content::for_language(lang)).unwrap())
    }

    #[test]
    fn dictionaries_share_one_shape() {
        assert_eq!(shape_of(Language::Ru), shape_of(Language::En));
    }

    #[test]
    fn dictionary_follows_language() {
        assert_eq!(Content::for_language(Language::En).hero.cta, "View Catalog");
        assert_eq!(Content::for_language(Language::Ru).hero.cta, "Смотреть каталог");
        assert_ne!(
            Content::for_language(Language::Ru),
            Content::for_language(Language::En)
        );
    }

    #[test]
    fn no_empty_strings() {
        fn walk(value: &Value, path: &str) {
            match value {
                Value::Object(map) => map
                    .iter()
                    .for_each(|(k, v)| walk(v, &format!("{}.{}", path, k))),
                Value::Array(items) => items
                    .iter()
                    .enumerate()
                    .for_each(|(i, v)| walk(v, &format!("{}[{}]", path, i))),
                Value::String(s) => assert!(!s.trim().is_empty(), "empty string at {}", path),
                _ => {}
            }
        }
        for lang in Language::ALL {
            walk(
                &serde_json::to_value(Content::for_language(lang)).unwrap(),
                lang.code(),
            );
        }
    }

    #[test]
    fn ratings_are_within_five_stars() {
        for lang in Language::ALL {
            for t in Content::for_language(lang).testimonials.items {
                assert!((1..=5).contains(&t.rating), "{} has rating {}", t.name, t.rating);
            }
        }
    }

    #[test]
    fn showcase_images_match_across_languages() {
        let ru = Content::for_language(Language::Ru).showcase.items;
        let en = Content::for_language(Language::En).showcase.items;
        for (a, b) in ru.iter().zip(en) {
            assert_eq!(a.image, b.image);
        }
    }
}
