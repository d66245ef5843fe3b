use crate::config::CONTACT_EMAIL;
use crate::i18n::Content;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Name, email and message are required; phone is optional.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Builds the `mailto:` link that the contact form opens, worded in the
/// language of `content`.
pub fn compose_mailto(form: &ContactForm, content: &Content) -> String {
    let mail = &content.contact.mail;
    let phone = match form.phone.trim() {
        "" => "-",
        phone => phone,
    };
    let body = format!(
        "{}\n\n{}: {}\n{}: {}\n{}: {}\n\n{}:\n{}",
        mail.greeting,
        mail.name,
        form.name.trim(),
        mail.email,
        form.email.trim(),
        mail.phone,
        phone,
        mail.message,
        form.message.trim(),
    );
    format!(
        "mailto:{}?subject={}&body={}",
        CONTACT_EMAIL,
        urlencoding::encode(mail.subject),
        urlencoding::encode(&body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ivan".into(),
            email: "ivan@example.com".into(),
            phone: "+375 29 123".into(),
            message: "Need 10 drills & a mallet?".into(),
        }
    }

    fn decoded_body(link: &str) -> String {
        let body = link.split("&body=").nth(1).unwrap();
        urlencoding::decode(body).unwrap().into_owned()
    }

    #[test]
    fn english_template() {
        let link = compose_mailto(&form(), Content::for_language(Language::En));
        assert!(link.starts_with("mailto:info@tiski.by?subject=Request%20from%20the%20HIBORG%20website&body="));
        let body = decoded_body(&link);
        assert!(body.starts_with("Hello!"));
        assert!(body.contains("Name: Ivan\n"));
        assert!(body.contains("Phone: +375 29 123\n"));
        assert!(body.ends_with("Message:\nNeed 10 drills & a mallet?"));
    }

    #[test]
    fn russian_template() {
        let link = compose_mailto(&form(), Content::for_language(Language::Ru));
        let subject = link
            .split("subject=")
            .nth(1)
            .and_then(|s| s.split('&').next())
            .unwrap();
        assert_eq!(urlencoding::decode(subject).unwrap(), "Заявка с сайта HIBORG");
        assert!(decoded_body(&link).contains("Имя: Ivan\n"));
    }

    #[test]
    fn user_input_cannot_break_out_of_the_query() {
        let mut form = form();
        form.message = "a&cc=evil@example.com?x=1#frag".into();
        let link = compose_mailto(&form, Content::for_language(Language::En));
        assert_eq!(link.matches('&').count(), 1);
        assert!(!link.contains('#'));
        assert!(decoded_body(&link).ends_with("a&cc=evil@example.com?x=1#frag"));
    }

    #[test]
    fn empty_phone_is_dashed() {
        let mut form = form();
        form.phone = "  ".into();
        let body = decoded_body(&compose_mailto(&form, Content::for_language(Language::En)));
        assert!(body.contains("Phone: -\n"));
    }

    #[test]
    fn completeness() {
        assert!(form().is_complete());
        let mut missing = form();
        missing.phone.clear();
        assert!(missing.is_complete());
        missing.message = " ".into();
        assert!(!missing.is_complete());
        assert!(!ContactForm::default().is_complete());
    }
}
