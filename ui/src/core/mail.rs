//! Contact form handoff to the visitor's mail client.
//!
//! Nothing is transmitted by the application: submitting the form builds a
//! `mailto:` URI and the host opens it.

use url::form_urlencoded::byte_serialize;

use crate::i18n::{Catalog, Language};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// All three fields are required by the form.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Language used for the subject line and body labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailLanguage {
    Fixed(Language),
    FollowInterface,
}

impl Default for MailLanguage {
    /// Mail is always labelled in Arabic unless configured otherwise.
    fn default() -> Self {
        MailLanguage::Fixed(Language::Arabic)
    }
}

impl MailLanguage {
    pub fn resolve(self, interface: Language) -> Language {
        match self {
            MailLanguage::Fixed(lang) => lang,
            MailLanguage::FollowInterface => interface,
        }
    }
}

/// Percent-encode like `encodeURIComponent` for the characters that matter
/// (spaces become `%20`, never `+`).
pub fn encode_component(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn subject(catalog: &Catalog, lang: Language, msg: &ContactMessage) -> String {
    catalog.lookup_with(lang, "mail-subject", &[("name", msg.name.clone())])
}

pub fn body(catalog: &Catalog, lang: Language, msg: &ContactMessage) -> String {
    let name = catalog.lookup(lang, "mail-label-name");
    let email = catalog.lookup(lang, "mail-label-email");
    let message = catalog.lookup(lang, "mail-label-message");
    format!(
        "{name}: {}\n{email}: {}\n\n{message}:\n{}",
        msg.name, msg.email, msg.message
    )
}

/// `mailto:{recipient}?subject=..&body=..`
pub fn compose_mailto(
    recipient: &str,
    msg: &ContactMessage,
    lang: Language,
    catalog: &Catalog,
) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient.trim(),
        encode_component(&subject(catalog, lang, msg)),
        encode_component(&body(catalog, lang, msg)),
    )
}

/// The `mailto:` URI a form submission hands to the host, or `None` while
/// any field is still blank.
pub fn submission_href(
    recipient: &str,
    msg: &ContactMessage,
    lang: Language,
    catalog: &Catalog,
) -> Option<String> {
    msg.is_complete().then(|| compose_mailto(recipient, msg, lang, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn ali() -> ContactMessage {
        ContactMessage {
            name: "Ali".into(),
            email: "ali@example.com".into(),
            message: "Hello".into(),
        }
    }

    fn decoded_pairs(mailto: &str) -> (String, String) {
        let url = Url::parse(mailto).unwrap();
        let mut subject = String::new();
        let mut body = String::new();
        for (k, v) in url.query_pairs() {
            match k.as_ref() {
                "subject" => subject = v.into_owned(),
                "body" => body = v.into_owned(),
                _ => {}
            }
        }
        (subject, body)
    }

    #[test]
    fn arabic_template_round_trips() {
        let catalog = Catalog::load().unwrap();
        let mailto = compose_mailto("nemeradel62@gmail.com", &ali(), Language::Arabic, &catalog);

        assert!(mailto.starts_with("mailto:nemeradel62@gmail.com?subject="));
        assert!(!mailto.contains(' '));
        let (subject, body) = decoded_pairs(&mailto);
        assert_eq!(subject, "رسالة من Ali");
        assert_eq!(
            body,
            "الاسم: Ali\nالبريد الإلكتروني: ali@example.com\n\nالرسالة:\nHello"
        );
    }

    #[test]
    fn default_policy_ignores_interface_language() {
        assert_eq!(MailLanguage::default().resolve(Language::English), Language::Arabic);
        assert_eq!(
            MailLanguage::FollowInterface.resolve(Language::English),
            Language::English
        );
    }

    #[test]
    fn english_labels_when_following_interface() {
        let catalog = Catalog::load().unwrap();
        let lang = MailLanguage::FollowInterface.resolve(Language::English);
        let mailto = compose_mailto("me@example.com", &ali(), lang, &catalog);
        let (subject, body) = decoded_pairs(&mailto);
        assert_eq!(subject, "Message from Ali");
        assert!(body.starts_with("Name: Ali\n"));
    }

    #[test]
    fn spaces_and_plus_are_escaped() {
        assert_eq!(encode_component("a b+c"), "a%20b%2Bc");
        assert_eq!(encode_component("x\ny"), "x%0Ay");
    }

    #[test]
    fn blank_fields_make_message_incomplete() {
        let mut msg = ali();
        assert!(msg.is_complete());
        msg.message = "  ".into();
        assert!(!msg.is_complete());
    }

    #[test]
    fn incomplete_submission_is_not_handed_off() {
        let catalog = Catalog::load().unwrap();
        let mut msg = ali();
        msg.email = String::new();
        assert_eq!(
            submission_href("me@example.com", &msg, Language::Arabic, &catalog),
            None
        );

        let href = submission_href("me@example.com", &ali(), Language::Arabic, &catalog);
        assert!(href.is_some_and(|h| h.starts_with("mailto:me@example.com?subject=")));
    }
}
