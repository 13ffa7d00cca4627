use api::Profile;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::SectionHeader;
use crate::components::ExternalLink;
use crate::core::mail::{submission_href, ContactMessage, MailLanguage};
use crate::core::platform;
use crate::core::profile::ProfileView;
use crate::i18n::use_localizer;

#[component]
pub fn ContactSection(
    #[props(!optional)] profile: Option<Profile>,
    #[props(default)] mail_language: MailLanguage,
) -> Element {
    let i18n = use_localizer();
    let lang = i18n.language();
    let view = i18n.with_catalog(|catalog| ProfileView::resolve(profile.as_ref(), lang, catalog));

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let recipient = view.email.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let msg = ContactMessage {
            name: name(),
            email: email(),
            message: message(),
        };
        let mail_lang = mail_language.resolve(i18n.language());
        let Some(href) =
            i18n.with_catalog(|catalog| submission_href(&recipient, &msg, mail_lang, catalog))
        else {
            return;
        };
        tracing::info!(lang = mail_lang.tag(), "handing contact message to the mail client");
        platform::open_url(&href);
    };

    let mailto = view.mailto();

    rsx! {
        section { id: "contact", class: "section contact",
            SectionHeader { title: i18n.t("contact-title"), description: i18n.t("contact-description") }

            div { class: "contact__layout",
                div { class: "contact__aside",
                    ContactInfo { view: view.clone() }

                    div { class: "contact-cta",
                        h3 { class: "contact-cta__title", {i18n.t("contact-cta-title")} }
                        p { class: "contact-cta__description", {i18n.t("contact-cta-description")} }
                        div { class: "contact-cta__actions",
                            ExternalLink { class: "button button--primary", href: mailto, {i18n.t("contact-cta-email")} }
                            ExternalLink { class: "button button--ghost", href: view.linkedin_url.clone(), "LinkedIn" }
                        }
                    }
                }

                form { class: "contact-form", onsubmit: on_submit,
                    h3 { class: "contact-form__title", {i18n.t("contact-form-title")} }

                    label { class: "contact-form__label", r#for: "contact-name", {i18n.t("contact-form-name")} }
                    input {
                        id: "contact-name",
                        class: "contact-form__input",
                        r#type: "text",
                        name: "name",
                        required: true,
                        placeholder: i18n.t("contact-form-name-placeholder"),
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }

                    label { class: "contact-form__label", r#for: "contact-email", {i18n.t("contact-form-email")} }
                    input {
                        id: "contact-email",
                        class: "contact-form__input",
                        r#type: "email",
                        name: "email",
                        required: true,
                        placeholder: i18n.t("contact-form-email-placeholder"),
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }

                    label { class: "contact-form__label", r#for: "contact-message", {i18n.t("contact-form-message")} }
                    textarea {
                        id: "contact-message",
                        class: "contact-form__input contact-form__textarea",
                        name: "message",
                        rows: 5,
                        required: true,
                        placeholder: i18n.t("contact-form-message-placeholder"),
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }

                    button { class: "button button--primary contact-form__submit", r#type: "submit",
                        {i18n.t("contact-form-send")}
                    }
                }
            }
        }
    }
}

/// Contact details list; the location entry is not a link.
#[component]
pub fn ContactInfo(view: ProfileView) -> Element {
    let i18n = use_localizer();
    let rows = [
        ("contact-info__item--email", i18n.t("contact-email"), view.email.clone(), view.mailto()),
        ("contact-info__item--phone", i18n.t("contact-phone"), view.phone.clone(), view.tel()),
        (
            "contact-info__item--linkedin",
            "LinkedIn".to_string(),
            view.linkedin_display().to_string(),
            view.linkedin_url.clone(),
        ),
        (
            "contact-info__item--github",
            "GitHub".to_string(),
            view.github_display().to_string(),
            view.github_url.clone(),
        ),
        (
            "contact-info__item--location",
            i18n.t("contact-location"),
            view.location.clone(),
            "#".to_string(),
        ),
    ];

    rsx! {
        div { class: "contact-info",
            h3 { class: "contact-info__title", {i18n.t("contact-info")} }
            ul { class: "contact-info__list",
                for (modifier, label, value, href) in rows {
                    li { key: "{modifier}", class: "contact-info__item {modifier}",
                        ExternalLink { class: "contact-info__link", href,
                            span { class: "contact-info__label", "{label}" }
                            span { class: "contact-info__value", "{value}" }
                        }
                    }
                }
            }
        }
    }
}
