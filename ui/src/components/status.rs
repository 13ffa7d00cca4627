use dioxus::prelude::*;

use crate::i18n::use_localizer;

#[component]
pub fn LoadingIndicator() -> Element {
    let i18n = use_localizer();
    let label = i18n.t("status-loading");

    rsx! {
        div { class: "status status--loading", role: "status",
            div { class: "spinner", aria_hidden: "true" }
            span { class: "visually-hidden", "{label}" }
        }
    }
}

/// Failure notice for an adapter-backed section, with a retry button.
#[component]
pub fn ErrorNotice(message: String, on_retry: EventHandler<()>) -> Element {
    let i18n = use_localizer();
    let title = i18n.t("status-error");
    let retry = i18n.t("status-retry");

    rsx! {
        div { class: "status status--error", role: "alert",
            p { class: "status__title", "⚠️ {title}" }
            p { class: "status__detail", "{message}" }
            button {
                class: "button button--ghost status__retry",
                r#type: "button",
                onclick: move |_| on_retry.call(()),
                "{retry}"
            }
        }
    }
}
