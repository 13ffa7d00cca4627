use api::Profile;
use dioxus::prelude::*;

use crate::components::{ErrorNotice, ExternalLink};
use crate::content::ContentState;
use crate::core::profile::{avatar_src, ProfileView};
use crate::i18n::use_localizer;

#[component]
pub fn Hero(profile: ContentState<Option<Profile>>, on_retry: EventHandler<()>) -> Element {
    let i18n = use_localizer();
    let lang = i18n.language();
    let view = i18n.with_catalog(|catalog| {
        ProfileView::resolve(profile.data.as_ref(), lang, catalog)
    });
    let mut failed_src = use_signal(|| None::<String>);

    let image_src = avatar_src(&view.image_url, failed_src.read().as_deref()).to_string();
    let attempted = view.image_url.clone();
    let on_image_error = move |_: ImageEvent| {
        if failed_src.peek().as_deref() != Some(attempted.as_str()) {
            failed_src.set(Some(attempted.clone()));
        }
    };
    let mailto = view.mailto();
    let tel = view.tel();
    let projects_label = i18n.t("nav-projects");

    rsx! {
        section { id: "home", class: "section hero",
            div { class: "hero__avatar",
                img {
                    class: "hero__image",
                    src: "{image_src}",
                    alt: "{view.name}",
                    onerror: on_image_error,
                }
            }

            div { class: "hero__intro",
                h1 { class: "hero__name", "{view.name}" }
                h2 { class: "hero__title", "{view.title}" }
                p { class: "hero__description", "{view.description}" }
            }

            div { class: "hero__links",
                ExternalLink { class: "hero__link hero__link--linkedin", href: view.linkedin_url.clone(), "LinkedIn" }
                ExternalLink { class: "hero__link hero__link--email", href: mailto, "Email" }
                ExternalLink { class: "hero__link hero__link--phone", href: tel, "Phone" }
                ExternalLink { class: "hero__link hero__link--github", href: view.github_url.clone(), "GitHub" }
            }

            if let Some(message) = profile.error.clone() {
                ErrorNotice { message, on_retry }
            }

            a { class: "hero__scroll", href: "#projects", aria_label: "{projects_label}", "⌄" }
        }
    }
}
