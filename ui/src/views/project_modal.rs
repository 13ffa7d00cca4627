use dioxus::prelude::*;

use crate::components::ExternalLink;
use crate::core::format::ordinal;
use crate::core::projection::ProjectDetail;
use crate::i18n::use_localizer;

#[component]
pub fn ProjectModal(detail: ProjectDetail, on_close: EventHandler<()>) -> Element {
    let i18n = use_localizer();
    let close_label = i18n.t("projects-close");
    let description_label = i18n.t("projects-description-label");
    let technologies_label = i18n.t("projects-technologies");
    let purpose_label = i18n.t("projects-purpose");
    let goals_label = i18n.t("projects-goals");
    let screenshots_label = i18n.t("projects-screenshots");

    let screenshots: Vec<(String, String)> = detail
        .screenshots
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let alt = i18n.t_with("projects-screenshot-alt", &[("index", ordinal(i))]);
            (src.clone(), alt)
        })
        .collect();
    let links: Vec<(String, &'static str, String)> = detail
        .links
        .iter()
        .map(|link| (link.url.clone(), link.kind.class(), i18n.t(link.kind.label_key())))
        .collect();

    rsx! {
        div {
            class: "modal",
            role: "dialog",
            aria_modal: "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal__panel",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "modal__header",
                    h2 { class: "modal__title", "{detail.title}" }
                    button {
                        class: "icon-button modal__close",
                        r#type: "button",
                        aria_label: "{close_label}",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                div { class: "modal__body",
                    img { class: "modal__cover", src: "{detail.image_url}", alt: "{detail.title}" }

                    section { class: "modal__block",
                        h3 { "{description_label}" }
                        p { "{detail.description}" }
                    }

                    section { class: "modal__block",
                        h3 { "{technologies_label}" }
                        ul { class: "badge-list",
                            for tech in detail.technologies.iter() {
                                li { class: "badge badge--tech", "{tech}" }
                            }
                        }
                    }

                    section { class: "modal__block",
                        h3 { "{purpose_label}" }
                        p { "{detail.purpose}" }
                    }

                    if !detail.goals.is_empty() {
                        section { class: "modal__block",
                            h3 { "{goals_label}" }
                            ul { class: "goal-list",
                                for goal in detail.goals.iter() {
                                    li { class: "goal-list__item", "✓ {goal}" }
                                }
                            }
                        }
                    }

                    if !screenshots.is_empty() {
                        section { class: "modal__block",
                            h3 { "{screenshots_label}" }
                            div { class: "screenshot-grid",
                                for (src, alt) in screenshots {
                                    img { class: "screenshot-grid__image", src: "{src}", alt: "{alt}" }
                                }
                            }
                        }
                    }

                    if !links.is_empty() {
                        footer { class: "modal__links",
                            for (url, class, label) in links {
                                ExternalLink { class: "button {class}", href: url, "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
