use dioxus::prelude::*;

use super::{ProjectModal, SectionHeader};
use crate::components::{ErrorNotice, ExternalLink, LoadingIndicator};
use crate::content::use_projects;
use crate::core::filter::{filter_projects, CategoryFilter};
use crate::core::projection::{project_card, project_detail, ProjectCard};
use crate::i18n::use_localizer;

#[component]
pub fn ProjectsSection() -> Element {
    let i18n = use_localizer();
    let projects = use_projects();
    let mut filter = use_signal(CategoryFilter::default);
    let mut selected = use_signal(|| None::<i64>);

    let lang = i18n.language();
    let state = projects.state();
    let active = filter();
    let cards: Vec<ProjectCard> = filter_projects(&state.data, active)
        .into_iter()
        .map(|project| project_card(project, lang))
        .collect();
    let detail = selected().and_then(|id| {
        state
            .data
            .iter()
            .find(|project| project.id == id)
            .map(|project| project_detail(project, lang))
    });

    let filters: Vec<(CategoryFilter, &'static str, String, &'static str)> = CategoryFilter::ALL
        .iter()
        .map(|f| {
            let class = if *f == active {
                "filter-bar__button filter-bar__button--active"
            } else {
                "filter-bar__button"
            };
            (*f, f.id(), i18n.t(f.label_key()), class)
        })
        .collect();

    rsx! {
        section { id: "projects", class: "section projects",
            SectionHeader { title: i18n.t("projects-title"), description: i18n.t("projects-description") }

            div { class: "filter-bar", role: "tablist",
                for (option, id, label, class) in filters {
                    button {
                        key: "{id}",
                        class,
                        r#type: "button",
                        role: "tab",
                        aria_selected: option == active,
                        onclick: move |_| filter.set(option),
                        "{label}"
                    }
                }
            }

            if state.loading {
                LoadingIndicator {}
            } else {
                if let Some(message) = state.error.clone() {
                    ErrorNotice { message, on_retry: move |_| projects.refetch() }
                }
                ProjectGrid { cards, on_select: move |id| selected.set(Some(id)) }
            }

            if let Some(detail) = detail {
                ProjectModal { detail, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
pub fn ProjectGrid(cards: Vec<ProjectCard>, on_select: EventHandler<i64>) -> Element {
    let i18n = use_localizer();
    let view_details = i18n.t("projects-view-details");

    if cards.is_empty() {
        let empty = i18n.t("projects-empty");
        return rsx! {
            p { class: "projects__empty", "{empty}" }
        };
    }

    rsx! {
        div { class: "project-grid",
            for card in cards {
                article { key: "{card.id}", class: "project-card",
                    div { class: "project-card__media",
                        img { class: "project-card__image", src: "{card.image_url}", alt: "{card.title}" }
                        button {
                            class: "button project-card__details",
                            r#type: "button",
                            onclick: move |_| on_select.call(card.id),
                            "{view_details}"
                        }
                    }
                    div { class: "project-card__body",
                        h3 { class: "project-card__title", "{card.title}" }
                        p { class: "project-card__description", "{card.description}" }
                        ul { class: "badge-list",
                            for tech in card.technologies.iter() {
                                li { class: "badge badge--tech", "{tech}" }
                            }
                            if card.hidden_technologies > 0 {
                                li { class: "badge badge--more", "+{card.hidden_technologies}" }
                            }
                        }
                        if let Some(url) = card.source_url.clone() {
                            ExternalLink { class: "project-card__source", href: url, "GitHub" }
                        }
                    }
                }
            }
        }
    }
}
