use api::Achievements;
use dioxus::prelude::*;

use super::SectionHeader;
use crate::components::{ErrorNotice, LoadingIndicator};
use crate::content::{use_achievements, ContentState};
use crate::core::filter::AchievementTab;
use crate::core::format::ordinal;
use crate::core::projection::{competition_card, course_card, CompetitionCard, CourseCard};
use crate::i18n::use_localizer;

#[component]
pub fn AchievementsSection() -> Element {
    let i18n = use_localizer();
    let achievements = use_achievements();
    let mut tab = use_signal(AchievementTab::default);

    let active = tab();
    let tabs: Vec<(AchievementTab, String, &'static str)> = AchievementTab::ALL
        .iter()
        .map(|t| {
            let class = if *t == active {
                "tabs__button tabs__button--active"
            } else {
                "tabs__button"
            };
            (*t, i18n.t(t.label_key()), class)
        })
        .collect();

    rsx! {
        section { id: "achievements", class: "section achievements",
            SectionHeader {
                title: i18n.t("achievements-title"),
                description: i18n.t("achievements-description"),
            }

            div { class: "tabs", role: "tablist",
                for (option, label, class) in tabs {
                    button {
                        key: "{label}",
                        class,
                        r#type: "button",
                        role: "tab",
                        aria_selected: option == active,
                        onclick: move |_| tab.set(option),
                        "{label}"
                    }
                }
            }

            AchievementsBody {
                tab: active,
                state: achievements.state(),
                on_retry: move |_| achievements.refetch(),
            }
        }
    }
}

/// Content of the active tab for a given adapter state.
#[component]
pub fn AchievementsBody(
    tab: AchievementTab,
    state: ContentState<Achievements>,
    on_retry: EventHandler<()>,
) -> Element {
    let i18n = use_localizer();
    let lang = i18n.language();

    if state.loading {
        return rsx! { LoadingIndicator {} };
    }

    let notice = state.error.clone();
    let body = match tab {
        AchievementTab::Courses => {
            let cards: Vec<CourseCard> = state
                .data
                .courses
                .iter()
                .map(|c| course_card(c, lang))
                .collect();
            rsx! {
                div { class: "course-grid",
                    for card in cards {
                        CourseCardView { key: "{card.id}", card }
                    }
                }
            }
        }
        AchievementTab::Competitions => {
            let cards: Vec<CompetitionCard> = state
                .data
                .competitions
                .iter()
                .map(|c| competition_card(c, lang))
                .collect();
            rsx! {
                div { class: "competition-list",
                    for card in cards {
                        CompetitionCardView { key: "{card.id}", card }
                    }
                }
            }
        }
    };

    rsx! {
        if let Some(message) = notice {
            ErrorNotice { message, on_retry }
        }
        {body}
    }
}

#[component]
fn CourseCardView(card: CourseCard) -> Element {
    rsx! {
        article { class: "course-card",
            div { class: "course-card__media",
                img { class: "course-card__image", src: "{card.image_url}", alt: "{card.name}" }
            }
            div { class: "course-card__body",
                time { class: "course-card__date", "{card.date}" }
                h3 { class: "course-card__name", "{card.name}" }
                p { class: "course-card__provider", "{card.provider}" }
                p { class: "course-card__description", "{card.description}" }
                ul { class: "badge-list",
                    for skill in card.skills.iter() {
                        li { class: "badge badge--skill", "{skill}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CompetitionCardView(card: CompetitionCard) -> Element {
    let i18n = use_localizer();
    let experience_label = i18n.t("achievements-experience");
    let skills_label = i18n.t("achievements-skills");
    let gallery: Vec<(String, String)> = card
        .gallery
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let alt = i18n.t_with(
                "achievements-gallery-alt",
                &[("name", card.name.clone()), ("index", ordinal(i))],
            );
            (src.clone(), alt)
        })
        .collect();

    rsx! {
        article { class: "competition-card",
            div { class: "competition-card__info",
                p { class: "competition-card__meta",
                    span { class: "competition-card__position", "🏆 {card.position}" }
                    span { class: "competition-card__separator", "•" }
                    time { class: "competition-card__date", "{card.date}" }
                }
                h3 { class: "competition-card__name", "{card.name}" }
                p { class: "competition-card__type", "{card.kind}" }
                p { class: "competition-card__description", "{card.description}" }

                div { class: "competition-card__experience",
                    h4 { "{experience_label}" }
                    p { "{card.experience}" }
                }
                div { class: "competition-card__skills",
                    h4 { "{skills_label}" }
                    ul { class: "badge-list",
                        for skill in card.skills.iter() {
                            li { class: "badge badge--skill", "{skill}" }
                        }
                    }
                }
            }

            div { class: "competition-card__media",
                if let Some(cover) = card.image_url.clone() {
                    img { class: "competition-card__cover", src: "{cover}", alt: "{card.name}" }
                }
                if !gallery.is_empty() {
                    div { class: "gallery",
                        for (src, alt) in gallery {
                            img { class: "gallery__image", src: "{src}", alt: "{alt}" }
                        }
                    }
                }
            }
        }
    }
}
