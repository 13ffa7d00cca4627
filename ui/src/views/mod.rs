//! Page sections, in page order.

mod achievements;
mod contact;
mod hero;
mod project_modal;
mod projects;

pub use achievements::{AchievementsBody, AchievementsSection};
pub use contact::{ContactInfo, ContactSection};
pub use hero::Hero;
pub use project_modal::ProjectModal;
pub use projects::{ProjectGrid, ProjectsSection};

use dioxus::prelude::*;

/// Title + lead paragraph shared by every section.
#[component]
fn SectionHeader(title: String, description: String) -> Element {
    rsx! {
        header { class: "section__header",
            h2 { class: "section__title", "{title}" }
            p { class: "section__description", "{description}" }
        }
    }
}
