use dioxus::prelude::*;

use crate::components::SiteHeader;
use crate::content::{use_profile, DataHandle};
use crate::core::mail::MailLanguage;
use crate::i18n::{use_localizer_provider, Language};
use crate::theme::{use_theme_provider, ThemedRoot};
use crate::views::{AchievementsSection, ContactSection, Hero, ProjectsSection};

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// Application root: provides the data handle, localizer and theme to the
/// whole page.
#[component]
pub fn PortfolioApp(source: DataHandle, #[props(default)] mail_language: MailLanguage) -> Element {
    use_context_provider(|| source.clone());
    use_localizer_provider(Language::default());
    use_theme_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemedRoot {
            SiteHeader {}
            PortfolioPage { mail_language }
        }
    }
}

#[component]
fn PortfolioPage(mail_language: MailLanguage) -> Element {
    let profile = use_profile();
    let state = profile.state();

    rsx! {
        main { class: "page",
            Hero { profile: state.clone(), on_retry: move |_| profile.refetch() }
            ProjectsSection {}
            AchievementsSection {}
            ContactSection { profile: state.data, mail_language }
        }
    }
}
