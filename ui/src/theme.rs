//! Light/dark theme store.
//!
//! The theme lives in a `Signal` provided at the application root and is
//! applied through a `data-theme` attribute; the CSS in
//! `assets/theme/main.css` keys its variables off that attribute. Nothing is
//! persisted and the system preference is not consulted.

use dioxus::prelude::*;

use crate::i18n::use_localizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn css_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ThemeStore(Signal<Theme>);

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self(Signal::new(initial))
    }

    pub fn current(&self) -> Theme {
        (self.0)()
    }

    pub fn toggle(&mut self) {
        let next = self.0.peek().toggled();
        self.0.set(next);
    }
}

pub fn use_theme_provider() -> ThemeStore {
    use_context_provider(|| ThemeStore::new(Theme::default()))
}

pub fn use_theme() -> ThemeStore {
    use_context::<ThemeStore>()
}

/// Root element carrying theme, text direction and language attributes.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = use_theme();
    let i18n = use_localizer();
    let lang = i18n.language();
    let font = lang.font_class();

    rsx! {
        div {
            class: "app {font}",
            "data-theme": theme.current().css_value(),
            dir: lang.dir(),
            lang: lang.tag(),
            {children}
        }
    }
}
