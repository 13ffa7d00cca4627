use dioxus::prelude::*;

use crate::components::scroll::{
    scroll_to_top, use_scroll_offset, HEADER_SOLID_AFTER, SCROLL_TOP_AFTER,
};
use crate::i18n::use_localizer;
use crate::theme::use_theme;

/// Single-page sections, in page order.
const NAV_ITEMS: [(&str, &str); 4] = [
    ("#home", "nav-home"),
    ("#projects", "nav-projects"),
    ("#achievements", "nav-achievements"),
    ("#contact", "nav-contact"),
];

#[component]
pub fn SiteHeader() -> Element {
    let mut i18n = use_localizer();
    let mut theme = use_theme();
    let mut menu_open = use_signal(|| false);
    let offset = use_scroll_offset();

    let header_class = if offset() > HEADER_SOLID_AFTER {
        "site-header site-header--solid"
    } else {
        "site-header"
    };
    let brand = i18n.t("hero-title");
    let language_label = i18n.t("nav-toggle-language");
    let theme_label = i18n.t("nav-toggle-theme");
    let menu_label = i18n.t("nav-toggle-menu");
    let theme_icon = if theme.current().is_dark() { "☀" } else { "☾" };
    let (menu_icon, menu_expanded) = if menu_open() { ("✕", "true") } else { ("☰", "false") };

    let links: Vec<(&'static str, String)> = NAV_ITEMS
        .iter()
        .map(|(href, key)| (*href, i18n.t(key)))
        .collect();

    rsx! {
        header {
            id: "site-header",
            class: header_class,
            nav { class: "site-header__inner",
                a { class: "site-header__brand", href: "#home", "{brand}" }

                div { class: "site-header__links",
                    for (href, label) in links.clone() {
                        a { key: "{href}", class: "site-header__link", href: "{href}", "{label}" }
                    }
                }

                div { class: "site-header__actions",
                    button {
                        class: "icon-button site-header__language",
                        r#type: "button",
                        title: "{language_label}",
                        onclick: move |_| i18n.toggle(),
                        "{language_label}"
                    }
                    button {
                        class: "icon-button site-header__theme",
                        r#type: "button",
                        title: "{theme_label}",
                        aria_label: "{theme_label}",
                        onclick: move |_| theme.toggle(),
                        "{theme_icon}"
                    }
                    button {
                        class: "icon-button site-header__menu-toggle",
                        r#type: "button",
                        aria_label: "{menu_label}",
                        aria_expanded: menu_expanded,
                        onclick: move |_| menu_open.toggle(),
                        "{menu_icon}"
                    }
                }
            }

            if menu_open() {
                div { class: "site-header__menu",
                    for (href, label) in links {
                        a {
                            key: "{href}",
                            class: "site-header__menu-link",
                            href: "{href}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }

        if offset() > SCROLL_TOP_AFTER {
            ScrollToTop {}
        }
    }
}

#[component]
fn ScrollToTop() -> Element {
    let i18n = use_localizer();
    let label = i18n.t("nav-scroll-top");

    rsx! {
        button {
            class: "scroll-top",
            r#type: "button",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| scroll_to_top(),
            "↑"
        }
    }
}
