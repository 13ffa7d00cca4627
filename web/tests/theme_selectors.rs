#![cfg(test)]
/*!
Theme selector lint for the web build.

The page sections in `ui` style themselves entirely through the shared theme
at `ui/assets/theme/main.css`. This test embeds that file and checks that the
selectors the components emit are still defined, so renaming a class in Rust
without updating the theme (or the other way round) fails here instead of
silently degrading the page.

When a component gains or drops a structural class, update REQUIRED_SELECTORS.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app {",
    ".page {",
    ".font-cairo",
    ".font-inter",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".icon-button",
    // Header
    ".site-header {",
    ".site-header--solid",
    ".site-header__links",
    ".site-header__menu",
    ".scroll-top",
    // Sections
    ".section__header",
    ".section__title",
    ".hero__avatar",
    ".hero__links",
    // Projects
    ".filter-bar__button--active",
    ".project-grid",
    ".project-card",
    ".projects__empty",
    ".badge--tech",
    ".badge--more",
    ".modal {",
    ".modal__panel",
    ".goal-list",
    ".screenshot-grid",
    ".project-link--source",
    ".project-link--live",
    ".project-link--video",
    // Achievements
    ".tabs__button--active",
    ".course-grid",
    ".course-card",
    ".competition-list",
    ".competition-card",
    ".badge--skill",
    ".gallery__image",
    // Contact
    ".contact__layout",
    ".contact-info",
    ".contact-cta",
    ".contact-form__input",
    // Status
    ".status--error",
    ".spinner",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Shared theme is missing {} selector(s):\n  {}",
        missing.len(),
        missing
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("\n  ")
    );
}

#[test]
fn dark_palette_overrides_the_base_variables() {
    let dark = THEME_CSS
        .find("[data-theme=\"dark\"]")
        .expect("dark palette block present");
    let block = &THEME_CSS[dark..];
    let end = block.find('}').expect("dark palette block closes");
    for var in ["--color-bg", "--color-text", "--color-surface"] {
        assert!(
            block[..end].contains(var),
            "dark palette does not override `{var}`"
        );
    }
}

#[test]
fn theme_is_not_truncated() {
    let significant = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        significant > 4000,
        "Shared theme looks truncated ({significant} non-whitespace chars)"
    );
}
