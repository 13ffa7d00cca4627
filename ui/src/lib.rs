//! Shared UI crate for the portfolio: localization, theme, content adapters,
//! view projection and the page sections.

pub mod content;
pub mod core;
pub mod i18n;
pub mod theme;
pub mod views;

pub mod components {
    mod external_link;
    pub mod scroll;
    mod site_header;
    mod status;

    pub use external_link::ExternalLink;
    pub use site_header::SiteHeader;
    pub use status::{ErrorNotice, LoadingIndicator};
}

mod app;
pub use app::{PortfolioApp, PortfolioAppProps};

pub use content::DataHandle;
pub use i18n::Language;

#[cfg(test)]
#[path = "tests/i18n_completeness.rs"]
mod i18n_completeness;
