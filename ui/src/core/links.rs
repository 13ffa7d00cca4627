//! Classification of outbound links.
//!
//! Absolute `http(s)` URLs open in a new browsing context with opener and
//! referrer isolation. `mailto:`/`tel:` go to the host handler in place.
//! Placeholders (`#`, empty) and relative paths are inert.

use url::Url;

pub const NEW_CONTEXT_TARGET: &str = "_blank";
pub const ISOLATION_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute http(s) URL.
    External(String),
    /// `mailto:` / `tel:`; stays in the current context.
    Handler(String),
    Inert,
}

impl LinkTarget {
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.starts_with('#') {
            return LinkTarget::Inert;
        }
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
                LinkTarget::External(raw.to_string())
            }
            Ok(url) if matches!(url.scheme(), "mailto" | "tel") => {
                LinkTarget::Handler(raw.to_string())
            }
            _ => LinkTarget::Inert,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            LinkTarget::External(href) | LinkTarget::Handler(href) => Some(href),
            LinkTarget::Inert => None,
        }
    }

    pub fn target(&self) -> Option<&'static str> {
        matches!(self, LinkTarget::External(_)).then_some(NEW_CONTEXT_TARGET)
    }

    pub fn rel(&self) -> Option<&'static str> {
        matches!(self, LinkTarget::External(_)).then_some(ISOLATION_REL)
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, LinkTarget::Inert)
    }
}

/// Treat `Some("")` like `None`.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
