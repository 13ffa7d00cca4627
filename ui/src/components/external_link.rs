use dioxus::prelude::*;

use crate::core::links::LinkTarget;

/// Anchor that applies the outbound-link policy: absolute URLs open in a new
/// context with `rel="noopener noreferrer"`, placeholders render without an
/// `href`.
#[component]
pub fn ExternalLink(href: String, class: Option<String>, children: Element) -> Element {
    let link = LinkTarget::classify(&href);
    let class = class.unwrap_or_default();
    let inert = link.is_inert();

    rsx! {
        a {
            class: "{class}",
            href: link.href().map(str::to_string),
            target: link.target(),
            rel: link.rel(),
            aria_disabled: inert.then_some("true"),
            {children}
        }
    }
}
