//! Window scroll tracking for the header and the back-to-top button.

use dioxus::logger::tracing;
use dioxus::prelude::*;

/// Header switches to its solid style past this offset (px).
pub const HEADER_SOLID_AFTER: f64 = 50.0;
/// Back-to-top button appears past this offset (px).
pub const SCROLL_TOP_AFTER: f64 = 300.0;

/// Only one window listener exists at a time: installing a new one replaces
/// the previous handler, and unmounting removes it.
const SCROLL_LISTENER_JS: &str = r#"
    const previous = window.__portfolioScrollListener;
    if (previous) window.removeEventListener("scroll", previous);
    const send = () => dioxus.send(window.scrollY || 0);
    window.__portfolioScrollListener = send;
    send();
    window.addEventListener("scroll", send, { passive: true });
    await new Promise(() => {});
"#;

const REMOVE_SCROLL_LISTENER_JS: &str = r#"
    const current = window.__portfolioScrollListener;
    if (current) window.removeEventListener("scroll", current);
    window.__portfolioScrollListener = undefined;
"#;

const SCROLL_TO_TOP_JS: &str = r#"window.scrollTo({ top: 0, behavior: "smooth" });"#;

/// Vertical scroll offset of the window, refreshed only when it crosses one
/// of the thresholds above. Stays at 0 without a browser. The window
/// listener is removed when the calling component unmounts.
pub fn use_scroll_offset() -> Signal<f64> {
    let mut offset = use_signal(|| 0.0_f64);

    use_drop(|| {
        document::eval(REMOVE_SCROLL_LISTENER_JS);
    });

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        loop {
            match listener.recv::<f64>().await {
                Ok(y) => {
                    let before = *offset.peek();
                    if crossed(before, y) {
                        offset.set(y);
                    }
                }
                Err(err) => {
                    tracing::debug!("scroll listener unavailable: {err:?}");
                    break;
                }
            }
        }
    });

    offset
}

fn crossed(before: f64, after: f64) -> bool {
    [HEADER_SOLID_AFTER, SCROLL_TOP_AFTER]
        .iter()
        .any(|t| (before > *t) != (after > *t))
}

pub fn scroll_to_top() {
    spawn(async move {
        if let Err(err) = document::eval(SCROLL_TO_TOP_JS).await {
            tracing::debug!("scroll to top unavailable: {err:?}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_either_threshold_is_detected() {
        assert!(crossed(10.0, 60.0));
        assert!(crossed(320.0, 200.0));
        assert!(!crossed(60.0, 200.0));
    }

    #[test]
    fn listener_replaces_and_removes_its_window_handler() {
        let removed = SCROLL_LISTENER_JS
            .find("removeEventListener(\"scroll\", previous)")
            .unwrap();
        let added = SCROLL_LISTENER_JS.find("addEventListener(\"scroll\", send").unwrap();
        assert!(removed < added);
        assert!(SCROLL_LISTENER_JS.contains("window.__portfolioScrollListener = send"));
        assert!(REMOVE_SCROLL_LISTENER_JS.contains("removeEventListener(\"scroll\", current)"));
    }
}
