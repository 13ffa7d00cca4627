//! Host integration: asking the environment to open a URL.

use dioxus::logger::tracing;

/// Hand `url` to the host (a new browsing context on web).
///
/// Returns `false` when the host refused or is unavailable. Outside the
/// browser this only logs.
#[cfg(target_arch = "wasm32")]
pub fn open_url(url: &str) -> bool {
    let Some(window) = web_sys::window() else {
        tracing::warn!("open_url: no window available");
        return false;
    };
    match window.open_with_url(url) {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!("open_url failed: {err:?}");
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_url(url: &str) -> bool {
    tracing::info!(len = url.len(), "open_url requested outside a browser; ignoring");
    false
}
