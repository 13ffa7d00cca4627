use api::{DataStoreConfig, RestClient};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use ui::DataHandle;

fn main() {
    // The logger is installed by the launcher, so configuration problems
    // surface through the panic message.
    let config = match DataStoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => panic!("data store is not configured: {err}"),
    };

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<DataStoreConfig>();
    let source = use_hook(move || {
        tracing::info!(endpoint = %config.endpoint, "[startup] data store configured");
        RestClient::new(&config).map(DataHandle::new)
    });

    match source {
        Ok(source) => rsx! {
            ui::PortfolioApp { source }
        },
        Err(err) => {
            tracing::error!("[startup] {err}");
            rsx! {
                div { class: "status status--error", role: "alert",
                    p { class: "status__title", "⚠️ {err}" }
                }
            }
        }
    }
}
