use api::AnalysisClient;
use dioxus::prelude::*;

use crate::core::config::AppConfig;
use crate::t;

/// Passive indicator of whether the analysis service answers `/health`.
/// Never blocks the upload form.
#[component]
pub fn ServiceStatus() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let health = use_resource(move || {
        let client = AnalysisClient::new(config.service.clone());
        async move { client.health().await }
    });

    let (modifier, label) = match &*health.read() {
        None => ("checking", t!("service-checking")),
        Some(Ok(status)) if status.is_ready() => ("online", t!("service-online")),
        Some(Ok(_)) => ("degraded", t!("service-model-missing")),
        Some(Err(err)) => {
            tracing::debug!(error = %err, "health probe failed");
            ("offline", t!("service-offline"))
        }
    };

    rsx! {
        span { class: "service-status service-status--{modifier}", role: "status",
            span { class: "service-status__dot", aria_hidden: "true" }
            "{label}"
        }
    }
}
