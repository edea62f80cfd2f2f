use api::AnalysisResult;
use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::ServiceStatus;
use crate::core::{format, timing};
use crate::results::{ResultsDisplay, SCROLL_TO_RESULTS_JS};
use crate::upload::UploadForm;

const SCROLL_DELAY_MS: u64 = 100;

#[component]
pub fn Analyse() -> Element {
    // Hidden marker keeps this view subscribed to language switches.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // The last result stays on screen until a newer one replaces it.
    let mut latest = use_signal(|| Option::<AnalysisResult>::None);
    let mut analysed_at = use_signal(|| Option::<String>::None);

    let on_result = move |result: AnalysisResult| {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        analysed_at.set(Some(format::format_clock(now)));
        latest.set(Some(result));
        spawn(async move {
            timing::sleep_ms(SCROLL_DELAY_MS).await;
            let _ = document::eval(SCROLL_TO_RESULTS_JS);
        });
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-analyse",
            div { class: "page-analyse__intro",
                h1 { {crate::t!("page-analyse-title")} }
                p { {crate::t!("page-analyse-intro")} }
                ServiceStatus {}
            }

            div { class: "page-analyse__form",
                UploadForm { on_result }
            }

            if let Some(result) = latest() {
                section { id: "results", class: "page-analyse__results",
                    ResultsDisplay { result, analysed_at: analysed_at() }
                }
            }
        }
    }
}
