use api::{AnalysisResult, Biomarker, BiomarkerStatus};
use dioxus::prelude::*;

use crate::core::format;
use crate::t;

use super::range::RangePosition;
use super::status::{MarkerTone, StatusBadge};

#[component]
pub fn ResultsDisplay(result: AnalysisResult, analysed_at: Option<String>) -> Element {
    let flagged = result.flagged().count();
    let total = result.biomarkers.len();

    rsx! {
        div { class: "results",
            section { class: "results-card results-summary",
                div { class: "results-card__header",
                    h2 { {t!("results-summary-title")} }
                    if let Some(stamp) = analysed_at {
                        span { class: "results-card__meta", {t!("results-analysed-at", time = stamp)} }
                    }
                }
                p { class: "results-summary__text", "{result.summary}" }
                if total > 0 {
                    p { class: "results-summary__counts",
                        {t!("results-flagged-count", flagged = flagged, total = total)}
                    }
                }
            }

            div { class: "results__grid",
                section { class: "results-biomarkers",
                    h3 { class: "results-biomarkers__title", {t!("results-biomarkers-title")} }
                    if result.is_empty() {
                        p { class: "results-card__placeholder", {t!("results-no-biomarkers")} }
                    } else {
                        div { class: "results-biomarkers__grid",
                            for (idx, biomarker) in result.biomarkers.iter().enumerate() {
                                BiomarkerCard { key: "{idx}", biomarker: biomarker.clone() }
                            }
                        }
                    }
                }

                aside { class: "results__aside",
                    if !result.concerns.is_empty() {
                        section { class: "results-card results-concerns",
                            h3 { {t!("results-concerns-title")} }
                            ul {
                                for concern in result.concerns.iter() {
                                    li { "{concern}" }
                                }
                            }
                        }
                    }

                    section { class: "results-card results-recommendations",
                        h3 { {t!("results-recommendations-title")} }
                        ul {
                            for recommendation in result.recommendations.iter() {
                                li { "{recommendation}" }
                            }
                        }
                    }
                }
            }

            p { class: "results-disclaimer", "{result.disclaimer}" }
        }
    }
}

#[component]
fn BiomarkerCard(biomarker: Biomarker) -> Element {
    let value = format::format_value(biomarker.value);

    rsx! {
        article { class: "biomarker-card",
            div { class: "biomarker-card__header",
                h4 { "{biomarker.name}" }
                StatusBadge { status: biomarker.status }
            }
            div { class: "biomarker-card__reading",
                span { class: "biomarker-card__value", "{value}" }
                span { class: "biomarker-card__unit", "{biomarker.unit}" }
            }

            RangeBar {
                value: biomarker.value,
                low: biomarker.reference_low,
                high: biomarker.reference_high,
                status: biomarker.status,
            }

            p { class: "biomarker-card__explanation", "{biomarker.explanation}" }
            if let Some(recommendation) = biomarker.recommendation.as_ref() {
                div { class: "biomarker-card__recommendation", "{recommendation}" }
            }
        }
    }
}

/// Reference band plus value marker on a padded track.
#[component]
pub fn RangeBar(value: f64, low: f64, high: f64, status: BiomarkerStatus) -> Element {
    let pos = RangePosition::map(value, low, high);
    let tone = MarkerTone::for_status(status).css_class();
    let band_left = pos.low_pct;
    let band_width = pos.band_width_pct();
    let marker_left = pos.marker_pct();
    let high_left = pos.high_pct;
    let value_label = format::format_value(value);
    let low_label = format::format_value(low);
    let high_label = format::format_value(high);

    rsx! {
        div { class: "range-bar",
            div { class: "range-bar__track" }
            div {
                class: "range-bar__band",
                style: "left: {band_left}%; width: {band_width}%;",
            }
            div {
                class: "range-bar__marker {tone}",
                style: "left: {marker_left}%;",
                span { class: "range-bar__value", "{value_label}" }
            }
            span { class: "range-bar__bound", style: "left: {band_left}%;", "{low_label}" }
            span { class: "range-bar__bound", style: "left: {high_left}%;", "{high_label}" }
        }
    }
}
