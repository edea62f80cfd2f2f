use api::BiomarkerStatus;
use dioxus::prelude::*;

use crate::t;

/// Colour family of a biomarker marker and badge. Driven only by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTone {
    Success,
    Warning,
    Danger,
}

impl MarkerTone {
    pub fn for_status(status: BiomarkerStatus) -> Self {
        match status {
            BiomarkerStatus::Normal => Self::Success,
            BiomarkerStatus::Critical => Self::Danger,
            BiomarkerStatus::Low | BiomarkerStatus::High => Self::Warning,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "tone--success",
            Self::Warning => "tone--warning",
            Self::Danger => "tone--danger",
        }
    }
}

pub fn status_glyph(status: BiomarkerStatus) -> &'static str {
    match status {
        BiomarkerStatus::Normal => "✓",
        BiomarkerStatus::Low => "↓",
        BiomarkerStatus::High => "↑",
        BiomarkerStatus::Critical => "!",
    }
}

fn status_label(status: BiomarkerStatus) -> String {
    match status {
        BiomarkerStatus::Normal => t!("status-normal"),
        BiomarkerStatus::Low => t!("status-low"),
        BiomarkerStatus::High => t!("status-high"),
        BiomarkerStatus::Critical => t!("status-critical"),
    }
}

#[component]
pub fn StatusBadge(status: BiomarkerStatus) -> Element {
    let tone = MarkerTone::for_status(status).css_class();
    let glyph = status_glyph(status);
    let label = status_label(status);

    rsx! {
        span { class: "status-badge {tone}",
            span { class: "status-badge__glyph", aria_hidden: "true", "{glyph}" }
            "{label}"
        }
    }
}
