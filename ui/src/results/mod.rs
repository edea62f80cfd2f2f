//! Rendering of a finished analysis.

pub mod range;
pub mod status;

mod display;
pub use display::{RangeBar, ResultsDisplay};

pub use range::RangePosition;
pub use status::{MarkerTone, StatusBadge};

/// Script run after a new result lands so the page brings it into view.
pub(crate) const SCROLL_TO_RESULTS_JS: &str =
    r#"document.getElementById("results")?.scrollIntoView({ behavior: "smooth" });"#;
