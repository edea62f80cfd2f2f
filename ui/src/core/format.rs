//! Formatting helpers for presenting files and measurements.

use time::{macros::format_description, OffsetDateTime};

/// File size the way the upload card shows it, e.g. `1.25 MB`.
pub fn format_megabytes(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / 1024.0 / 1024.0)
}

/// Shortest natural rendering of a measured value (`140`, `5.5`).
pub fn format_value(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        "—".to_string()
    }
}

pub fn format_clock(stamp: OffsetDateTime) -> String {
    stamp
        .format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "—".to_string())
}
