//! Maps a biomarker value and its reference interval onto a 0 to 100 track.
//!
//! The visible window is the reference interval padded by 20% of its span on
//! each side, so an in-range value always lands inside the track and mildly
//! out-of-range values still show some distance from the band.

pub const RANGE_PADDING_RATIO: f64 = 0.20;

/// Half-width added around the data when the interval carries no span.
const FALLBACK_MARGIN: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePosition {
    /// Value position before clamping; may fall outside `[0, 100]`.
    pub value_pct: f64,
    pub low_pct: f64,
    pub high_pct: f64,
}

impl RangePosition {
    pub fn map(value: f64, low: f64, high: f64) -> Self {
        if !(value.is_finite() && low.is_finite() && high.is_finite()) {
            return Self::centered();
        }

        let span = high - low;
        let (min, max) = if span > 0.0 {
            let padding = span * RANGE_PADDING_RATIO;
            (low - padding, high + padding)
        } else {
            // Collapsed or inverted interval: frame every point with a unit margin.
            (
                value.min(low).min(high) - FALLBACK_MARGIN,
                value.max(low).max(high) + FALLBACK_MARGIN,
            )
        };

        let total = max - min;
        if !(total.is_finite() && total > 0.0) {
            return Self::centered();
        }

        let pct = |x: f64| (x - min) / total * 100.0;
        // A far-off value against a tiny window can overflow; pin it to the edge it passed.
        let value_pct = match pct(value) {
            p if p.is_finite() => p,
            _ if value > max => 100.0,
            _ => 0.0,
        };
        Self {
            value_pct,
            low_pct: pct(low),
            high_pct: pct(high),
        }
    }

    /// Everything on the midpoint; used when the inputs cannot be placed.
    pub fn centered() -> Self {
        Self {
            value_pct: 50.0,
            low_pct: 50.0,
            high_pct: 50.0,
        }
    }

    /// Marker position, pinned to the track edges.
    pub fn marker_pct(&self) -> f64 {
        self.value_pct.clamp(0.0, 100.0)
    }

    pub fn band_width_pct(&self) -> f64 {
        (self.high_pct - self.low_pct).max(0.0)
    }
}
