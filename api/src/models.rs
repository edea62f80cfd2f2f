//! Payload types returned by the analysis service.

use serde::{Deserialize, Serialize};

/// Classification of a biomarker value against its reference interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiomarkerStatus {
    Low,
    High,
    Critical,
    Normal,
}

impl BiomarkerStatus {
    pub fn is_normal(self) -> bool {
        self == Self::Normal
    }
}

/// One measured value from the report plus its interpretation.
///
/// `reference_low <= reference_high` is expected but not enforced here; the
/// range mapper copes with inverted or collapsed intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biomarker {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub reference_low: f64,
    pub reference_high: f64,
    pub status: BiomarkerStatus,
    pub explanation: String,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Full analysis of one uploaded report. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub biomarkers: Vec<Biomarker>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
}

impl AnalysisResult {
    /// Biomarkers whose status is anything but normal, in report order.
    pub fn flagged(&self) -> impl Iterator<Item = &Biomarker> {
        self.biomarkers.iter().filter(|bm| !bm.status.is_normal())
    }

    pub fn is_empty(&self) -> bool {
        self.biomarkers.is_empty()
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub ollama_connected: bool,
}

impl ServiceHealth {
    /// Service is up and its language model backend answered.
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.ollama_connected
    }
}
