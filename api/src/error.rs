use thiserror::Error;

/// Failures observed while talking to the analysis service.
///
/// None of these are fatal; the upload controller turns every variant into a
/// recoverable `Failed` state with a generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The request never completed (connection refused, CORS, aborted body).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status. The body is not inspected.
    #[error("analysis service returned HTTP {0}")]
    Status(u16),

    /// A 2xx response whose body is not a valid analysis payload.
    #[error("malformed analysis payload: {0}")]
    Malformed(String),
}

impl AnalysisError {
    /// True when the service was reached but its payload was unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
