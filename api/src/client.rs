//! HTTP client for the analysis service.

use std::future::Future;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{AnalysisError, AnalysisResult, ServiceHealth};

const ANALYZE_PATH: &str = "/analyze";
const HEALTH_PATH: &str = "/health";
const UPLOAD_FIELD: &str = "file";
const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Where the analysis service lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn analyze_url(&self) -> String {
        self.join(ANALYZE_PATH)
    }

    pub fn health_url(&self) -> String {
        self.join(HEALTH_PATH)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// The bytes of one report as they go over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Anything that can turn an uploaded report into an analysis.
///
/// [`AnalysisClient`] is the production implementation; tests substitute
/// canned responses.
pub trait AnalysisService {
    fn analyze(
        &self,
        upload: ReportUpload,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>>;
}

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Default for AnalysisClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Probe `GET /health`. Used for a status hint only; submission never waits on it.
    pub async fn health(&self) -> Result<ServiceHealth, AnalysisError> {
        let response = self.http.get(self.config.health_url()).send().await?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(AnalysisError::Status(status));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl AnalysisService for AnalysisClient {
    async fn analyze(&self, upload: ReportUpload) -> Result<AnalysisResult, AnalysisError> {
        let url = self.config.analyze_url();
        let size = upload.bytes.len();
        debug!(%url, file = %upload.file_name, bytes = size, "posting report");

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(PDF_MEDIA_TYPE)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        let outcome = interpret_response(status, &body);
        match &outcome {
            Ok(result) => info!(
                status,
                biomarkers = result.biomarkers.len(),
                "analysis received"
            ),
            Err(err) => warn!(status, error = %err, "analysis request failed"),
        }
        outcome
    }
}

/// Map a raw HTTP answer onto the analysis contract.
///
/// Non-2xx statuses fail without looking at the body; a 2xx body must decode
/// as an [`AnalysisResult`] or the response counts as malformed.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<AnalysisResult, AnalysisError> {
    if !(200..300).contains(&status) {
        return Err(AnalysisError::Status(status));
    }
    Ok(serde_json::from_slice(body)?)
}
