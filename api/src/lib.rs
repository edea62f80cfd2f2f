//! Wire contract between the Hemascope client and the report analysis service.
//!
//! The service accepts a single PDF on `POST /analyze` and answers with an
//! [`AnalysisResult`]. Everything the UI needs to talk to it lives here so the
//! shared `ui` crate never builds requests by hand.

mod client;
mod error;
mod models;

pub use client::{interpret_response, AnalysisClient, AnalysisService, ClientConfig, ReportUpload};
pub use error::AnalysisError;
pub use models::{AnalysisResult, Biomarker, BiomarkerStatus, ServiceHealth};
