//! Upload lifecycle state machine.
//!
//! ```text
//! Empty ──select──▶ Selected ──submit──▶ Submitting ──resolve(Ok)──▶ Succeeded
//!   ▲                 │  ▲                    │
//!   └─────clear───────┘  └──select── Failed ◀─┘ resolve(Err)
//! ```
//!
//! The controller never performs I/O itself. [`UploadController::submit`]
//! hands back a [`Submission`] that the caller runs against an
//! [`AnalysisService`], then feeds the outcome back through
//! [`UploadController::resolve`]. The progress timer for a submission is
//! attached as a [`TaskGuard`] and dropped on every exit from `Submitting`.

use std::fmt;
use std::mem;

use api::{AnalysisError, AnalysisResult, AnalysisService, ReportUpload};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::validator::{self, FileCandidate, SelectedFile, ValidationError};
use crate::core::timing::TaskGuard;

const FALLBACK_PROGRESS: &str = "Analyzing report…";
const MIN_PROGRESS_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    Empty,
    Selected(SelectedFile),
    Submitting {
        file: SelectedFile,
        submission: SubmissionId,
        progress: String,
    },
    Failed {
        file: SelectedFile,
        message: String,
    },
    Succeeded(AnalysisResult),
}

impl UploadState {
    /// The file currently held, if the state carries one.
    pub fn file(&self) -> Option<&SelectedFile> {
        match self {
            Self::Selected(file) | Self::Submitting { file, .. } | Self::Failed { file, .. } => {
                Some(file)
            }
            Self::Empty | Self::Succeeded(_) => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Selected(_) => "selected",
            Self::Submitting { .. } => "submitting",
            Self::Failed { .. } => "failed",
            Self::Succeeded(_) => "succeeded",
        }
    }
}

/// Tunables for the upload flow. The view fills the strings from the active locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Status lines cycled while a submission is in flight.
    pub progress_messages: Vec<String>,
    pub progress_interval_ms: u64,
    /// Shown for every failed submission, whatever the cause.
    pub failure_message: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            progress_messages: [
                "Uploading your report…",
                "Reading the PDF…",
                "Extracting biomarkers…",
                "Comparing against reference ranges…",
                "Writing your summary…",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            progress_interval_ms: 2_500,
            failure_message: "Analysis failed. Please try again.".to_string(),
        }
    }
}

/// Why an operation left the state untouched (or, for `Rejected`, reset it).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),
    #[error("no file selected")]
    NothingSelected,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("submission {0} is no longer current")]
    StaleSubmission(SubmissionId),
}

/// A request the caller must perform on the controller's behalf.
#[derive(Debug, Clone)]
pub struct Submission {
    id: SubmissionId,
    file: SelectedFile,
}

impl Submission {
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn file(&self) -> &SelectedFile {
        &self.file
    }

    /// Send the file to `service` and wait for its answer.
    pub async fn run<S: AnalysisService>(self, service: &S) -> SubmissionOutcome {
        let upload = ReportUpload {
            file_name: self.file.name().to_string(),
            bytes: self.file.bytes().to_vec(),
        };
        info!(
            submission = %self.id,
            file = %upload.file_name,
            media_type = self.file.media_type(),
            bytes = upload.bytes.len(),
            "submitting report"
        );
        let result = service.analyze(upload).await;
        SubmissionOutcome {
            id: self.id,
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub id: SubmissionId,
    pub result: Result<AnalysisResult, AnalysisError>,
}

#[derive(Debug)]
pub struct UploadController {
    state: UploadState,
    field_error: Option<ValidationError>,
    last_failure: Option<AnalysisError>,
    config: UploadConfig,
    progress_index: usize,
    issued: u64,
    ticker: Option<TaskGuard>,
}

impl Default for UploadController {
    fn default() -> Self {
        Self::new(UploadConfig::default())
    }
}

impl UploadController {
    pub fn new(mut config: UploadConfig) -> Self {
        config.progress_messages.retain(|msg| !msg.trim().is_empty());
        if config.progress_messages.is_empty() {
            config.progress_messages.push(FALLBACK_PROGRESS.to_string());
        }
        config.progress_interval_ms = config.progress_interval_ms.max(MIN_PROGRESS_INTERVAL_MS);

        Self {
            state: UploadState::Empty,
            field_error: None,
            last_failure: None,
            config,
            progress_index: 0,
            issued: 0,
            ticker: None,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Inline error from the most recent rejected selection.
    pub fn field_error(&self) -> Option<&ValidationError> {
        self.field_error.as_ref()
    }

    /// Cause behind the current `Failed` state, for diagnostics only.
    pub fn last_failure(&self) -> Option<&AnalysisError> {
        self.last_failure.as_ref()
    }

    pub fn active_submission(&self) -> Option<SubmissionId> {
        match self.state {
            UploadState::Submitting { submission, .. } => Some(submission),
            _ => None,
        }
    }

    pub fn progress_index(&self) -> usize {
        self.progress_index
    }

    pub fn has_progress_timer(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            UploadState::Selected(_) | UploadState::Failed { .. }
        )
    }

    /// Offer a new file. Any previously held file is dropped whether or not
    /// the candidate passes validation.
    pub fn select(&mut self, candidate: FileCandidate) -> Result<(), UploadError> {
        if self.state.is_submitting() {
            debug!(file = %candidate.name, "selection ignored while submitting");
            return Err(UploadError::InFlight);
        }

        self.last_failure = None;
        match validator::validate(candidate) {
            Ok(file) => {
                debug!(file = %file.name(), bytes = file.size_bytes(), "file selected");
                self.field_error = None;
                self.state = UploadState::Selected(file);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "file rejected");
                self.field_error = Some(err.clone());
                self.state = UploadState::Empty;
                Err(err.into())
            }
        }
    }

    pub fn clear(&mut self) -> Result<(), UploadError> {
        if self.state.is_submitting() {
            return Err(UploadError::InFlight);
        }
        self.state = UploadState::Empty;
        self.field_error = None;
        self.last_failure = None;
        Ok(())
    }

    /// Move the held file into `Submitting`. Also the manual retry path from `Failed`.
    pub fn submit(&mut self) -> Result<Submission, UploadError> {
        let file = match &self.state {
            UploadState::Selected(file) | UploadState::Failed { file, .. } => file.clone(),
            other => {
                debug!(state = other.label(), "submit refused");
                return Err(if other.is_submitting() {
                    UploadError::InFlight
                } else {
                    UploadError::NothingSelected
                });
            }
        };

        self.issued += 1;
        let id = SubmissionId(self.issued);
        self.progress_index = 0;
        self.field_error = None;
        self.last_failure = None;
        self.state = UploadState::Submitting {
            file: file.clone(),
            submission: id,
            progress: self.config.progress_messages[0].clone(),
        };

        Ok(Submission { id, file })
    }

    /// Hand over the timer driving progress for `id`. A guard for anything but
    /// the live submission is dropped on the spot.
    pub fn attach_progress(&mut self, id: SubmissionId, guard: TaskGuard) {
        if self.active_submission() == Some(id) {
            self.ticker = Some(guard);
        } else {
            debug!(submission = %id, "progress timer arrived late; cancelling");
        }
    }

    /// One timer tick: show the next progress line, wrapping at the end of the list.
    pub fn advance_progress(&mut self, id: SubmissionId) -> Result<&str, UploadError> {
        let count = self.config.progress_messages.len();
        match &mut self.state {
            UploadState::Submitting {
                submission,
                progress,
                ..
            } if *submission == id => {
                self.progress_index = (self.progress_index + 1) % count;
                *progress = self.config.progress_messages[self.progress_index].clone();
                Ok(progress.as_str())
            }
            _ => Err(UploadError::StaleSubmission(id)),
        }
    }

    /// Feed the network outcome back in. Stops the progress timer.
    pub fn resolve(&mut self, outcome: SubmissionOutcome) -> Result<(), UploadError> {
        if self.active_submission() != Some(outcome.id) {
            debug!(submission = %outcome.id, "ignoring stale outcome");
            return Err(UploadError::StaleSubmission(outcome.id));
        }

        self.ticker = None;
        let file = match mem::replace(&mut self.state, UploadState::Empty) {
            UploadState::Submitting { file, .. } => file,
            other => {
                self.state = other;
                return Err(UploadError::StaleSubmission(outcome.id));
            }
        };

        match outcome.result {
            Ok(result) => {
                info!(
                    submission = %outcome.id,
                    biomarkers = result.biomarkers.len(),
                    "analysis succeeded"
                );
                self.state = UploadState::Succeeded(result);
            }
            Err(err) => {
                warn!(submission = %outcome.id, error = %err, "analysis failed");
                self.state = UploadState::Failed {
                    file,
                    message: self.config.failure_message.clone(),
                };
                self.last_failure = Some(err);
            }
        }
        Ok(())
    }
}
