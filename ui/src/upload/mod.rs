//! Report upload: validation, event intake, lifecycle controller and form view.

pub mod controller;
pub mod intake;
pub mod validator;

mod view;
pub use view::UploadForm;

pub use controller::{
    Submission, SubmissionId, SubmissionOutcome, UploadConfig, UploadController, UploadError,
    UploadState,
};
pub use validator::{validate, FileCandidate, SelectedFile, ValidationError, PDF_MEDIA_TYPE};
