//! Gatekeeper for files entering the upload flow.
//!
//! Only the declared media type is consulted. A file called `scan.pdf` that
//! reports `image/png` is rejected, and a PDF saved without an extension is
//! accepted.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A file as delivered by the picker or a drop, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size_bytes: u64,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size_bytes: bytes.len() as u64,
            media_type: media_type.into(),
            bytes,
        }
    }
}

/// A validated PDF waiting to be submitted. Replaced wholesale on every new
/// selection, never edited in place.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    size_bytes: u64,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("size_bytes", &self.size_bytes)
            .field("media_type", &self.media_type)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("not a PDF")]
    NotPdf { media_type: String },
}

/// Accept `candidate` iff it declares the canonical PDF media type.
pub fn validate(candidate: FileCandidate) -> Result<SelectedFile, ValidationError> {
    if candidate.media_type != PDF_MEDIA_TYPE {
        return Err(ValidationError::NotPdf {
            media_type: candidate.media_type,
        });
    }

    Ok(SelectedFile {
        name: candidate.name,
        size_bytes: candidate.size_bytes,
        media_type: candidate.media_type,
        bytes: candidate.bytes.into(),
    })
}
