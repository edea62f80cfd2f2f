//! Turns picker and drop events into a single [`FileCandidate`].
//!
//! Both entry points hand their file list to [`first_candidate`], so the two
//! input modes cannot drift apart. Only the first file is considered.

use std::path::Path;
use std::sync::Arc;

use dioxus::html::FileEngine;
use tracing::{debug, warn};

use super::validator::FileCandidate;

/// Read the first file of `files`, if any.
pub async fn first_candidate(files: Arc<dyn FileEngine>) -> Option<FileCandidate> {
    let listed = files.files();
    let path = listed.first()?.clone();
    if listed.len() > 1 {
        debug!(ignored = listed.len() - 1, "only the first file is used");
    }

    let Some(bytes) = files.read_file(&path).await else {
        warn!(file = %path, "could not read picked file");
        return None;
    };
    let media_type = declared_media_type(&files, &path, &bytes).await;

    Some(FileCandidate::new(display_name(&path), media_type, bytes))
}

/// Desktop engines list absolute paths; browsers list bare names.
pub fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

#[cfg(target_arch = "wasm32")]
async fn declared_media_type(files: &Arc<dyn FileEngine>, path: &str, _bytes: &[u8]) -> String {
    files
        .get_native_file(path)
        .await
        .and_then(|native| native.downcast::<web_sys::File>().ok())
        .map(|file| file.type_())
        .unwrap_or_default()
}

// The webview hands over paths without a media type, so the first bytes stand
// in for the declaration. The extension is never consulted.
#[cfg(not(target_arch = "wasm32"))]
async fn declared_media_type(_files: &Arc<dyn FileEngine>, _path: &str, bytes: &[u8]) -> String {
    sniff_media_type(bytes).to_string()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn sniff_media_type(bytes: &[u8]) -> &'static str {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"%PDF-", "application/pdf"),
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF8", "image/gif"),
        (b"PK\x03\x04", "application/zip"),
    ];

    SIGNATURES
        .iter()
        .find(|(magic, _)| bytes.starts_with(magic))
        .map(|(_, media_type)| *media_type)
        .unwrap_or("application/octet-stream")
}
