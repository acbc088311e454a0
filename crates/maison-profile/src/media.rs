//! # Room-Photo References
//!
//! Room photos travel inside the profile record as data URLs, so a stored
//! profile is self-contained and the dashboard can render photos without
//! touching the file system.
//!
//! Encoding a photo is a single-shot async file read: one resolution path
//! (the encoded `ImageRef`) and one error path (unreadable file). There is
//! no cancellation — reads are short-lived and the user simply re-selects
//! the file to retry. Concurrent reads are independent; each result lands
//! in its own slot of the profile's photo list.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from encoding a room photo.
#[derive(Error, Debug)]
pub enum MediaError {
    /// The image file could not be read.
    #[error("unreadable image file {path}: {source}")]
    Unreadable {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

/// A locally-encoded room photo attached to a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// Original file name, for display.
    pub file_name: String,
    /// `data:<mime>;base64,<payload>` encoding of the image bytes.
    pub data_url: String,
}

impl ImageRef {
    /// Read and encode an image file.
    ///
    /// The MIME type is inferred from the file extension; unknown
    /// extensions fall back to `application/octet-stream`.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, MediaError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| MediaError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = mime_for_path(path);

        Ok(Self {
            file_name,
            data_url: format!("data:{mime};base64,{}", STANDARD.encode(&bytes)),
        })
    }

    /// Wrap an already-encoded data URL (e.g., handed over by the capture
    /// collaborator).
    pub fn from_encoded(file_name: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            data_url: data_url.into(),
        }
    }
}

/// MIME type for an image path, by extension.
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}
