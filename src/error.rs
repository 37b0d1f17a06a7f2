//! Error types for the photo-metrics library

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Batch-level failures surfaced to the caller.
///
/// Per-file decode failures never appear here: the offending file is
/// logged and skipped, and the batch continues.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The scan finished without producing a single record
    #[error("no image files found")]
    NoImagesFound,

    /// The CSV report could not be created or persisted
    #[error("failed to write report to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ReportError {
    /// Wrap a serialization or filesystem error as a `WriteFailed` outcome
    pub fn write_failed(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ReportError::WriteFailed {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}
