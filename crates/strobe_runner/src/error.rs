//! Error types for test-runner invocations.

use std::io;
use std::path::PathBuf;
use strobe_extract::ExtractError;

/// Errors that abort a whole run.
///
/// Per-vector evaluation failures are not represented here; the runner
/// absorbs those into the vector's result line and continues the batch.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The source document could not be read.
    #[error("failed to read document {path}: {source}")]
    SourceRead {
        /// Path of the document.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// No assignment could be extracted from the document.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The test-vector file was missing or malformed.
    #[error("failed to load test vectors from {path}: {reason}")]
    VectorLoad {
        /// Path of the vector file.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },

    /// The report file could not be appended to.
    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        /// Path of the report file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}
