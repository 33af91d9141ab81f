//! Error types for the viewer

use std::path::PathBuf;
use thiserror::Error;

/// Viewer-specific errors
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Reading an input failed
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// Input being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An input held a malformed report record
    #[error("malformed report in {input}: {source}")]
    Parse {
        /// Name of the input
        input: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Walking a directory failed
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Writing output failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing the summary failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for viewer operations
pub type ViewerResult<T> = Result<T, ViewerError>;
