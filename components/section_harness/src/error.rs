//! Error types for the harness

use thiserror::Error;

/// Errors raised by the harness itself, as opposed to errors raised by the
/// test bodies it runs.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The reporting sink rejected a completed section
    #[error("failed to emit report for section '{section}'")]
    Sink {
        /// Section whose report was being emitted
        section: String,
        /// Underlying sink failure
        #[source]
        source: SinkError,
    },
}

/// Errors a [`ReportSink`](crate::sink::ReportSink) can return
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing the record failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the record failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
