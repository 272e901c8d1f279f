//! Error types for the fallible edges of the crate (reading input and config).
//! The pipeline stages themselves are total and never return errors.

use thiserror::Error;

/// Errors raised while loading records or configuration.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON input or configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input file extension is neither `.csv` nor `.json`
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for loading operations
pub type PipelineResult<T> = Result<T, PipelineError>;
