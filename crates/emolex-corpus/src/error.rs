//! Error types for corpus operations.

use thiserror::Error;

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or preparing corpus files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Labels file is not valid JSON of the expected shape.
    #[error("Invalid labels file: {0}")]
    Json(#[from] serde_json::Error),

    /// File has no header row.
    #[error("Missing header row")]
    MissingHeader,

    /// Row does not have the expected columns.
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number.
        line: usize,
        /// What is wrong with the row.
        reason: String,
    },

    /// Row carries a label that is not an emotion.
    #[error("Invalid label at line {line}: {source}")]
    Label {
        /// 1-based line number.
        line: usize,
        /// Underlying label error.
        source: emolex_core::Error,
    },

    /// Labels file maps a row to a value that is not an emotion.
    #[error("Invalid label for row {index}: {source}")]
    InvalidLabel {
        /// Zero-based data row index from the labels file.
        index: usize,
        /// Underlying label error.
        source: emolex_core::Error,
    },

    /// Labels file key is not a row index.
    #[error("Invalid row index in labels file: {0:?}")]
    InvalidIndex(String),

    /// No label exists for a data row.
    #[error("No label for row {0}")]
    MissingLabel(usize),
}
