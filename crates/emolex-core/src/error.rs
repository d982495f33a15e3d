//! Error types for classifier training and scoring.

/// Result type alias for classifier operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classifier error types.
///
/// The lexicon classifier itself never fails; these cover label parsing,
/// baseline training and metric computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Label text is not one of the four emotion labels.
    #[error("Unknown emotion label: {0:?}")]
    UnknownLabel(String),

    /// Two sequences that must be aligned have different lengths.
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// Metrics requested over zero samples.
    #[error("Cannot score an empty label sequence")]
    EmptyInput,

    /// Training requested with no examples.
    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// Training texts contain no term of two or more characters.
    #[error("Training set has an empty vocabulary")]
    EmptyVocabulary,

    /// Smoothing parameter is not a finite positive number.
    #[error("Invalid smoothing parameter: {0}")]
    InvalidSmoothing(f64),
}
