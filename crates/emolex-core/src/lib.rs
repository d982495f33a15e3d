//! # emolex-core
//!
//! Emotion classification for short conversational text.
//!
//! ## Features
//!
//! - **Lexicon classifier**: Fixed trigger-word lists for `angry`, `happy`
//!   and `sad` with a two-token negation window; falls back to `others`
//! - **Tokenizer**: Lowercase word tokens that keep contractions (`isn't`)
//! - **Naive Bayes baseline**: Count-vectorized multinomial model trained
//!   from labeled examples
//! - **Metrics**: Accuracy, support-weighted F1, per-label scores and a
//!   confusion matrix
//!
//! ## Quick Start
//!
//! ```
//! use emolex_core::{classify, Emotion};
//!
//! assert_eq!(classify("I am so happy today"), Emotion::Happy);
//! assert_eq!(classify("I am not very happy"), Emotion::Others);
//! assert_eq!(classify(""), Emotion::Others);
//! ```
//!
//! ### Scoring Predictions
//!
//! ```
//! use emolex_core::{Classifier, Emotion, LexiconClassifier, metrics};
//!
//! let texts = vec!["what a lovely day".to_string(), "leave me alone".to_string()];
//! let truth = vec![Emotion::Happy, Emotion::Others];
//!
//! let predicted = LexiconClassifier::default().classify_all(&texts);
//! let accuracy = metrics::accuracy(&truth, &predicted)?;
//! assert!((accuracy - 0.5).abs() < 1e-9);
//! # Ok::<(), emolex_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod bayes;
mod classifier;
mod emotion;
mod error;
mod lexicon;
mod tokenize;

pub mod metrics;

pub use bayes::{CountVectorizer, DEFAULT_ALPHA, MultinomialNb};
pub use classifier::{
    Classifier, LexiconClassifier, NEGATION_WINDOW, OTHERS_BIAS, Scores, classify,
};
pub use emotion::Emotion;
pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use metrics::Report;
pub use tokenize::tokenize;
