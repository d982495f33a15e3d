//! # emolex-corpus
//!
//! Reading and preparing the tab-separated emotion corpus.
//!
//! ## Features
//!
//! - **Corpus reader**: Loads `id<TAB>turns...<TAB>label` rows into
//!   [`Example`]s, reporting the line of any malformed row
//! - **Label joining**: Appends labels from a JSON labels file to an
//!   unlabeled corpus
//!
//! ## Quick Start
//!
//! ```
//! use emolex_corpus::Corpus;
//! use emolex_core::Emotion;
//!
//! let data = "id\tturn1\tturn2\tturn3\tlabel\n1\thi\thello\tso happy\thappy\n";
//! let corpus = Corpus::read(data.as_bytes())?;
//!
//! assert_eq!(corpus.texts(), vec!["hi hello so happy".to_string()]);
//! assert_eq!(corpus.labels(), vec![Emotion::Happy]);
//! # Ok::<(), emolex_corpus::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod corpus;
mod error;

pub mod join;

pub use corpus::{Corpus, Example, SEPARATOR};
pub use error::{Error, Result};
pub use join::{Labels, join_label_files, join_labels};
