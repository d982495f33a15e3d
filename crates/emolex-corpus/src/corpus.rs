//! Labeled tab-separated corpus.
//!
//! Each file starts with a header row. Data rows are
//! `id<TAB>turn<TAB>...<TAB>label`: the first column is an identifier, the
//! last is the emotion label and everything in between is conversation text.

use crate::error::{Error, Result};
use emolex_core::Emotion;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Column separator.
pub const SEPARATOR: char = '\t';

/// One labeled utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Row identifier (first column).
    pub id: String,
    /// Text columns joined with single spaces.
    pub text: String,
    /// Ground-truth label (last column).
    pub label: Emotion,
}

impl Example {
    /// Parses one data row. `line` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns an error if the row has fewer than three columns or the last
    /// column is not an emotion label.
    pub fn parse(row: &str, line: usize) -> Result<Self> {
        let columns: Vec<&str> = row.trim_end().split(SEPARATOR).collect();
        let [id, turns @ .., label] = columns.as_slice() else {
            return Err(malformed(line, columns.len()));
        };
        if turns.is_empty() {
            return Err(malformed(line, columns.len()));
        }

        let label = label
            .parse::<Emotion>()
            .map_err(|source| Error::Label { line, source })?;

        Ok(Self {
            id: (*id).to_string(),
            text: turns.join(" "),
            label,
        })
    }
}

fn malformed(line: usize, columns: usize) -> Error {
    Error::MalformedRow {
        line,
        reason: format!("expected at least 3 columns, found {columns}"),
    }
}

/// A labeled corpus loaded into memory.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    header: String,
    examples: Vec<Example>,
}

impl Corpus {
    /// Reads a corpus, skipping the header row and blank lines.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure, a missing header or a malformed row.
    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let header = lines.next().ok_or(Error::MissingHeader)??;

        let mut examples = Vec::new();
        for (i, line) in lines.enumerate() {
            let line_number = i + 2;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            examples.push(Example::parse(&line, line_number)?);
        }

        tracing::debug!(examples = examples.len(), "corpus read");

        Ok(Self {
            header: header.trim_end().to_string(),
            examples,
        })
    }

    /// Opens and reads a corpus file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is malformed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let corpus = Self::read(BufReader::new(File::open(path)?))?;
        tracing::info!(path = %path.display(), examples = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    /// Header row as read.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// All examples in file order.
    #[must_use]
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Iterates over examples in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }

    /// Texts in file order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.examples.iter().map(|e| e.text.clone()).collect()
    }

    /// Labels in file order.
    #[must_use]
    pub fn labels(&self) -> Vec<Emotion> {
        self.examples.iter().map(|e| e.label).collect()
    }

    /// Number of examples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Checks whether the corpus has no examples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
