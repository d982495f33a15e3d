//! Merges a separate labels file into an unlabeled corpus.
//!
//! The labels come as JSON keyed by row index:
//!
//! ```json
//! {"Label": {"0": "others", "1": "happy"}}
//! ```
//!
//! Row `i` of the unlabeled file (counting data rows from zero) receives
//! label `"i"`, appended as a new last column.

use crate::corpus::SEPARATOR;
use crate::error::{Error, Result};
use emolex_core::Emotion;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Name of the appended header column.
pub const LABEL_COLUMN: &str = "label";

#[derive(Debug, Deserialize)]
struct LabelFile {
    #[serde(rename = "Label")]
    label: HashMap<String, String>,
}

/// Row labels keyed by zero-based data row index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels(BTreeMap<usize, Emotion>);

impl Labels {
    /// Parses a labels document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the expected shape, a key
    /// is not a row index, or a value is not an emotion label.
    pub fn parse(json: &str) -> Result<Self> {
        Self::from_file(serde_json::from_str(json)?)
    }

    /// Reads a labels document.
    ///
    /// # Errors
    ///
    /// Same as [`Labels::parse`], plus I/O failures.
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        Self::from_file(serde_json::from_reader(reader)?)
    }

    fn from_file(file: LabelFile) -> Result<Self> {
        let mut labels = BTreeMap::new();
        for (key, value) in file.label {
            let index: usize = key
                .trim()
                .parse()
                .map_err(|_| Error::InvalidIndex(key.clone()))?;
            let emotion = value
                .parse::<Emotion>()
                .map_err(|source| Error::InvalidLabel { index, source })?;
            labels.insert(index, emotion);
        }
        Ok(Self(labels))
    }

    /// Label for data row `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Emotion> {
        self.0.get(&index).copied()
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether there are no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(usize, Emotion)> for Labels {
    fn from_iter<I: IntoIterator<Item = (usize, Emotion)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Writes `input` to `output` with a label column appended.
///
/// The header gains a `label` column; every non-blank data row gets its
/// label from `labels`. Returns the number of data rows written.
///
/// # Errors
///
/// Returns an error on I/O failure, an empty input or a row without label.
pub fn join_labels<R: BufRead, W: Write>(labels: &Labels, input: R, mut output: W) -> Result<usize> {
    let mut lines = input.lines();
    let header = lines.next().ok_or(Error::MissingHeader)??;
    writeln!(output, "{}{SEPARATOR}{LABEL_COLUMN}", header.trim_end_matches(['\r', '\n']))?;

    let mut rows = 0;
    for line in lines {
        let line = line?;
        let row = line.trim_end();
        if row.is_empty() {
            continue;
        }
        let label = labels.get(rows).ok_or(Error::MissingLabel(rows))?;
        writeln!(output, "{row}{SEPARATOR}{label}")?;
        rows += 1;
    }
    output.flush()?;

    if labels.len() > rows {
        tracing::warn!(
            labels = labels.len(),
            rows,
            "labels file has more entries than data rows"
        );
    }

    Ok(rows)
}

/// File-based [`join_labels`].
///
/// # Errors
///
/// Returns an error if any file cannot be read or written, or the inputs
/// are malformed.
pub fn join_label_files(
    labels_path: impl AsRef<Path>,
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    let labels = Labels::read(BufReader::new(File::open(labels_path)?))?;
    let input = BufReader::new(File::open(input_path)?);
    let output_path = output_path.as_ref();
    let output = BufWriter::new(File::create(output_path)?);

    let rows = join_labels(&labels, input, output)?;
    tracing::info!(rows, path = %output_path.display(), "wrote labeled corpus");
    Ok(rows)
}
