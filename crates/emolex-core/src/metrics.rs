//! Accuracy and F1 scoring over aligned label sequences.

use crate::emotion::Emotion;
use crate::error::{Error, Result};
use std::fmt;

fn check_aligned(y_true: &[Emotion], y_pred: &[Emotion]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::LengthMismatch {
            left: y_true.len(),
            right: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Fraction of positions where the prediction equals the true label.
///
/// # Errors
///
/// Returns an error if the sequences differ in length or are empty.
pub fn accuracy(y_true: &[Emotion], y_pred: &[Emotion]) -> Result<f64> {
    Report::compute(y_true, y_pred).map(|report| report.accuracy)
}

/// F1 averaged over labels, weighted by each label's true support.
///
/// # Errors
///
/// Returns an error if the sequences differ in length or are empty.
pub fn f1_weighted(y_true: &[Emotion], y_pred: &[Emotion]) -> Result<f64> {
    Report::compute(y_true, y_pred).map(|report| report.f1_weighted)
}

/// Scores for a single label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelScores {
    /// The label.
    pub label: Emotion,
    /// Correct predictions of this label over all predictions of it.
    pub precision: f64,
    /// Correct predictions of this label over all true instances of it.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// Number of true instances.
    pub support: usize,
}

/// Full evaluation of one prediction run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Overall accuracy.
    pub accuracy: f64,
    /// Support-weighted F1.
    pub f1_weighted: f64,
    /// Per-label scores in [`Emotion::ALL`] order.
    pub labels: [LabelScores; Emotion::COUNT],
    /// Confusion counts indexed `[true][predicted]`.
    pub confusion: [[usize; Emotion::COUNT]; Emotion::COUNT],
    /// Number of scored samples.
    pub samples: usize,
}

impl Report {
    /// Scores `y_pred` against `y_true`.
    ///
    /// A label never predicted has precision 0, a label never seen has
    /// recall 0, and F1 is 0 when both are 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequences differ in length or are empty.
    #[allow(clippy::cast_precision_loss)] // Sample counts stay far below 2^52
    pub fn compute(y_true: &[Emotion], y_pred: &[Emotion]) -> Result<Self> {
        check_aligned(y_true, y_pred)?;

        let mut confusion = [[0_usize; Emotion::COUNT]; Emotion::COUNT];
        for (truth, pred) in y_true.iter().zip(y_pred) {
            confusion[truth.index()][pred.index()] += 1;
        }

        let samples = y_true.len();
        let correct: usize = (0..Emotion::COUNT).map(|i| confusion[i][i]).sum();

        let labels = Emotion::ALL.map(|label| {
            let i = label.index();
            let true_positive = confusion[i][i] as f64;
            let predicted: usize = confusion.iter().map(|row| row[i]).sum();
            let support: usize = confusion[i].iter().sum();

            let precision = ratio(true_positive, predicted as f64);
            let recall = ratio(true_positive, support as f64);
            let f1 = ratio(2.0 * precision * recall, precision + recall);

            LabelScores {
                label,
                precision,
                recall,
                f1,
                support,
            }
        });

        let f1_weighted = labels
            .iter()
            .map(|scores| scores.f1 * scores.support as f64)
            .sum::<f64>()
            / samples as f64;

        Ok(Self {
            accuracy: correct as f64 / samples as f64,
            f1_weighted,
            labels,
            confusion,
            samples,
        })
    }

    /// Scores for `label`.
    #[must_use]
    pub const fn label(&self, label: Emotion) -> &LabelScores {
        &self.labels[label.index()]
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>10} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        for scores in &self.labels {
            writeln!(
                f,
                "{:>10} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                scores.label.as_str(),
                scores.precision,
                scores.recall,
                scores.f1,
                scores.support
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:>10} {:>29.2} {:>9}", "accuracy", self.accuracy, self.samples)?;
        writeln!(
            f,
            "{:>10} {:>29.2} {:>9}",
            "weighted", self.f1_weighted, self.samples
        )?;
        writeln!(f)?;

        write!(f, "{:>10}", "true\\pred")?;
        for label in Emotion::ALL {
            write!(f, " {:>7}", label.as_str())?;
        }
        writeln!(f)?;
        for label in Emotion::ALL {
            write!(f, "{:>10}", label.as_str())?;
            for count in self.confusion[label.index()] {
                write!(f, " {count:>7}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
