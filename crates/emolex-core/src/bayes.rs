//! Multinomial Naive Bayes baseline over word counts.
//!
//! Unlike [`LexiconClassifier`](crate::LexiconClassifier) this model is
//! trained from labeled examples. It exists to give the lexicon rules
//! something to be compared against on the same corpus.

use crate::classifier::Classifier;
use crate::emotion::Emotion;
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Default additive smoothing.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Words of two or more characters.
#[allow(clippy::expect_used)] // Pattern is a literal and known to compile
static TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("term pattern compiles"));

/// Bag-of-words feature extractor.
///
/// The vocabulary is fixed by [`CountVectorizer::fit`]; unseen terms are
/// dropped when transforming new text.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Learns the vocabulary of `texts`. Feature indices follow sorted term order.
    #[must_use]
    pub fn fit(texts: &[String]) -> Self {
        let terms: BTreeSet<String> = texts.iter().flat_map(|text| Self::terms(text)).collect();
        let vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(i, term)| (term, i))
            .collect();
        Self { vocabulary }
    }

    fn terms(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TERM.find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Number of known terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Checks whether no terms were learned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Feature index of `term`, if known.
    #[must_use]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Sparse term counts of `text` as `(feature, count)` pairs sorted by feature.
    #[must_use]
    pub fn transform(&self, text: &str) -> Vec<(usize, u32)> {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for term in Self::terms(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_default() += 1;
            }
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_unstable();
        counts
    }
}

/// Multinomial Naive Bayes classifier with additive smoothing.
///
/// ```
/// use emolex_core::{Classifier, Emotion, MultinomialNb};
///
/// let texts = vec!["what a great day".to_string(), "leave me alone".to_string()];
/// let labels = vec![Emotion::Happy, Emotion::Sad];
/// let model = MultinomialNb::fit(&texts, &labels, 1.0)?;
/// assert_eq!(model.classify("great"), Emotion::Happy);
/// # Ok::<(), emolex_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    vectorizer: CountVectorizer,
    /// Labels seen in training, sorted by label name.
    classes: Vec<Emotion>,
    class_log_prior: Vec<f64>,
    /// `[class][feature]` smoothed log probabilities.
    feature_log_prob: Vec<Vec<f64>>,
    alpha: f64,
}

impl MultinomialNb {
    /// Trains on aligned `texts` and `labels`.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are empty or differ in length, if
    /// `alpha` is not a finite positive number, or if the texts yield no
    /// vocabulary.
    #[allow(clippy::cast_precision_loss)] // Counts stay far below 2^52
    pub fn fit(texts: &[String], labels: &[Emotion], alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(Error::InvalidSmoothing(alpha));
        }
        if texts.len() != labels.len() {
            return Err(Error::LengthMismatch {
                left: texts.len(),
                right: labels.len(),
            });
        }
        if texts.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }

        let vectorizer = CountVectorizer::fit(texts);
        if vectorizer.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        let n_features = vectorizer.len();

        let mut classes: Vec<Emotion> = labels.to_vec();
        classes.sort_unstable_by_key(|e| e.as_str());
        classes.dedup();

        let mut class_count = vec![0_usize; classes.len()];
        let mut feature_count = vec![vec![0_u64; n_features]; classes.len()];

        for (text, label) in texts.iter().zip(labels) {
            let Some(c) = classes.iter().position(|class| class == label) else {
                continue;
            };
            class_count[c] += 1;
            for (feature, count) in vectorizer.transform(text) {
                feature_count[c][feature] += u64::from(count);
            }
        }

        let total = texts.len() as f64;
        let class_log_prior: Vec<f64> = class_count
            .iter()
            .map(|&count| (count as f64 / total).ln())
            .collect();

        let feature_log_prob: Vec<Vec<f64>> = feature_count
            .iter()
            .map(|counts| {
                let class_total = counts.iter().sum::<u64>() as f64;
                let denominator = (class_total + alpha * n_features as f64).ln();
                counts
                    .iter()
                    .map(|&count| (count as f64 + alpha).ln() - denominator)
                    .collect()
            })
            .collect();

        tracing::info!(
            examples = texts.len(),
            classes = classes.len(),
            features = n_features,
            "trained naive bayes"
        );

        Ok(Self {
            vectorizer,
            classes,
            class_log_prior,
            feature_log_prob,
            alpha,
        })
    }

    /// Labels the model can predict, sorted by label name.
    #[must_use]
    pub fn classes(&self) -> &[Emotion] {
        &self.classes
    }

    /// The fitted vectorizer.
    #[must_use]
    pub const fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    /// Smoothing used during training.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Joint log-likelihood of `text` for every class in [`Self::classes`] order.
    #[must_use]
    pub fn joint_log_likelihood(&self, text: &str) -> Vec<f64> {
        let features = self.vectorizer.transform(text);
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_prob)| {
                prior
                    + features
                        .iter()
                        .map(|&(feature, count)| f64::from(count) * log_prob[feature])
                        .sum::<f64>()
            })
            .collect()
    }

    /// Most likely label for `text`; the first class wins ties.
    #[must_use]
    pub fn predict(&self, text: &str) -> Emotion {
        let jll = self.joint_log_likelihood(text);
        let mut best = 0;
        for (i, &value) in jll.iter().enumerate() {
            if value > jll[best] {
                best = i;
            }
        }
        self.classes[best]
    }
}

impl Classifier for MultinomialNb {
    fn classify(&self, text: &str) -> Emotion {
        self.predict(text)
    }
}
