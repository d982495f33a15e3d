//! Lexicon-based emotion classification.

use crate::emotion::Emotion;
use crate::lexicon::Lexicon;
use crate::tokenize::tokenize;
use std::fmt;

/// How many tokens before a trigger word are checked for negation.
pub const NEGATION_WINDOW: usize = 2;

/// Score given to [`Emotion::Others`] before any word is counted.
pub const OTHERS_BIAS: u32 = 1;

/// Anything that maps a text to one emotion label.
pub trait Classifier: Send + Sync {
    /// Classifies a single text.
    fn classify(&self, text: &str) -> Emotion;

    /// Classifies every text, keeping input order.
    fn classify_all(&self, texts: &[String]) -> Vec<Emotion> {
        texts.iter().map(|text| self.classify(text)).collect()
    }
}

/// Per-emotion hit counts for one text, in [`Emotion::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores([u32; Emotion::COUNT]);

impl Scores {
    /// Fresh scores: zero everywhere except the `others` bias.
    #[must_use]
    pub const fn new() -> Self {
        let mut counts = [0; Emotion::COUNT];
        counts[Emotion::Others.index()] = OTHERS_BIAS;
        Self(counts)
    }

    /// Score for `emotion`.
    #[must_use]
    pub const fn get(&self, emotion: Emotion) -> u32 {
        self.0[emotion.index()]
    }

    /// Raw counts in [`Emotion::ALL`] order.
    #[must_use]
    pub const fn as_array(&self) -> [u32; Emotion::COUNT] {
        self.0
    }

    fn increment(&mut self, emotion: Emotion) {
        self.0[emotion.index()] += 1;
    }

    /// Highest scoring emotion; the earliest one wins ties.
    #[must_use]
    pub fn best(&self) -> Emotion {
        let mut best = 0;
        for (i, &count) in self.0.iter().enumerate() {
            if count > self.0[best] {
                best = i;
            }
        }
        Emotion::ALL[best]
    }
}

impl Default for Scores {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, emotion) in Emotion::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{emotion}={}", self.get(emotion))?;
        }
        Ok(())
    }
}

/// Rule-based classifier over a fixed [`Lexicon`].
///
/// Each trigger word adds one point to its emotion unless one of the two
/// tokens right before it is a negation marker. The best score wins, with
/// `others` starting at [`OTHERS_BIAS`] so that it is the answer whenever
/// no emotion is hit.
///
/// ```
/// use emolex_core::{Emotion, LexiconClassifier, Classifier};
///
/// let classifier = LexiconClassifier::default();
/// assert_eq!(classifier.classify("I am so happy today"), Emotion::Happy);
/// assert_eq!(classifier.classify("I am not happy"), Emotion::Others);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LexiconClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> LexiconClassifier<'a> {
    /// Creates a classifier over `lexicon`.
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// The lexicon this classifier reads.
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Computes the score vector for `text`.
    #[must_use]
    pub fn scores(&self, text: &str) -> Scores {
        let tokens = tokenize(text);
        let mut scores = Scores::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(emotion) = self.lexicon.emotion_of(token) else {
                continue;
            };
            let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|prev| self.lexicon.is_negation(prev));
            if negated {
                tracing::trace!(%token, "hit suppressed by negation");
                continue;
            }
            scores.increment(emotion);
        }

        scores
    }
}

impl Default for LexiconClassifier<'static> {
    fn default() -> Self {
        Self::new(Lexicon::standard())
    }
}

impl Classifier for LexiconClassifier<'_> {
    fn classify(&self, text: &str) -> Emotion {
        self.scores(text).best()
    }
}

/// Classifies `text` with the built-in lexicon.
#[must_use]
pub fn classify(text: &str) -> Emotion {
    LexiconClassifier::default().classify(text)
}
