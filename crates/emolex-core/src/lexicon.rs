//! Emotion trigger words and negation markers.

use crate::emotion::Emotion;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

const ANGRY: &[&str] = &[
    "angry", "poisonous", "damn", "hate", "infuriate", "irate", "kill", "mad", "loathe", "irate",
    "pissed", "rage", "stupid", "suck", "terrible", "ugly", "useless",
];

const HAPPY: &[&str] = &[
    "happy", "amazing", "awesome", "blissful", "celebrated", "cheerful", "delighted", "ecstatic",
    "elated", "enchanting", "enjoy", "excelent", "exciting", "fantastic", "fun", "glad",
    "gleeful", "good", "great", "joy", "joyful", "lovely", "maginficent", "nice", "pleasant",
    "pleased", "superb", "wonderful",
];

const SAD: &[&str] = &[
    "sad", "alone", "cry", "depressed", "despair", "dismay", "down", "grief", "heartbroken",
    "lonely", "lost", "miserable", "nothing", "pain", "why", "tears", "unhappy", "depressing",
];

const NEGATIONS: &[&str] = &[
    "no", "not", "ain't", "don't", "none", "isn't", "aren't", "non", "neither", "nor",
];

static STANDARD: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_lists(
        &[
            (Emotion::Angry, ANGRY),
            (Emotion::Happy, HAPPY),
            (Emotion::Sad, SAD),
        ],
        NEGATIONS,
    )
});

/// Immutable word tables used by the lexicon classifier.
///
/// Holds the per-emotion word lists, the reverse index from word to its
/// owning emotion, and the set of negation markers. A word listed under
/// several emotions belongs to the one registered last.
#[derive(Debug, Clone)]
pub struct Lexicon {
    lists: Vec<(Emotion, Vec<String>)>,
    owners: HashMap<String, Emotion>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// Returns the built-in lexicon, shared by the whole process.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds a lexicon from word lists and negation markers.
    ///
    /// Lists are registered in the given order and words are lowercased.
    #[must_use]
    pub fn from_lists(lists: &[(Emotion, &[&str])], negations: &[&str]) -> Self {
        let lists: Vec<(Emotion, Vec<String>)> = lists
            .iter()
            .map(|(emotion, words)| (*emotion, words.iter().map(|w| w.to_lowercase()).collect()))
            .collect();

        let mut owners = HashMap::new();
        for (emotion, words) in &lists {
            for word in words {
                if let Some(previous) = owners.insert(word.clone(), *emotion)
                    && previous != *emotion
                {
                    tracing::debug!(%word, %previous, owner = %emotion, "lexicon word reassigned");
                }
            }
        }

        let negations = negations.iter().map(|w| w.to_lowercase()).collect();

        Self {
            lists,
            owners,
            negations,
        }
    }

    /// Trigger words registered for `emotion`, in registration order.
    #[must_use]
    pub fn words(&self, emotion: Emotion) -> Vec<&str> {
        self.lists
            .iter()
            .filter(|(e, _)| *e == emotion)
            .flat_map(|(_, words)| words.iter().map(String::as_str))
            .collect()
    }

    /// Emotion that owns `word`, if it is a trigger word.
    #[must_use]
    pub fn emotion_of(&self, word: &str) -> Option<Emotion> {
        self.owners.get(word).copied()
    }

    /// Checks whether `token` is a negation marker.
    #[must_use]
    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    /// Number of distinct trigger words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Checks whether the lexicon has no trigger words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
