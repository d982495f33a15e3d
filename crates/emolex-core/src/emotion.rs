//! Emotion labels.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// One of the four emotion categories.
///
/// The declaration order is significant: classifiers break ties in favour
/// of the earlier variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Emotion {
    /// Anger, irritation.
    Angry,
    /// Joy, contentment.
    Happy,
    /// Sadness, loneliness.
    Sad,
    /// Anything else.
    #[default]
    Others,
}

impl Emotion {
    /// All labels in tie-breaking order.
    pub const ALL: [Self; 4] = [Self::Angry, Self::Happy, Self::Sad, Self::Others];

    /// Number of labels.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this label in [`Emotion::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Angry => 0,
            Self::Happy => 1,
            Self::Sad => 2,
            Self::Others => 3,
        }
    }

    /// Label at `index` in [`Emotion::ALL`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Angry),
            1 => Some(Self::Happy),
            2 => Some(Self::Sad),
            3 => Some(Self::Others),
            _ => None,
        }
    }

    /// Lowercase label as it appears in corpus files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Angry => "angry",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Others => "others",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_order() {
        for (i, emotion) in Emotion::ALL.into_iter().enumerate() {
            assert_eq!(emotion.index(), i);
            assert_eq!(Emotion::from_index(i), Some(emotion));
        }
        assert_eq!(Emotion::from_index(4), None);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("angry".parse::<Emotion>().unwrap(), Emotion::Angry);
        assert_eq!(" Happy\n".parse::<Emotion>().unwrap(), Emotion::Happy);
        assert_eq!("SAD".parse::<Emotion>().unwrap(), Emotion::Sad);
        assert_eq!("others".parse::<Emotion>().unwrap(), Emotion::Others);
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "label".parse::<Emotion>().unwrap_err();
        assert_eq!(err, Error::UnknownLabel("label".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Emotion::Others.to_string(), "others");
        assert_eq!(format!("{}", Emotion::Angry), "angry");
    }

    #[test]
    fn test_default_is_others() {
        assert_eq!(Emotion::default(), Emotion::Others);
    }
}
