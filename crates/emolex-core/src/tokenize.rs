//! Word tokenization.

use regex::Regex;
use std::sync::LazyLock;

/// A word with an optional apostrophe contraction (`isn't`, `don't`).
#[allow(clippy::expect_used)] // Pattern is a literal and known to compile
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+(?:'\w+)?\b").expect("word pattern compiles"));

/// Splits `text` into lowercase word tokens, left to right.
///
/// Anything that is not part of a word is a separator and is dropped, so
/// `"not at all happy!"` becomes `["not", "at", "all", "happy"]`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?! ... ").is_empty());
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("I Am HAPPY"), vec!["i", "am", "happy"]);
    }

    #[test]
    fn test_tokenize_contractions() {
        assert_eq!(tokenize("I isn't, happy!"), vec!["i", "isn't", "happy"]);
        assert_eq!(tokenize("Don't"), vec!["don't"]);
    }

    #[test]
    fn test_tokenize_stray_apostrophes() {
        assert_eq!(tokenize("'quoted' words'"), vec!["quoted", "words"]);
        assert_eq!(tokenize("rock 'n' roll"), vec!["rock", "n", "roll"]);
    }

    #[test]
    fn test_tokenize_underscores_and_digits() {
        assert_eq!(tokenize("snake_case 42x"), vec!["snake_case", "42x"]);
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(tokenize("Café ÜBER"), vec!["café", "über"]);
    }

    #[test]
    fn test_tokenize_punctuation_separates() {
        assert_eq!(tokenize("sad,lonely...why"), vec!["sad", "lonely", "why"]);
    }
}
