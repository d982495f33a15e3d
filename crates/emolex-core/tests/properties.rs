//! Property tests for the lexicon classifier.

#![allow(clippy::unwrap_used)]

use emolex_core::{Classifier, Emotion, LexiconClassifier, classify, tokenize};
use proptest::prelude::*;

#[test]
fn test_reference_sentences() {
    assert_eq!(classify(""), Emotion::Others);
    assert_eq!(classify("I am so happy today"), Emotion::Happy);
    assert_eq!(classify("I am not happy"), Emotion::Others);
    assert_eq!(classify("I am not very happy"), Emotion::Others);
    assert_eq!(classify("I am not extremely very happy"), Emotion::Happy);
    assert_eq!(
        classify("I hate this, it's so sad and depressing"),
        Emotion::Sad
    );
    assert_eq!(classify("HAPPY"), classify("happy"));
}

#[test]
fn test_shared_across_threads() {
    let classifier = LexiconClassifier::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["so happy", "so sad", "so mad", "so so"]
            .into_iter()
            .map(|text| scope.spawn(move || classifier.classify(text)))
            .collect();
        let labels: Vec<Emotion> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![Emotion::Happy, Emotion::Sad, Emotion::Angry, Emotion::Others]
        );
    });
}

proptest! {
    #[test]
    fn classify_is_total(text in any::<String>()) {
        let label = classify(&text);
        prop_assert!(Emotion::ALL.contains(&label));
    }

    #[test]
    fn classify_is_deterministic(text in any::<String>()) {
        prop_assert_eq!(classify(&text), classify(&text));
    }

    #[test]
    fn classify_ignores_ascii_case(text in "[a-zA-Z' ,.!]{0,64}") {
        prop_assert_eq!(classify(&text.to_uppercase()), classify(&text.to_lowercase()));
    }

    #[test]
    fn best_matches_classify(text in "[a-z ]{0,64}") {
        let classifier = LexiconClassifier::default();
        prop_assert_eq!(classifier.scores(&text).best(), classifier.classify(&text));
    }

    #[test]
    fn tokens_are_lowercase(text in "[a-zA-Z0-9_' ,.!?-]{0,64}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.to_lowercase(), token);
        }
    }

    #[test]
    fn negated_trigger_never_scores(word in prop::sample::select(vec!["happy", "hate", "lonely", "awesome"]),
                                    filler in "[b-z]{3,8}") {
        prop_assume!(emolex_core::Lexicon::standard().emotion_of(&filler).is_none());
        prop_assume!(!emolex_core::Lexicon::standard().is_negation(&filler));
        prop_assert_eq!(classify(&format!("not {word}")), Emotion::Others);
        prop_assert_eq!(classify(&format!("not {filler} {word}")), Emotion::Others);
        prop_assert_ne!(classify(&format!("not {filler} {filler} {word}")), Emotion::Others);
    }
}
