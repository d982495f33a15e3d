//! End-to-end tests: prepare a corpus, classify it and score the result.

#![allow(clippy::unwrap_used)]

use emolex_core::{Classifier, Emotion, LexiconClassifier, MultinomialNb, metrics};
use emolex_corpus::{Corpus, Example, Labels, join_labels};
use proptest::prelude::*;

const UNLABELED: &str = "id\tturn1\tturn2\tturn3
0\tI hate you\twhy\tyou are so stupid
1\tI got the job\tcongrats\tI am so happy today
2\tI feel alone\tsorry\tnobody cares, I cry every night
3\twhat time is it\tnoon\tthanks
4\tare you happy\tno\tnot happy at all
";

const LABELS: &str = r#"{"Label": {"0": "angry", "1": "happy", "2": "sad", "3": "others", "4": "sad"}}"#;

fn labeled_corpus() -> Corpus {
    let labels = Labels::parse(LABELS).unwrap();
    let mut joined = Vec::new();
    let rows = join_labels(&labels, UNLABELED.as_bytes(), &mut joined).unwrap();
    assert_eq!(rows, 5);
    Corpus::read(joined.as_slice()).unwrap()
}

#[test]
fn test_joined_corpus_round_trips_labels() {
    let corpus = labeled_corpus();
    assert_eq!(corpus.header(), "id\tturn1\tturn2\tturn3\tlabel");
    assert_eq!(
        corpus.labels(),
        vec![
            Emotion::Angry,
            Emotion::Happy,
            Emotion::Sad,
            Emotion::Others,
            Emotion::Sad
        ]
    );
}

#[test]
fn test_lexicon_evaluation() {
    let corpus = labeled_corpus();
    let predicted = LexiconClassifier::default().classify_all(&corpus.texts());

    // Row 0: hate, why (sad), stupid -> angry 2, sad 1.
    // Row 4: "no not happy" suppresses the second hit but "are you happy" counts.
    assert_eq!(
        predicted,
        vec![
            Emotion::Angry,
            Emotion::Happy,
            Emotion::Sad,
            Emotion::Others,
            Emotion::Happy
        ]
    );

    let report = metrics::Report::compute(&corpus.labels(), &predicted).unwrap();
    assert!((report.accuracy - 0.8).abs() < 1e-9);
    assert_eq!(report.label(Emotion::Sad).support, 2);
}

#[test]
fn test_bayes_evaluation() {
    let corpus = labeled_corpus();
    let model = MultinomialNb::fit(&corpus.texts(), &corpus.labels(), 1.0).unwrap();
    let predicted = model.classify_all(&corpus.texts());
    let accuracy = metrics::accuracy(&corpus.labels(), &predicted).unwrap();
    assert!(accuracy > 0.5);
}

proptest! {
    #[test]
    fn row_text_is_joined_turns(turns in prop::collection::vec("[a-z ,.!']{1,20}", 1..4)) {
        let turns: Vec<String> = turns.into_iter().map(|t| format!("x{t}x")).collect();
        let row = format!("42\t{}\tothers", turns.join("\t"));
        let example = Example::parse(&row, 2).unwrap();
        prop_assert_eq!(example.id, "42");
        prop_assert_eq!(example.text, turns.join(" "));
        prop_assert_eq!(example.label, Emotion::Others);
    }
}
