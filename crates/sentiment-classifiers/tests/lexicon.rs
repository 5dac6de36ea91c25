//! Integration tests for the negation-aware lexicon scorer.

use sentiment_classifiers::lexicon::{Lexicon, SentimentLabel};
use sentiment_classifiers::ClassifierError;

#[test]
fn negation_flips_polarity() {
    let lex = Lexicon::default();
    assert_eq!(lex.score_label(&["not", "good"]), SentimentLabel::Negative);
    assert_eq!(lex.score_label(&["very", "good"]), SentimentLabel::Positive);
    assert_eq!(lex.score_label(&["ok"]), SentimentLabel::Neutral);
    assert_eq!(lex.score_label(&["not", "bad"]), SentimentLabel::Positive);
}

#[test]
fn labels_map_to_class_ids() {
    let lex = Lexicon::default();
    assert_eq!(i32::from(lex.score_label(&["not", "good"])), 0);
    assert_eq!(i32::from(lex.score_label(&["ok"])), 1);
    assert_eq!(i32::from(lex.score_label(&["very", "good"])), 2);
}

#[test]
fn balanced_hits_are_neutral() {
    let lex = Lexicon::default();
    assert_eq!(lex.score(&["good", "but", "painful", "bad"]), 0);
    assert_eq!(lex.score_label(&["good", "bad"]), SentimentLabel::Neutral);
    let empty: [&str; 0] = [];
    assert_eq!(lex.score_label(&empty), SentimentLabel::Neutral);
}

#[test]
fn negation_at_position_zero_has_nothing_to_flip() {
    let lex = Lexicon::default();
    assert_eq!(lex.score(&["not"]), 0);
    // Only the immediately preceding token counts.
    assert_eq!(lex.score(&["never", "not", "good"]), -1);
}

#[test]
fn custom_lexicon_is_isolated_from_defaults() {
    let lex = Lexicon::new(vec!["sunny"], vec!["rainy"], vec!["hardly"]).unwrap();
    assert_eq!(lex.score_label(&["sunny"]), SentimentLabel::Positive);
    assert_eq!(lex.score_label(&["hardly", "sunny"]), SentimentLabel::Negative);
    // "good" is not part of this lexicon.
    assert_eq!(lex.score_label(&["good"]), SentimentLabel::Neutral);
    assert_eq!(lex.score_label(&["not", "rainy"]), SentimentLabel::Negative);
}

#[test]
fn overlapping_sets_are_rejected() {
    let err = Lexicon::new(vec!["fine", "sick"], vec!["sick"], Vec::<String>::new()).unwrap_err();
    assert_eq!(err, ClassifierError::LexiconOverlap("sick".to_string()));
}

#[test]
fn lexicon_deserializes_from_json() {
    let json = r#"{"positive": ["yay"], "negative": ["meh"], "negation": ["no"]}"#;
    let lex: Lexicon = serde_json::from_str(json).unwrap();
    assert_eq!(lex.score_label(&["no", "meh"]), SentimentLabel::Positive);

    let missing_negation = r#"{"positive": ["yay"], "negative": ["meh"]}"#;
    let lex: Lexicon = serde_json::from_str(missing_negation).unwrap();
    assert!(lex.negation().is_empty());

    let overlapping = r#"{"positive": ["meh"], "negative": ["meh"]}"#;
    assert!(serde_json::from_str::<Lexicon>(overlapping).is_err());
}
