//! Negation-aware polarity scoring that derives silver labels from tokens.
//!
//! Each token scores +1 (positive set), -1 (negative set) or 0. A token right
//! after a negation marker has its score flipped; negation reaches exactly one
//! token. The sign of the sum picks the label.
pub mod defaults;

use std::collections::HashSet;
use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// Three-way sentiment label; the discriminants are the numeric class ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Negative = 0,
    Neutral = 1,
    Positive = 2,
}

impl SentimentLabel {
    /// Label for a signed lexicon score.
    pub fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => SentimentLabel::Positive,
            -1 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<SentimentLabel> for i32 {
    fn from(label: SentimentLabel) -> Self {
        label.as_i32()
    }
}

impl TryFrom<i32> for SentimentLabel {
    type Error = ClassifierError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(SentimentLabel::Negative),
            1 => Ok(SentimentLabel::Neutral),
            2 => Ok(SentimentLabel::Positive),
            other => Err(ClassifierError::InvalidInput(format!(
                "{} is not a sentiment label",
                other
            ))),
        }
    }
}

/// Serialized form of a [`Lexicon`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    #[serde(default)]
    pub negation: Vec<String>,
}

/// Immutable positive/negative/negation word sets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "LexiconConfig")]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    negation: HashSet<String>,
}

impl TryFrom<LexiconConfig> for Lexicon {
    type Error = ClassifierError;

    fn try_from(config: LexiconConfig) -> Result<Self> {
        Lexicon::new(config.positive, config.negative, config.negation)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        let set = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<HashSet<_>>();
        Self {
            positive: set(defaults::POSITIVE_WORDS),
            negative: set(defaults::NEGATIVE_WORDS),
            negation: set(defaults::NEGATION_WORDS),
        }
    }
}

impl Lexicon {
    /// Build a lexicon; the positive and negative sets must be disjoint.
    pub fn new<P, N, G>(positive: P, negative: N, negation: G) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        let positive: HashSet<String> = positive.into_iter().map(Into::into).collect();
        let negative: HashSet<String> = negative.into_iter().map(Into::into).collect();
        let negation: HashSet<String> = negation.into_iter().map(Into::into).collect();

        let mut overlap: Vec<&String> = positive.intersection(&negative).collect();
        overlap.sort();
        if let Some(word) = overlap.first() {
            return Err(ClassifierError::LexiconOverlap((*word).clone()));
        }

        Ok(Self {
            positive,
            negative,
            negation,
        })
    }

    /// +1, -1 or 0 for a single token, ignoring negation.
    pub fn polarity(&self, token: &str) -> i32 {
        if self.positive.contains(token) {
            1
        } else if self.negative.contains(token) {
            -1
        } else {
            0
        }
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negation.contains(token)
    }

    /// Signed sum of token polarities with one-token negation look-back.
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> i32 {
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let polarity = self.polarity(token.as_ref());
                if i > 0 && self.is_negation(tokens[i - 1].as_ref()) {
                    -polarity
                } else {
                    polarity
                }
            })
            .sum()
    }

    /// Silver label of a cleaned, lowercased token sequence.
    pub fn score_label<S: AsRef<str>>(&self, tokens: &[S]) -> SentimentLabel {
        SentimentLabel::from_score(self.score(tokens))
    }

    pub fn positive(&self) -> &HashSet<String> {
        &self.positive
    }

    pub fn negative(&self) -> &HashSet<String> {
        &self.negative
    }

    pub fn negation(&self) -> &HashSet<String> {
        &self.negation
    }
}
