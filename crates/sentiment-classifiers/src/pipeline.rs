//! Raw post -> tokens -> {silver label, stems}.
use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexicon, SentimentLabel};
use crate::preprocessing::TextCleaner;
use crate::stemmer::Stemmer;

/// Everything derived from one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedText {
    pub tokens: Vec<String>,
    pub stems: Vec<String>,
    pub silver_label: SentimentLabel,
}

impl ProcessedText {
    /// Stems joined by single spaces, ready for a bag-of-words vectorizer.
    pub fn stemmed_text(&self) -> String {
        self.stems.join(" ")
    }
}

/// Cleaner, stemmer and lexicon wired together. The lexicon scores the
/// unstemmed tokens so that its word lists match surface forms.
#[derive(Debug, Clone, Default)]
pub struct SentimentPipeline {
    cleaner: TextCleaner,
    stemmer: Stemmer,
    lexicon: Lexicon,
}

impl SentimentPipeline {
    pub fn new(cleaner: TextCleaner, stemmer: Stemmer, lexicon: Lexicon) -> Self {
        Self {
            cleaner,
            stemmer,
            lexicon,
        }
    }

    pub fn process(&self, text: &str) -> ProcessedText {
        let tokens = self.cleaner.tokens(text);
        let silver_label = self.lexicon.score_label(&tokens);
        let stems = self.stemmer.stem_all(&tokens);
        ProcessedText {
            tokens,
            stems,
            silver_label,
        }
    }

    pub fn process_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<ProcessedText> {
        let processed: Vec<ProcessedText> =
            texts.iter().map(|t| self.process(t.as_ref())).collect();
        log::debug!("Processed {} texts", processed.len());
        processed
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn stemmer(&self) -> &Stemmer {
        &self.stemmer
    }

    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }
}
