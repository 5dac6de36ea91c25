//! Rule-based suffix stripping in the spirit of Porter's algorithm.
//!
//! The stemmer approximates, rather than replicates, Porter: it runs
//! terminal-y normalization, the plural step, the tense step (with its
//! post-strip repairs) and one derivational rewrite. Rule tables live in
//! [`rules`] and can be swapped for the derivational step.
//!
//! ```
//! use sentiment_classifiers::stemmer::Stemmer;
//!
//! let stemmer = Stemmer::default();
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("caresses"), "caress");
//! assert_eq!(stemmer.stem("relational"), "relate");
//! ```
pub mod rules;
pub mod vc;

use rules::{RuleSet, Selection, SuffixRule};

/// Deterministic, side-effect free word stemmer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stemmer {
    plural: RuleSet,
    tense: RuleSet,
    derivational: RuleSet,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::with_derivational_rules(rules::DERIVATIONAL)
    }
}

impl Stemmer {
    /// Words this short are returned unchanged.
    const MIN_STEM_LEN: usize = 2;

    /// Stemmer whose derivational step uses `derivational` instead of the
    /// default partial table. The first rule (in order) whose suffix matches
    /// and whose base has a positive measure is applied.
    pub fn with_derivational_rules(derivational: &[SuffixRule]) -> Self {
        Self {
            plural: RuleSet::new(rules::PLURAL, Selection::FirstSuffix),
            tense: RuleSet::new(rules::TENSE, Selection::FirstSuffix),
            derivational: RuleSet::new(derivational, Selection::FirstApplicable),
        }
    }

    /// Stem with the full Porter step-2 table in the derivational step.
    pub fn porter_step2() -> Self {
        Self::with_derivational_rules(rules::PORTER_STEP2)
    }

    pub fn derivational_rules(&self) -> &[SuffixRule] {
        self.derivational.rules()
    }

    /// Stem one word. Input is lowercased; non-ASCII words and words of two
    /// letters or fewer are returned otherwise unchanged.
    pub fn stem(&self, word: &str) -> String {
        let mut w = word.to_lowercase();
        if w.len() <= Self::MIN_STEM_LEN || !w.is_ascii() {
            return w;
        }

        // y -> i after a consonant
        let b = w.as_bytes();
        if b[b.len() - 1] == b'y' && !vc::is_basic_vowel(b[b.len() - 2]) {
            w.pop();
            w.push('i');
        }

        for (step, set) in [
            ("plural", &self.plural),
            ("tense", &self.tense),
            ("derivational", &self.derivational),
        ] {
            if let Some(rule) = set.apply(&mut w) {
                log::trace!("{} step: -{} -> {}", step, rule.suffix, w);
            }
        }
        w
    }

    /// Stem every token, preserving order.
    pub fn stem_all<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens.iter().map(|t| self.stem(t.as_ref())).collect()
    }
}
