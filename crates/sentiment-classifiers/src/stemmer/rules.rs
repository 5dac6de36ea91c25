//! Ordered suffix-rewrite tables used by [`Stemmer`](super::Stemmer).
//!
//! Each table is data: a list of [`SuffixRule`]s evaluated against the end of
//! the working word. A [`RuleSet`] decides what happens when a suffix matches
//! but its condition fails (stop, or keep looking).

use super::vc::{contains_vowel, ends_cvc, ends_with_double_consonant, measure};

/// Gate evaluated on the word with the rule's suffix removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// `measure(base) > n`.
    MeasureAbove(usize),
    ContainsVowel,
}

impl Condition {
    pub fn holds(self, base: &str) -> bool {
        match self {
            Condition::Always => true,
            Condition::MeasureAbove(n) => measure(base) > n,
            Condition::ContainsVowel => contains_vowel(base),
        }
    }
}

/// Replace `suffix` by `replacement` when `condition` holds on the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    pub condition: Condition,
    /// Run [`POST_STRIP_REPAIRS`] after this rule fires.
    pub repair: bool,
}

impl SuffixRule {
    pub const fn new(
        suffix: &'static str,
        replacement: &'static str,
        condition: Condition,
    ) -> Self {
        Self {
            suffix,
            replacement,
            condition,
            repair: false,
        }
    }

    pub const fn with_repair(mut self) -> Self {
        self.repair = true;
        self
    }
}

/// How a [`RuleSet`] treats a rule whose suffix matches but whose condition
/// does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The first matching suffix decides; a failed condition ends the step.
    FirstSuffix,
    /// Keep scanning until a rule both matches and passes its condition.
    FirstApplicable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<SuffixRule>,
    selection: Selection,
}

impl RuleSet {
    pub fn new(rules: &[SuffixRule], selection: Selection) -> Self {
        Self {
            rules: rules.to_vec(),
            selection,
        }
    }

    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }

    /// Apply at most one rule to `word`, returning the rule that fired.
    pub fn apply(&self, word: &mut String) -> Option<SuffixRule> {
        for rule in &self.rules {
            if !word.ends_with(rule.suffix) {
                continue;
            }
            let base_len = word.len() - rule.suffix.len();
            if rule.condition.holds(&word[..base_len]) {
                word.truncate(base_len);
                word.push_str(rule.replacement);
                if rule.repair {
                    repair(word);
                }
                return Some(*rule);
            }
            if self.selection == Selection::FirstSuffix {
                return None;
            }
        }
        None
    }
}

/// Plural step: `sses -> ss`, `ies -> i`, `ss` kept, trailing `s` dropped.
pub const PLURAL: &[SuffixRule] = &[
    SuffixRule::new("sses", "ss", Condition::Always),
    SuffixRule::new("ies", "i", Condition::Always),
    SuffixRule::new("ss", "ss", Condition::Always),
    SuffixRule::new("s", "", Condition::Always),
];

/// Tense step: `eed -> ee` (m > 0), then `ed` and `ing` on a base with a vowel.
pub const TENSE: &[SuffixRule] = &[
    SuffixRule::new("eed", "ee", Condition::MeasureAbove(0)),
    SuffixRule::new("ed", "", Condition::ContainsVowel).with_repair(),
    SuffixRule::new("ing", "", Condition::ContainsVowel).with_repair(),
];

/// Default derivational table. Deliberately partial: it covers a subset of
/// Porter's step 2 and is the stemmer's documented behavior.
pub const DERIVATIONAL: &[SuffixRule] = &[
    SuffixRule::new("ational", "ate", Condition::MeasureAbove(0)),
    SuffixRule::new("tional", "tion", Condition::MeasureAbove(0)),
    SuffixRule::new("izer", "ize", Condition::MeasureAbove(0)),
    SuffixRule::new("alism", "al", Condition::MeasureAbove(0)),
    SuffixRule::new("aliti", "al", Condition::MeasureAbove(0)),
    SuffixRule::new("fullness", "ful", Condition::MeasureAbove(0)),
    SuffixRule::new("ousness", "ous", Condition::MeasureAbove(0)),
    SuffixRule::new("iveness", "ive", Condition::MeasureAbove(0)),
    SuffixRule::new("biliti", "ble", Condition::MeasureAbove(0)),
    SuffixRule::new("enci", "ence", Condition::MeasureAbove(0)),
    SuffixRule::new("anci", "ance", Condition::MeasureAbove(0)),
    SuffixRule::new("logi", "log", Condition::MeasureAbove(0)),
];

/// Full Porter step-2 table, ordered so longer overlapping suffixes come first.
/// Opt-in through [`Stemmer::with_derivational_rules`](super::Stemmer::with_derivational_rules).
pub const PORTER_STEP2: &[SuffixRule] = &[
    SuffixRule::new("ational", "ate", Condition::MeasureAbove(0)),
    SuffixRule::new("tional", "tion", Condition::MeasureAbove(0)),
    SuffixRule::new("enci", "ence", Condition::MeasureAbove(0)),
    SuffixRule::new("anci", "ance", Condition::MeasureAbove(0)),
    SuffixRule::new("izer", "ize", Condition::MeasureAbove(0)),
    SuffixRule::new("bli", "ble", Condition::MeasureAbove(0)),
    SuffixRule::new("alli", "al", Condition::MeasureAbove(0)),
    SuffixRule::new("entli", "ent", Condition::MeasureAbove(0)),
    SuffixRule::new("eli", "e", Condition::MeasureAbove(0)),
    SuffixRule::new("ousli", "ous", Condition::MeasureAbove(0)),
    SuffixRule::new("ization", "ize", Condition::MeasureAbove(0)),
    SuffixRule::new("ation", "ate", Condition::MeasureAbove(0)),
    SuffixRule::new("ator", "ate", Condition::MeasureAbove(0)),
    SuffixRule::new("alism", "al", Condition::MeasureAbove(0)),
    SuffixRule::new("iveness", "ive", Condition::MeasureAbove(0)),
    SuffixRule::new("fulness", "ful", Condition::MeasureAbove(0)),
    SuffixRule::new("ousness", "ous", Condition::MeasureAbove(0)),
    SuffixRule::new("aliti", "al", Condition::MeasureAbove(0)),
    SuffixRule::new("iviti", "ive", Condition::MeasureAbove(0)),
    SuffixRule::new("biliti", "ble", Condition::MeasureAbove(0)),
    SuffixRule::new("logi", "log", Condition::MeasureAbove(0)),
];

/// A predicate/transformation pair run after `ed`/`ing` removal.
#[derive(Clone, Copy)]
pub struct RepairRule {
    pub name: &'static str,
    pub applies: fn(&str) -> bool,
    pub apply: fn(&mut String),
}

fn double_consonant_not_lsz(word: &str) -> bool {
    ends_with_double_consonant(word)
        && !matches!(word.as_bytes()[word.len() - 1], b'l' | b's' | b'z')
}

fn short_cvc(word: &str) -> bool {
    ends_cvc(word) && measure(word) == 1
}

fn ends_at_bl_iz(word: &str) -> bool {
    word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz")
}

fn drop_last(word: &mut String) {
    word.pop();
}

fn append_e(word: &mut String) {
    word.push('e');
}

/// Repairs after `ed`/`ing` removal; the first one that applies wins.
pub const POST_STRIP_REPAIRS: &[RepairRule] = &[
    RepairRule {
        name: "undouble",
        applies: double_consonant_not_lsz,
        apply: drop_last,
    },
    RepairRule {
        name: "short-cvc",
        applies: short_cvc,
        apply: append_e,
    },
    RepairRule {
        name: "at-bl-iz",
        applies: ends_at_bl_iz,
        apply: append_e,
    },
];

fn repair(word: &mut String) {
    if let Some(rule) = POST_STRIP_REPAIRS.iter().find(|r| (r.applies)(word.as_str())) {
        log::trace!("repair '{}' on '{}'", rule.name, word);
        (rule.apply)(word);
    }
}
