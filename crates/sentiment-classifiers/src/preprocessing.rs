//! Text cleaning helpers that turn raw social-media posts into tokens.
//!
//! The cleaner, the location table and the keyword counter carry their
//! dictionaries as data so tests and callers can swap them out.
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid url regex"));
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("valid html regex"));
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").expect("valid mention regex"));
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").expect("valid hashtag regex"));
static NON_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z\s]").expect("valid letter regex"));
static PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex"));
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Emoji to the word substituted for it.
pub const DEFAULT_EMOJI_MAP: &[(&str, &str)] = &[
    ("😀", "happy"),
    ("😃", "happy"),
    ("😄", "happy"),
    ("😁", "happy"),
    ("😊", "happy"),
    ("😍", "love"),
    ("😘", "love"),
    ("🥰", "love"),
    ("😂", "funny"),
    ("🤣", "funny"),
    ("😅", "funny"),
    ("👍", "good"),
    ("👏", "clap"),
    ("🙏", "thank"),
    ("💪", "strong"),
    ("❤️", "love"),
    ("🧡", "love"),
    ("💛", "love"),
    ("💚", "love"),
    ("💙", "love"),
    ("🎉", "celebrate"),
    ("✨", "shiny"),
    ("💯", "perfect"),
    ("🙌", "support"),
    ("😢", "sad"),
    ("😭", "sad"),
    ("😞", "sad"),
    ("😔", "sad"),
    ("😡", "angry"),
    ("😠", "angry"),
    ("🤬", "angry"),
    ("😤", "angry"),
    ("👎", "bad"),
    ("💔", "heartbreak"),
    ("🤮", "disgust"),
    ("🤢", "disgust"),
    ("😱", "scared"),
    ("😨", "scared"),
    ("🤯", "shock"),
    ("😳", "shock"),
    ("🙄", "annoyed"),
    ("🤦", "facepalm"),
    ("😑", "bored"),
    ("😒", "annoyed"),
    ("💉", "vaccine"),
    ("🦠", "virus"),
    ("😷", "mask"),
    ("🤒", "sick"),
    ("🤕", "pain"),
    ("🚑", "ambulance"),
    ("🏥", "hospital"),
    ("💊", "medicine"),
    ("🩺", "doctor"),
    ("☠️", "death"),
    ("📢", "announce"),
    ("🚨", "alert"),
    ("🤔", "thinking"),

];

/// Substring key to canonical region, checked in order.
pub const DEFAULT_LOCATION_MAP: &[(&str, &str)] = &[
    ("usa", "usa"),
    ("united states", "usa"),
    ("california", "usa"),
    ("new york", "usa"),
    ("texas", "usa"),
    ("ny", "usa"),
    ("tx", "usa"),
    ("fl", "usa"),
    ("pa", "usa"),
    ("nj", "usa"),
    ("ca", "usa"),
    ("dc", "usa"),
    ("ga", "usa"),
    ("il", "usa"),
    ("wa", "usa"),
    ("nc", "usa"),
    ("oh", "usa"),
    ("mo", "usa"),
    ("az", "usa"),
    ("los angeles", "usa"),
    ("uk", "united kingdom"),
    ("england", "united kingdom"),
    ("london", "united kingdom"),
    ("scotland", "united kingdom"),
    ("wales", "united kingdom"),
    ("ireland", "ireland"),
    ("germany", "germany"),
    ("france", "france"),
    ("europe", "europe"),
    ("glasgow environs", "united kingdom"),
    ("india", "india"),
    ("mumbai", "india"),
    ("delhi", "india"),
    ("kolkata", "india"),
    ("chennai", "india"),
    ("uae", "united arab emirates"),
    ("dubai", "united arab emirates"),
    ("abu dhabi", "united arab emirates"),
    ("canada", "canada"),
    ("toronto", "canada"),
    ("ontario", "canada"),
    ("montreal", "canada"),
    ("malaysia", "malaysia"),
    ("petaling jaya", "malaysia"),
    ("singapore", "singapore"),
    ("hong kong", "hong kong"),
    ("global", "global"),
    ("earth", "global"),
    ("worldwide", "global"),
    ("n/a", "unknown_location"),
    ("unknown", "unknown_location"),
];

/// Link fragments and topic words that dominate the corpus, on top of
/// [`ENGLISH_STOP_WORDS`].
pub const EXTRA_STOP_WORDS: &[&str] = &[
    "https", "http", "com", "www", "twitter", "pic", "status", "pfizer", "vaccine", "covid",
    "covid19", "biontech",
];

/// The English stop-word list used by scikit-learn's text vectorizers.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can", "cannot",
    "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do", "done",
    "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else", "elsewhere",
    "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything", "everywhere",
    "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five", "for", "former",
    "formerly", "forty", "found", "four", "from", "front", "full", "further", "get", "give", "go",
    "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i", "ie",
    "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself", "keep", "last",
    "latter", "latterly", "least", "less", "ltd", "made", "many", "may", "me", "meanwhile",
    "might", "mill", "mine", "more", "moreover", "most", "mostly", "move", "much", "must", "my",
    "myself", "name", "namely", "neither", "never", "nevertheless", "next", "nine", "no", "nobody",
    "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once",
    "one", "only", "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
    "over", "own", "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see",
    "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that",
    "the", "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// The stop-word set used by [`top_keywords`] by default.
pub fn default_stop_words() -> HashSet<String> {
    ENGLISH_STOP_WORDS
        .iter()
        .chain(EXTRA_STOP_WORDS.iter())
        .map(|w| w.to_string())
        .collect()
}

/// Normalizes raw posts into lowercase letter-only text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCleaner {
    /// Emoji and the word written in their place, applied in order.
    pub emoji_map: Vec<(String, String)>,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self {
            emoji_map: DEFAULT_EMOJI_MAP
                .iter()
                .map(|(e, w)| (e.to_string(), w.to_string()))
                .collect(),
        }
    }
}

impl TextCleaner {
    pub fn new(emoji_map: Vec<(String, String)>) -> Self {
        Self { emoji_map }
    }

    /// Substitute emoji, lowercase, expand `n't`, drop links, tags and
    /// mentions, keep hashtag words, and reduce everything else to letters
    /// separated by single spaces.
    pub fn clean(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (emoji, word) in &self.emoji_map {
            if text.contains(emoji.as_str()) {
                text = text.replace(emoji.as_str(), &format!(" {} ", word));
            }
        }

        let text = text.to_lowercase().replace("n't", " not");
        let text = URL_RE.replace_all(&text, "");
        let text = HTML_TAG_RE.replace_all(&text, "");
        let text = MENTION_RE.replace_all(&text, "");
        let text = text.replace('#', "");
        let text = NON_LETTER_RE.replace_all(&text, " ");

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Cleaned text split into tokens.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.clean(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

pub fn count_hashtags(text: &str) -> usize {
    HASHTAG_RE.find_iter(text).count()
}

pub fn count_mentions(text: &str) -> usize {
    MENTION_RE.find_iter(text).count()
}

/// Lowercase a hashtag field, strip punctuation and collapse whitespace.
pub fn normalize_hashtag(hashtags: &str) -> String {
    let lower = hashtags.to_lowercase();
    PUNCT_RE
        .replace_all(&lower, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Most frequent words across `texts`, skipping stop words and words of three
/// characters or fewer. Equal counts keep first-appearance order.
pub fn top_keywords<S: AsRef<str>>(
    texts: &[S],
    stop_words: &HashSet<String>,
    top_k: usize,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for text in texts {
        let lower = text.as_ref().to_lowercase();
        for word in WORD_RE.find_iter(&lower).map(|m| m.as_str()) {
            if word.chars().count() <= 3 || stop_words.contains(word) {
                continue;
            }
            match index.get(word) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(word.to_string(), counts.len());
                    counts.push((word.to_string(), 1));
                }
            }
        }
    }

    // stable: ties stay in first-appearance order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_k);
    counts
}

/// Canonicalizes free-form user locations by substring lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMapper {
    /// `(key, region)` pairs checked in order; keys of one character are ignored.
    pub table: Vec<(String, String)>,
}

impl Default for LocationMapper {
    fn default() -> Self {
        Self {
            table: DEFAULT_LOCATION_MAP
                .iter()
                .map(|(k, r)| (k.to_string(), r.to_string()))
                .collect(),
        }
    }
}

impl LocationMapper {
    pub fn new(table: Vec<(String, String)>) -> Self {
        Self { table }
    }

    /// Region of the first key contained in the trimmed location, or the
    /// trimmed location itself when nothing matches.
    pub fn map(&self, location: &str) -> String {
        let location = location.trim();
        self.table
            .iter()
            .find(|(key, _)| key.chars().count() > 1 && location.contains(key.as_str()))
            .map(|(_, region)| region.clone())
            .unwrap_or_else(|| location.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_handles_emoji_negation_links_and_handles() {
        let cleaner = TextCleaner::default();
        let cleaned = cleaner.clean("I don't like this 😡 @bob #Pfizer https://t.co/x");
        assert_eq!(cleaned, "i do not like this angry pfizer");
    }

    #[test]
    fn clean_strips_html_and_digits() {
        let cleaner = TextCleaner::default();
        assert_eq!(cleaner.clean("<b>Dose 2</b> done!!"), "dose done");
        assert_eq!(cleaner.clean("   "), "");
    }

    #[test]
    fn custom_emoji_map_is_used() {
        let cleaner = TextCleaner::new(vec![(":)".to_string(), "good".to_string())]);
        assert_eq!(cleaner.tokens("ok :)"), vec!["ok", "good"]);
    }
}
