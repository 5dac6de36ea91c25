//! Built-in word sets for social-media text about health and vaccines.

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "best", "love", "safe",
    "effective", "thanks", "thankful", "grateful", "hope", "success", "happy",
    "protection", "relief", "excited", "glad", "perfect", "awesome", "better",
    "fantastic", "incredible", "brilliant", "outstanding", "superb", "magnificent",
    "legendary", "impressive", "top", "class", "phenomenal", "trust", "trusted",
    "confident", "confidence", "secure", "reassured", "reliable", "trustworthy", "calm",
    "relax", "relaxed", "comfort", "comfortable", "easy", "easier", "easiest", "simple",
    "smooth", "smoothly", "quick", "fast", "painless", "gentle", "organized",
    "efficient", "beneficial", "benefit", "helpful", "valuable", "advantage",
    "solution", "cure", "remedy", "improvement", "improved", "protect", "win",
    "winning", "victory", "triumph", "achievement", "accomplished", "support",
    "endorse", "recommend", "recommended", "encourage", "yay", "hurray", "woohoo",
    "bravo", "kudos", "cheers", "cool", "nice", "lovely", "pleasant", "enjoy",
    "enjoyed",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "hate", "dangerous", "risk",
    "fear", "scared", "fail", "failed", "death", "sick", "pain", "hurt", "harm",
    "useless", "fake", "scam", "problem", "severe", "worry", "sad", "sore", "soreness",
    "ache", "aching", "fever", "chills", "nausea", "vomit", "fatigue", "tired",
    "exhausted", "dizzy", "headache", "migraine", "swollen", "rash", "itchy", "bruise",
    "weak", "weakness", "ill", "illness", "suffer", "suffering", "anxious", "anxiety",
    "panic", "terrified", "nervous", "worrying", "concerned", "afraid", "dread",
    "dreading", "uneasy", "stress", "stressed", "horror", "lie", "lying", "liar",
    "suspicious", "propaganda", "conspiracy", "untrusted", "skeptical", "doubt",
    "doubtful", "misleading", "false", "hoax", "cheat", "unsafe", "risky", "threat",
    "poison", "toxic", "disappointed", "disappointing", "waste", "pointless", "stupid",
    "incompetent", "mess", "chaos", "shame", "disgrace", "pathetic", "poor", "slow",
    "delayed", "late", "refused", "rejected", "denied", "angry", "furious", "annoyed",
    "annoying", "mad", "upset", "frustrated", "complain", "complaint", "hell", "damn",
    "wtf", "ridiculous", "crazy",
];

/// Tokens that flip the polarity of the word right after them.
pub const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere",
    "n't", "cannot", "cant", "can't", "dont", "don't", "wont", "won't", "isnt", "isn't",
    "arent", "aren't", "aint", "ain't", "wasnt", "wasn't", "werent", "weren't", "hasnt",
    "hasn't", "havent", "haven't", "hadnt", "hadn't", "doesnt", "doesn't", "didnt",
    "didn't", "couldnt", "couldn't", "shouldnt", "shouldn't", "wouldnt", "wouldn't",
    "mustnt", "mustn't", "without", "lack", "missing", "barely", "hardly", "scarcely",
    "rarely",
];
