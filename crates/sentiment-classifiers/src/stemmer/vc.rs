//! Vowel/consonant classification and the measure of a candidate stem.
//!
//! All helpers take the *current* candidate word; nothing is cached between
//! rule applications because every rewrite can change the pattern.

/// a, e, i, o, u.
#[inline]
pub fn is_basic_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Whether position `i` of `word` counts as a vowel.
///
/// 'y' is a vowel when it is not the first letter and the letter before it
/// is not a basic vowel (so the 'y' in "by" is a vowel, in "toy" it is not).
pub fn is_vowel(word: &[u8], i: usize) -> bool {
    match word[i] {
        b if is_basic_vowel(b) => true,
        b'y' => i > 0 && !is_basic_vowel(word[i - 1]),
        _ => false,
    }
}

/// One `V` or `C` per position of `word`.
pub fn vc_pattern(word: &str) -> String {
    let b = word.as_bytes();
    (0..b.len())
        .map(|i| if is_vowel(b, i) { 'V' } else { 'C' })
        .collect()
}

/// The measure `m` of `word` written as `[C](VC)^m[V]`: the number of places
/// where a vowel run is followed by a consonant run.
pub fn measure(word: &str) -> usize {
    vc_pattern(word)
        .as_bytes()
        .windows(2)
        .filter(|pair| *pair == b"VC")
        .count()
}

pub fn contains_vowel(word: &str) -> bool {
    let b = word.as_bytes();
    (0..b.len()).any(|i| is_vowel(b, i))
}

/// Last two letters are the same consonant.
pub fn ends_with_double_consonant(word: &str) -> bool {
    let b = word.as_bytes();
    let len = b.len();
    len >= 2 && b[len - 1] == b[len - 2] && !is_vowel(b, len - 1)
}

/// Word ends consonant-vowel-consonant and the final consonant is not w, x or y.
pub fn ends_cvc(word: &str) -> bool {
    let b = word.as_bytes();
    let len = b.len();
    if len < 3 {
        return false;
    }
    !is_vowel(b, len - 3)
        && is_vowel(b, len - 2)
        && !is_vowel(b, len - 1)
        && !matches!(b[len - 1], b'w' | b'x' | b'y')
}
