use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"\p{L}+").expect("valid regex");
}

/// Split text into maximal runs of Unicode letters. Everything else (digits,
/// punctuation, whitespace) separates tokens. Tokens are returned as-is; case
/// folding is left to [`normalize_term`].
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    RE.find_iter(text).map(|m| m.as_str())
}

/// Canonical form of a term: NFC composed, lowercased.
pub fn normalize_term(token: &str) -> String {
    if token.is_ascii() {
        return token.to_ascii_lowercase();
    }
    token.nfc().collect::<String>().to_lowercase()
}

/// Tokenize and normalize in one go, the way documents are read into terms.
///
/// The text is lowercased before it is split, so every term is made of
/// letters only even when lowercasing expands a character (`İ` becomes `i`
/// plus a combining dot, which then separates). NFC composition on both sides
/// keeps precomposed accents inside their word.
pub fn terms(text: &str) -> Vec<String> {
    let lowered = text.nfc().collect::<String>().to_lowercase();
    let composed: String = lowered.nfc().collect();
    tokenize(&composed).map(str::to_string).collect()
}
