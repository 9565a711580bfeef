use crate::case::capitalize_word;
use phf::{phf_set, Set};

static HONORIFICS: Set<&'static str> = phf_set! {
    "mr", "mrs", "ms", "miss", "dr", "prof", "rev", "hon", "sir", "madam",
    "lord", "lady", "capt", "major", "col", "lt", "cmdr", "sgt",
};

pub fn is_honorific(word: &str) -> bool {
    let cleaned = word.trim_end_matches('.');
    HONORIFICS.contains(cleaned.to_lowercase().as_str())
}

/// Canonical stored form of a matched honorific token: period dropped,
/// capitalized ("dr." becomes "Dr").
pub fn canonicalize(word: &str) -> String {
    capitalize_word(word.trim_end_matches('.'))
}
