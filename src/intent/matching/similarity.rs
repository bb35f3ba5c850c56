//! Fuzzy token comparison.

use strsim::normalized_levenshtein;

const FUZZY_SIMILARITY: f64 = 0.7;
const FUZZY_MIN_LEN: usize = 5;
const CONTAINMENT_MIN_LEN: usize = 3;

/// Returns `true` when two tokens are equal, one is a prefix of the other,
/// or they are long enough and within the similarity threshold.
///
/// Similarity is normalized Levenshtein distance over the longer token.
///
/// # Examples
///
/// ```
/// use parlance::intent::matching::fuzzy_token_match;
///
/// assert!(fuzzy_token_match("ban", "banned"));
/// assert!(fuzzy_token_match("announce", "annouce"));
/// assert!(!fuzzy_token_match("warn", "want"));
/// ```
#[must_use]
pub fn fuzzy_token_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let shorter = a.chars().count().min(b.chars().count());
    if shorter >= CONTAINMENT_MIN_LEN && (a.starts_with(b) || b.starts_with(a)) {
        return true;
    }
    shorter >= FUZZY_MIN_LEN && normalized_levenshtein(a, b) > FUZZY_SIMILARITY
}
