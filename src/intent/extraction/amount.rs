//! Numeric quantity extraction.

use regex::Regex;
use std::sync::LazyLock;

use super::user::strip_mentions;
use crate::pattern::compile;

static COUNTED_NOUN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(\d+)\s*(?:messages?|msgs?|texts?|lines?|posts?)\b"));
static APPROXIMATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:about|around|roughly|approximately|like|maybe|last)\s+(\d+)\b")
});
static BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(\d+)\b"));

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("a couple", 2),
    ("a few", 3),
    ("a dozen", 12),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("fifteen", 15),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("hundred", 100),
    ("dozen", 12),
];

/// Extracts a quantity.
///
/// A number next to a counted noun wins, then an approximated number, then
/// any standalone number outside mention markup, then a number word. The
/// caller applies any upper clamp.
///
/// # Examples
///
/// ```
/// use parlance::intent::extraction::extract_amount;
///
/// assert_eq!(extract_amount("delete like 5 messages"), Some(5));
/// assert_eq!(extract_amount("clear twenty of them"), Some(20));
/// assert_eq!(extract_amount("ban <@123456>"), None);
/// assert_eq!(extract_amount("purge 5000000 messages"), Some(5_000_000));
/// ```
#[must_use]
pub fn extract_amount(text: &str) -> Option<u32> {
    let stripped = strip_mentions(text);
    [&*COUNTED_NOUN, &*APPROXIMATE, &*BARE_NUMBER]
        .into_iter()
        .find_map(|pattern| {
            pattern
                .captures(&stripped)
                .and_then(|caps| caps.get(1))
                .and_then(|digits| saturating_digits(digits.as_str()))
        })
        .or_else(|| number_word(&stripped))
}

/// Parses a value that is either digits or a number word.
///
/// Digit runs too large for `u32` saturate rather than fail.
#[must_use]
pub fn parse_amount(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    saturating_digits(trimmed).or_else(|| number_word(trimmed))
}

fn saturating_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn number_word(text: &str) -> Option<u32> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();
    let joined = format!(" {} ", tokens.join(" "));
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| joined.contains(&format!(" {word} ")))
        .map(|(_, value)| *value)
}
