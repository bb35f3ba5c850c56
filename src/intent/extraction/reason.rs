//! Free-text reason extraction.

use regex::Regex;
use std::sync::LazyLock;

use super::user::strip_mentions;
use crate::pattern::compile;

static REASON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bfor\s+(.+)$",
        r"(?i)\bbecause(?:\s+of)?\s+(.+)$",
        r"(?i)\bdue\s+to\s+(.+)$",
        r"(?i)\b(?:they|he|she)(?:'re|'s|\s+(?:is|are|was|were|keeps?|kept))\s+(.+)$",
        r"(?i)\bkeeps?\s+(.+)$",
        r"(?i)\breason\s*[:=]\s*(.+)$",
        r"(?i)\bsince\s+(.+)$",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

static LEADING_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^\d+\s*(?:seconds?|secs?|s|minutes?|mins?|m|hours?|hrs?|h|days?|d)\b\s*(?:for\s+|because\s+(?:of\s+)?)?",
    )
});

const TOXIC_KEYWORDS: &[&str] = &[
    "spamming",
    "spam",
    "harassment",
    "harassing",
    "trolling",
    "toxicity",
    "toxic",
    "raiding",
    "scamming",
    "scam",
    "advertising",
    "flooding",
    "threats",
    "doxxing",
    "impersonation",
    "slurs",
    "nsfw",
];

const MIN_REASON_LEN: usize = 3;

/// Extracts a reason phrase.
///
/// Cue phrases are tried in order and the first cleaned capture of at least
/// three characters wins. Otherwise a known misconduct keyword in the text is
/// used.
#[must_use]
pub fn extract_reason(text: &str) -> Option<String> {
    let stripped = strip_mentions(text);
    REASON_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.captures(&stripped))
        .filter_map(|caps| caps.get(1).map(|reason| clean(reason.as_str())))
        .find(|reason| reason.chars().count() >= MIN_REASON_LEN)
        .or_else(|| keyword_reason(&stripped))
}

fn clean(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let without_duration = LEADING_DURATION.replace(&collapsed, "");
    without_duration
        .trim_matches(|ch: char| ch.is_ascii_punctuation() || ch.is_whitespace())
        .to_owned()
}

fn keyword_reason(text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();
    TOXIC_KEYWORDS
        .iter()
        .find(|keyword| tokens.contains(keyword))
        .map(|keyword| (*keyword).to_owned())
}
