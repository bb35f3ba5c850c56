//! Role name extraction.

use regex::Regex;
use std::sync::LazyLock;

use super::user::strip_mentions;
use crate::pattern::compile;

const ROLE_DICTIONARY: &[(&str, &[&str])] = &[
    ("admin", &["admin", "admins", "administrator"]),
    ("moderator", &["moderator", "moderators", "mod", "mods"]),
    ("vip", &["vip"]),
    ("verified", &["verified"]),
    ("muted", &["muted"]),
    ("helper", &["helper", "helpers"]),
    ("staff", &["staff"]),
    ("owner", &["owner"]),
    ("member", &["member", "members"]),
];

static GRANT_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:give|add|assign|grant)\s+(?:(?:him|her|them|me|us)\s+)?(?:the\s+|a\s+|an\s+)?(.+?)\s+(?:role|admin|permissions?)\b",
    )
});

/// Extracts a role name.
///
/// Known role words map to a canonical name; otherwise the text between a
/// grant verb and `role` is used.
///
/// # Examples
///
/// ```
/// use parlance::intent::extraction::extract_role;
///
/// assert_eq!(extract_role("make them a mod"), Some("moderator".to_owned()));
/// assert_eq!(extract_role("give <@1> the event host role"), Some("event host".to_owned()));
/// ```
#[must_use]
pub fn extract_role(text: &str) -> Option<String> {
    let stripped = strip_mentions(text);
    let lowered = stripped.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();
    ROLE_DICTIONARY
        .iter()
        .find(|(_, words)| words.iter().any(|word| tokens.contains(word)))
        .map(|(canonical, _)| (*canonical).to_owned())
        .or_else(|| {
            GRANT_PHRASE
                .captures(&stripped)
                .and_then(|caps| caps.get(1))
                .map(|role| role.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|role| !role.is_empty())
        })
}
