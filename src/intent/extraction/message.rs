//! Quoted or announced message body extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::pattern::compile;

static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| compile(r#""([^"]+)"|\u{201C}([^\u{201D}]+)\u{201D}"#));
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?:^|\s)'([^']+)'(?:$|[\s.,!?])"));
static AFTER_VERB: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:say|says|announce|announcing|tell(?:\s+(?:everyone|everybody|them|people|all|the\s+server|the\s+channel))?)\s+(?:that\s+)?(.+)$",
    )
});
static LABELLED: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:message|note|msg)\s*:\s*(.+)$"));

/// Extracts a message body.
///
/// Quoted text wins, then the remainder after `say`, `tell` or `announce`,
/// then a `message:` or `note:` label.
///
/// # Examples
///
/// ```
/// use parlance::intent::extraction::extract_message;
///
/// assert_eq!(
///     extract_message(r#"announce "server restarts at noon""#),
///     Some("server restarts at noon".to_owned()),
/// );
/// assert_eq!(
///     extract_message("tell everyone the event starts soon"),
///     Some("the event starts soon".to_owned()),
/// );
/// ```
#[must_use]
pub fn extract_message(text: &str) -> Option<String> {
    let quoted = DOUBLE_QUOTED
        .captures(text)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .or_else(|| SINGLE_QUOTED.captures(text).and_then(|caps| caps.get(1)));
    quoted
        .or_else(|| AFTER_VERB.captures(text).and_then(|caps| caps.get(1)))
        .or_else(|| LABELLED.captures(text).and_then(|caps| caps.get(1)))
        .map(|body| body.as_str().trim().to_owned())
        .filter(|body| !body.is_empty())
}
