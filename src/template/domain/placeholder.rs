//! `{placeholder}` scanning and substitution.

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::pattern::compile;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\{([A-Za-z_][A-Za-z0-9_-]*)\}"));
static PLACEHOLDER_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z_][A-Za-z0-9_-]*$"));

/// Returns `true` when `name` can be written as a `{name}` placeholder.
pub(crate) fn is_placeholder_name(name: &str) -> bool {
    PLACEHOLDER_NAME.is_match(name)
}

/// Returns the distinct placeholder names in `text`, in first-seen order.
///
/// # Examples
///
/// ```
/// use parlance::template::domain::placeholders;
///
/// assert_eq!(
///     placeholders("ban {user} for {reason} ({user})"),
///     vec!["user".to_owned(), "reason".to_owned()],
/// );
/// ```
#[must_use]
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for captures in PLACEHOLDER.captures_iter(text) {
        if let Some(name) = captures.get(1) {
            let lowered = name.as_str().to_ascii_lowercase();
            if !names.contains(&lowered) {
                names.push(lowered);
            }
        }
    }
    names
}

/// Removes every placeholder token from `text`.
#[must_use]
pub fn strip_placeholders(text: &str) -> String {
    PLACEHOLDER.replace_all(text, " ").into_owned()
}

/// Substitutes each placeholder with the value returned by `resolve`.
///
/// Substitution is single-pass: braces inside substituted values are never
/// expanded again.
pub(crate) fn substitute(text: &str, mut resolve: impl FnMut(&str) -> String) -> String {
    PLACEHOLDER
        .replace_all(text, |captures: &Captures<'_>| {
            captures
                .get(1)
                .map(|name| resolve(&name.as_str().to_ascii_lowercase()))
                .unwrap_or_default()
        })
        .into_owned()
}

/// Collapses runs of spaces to one and trims both ends.
pub(crate) fn collapse_spaces(text: &str) -> String {
    text.split(' ')
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Substitutes placeholders from a value map, leaving unknown names empty.
#[must_use]
pub fn fill_placeholders(text: &str, values: &BTreeMap<String, String>) -> String {
    substitute(text, |name| values.get(name).cloned().unwrap_or_default())
}
