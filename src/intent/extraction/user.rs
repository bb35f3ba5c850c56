//! User reference extraction.

use regex::Regex;
use std::sync::LazyLock;

use super::id_shape::{IdShape, find_bare_id};
use crate::intent::domain::UserId;
use crate::pattern::compile;

static USER_MENTION: LazyLock<Regex> = LazyLock::new(|| compile(r"<@!?([A-Za-z0-9]+)>"));
static ANY_MENTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"<(?:@[!&]?|#)[A-Za-z0-9]+>"));

/// Extracts a user identifier.
///
/// Platform-resolved mentions win, then inline `<@id>` markup, then a bare
/// identifier scan when `allow_bare_id` is set.
#[must_use]
pub fn extract_user(
    text: &str,
    mentions: &[UserId],
    allow_bare_id: bool,
    shape: &dyn IdShape,
) -> Option<String> {
    if let Some(first) = mentions.first() {
        return Some(first.as_str().to_owned());
    }
    if let Some(id) = inline_mentions(text).into_iter().next() {
        return Some(id);
    }
    if allow_bare_id {
        return find_bare_id(text, shape);
    }
    None
}

/// Returns the identifiers of inline `<@id>` mentions, in order.
#[must_use]
pub fn inline_mentions(text: &str) -> Vec<String> {
    USER_MENTION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|id| id.as_str().to_owned()))
        .collect()
}

/// Replaces user, role, and channel mention markup with spaces.
#[must_use]
pub fn strip_mentions(text: &str) -> String {
    ANY_MENTION.replace_all(text, " ").into_owned()
}
