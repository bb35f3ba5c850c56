//! Channel reference extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::pattern::compile;

static CHANNEL_MENTION: LazyLock<Regex> = LazyLock::new(|| compile(r"<#(\d+)>"));
static CHANNEL_NAME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?:^|\s)#([A-Za-z0-9][A-Za-z0-9_-]*)"));

/// Extracts a channel identifier from `<#id>` markup, or a `#name`
/// reference.
#[must_use]
pub fn extract_channel(text: &str) -> Option<String> {
    CHANNEL_MENTION
        .captures(text)
        .or_else(|| CHANNEL_NAME.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|channel| channel.as_str().to_owned())
}
