//! Time span extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::pattern::compile;

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(\d{1,5})\s?(seconds?|secs?|s|minutes?|mins?|m|hours?|hrs?|h|days?|d)\b",
    )
});

/// Extracts a time span normalized to `<n><unit>` with unit `s`, `m`, `h`
/// or `d`.
///
/// # Examples
///
/// ```
/// use parlance::intent::extraction::extract_duration;
///
/// assert_eq!(extract_duration("mute them for 10 minutes"), Some("10m".to_owned()));
/// assert_eq!(extract_duration("timeout for 2h"), Some("2h".to_owned()));
/// assert_eq!(extract_duration("delete 5 messages"), None);
/// ```
#[must_use]
pub fn extract_duration(text: &str) -> Option<String> {
    let caps = DURATION.captures(text)?;
    let amount = caps.get(1)?.as_str();
    let unit = caps.get(2)?.as_str().to_ascii_lowercase();
    let short = unit.chars().next()?;
    Some(format!("{amount}{short}"))
}
