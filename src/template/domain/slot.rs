//! Well-known parameter slots and their documented defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parameter slot the engine knows how to extract from free text.
///
/// Placeholders are mapped to slots by name, so `{user}`, `{member}` and
/// `{target}` all resolve through the user extractor.
///
/// # Examples
///
/// ```
/// use parlance::template::domain::SlotKind;
///
/// assert_eq!(SlotKind::for_placeholder("member"), Some(SlotKind::User));
/// assert_eq!(SlotKind::Reason.default_value(), "No reason provided");
/// assert_eq!(SlotKind::for_placeholder("emoji"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    /// A platform user reference.
    User,
    /// Free-text justification for an action.
    Reason,
    /// A message count or other small quantity.
    Amount,
    /// A `<n><unit>` time span.
    Duration,
    /// Free-text message body.
    Message,
    /// A role name.
    Role,
    /// A channel reference.
    Channel,
}

impl SlotKind {
    /// Maps a placeholder name onto a known slot.
    #[must_use]
    pub fn for_placeholder(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "user" | "member" | "target" | "target_user" => Some(Self::User),
            "reason" => Some(Self::Reason),
            "amount" | "count" | "number" | "limit" => Some(Self::Amount),
            "duration" | "time" | "length" => Some(Self::Duration),
            "message" | "text" | "content" | "announcement" => Some(Self::Message),
            "role" => Some(Self::Role),
            "channel" => Some(Self::Channel),
            _ => None,
        }
    }

    /// Returns the documented default used when extraction finds nothing.
    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::User => "target user",
            Self::Reason => "No reason provided",
            Self::Amount => "1",
            Self::Duration => "5m",
            Self::Message => "No message provided",
            Self::Role => "member",
            Self::Channel => "current channel",
        }
    }

    /// Returns the canonical slot name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Reason => "reason",
            Self::Amount => "amount",
            Self::Duration => "duration",
            Self::Message => "message",
            Self::Role => "role",
            Self::Channel => "channel",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
