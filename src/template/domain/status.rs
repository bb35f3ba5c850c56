//! Template lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a command template.
///
/// Templates are deactivated rather than deleted so usage history survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateStatus {
    /// The template takes part in matching.
    Active,
    /// The template is retained but excluded from matching.
    Inactive,
}

impl TemplateStatus {
    /// Returns `true` when templates with this status are offered to matchers.
    #[must_use]
    pub const fn is_matchable(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns the serialized name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for TemplateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
