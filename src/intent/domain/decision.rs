//! Resolution decisions returned to callers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::MatchCandidate;
use crate::template::domain::CommandTemplate;

/// Why the engine answered conversationally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationalIntent {
    /// A greeting or small talk.
    Greeting,
    /// The user asked whether the bot is alive or working.
    StatusInquiry,
    /// The user asked what the bot can do.
    HelpRequest,
    /// Nothing matched and no specific intent was detected.
    Generic,
    /// The tenant has no active templates.
    NoCommandsConfigured,
    /// The generative model chose to answer conversationally.
    ModelResponse,
    /// The user declined a proposed command.
    Declined,
}

impl ConversationalIntent {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::StatusInquiry => "status_inquiry",
            Self::HelpRequest => "help_request",
            Self::Generic => "generic",
            Self::NoCommandsConfigured => "no_commands_configured",
            Self::ModelResponse => "model_response",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for ConversationalIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The engine's verdict for one utterance.
///
/// Every resolution path terminates in one of these variants; the caller
/// owns any side effect implied by [`ResolutionDecision::Execute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ResolutionDecision {
    /// Run the template with the rendered output.
    Execute {
        /// The matched template (usage count as of resolution).
        template: CommandTemplate,
        /// Output template with every placeholder substituted.
        rendered_output: String,
        /// Resolved placeholder values, defaults included.
        params: BTreeMap<String, String>,
    },
    /// Ask the user a disambiguating question.
    Clarify {
        /// Question to show the user.
        question: String,
        /// Candidate awaiting a yes/no confirmation, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        proposal: Option<Box<MatchCandidate>>,
        /// Template names offered as options, if any.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        options: Vec<String>,
    },
    /// Reply without invoking any template.
    Converse {
        /// Reply text.
        reply: String,
        /// Detected conversational intent.
        intent: ConversationalIntent,
    },
}

impl ResolutionDecision {
    /// Returns `true` for [`ResolutionDecision::Execute`].
    #[must_use]
    pub const fn is_execute(&self) -> bool {
        matches!(self, Self::Execute { .. })
    }

    /// Returns `true` for [`ResolutionDecision::Clarify`].
    #[must_use]
    pub const fn is_clarify(&self) -> bool {
        matches!(self, Self::Clarify { .. })
    }

    /// Returns `true` for [`ResolutionDecision::Converse`].
    #[must_use]
    pub const fn is_converse(&self) -> bool {
        matches!(self, Self::Converse { .. })
    }

    /// Returns the structured action for an `Execute` decision.
    ///
    /// The action is the command name; a dispatcher owned by the caller maps
    /// it to a side effect.
    #[must_use]
    pub fn action(&self) -> Option<(&str, &BTreeMap<String, String>)> {
        match self {
            Self::Execute {
                template, params, ..
            } => Some((template.name(), params)),
            Self::Clarify { .. } | Self::Converse { .. } => None,
        }
    }

    /// Returns the text to show the user for non-executing decisions, or the
    /// rendered command for `Execute`.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Execute {
                rendered_output, ..
            } => rendered_output,
            Self::Clarify { question, .. } => question,
            Self::Converse { reply, .. } => reply,
        }
    }
}
