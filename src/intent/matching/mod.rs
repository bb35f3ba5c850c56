//! Matchers that map an utterance onto a command template.
//!
//! Two implementations share the [`Matcher`] seam: [`HeuristicMatcher`]
//! scores templates deterministically and [`LlmMatcher`] asks a generative
//! model. The resolution policy composes them.

mod heuristic;
pub(crate) mod lexicon;
mod llm;
mod normalize;
mod similarity;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use heuristic::{HeuristicMatcher, Rejection};
pub use llm::{LlmMatcher, ModelReply, build_prompt, first_json_object, parse_model_reply};
pub use normalize::{contains_phrase, normalize, tokens};
pub use similarity::fuzzy_token_match;

use crate::intent::domain::{ConversationContext, MatchCandidate, Utterance};
use crate::intent::extraction::IdShape;
use crate::intent::ports::GenerativeModelError;
use crate::template::domain::CommandTemplate;

/// Everything a matcher needs to evaluate one utterance.
#[derive(Debug, Clone, Copy)]
pub struct MatchRequest<'a> {
    /// The utterance to resolve.
    pub utterance: &'a Utterance,
    /// Active templates for the tenant.
    pub templates: &'a [CommandTemplate],
    /// Linked reply and recent turns.
    pub context: &'a ConversationContext,
    /// Shape used for bare user identifier detection.
    pub id_shape: &'a dyn IdShape,
}

/// A matcher's verdict.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// A template was proposed.
    Command(MatchCandidate),
    /// The matcher chose to answer conversationally.
    Conversational(String),
    /// Nothing matched.
    NoMatch,
}

/// Errors raised by matchers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatcherError {
    /// The generative model reported a failure.
    #[error("generative model unavailable: {0}")]
    Unavailable(#[from] GenerativeModelError),

    /// The generative model did not answer in time.
    #[error("generative model timed out after {0:?}")]
    TimedOut(Duration),

    /// The model reply carried no usable JSON object.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    /// The model named a template outside the supplied set.
    #[error("model proposed unknown template '{0}'")]
    UnknownTemplate(String),

    /// The prompt could not be rendered.
    #[error("failed to render model prompt: {0}")]
    Prompt(String),
}

/// Maps an utterance onto at most one template.
#[async_trait]
pub trait Matcher: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Evaluates the request.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError`] when the matcher cannot produce a verdict;
    /// callers are expected to fall back rather than surface it.
    async fn find_match(&self, request: &MatchRequest<'_>) -> Result<MatchOutcome, MatcherError>;
}
