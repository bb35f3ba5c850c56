//! Generative-model-backed matcher.

mod prompt;
mod response;

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

pub use prompt::build_prompt;
pub use response::{ModelReply, first_json_object, parse_model_reply};

use super::{MatchOutcome, MatchRequest, Matcher, MatcherError};
use crate::intent::config::ResolutionConfig;
use crate::intent::domain::{MatchCandidate, MatchOrigin, ParameterSource};
use crate::intent::extraction::{extract_for_template, inline_mentions};
use crate::intent::ports::GenerativeModel;
use crate::template::domain::{SlotKind, TemplateId};

/// Asks a generative model to pick a template and fill its parameters.
///
/// Heuristic extraction runs for the chosen template and the model's values
/// are layered on top, so a model that omits a field still yields the
/// heuristic value.
#[derive(Clone)]
pub struct LlmMatcher {
    model: Arc<dyn GenerativeModel>,
    timeout: Duration,
    recent_turns: usize,
}

impl std::fmt::Debug for LlmMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmMatcher")
            .field("model", &self.model.model_name())
            .field("timeout", &self.timeout)
            .field("recent_turns", &self.recent_turns)
            .finish()
    }
}

impl LlmMatcher {
    /// Creates a matcher with an explicit timeout and prompt history depth.
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>, timeout: Duration, recent_turns: usize) -> Self {
        Self {
            model,
            timeout,
            recent_turns,
        }
    }

    /// Creates a matcher using the configured timeout and history depth.
    #[must_use]
    pub fn from_config(model: Arc<dyn GenerativeModel>, config: &ResolutionConfig) -> Self {
        Self::new(model, config.model_timeout(), config.prompt_recent_turns)
    }

    async fn ask(&self, prompt: &str) -> Result<String, MatcherError> {
        tokio::time::timeout(self.timeout, self.model.generate(prompt))
            .await
            .map_err(|_| MatcherError::TimedOut(self.timeout))?
            .map_err(MatcherError::from)
    }

    fn bind(
        request: &MatchRequest<'_>,
        command_id: &str,
        confidence: f64,
        model_params: BTreeMap<String, String>,
    ) -> Result<MatchCandidate, MatcherError> {
        let template = TemplateId::parse(command_id)
            .and_then(|id| request.templates.iter().find(|template| template.id() == id))
            .ok_or_else(|| MatcherError::UnknownTemplate(command_id.to_owned()))?;

        let utterance = request.utterance;
        let mut params = extract_for_template(
            utterance.content(),
            utterance.mentions(),
            template,
            request.id_shape,
        );
        for (name, value) in model_params {
            let key = name.to_ascii_lowercase();
            if !template.declares(&key) {
                continue;
            }
            let cleaned = if SlotKind::for_placeholder(&key) == Some(SlotKind::User) {
                inline_mentions(&value).into_iter().next().unwrap_or(value)
            } else {
                value
            };
            params.insert(key, cleaned, ParameterSource::Model);
        }

        Ok(MatchCandidate::new(
            template.clone(),
            confidence,
            params,
            MatchOrigin::Model,
        ))
    }
}

#[async_trait]
impl Matcher for LlmMatcher {
    fn name(&self) -> &'static str {
        "model"
    }

    async fn find_match(&self, request: &MatchRequest<'_>) -> Result<MatchOutcome, MatcherError> {
        if request.templates.is_empty() {
            return Ok(MatchOutcome::NoMatch);
        }
        let prompt = build_prompt(request, self.recent_turns)?;
        let raw = self.ask(&prompt).await?;
        match parse_model_reply(&raw)? {
            ModelReply::Conversational(reply) if reply.is_empty() => Ok(MatchOutcome::NoMatch),
            ModelReply::Conversational(reply) => Ok(MatchOutcome::Conversational(reply)),
            ModelReply::Command {
                command_id,
                confidence,
                params,
            } => Self::bind(request, &command_id, confidence, params)
                .map(MatchOutcome::Command),
        }
    }
}
