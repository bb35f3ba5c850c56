//! The intent resolution policy.

use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use super::confirmation::{FollowUp, classify_follow_up};
use super::replies::{
    confirmation_question, conversational_reply, detect_conversational_intent, options_question,
};
use crate::intent::config::ResolutionConfig;
use crate::intent::context::ConversationContextStore;
use crate::intent::domain::{
    ChannelId, ConversationContext, ConversationTurn, ConversationalIntent, ExtractedParameters,
    MatchCandidate, MessageId, ResolutionDecision, UserId, Utterance,
};
use crate::intent::extraction::{DigitIdShape, IdShape, parse_amount};
use crate::intent::matching::{
    HeuristicMatcher, LlmMatcher, MatchOutcome, MatchRequest, Matcher, normalize,
};
use crate::intent::ports::GenerativeModel;
use crate::template::domain::{CommandTemplate, SlotKind, TemplateId, TenantId};
use crate::template::ports::{TemplateRepository, TemplateRepositoryError};

/// Errors that stop a tenant-scoped resolution.
#[derive(Debug, Clone, Error)]
pub enum ResolutionError {
    /// The template repository failed.
    #[error(transparent)]
    Repository(#[from] TemplateRepositoryError),

    /// The template repository did not answer in time.
    #[error("template repository timed out after {0:?}")]
    RepositoryTimedOut(Duration),
}

/// Result type for tenant-scoped resolution.
pub type ResolutionResult<T> = Result<T, ResolutionError>;

/// Turns utterances into execute, clarify, or converse decisions.
///
/// A configured primary matcher (usually the generative model) is consulted
/// first; the heuristic matcher is the fallback for every primary failure.
/// Every call records the utterance in conversation memory.
pub struct IntentResolutionService<R, C>
where
    R: TemplateRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    context: Arc<ConversationContextStore<C>>,
    config: ResolutionConfig,
    heuristic: HeuristicMatcher,
    primary: Option<Arc<dyn Matcher>>,
    id_shape: Arc<dyn IdShape>,
}

impl<R, C> IntentResolutionService<R, C>
where
    R: TemplateRepository,
    C: Clock + Send + Sync,
{
    /// Creates a heuristic-only service with its own conversation memory.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>, config: ResolutionConfig) -> Self {
        let context = Arc::new(ConversationContextStore::from_config(
            Arc::clone(&clock),
            &config,
        ));
        Self {
            repository,
            clock,
            context,
            heuristic: HeuristicMatcher::from_config(&config),
            config,
            primary: None,
            id_shape: Arc::new(DigitIdShape::snowflake()),
        }
    }

    /// Uses a generative model as the primary matcher.
    #[must_use]
    pub fn with_model(self, model: Arc<dyn GenerativeModel>) -> Self {
        let matcher = LlmMatcher::from_config(model, &self.config);
        self.with_primary_matcher(Arc::new(matcher))
    }

    /// Uses any matcher as the primary matcher.
    #[must_use]
    pub fn with_primary_matcher(mut self, matcher: Arc<dyn Matcher>) -> Self {
        self.primary = Some(matcher);
        self
    }

    /// Shares an existing conversation memory.
    #[must_use]
    pub fn with_context_store(mut self, context: Arc<ConversationContextStore<C>>) -> Self {
        self.context = context;
        self
    }

    /// Replaces the bare user identifier shape.
    #[must_use]
    pub fn with_id_shape(mut self, id_shape: Arc<dyn IdShape>) -> Self {
        self.id_shape = id_shape;
        self
    }

    /// Returns the conversation memory.
    #[must_use]
    pub const fn context_store(&self) -> &Arc<ConversationContextStore<C>> {
        &self.context
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Resolves an utterance against the supplied templates.
    ///
    /// Never fails: matcher and rendering problems degrade to the heuristic
    /// path or a canned conversational reply.
    pub async fn resolve(
        &self,
        utterance: &Utterance,
        templates: &[CommandTemplate],
    ) -> ResolutionDecision {
        let active = active_templates(templates);
        let decision = if active.is_empty() {
            self.converse(ConversationalIntent::NoCommandsConfigured, utterance, &active)
        } else {
            let context = self.matcher_context(utterance);
            let request = self.request(utterance, &active, &context);
            self.decide(&request).await
        };
        self.remember(utterance);
        decision
    }

    /// Loads the tenant's active templates and resolves the utterance.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] when the repository fails or times out.
    pub async fn resolve_for_tenant(
        &self,
        tenant_id: &TenantId,
        utterance: &Utterance,
    ) -> ResolutionResult<ResolutionDecision> {
        let templates = self.load_templates(tenant_id).await?;
        Ok(self.resolve(utterance, &templates).await)
    }

    /// Resolves with a confirmation band instead of a single threshold.
    ///
    /// At or above the accept threshold the best candidate executes; within
    /// the clarify band the user is asked yes or no; below it the user is
    /// offered a list of candidate names.
    pub async fn resolve_with_confirmation(
        &self,
        utterance: &Utterance,
        templates: &[CommandTemplate],
    ) -> ResolutionDecision {
        let active = active_templates(templates);
        let decision = if active.is_empty() {
            self.converse(ConversationalIntent::NoCommandsConfigured, utterance, &active)
        } else {
            let context = self.matcher_context(utterance);
            let request = self.request(utterance, &active, &context);
            self.decide_with_confirmation(&request).await
        };
        self.remember(utterance);
        decision
    }

    /// Resolves the user's answer to a yes/no clarification.
    pub async fn resolve_follow_up(
        &self,
        proposal: &MatchCandidate,
        reply: &Utterance,
    ) -> ResolutionDecision {
        let decision = match classify_follow_up(reply.content()) {
            FollowUp::Affirmative => self.execute(proposal.clone()).await,
            FollowUp::Negative => self.converse(ConversationalIntent::Declined, reply, &[]),
            FollowUp::Unclear => self.propose(proposal.clone()),
        };
        self.remember(reply);
        decision
    }

    /// Records a message the bot posted so replies to it can be linked.
    pub fn record_bot_reply(
        &self,
        message_id: MessageId,
        channel_id: ChannelId,
        bot_id: UserId,
        content: impl Into<String>,
    ) {
        self.context.record(ConversationTurn::bot_reply(
            message_id,
            channel_id,
            bot_id,
            content,
            self.clock.utc(),
        ));
    }

    async fn decide(&self, request: &MatchRequest<'_>) -> ResolutionDecision {
        match self.consult_primary(request).await {
            MatchOutcome::Command(candidate) if candidate.confidence >= self.config.accept_threshold => {
                return self.execute(candidate).await;
            }
            MatchOutcome::Command(candidate) => {
                tracing::debug!(
                    command = candidate.template.name(),
                    confidence = candidate.confidence,
                    "primary match below accept threshold, trying heuristic"
                );
            }
            MatchOutcome::Conversational(reply) => {
                return ResolutionDecision::Converse {
                    reply,
                    intent: ConversationalIntent::ModelResponse,
                };
            }
            MatchOutcome::NoMatch => {}
        }

        if let Some(candidate) = self.heuristic.best_match(request) {
            return self.execute(candidate).await;
        }
        let intent = detect_conversational_intent(&normalize(request.utterance.content()));
        self.converse(intent, request.utterance, request.templates)
    }

    async fn decide_with_confirmation(&self, request: &MatchRequest<'_>) -> ResolutionDecision {
        let mut ranked = HeuristicMatcher::rank(request);
        match self.consult_primary(request).await {
            MatchOutcome::Command(candidate) => {
                ranked.retain(|other| other.template.id() != candidate.template.id());
                ranked.insert(0, candidate);
            }
            MatchOutcome::Conversational(reply) => {
                return ResolutionDecision::Converse {
                    reply,
                    intent: ConversationalIntent::ModelResponse,
                };
            }
            MatchOutcome::NoMatch => {}
        }

        let floor = self
            .heuristic
            .threshold_for(&normalize(request.utterance.content()));
        let Some(best) = ranked.first().filter(|candidate| candidate.confidence >= floor) else {
            let intent = detect_conversational_intent(&normalize(request.utterance.content()));
            return self.converse(intent, request.utterance, request.templates);
        };

        if best.confidence >= self.config.accept_threshold {
            self.execute(best.clone()).await
        } else if best.confidence >= self.config.clarify_threshold {
            self.propose(best.clone())
        } else {
            let options: Vec<String> = ranked
                .iter()
                .take(self.config.max_clarify_options)
                .map(|candidate| candidate.template.name().to_owned())
                .collect();
            ResolutionDecision::Clarify {
                question: options_question(&options),
                proposal: None,
                options,
            }
        }
    }

    async fn consult_primary(&self, request: &MatchRequest<'_>) -> MatchOutcome {
        let Some(matcher) = &self.primary else {
            return MatchOutcome::NoMatch;
        };
        matcher.find_match(request).await.unwrap_or_else(|error| {
            tracing::warn!(
                matcher = matcher.name(),
                %error,
                "primary matcher failed, falling back to heuristic"
            );
            MatchOutcome::NoMatch
        })
    }

    async fn execute(&self, candidate: MatchCandidate) -> ResolutionDecision {
        let MatchCandidate {
            mut template,
            mut params,
            ..
        } = candidate;
        let values = self.finalize_params(&template, &mut params);
        let rendered_output = template.render(&values);

        self.record_usage(template.id()).await;
        template.record_usage();
        tracing::info!(command = template.name(), "resolved utterance to command");

        ResolutionDecision::Execute {
            template,
            rendered_output,
            params: values,
        }
    }

    fn propose(&self, mut candidate: MatchCandidate) -> ResolutionDecision {
        let values = self.finalize_params(&candidate.template, &mut candidate.params);
        let preview = candidate.template.render(&values);
        ResolutionDecision::Clarify {
            question: confirmation_question(candidate.template.name(), &preview),
            proposal: Some(Box::new(candidate)),
            options: Vec::new(),
        }
    }

    fn finalize_params(
        &self,
        template: &CommandTemplate,
        params: &mut ExtractedParameters,
    ) -> BTreeMap<String, String> {
        params.fill_defaults(template);
        for name in template.placeholders() {
            if SlotKind::for_placeholder(&name) != Some(SlotKind::Amount) {
                continue;
            }
            let Some(current) = params.get(&name) else {
                continue;
            };
            let clamped = parse_amount(current).map_or_else(
                || template.default_for(&name).unwrap_or_default(),
                |amount| amount.min(self.config.max_amount).to_string(),
            );
            params.replace_value(&name, clamped);
        }
        params.to_map()
    }

    async fn record_usage(&self, id: TemplateId) {
        let timeout = self.config.store_timeout();
        match tokio::time::timeout(timeout, self.repository.increment_usage(id)).await {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                tracing::warn!(template = %id, %error, "failed to record template usage");
            }
            Err(_) => {
                tracing::warn!(template = %id, ?timeout, "recording template usage timed out");
            }
        }
    }

    async fn load_templates(&self, tenant_id: &TenantId) -> ResolutionResult<Vec<CommandTemplate>> {
        let timeout = self.config.store_timeout();
        tokio::time::timeout(timeout, self.repository.list_active(tenant_id))
            .await
            .map_err(|_| ResolutionError::RepositoryTimedOut(timeout))?
            .map_err(ResolutionError::from)
    }

    fn converse(
        &self,
        intent: ConversationalIntent,
        utterance: &Utterance,
        templates: &[CommandTemplate],
    ) -> ResolutionDecision {
        let reply = conversational_reply(
            intent,
            &utterance.author().name,
            templates,
            self.config.help_listing_limit,
        );
        ResolutionDecision::Converse { reply, intent }
    }

    fn matcher_context(&self, utterance: &Utterance) -> ConversationContext {
        self.context
            .context_for(utterance, self.config.prompt_recent_turns)
    }

    fn request<'a>(
        &'a self,
        utterance: &'a Utterance,
        templates: &'a [CommandTemplate],
        context: &'a ConversationContext,
    ) -> MatchRequest<'a> {
        MatchRequest {
            utterance,
            templates,
            context,
            id_shape: self.id_shape.as_ref(),
        }
    }

    fn remember(&self, utterance: &Utterance) {
        self.context
            .record(ConversationTurn::from_utterance(utterance, self.clock.utc()));
    }
}

fn active_templates(templates: &[CommandTemplate]) -> Vec<CommandTemplate> {
    templates
        .iter()
        .filter(|template| template.is_active())
        .cloned()
        .collect()
}
