//! Shared test helpers for in-memory integration tests.

use async_trait::async_trait;
use mockable::DefaultClock;
use parlance::intent::{
    config::ResolutionConfig,
    domain::{Author, ChannelId, MessageId, UserId, Utterance},
    ports::{GenerativeModel, GenerativeModelResult},
    services::IntentResolutionService,
};
use parlance::template::{
    adapters::memory::InMemoryTemplateRepository,
    domain::{CommandTemplate, TenantId},
    ports::TemplateRepository,
};
use rstest::fixture;
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

/// Service type used by the integration tests.
pub type TestService = IntentResolutionService<InMemoryTemplateRepository, DefaultClock>;

/// Channel every test utterance is posted in.
pub const CHANNEL: &str = "general";

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repository() -> Arc<InMemoryTemplateRepository> {
    Arc::new(InMemoryTemplateRepository::new())
}

/// Provides the tenant used by the tests.
#[fixture]
pub fn tenant() -> TenantId {
    TenantId::new("guild-int").expect("valid tenant")
}

/// Builds an active template for the tenant.
pub fn template(tenant: &TenantId, name: &str, pattern: &str, output: &str) -> CommandTemplate {
    CommandTemplate::builder(tenant.clone(), name, pattern, output)
        .build(&DefaultClock)
        .expect("valid template")
}

/// Registers the moderation command set and returns it.
pub async fn seed_moderation(
    repository: &InMemoryTemplateRepository,
    tenant: &TenantId,
) -> Vec<CommandTemplate> {
    let templates = vec![
        template(tenant, "ban", "ban {user} for {reason}", "/ban {user} {reason}"),
        template(tenant, "warn", "warn {user} for {reason}", "/warn {user} {reason}"),
        template(tenant, "purge", "purge {amount}", "/purge {amount}"),
        template(tenant, "say", "say {message}", "/say {message}"),
    ];
    for item in &templates {
        repository.register(item).await.expect("register template");
    }
    templates
}

/// Builds a heuristic-only service over the repository.
pub fn service(repository: &Arc<InMemoryTemplateRepository>) -> TestService {
    IntentResolutionService::new(
        Arc::clone(repository),
        Arc::new(DefaultClock),
        ResolutionConfig::default(),
    )
}

/// Builds a member utterance in the test channel.
pub fn utterance(content: &str) -> Utterance {
    Utterance::new(
        MessageId::new(Uuid::new_v4().to_string()),
        content,
        Author::new(UserId::new("7"), "Sam"),
        ChannelId::new(CHANNEL),
    )
}

/// A model that records every prompt and replies with a fixed document.
pub struct RecordingModel {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingModel {
    /// Creates a model that always answers `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Returns the prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl GenerativeModel for RecordingModel {
    async fn generate(&self, prompt: &str) -> GenerativeModelResult<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_owned());
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "recording"
    }
}
