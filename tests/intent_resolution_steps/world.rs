//! Shared world state for intent resolution BDD scenarios.

use async_trait::async_trait;
use mockable::DefaultClock;
use parlance::intent::{
    config::ResolutionConfig,
    domain::ResolutionDecision,
    ports::{GenerativeModel, GenerativeModelResult},
    services::IntentResolutionService,
};
use parlance::template::{adapters::memory::InMemoryTemplateRepository, domain::TenantId};
use rstest::fixture;
use std::sync::Arc;
use std::time::Duration;

/// Service type used by the BDD world.
pub type TestResolutionService = IntentResolutionService<InMemoryTemplateRepository, DefaultClock>;

/// Scenario world for intent resolution behaviour tests.
pub struct IntentWorld {
    pub repository: Arc<InMemoryTemplateRepository>,
    pub tenant: TenantId,
    pub config: ResolutionConfig,
    pub model: Option<Arc<dyn GenerativeModel>>,
    pub last_decision: Option<ResolutionDecision>,
}

impl IntentWorld {
    /// Creates a world for an empty guild.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryTemplateRepository::new()),
            tenant: TenantId::new("guild-bdd").expect("valid tenant"),
            config: ResolutionConfig::default(),
            model: None,
            last_decision: None,
        }
    }

    /// Builds a resolution service over the world's repository.
    #[must_use]
    pub fn service(&self) -> TestResolutionService {
        let service = IntentResolutionService::new(
            Arc::clone(&self.repository),
            Arc::new(DefaultClock),
            self.config.clone(),
        );
        if let Some(model) = &self.model {
            return service.with_model(Arc::clone(model));
        }
        service
    }
}

impl Default for IntentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> IntentWorld {
    IntentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// A model that answers long after the configured timeout.
pub struct StalledModel {
    pub delay: Duration,
}

#[async_trait]
impl GenerativeModel for StalledModel {
    async fn generate(&self, _prompt: &str) -> GenerativeModelResult<String> {
        tokio::time::sleep(self.delay).await;
        Ok(r#"{"conversationalResponse": "sorry, I was thinking"}"#.to_owned())
    }

    fn model_name(&self) -> &str {
        "stalled"
    }
}
