//! Shared builders for intent unit tests.

use async_trait::async_trait;
use mockable::DefaultClock;
use std::time::Duration;
use uuid::Uuid;

use crate::intent::domain::{Author, ChannelId, MessageId, UserId, Utterance};
use crate::intent::ports::{GenerativeModel, GenerativeModelResult};
use crate::template::domain::{CommandTemplate, TenantId};

pub(super) const CHANNEL: &str = "general";

pub(super) fn tenant() -> TenantId {
    TenantId::new("guild-1").expect("valid tenant")
}

pub(super) fn template(name: &str, pattern: &str, output: &str) -> CommandTemplate {
    CommandTemplate::builder(tenant(), name, pattern, output)
        .build(&DefaultClock)
        .expect("valid template")
}

pub(super) fn moderation_templates() -> Vec<CommandTemplate> {
    vec![
        template("ban", "ban {user} for {reason}", "/ban {user} {reason}"),
        template("warn", "warn {user} for {reason}", "/warn {user} {reason}"),
        template("purge", "purge {amount}", "/purge {amount}"),
        template("mute", "mute {user} for {duration}", "/mute {user} {duration}"),
        template("say", "say {message}", "/say {message}"),
    ]
}

pub(super) fn utterance(content: &str) -> Utterance {
    Utterance::new(
        MessageId::new(Uuid::new_v4().to_string()),
        content,
        Author::new(UserId::new("42"), "River"),
        ChannelId::new(CHANNEL),
    )
}

/// A model that answers long after any reasonable timeout.
pub(super) struct SlowModel;

#[async_trait]
impl GenerativeModel for SlowModel {
    async fn generate(&self, _prompt: &str) -> GenerativeModelResult<String> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok(r#"{"conversationalResponse": "too late"}"#.to_owned())
    }

    fn model_name(&self) -> &str {
        "slow"
    }
}
