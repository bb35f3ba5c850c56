//! In-memory integration tests for conversation memory.

use super::helpers::{
    CHANNEL, RecordingModel, repository, seed_moderation, service, tenant, utterance,
};
use parlance::intent::domain::{
    ChannelId, ConversationalIntent, MessageId, ResolutionDecision, UserId,
};
use parlance::template::{adapters::memory::InMemoryTemplateRepository, domain::TenantId};
use rstest::rstest;
use std::sync::Arc;

const CHATTY_REPLY: &str = r#"{"conversationalResponse": "Happy to help!"}"#;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reply_to_bot_message_reaches_the_model(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    seed_moderation(&repository, &tenant).await;
    let model = Arc::new(RecordingModel::new(CHATTY_REPLY));
    let resolver = service(&repository).with_model(model.clone());
    resolver.record_bot_reply(
        MessageId::new("bot-1"),
        ChannelId::new(CHANNEL),
        UserId::new("bot"),
        "Should I clean up the spam in here?",
    );

    let follow_up = utterance("yes go ahead").replying_to(MessageId::new("bot-1"));
    let decision = resolver
        .resolve_for_tenant(&tenant, &follow_up)
        .await
        .expect("resolution succeeds");

    assert_eq!(
        decision,
        ResolutionDecision::Converse {
            reply: "Happy to help!".to_owned(),
            intent: ConversationalIntent::ModelResponse,
        }
    );
    let prompts = model.prompts();
    let prompt = prompts.first().expect("model was consulted");
    assert!(prompt.contains("Should I clean up the spam in here?"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn earlier_messages_appear_in_later_prompts(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    seed_moderation(&repository, &tenant).await;
    let model = Arc::new(RecordingModel::new(CHATTY_REPLY));
    let resolver = service(&repository).with_model(model.clone());

    for content in ["someone keeps posting links", "can you sort it out"] {
        resolver
            .resolve_for_tenant(&tenant, &utterance(content))
            .await
            .expect("resolution succeeds");
    }

    let prompts = model.prompts();
    let later = prompts.get(1).expect("second prompt");
    assert!(later.contains("someone keeps posting links"));
    assert_eq!(
        resolver
            .context_store()
            .recent(&ChannelId::new(CHANNEL), 10)
            .len(),
        2
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn channels_do_not_share_memory(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    seed_moderation(&repository, &tenant).await;
    let resolver = service(&repository);

    resolver
        .resolve_for_tenant(&tenant, &utterance("hello there"))
        .await
        .expect("resolution succeeds");

    let other = resolver
        .context_store()
        .recent(&ChannelId::new("off-topic"), 10);
    assert!(other.is_empty());
    assert_eq!(resolver.context_store().len(), 1);
}
