//! In-memory integration tests for tenant-scoped resolution.

use super::helpers::{RecordingModel, repository, seed_moderation, service, tenant, utterance};
use parlance::intent::domain::{ConversationalIntent, ResolutionDecision};
use parlance::template::{
    adapters::memory::InMemoryTemplateRepository, domain::TenantId, ports::TemplateRepository,
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn executed_command_bumps_stored_usage(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    let templates = seed_moderation(&repository, &tenant).await;
    let ban = templates
        .iter()
        .find(|item| item.name() == "ban")
        .expect("ban seeded");

    let decision = service(&repository)
        .resolve_for_tenant(&tenant, &utterance("ban <@123> for spamming"))
        .await
        .expect("resolution succeeds");

    assert_eq!(decision.text(), "/ban 123 spamming");
    let stored = repository
        .find_by_id(ban.id())
        .await
        .expect("lookup")
        .expect("ban exists");
    assert_eq!(stored.usage_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deactivated_template_is_never_chosen(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    let templates = seed_moderation(&repository, &tenant).await;
    let mut purge = templates
        .into_iter()
        .find(|item| item.name() == "purge")
        .expect("purge seeded");
    purge.deactivate();
    repository.update(&purge).await.expect("update");

    let decision = service(&repository)
        .resolve_for_tenant(&tenant, &utterance("purge 10 messages"))
        .await
        .expect("resolution succeeds");

    assert!(
        decision.action().is_none_or(|(name, _)| name != "purge"),
        "inactive purge was chosen: {decision:?}"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn amounts_are_clamped_end_to_end(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    seed_moderation(&repository, &tenant).await;

    let decision = service(&repository)
        .resolve_for_tenant(&tenant, &utterance("purge 500 messages"))
        .await
        .expect("resolution succeeds");

    assert_eq!(decision.text(), "/purge 100");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_tenant_is_told_nothing_is_configured(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    seed_moderation(&repository, &tenant).await;
    let stranger = TenantId::new("guild-empty").expect("valid tenant");

    let decision = service(&repository)
        .resolve_for_tenant(&stranger, &utterance("ban <@123> for spamming"))
        .await
        .expect("resolution succeeds");

    assert!(matches!(
        decision,
        ResolutionDecision::Converse {
            intent: ConversationalIntent::NoCommandsConfigured,
            ..
        }
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn help_request_lists_registered_commands(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    seed_moderation(&repository, &tenant).await;

    let decision = service(&repository)
        .resolve_for_tenant(&tenant, &utterance("what can you do?"))
        .await
        .expect("resolution succeeds");

    let ResolutionDecision::Converse { reply, intent } = decision else {
        panic!("expected a conversational reply, got {decision:?}");
    };
    assert_eq!(intent, ConversationalIntent::HelpRequest);
    for name in ["/ban", "/warn", "/purge", "/say"] {
        assert!(reply.contains(name), "{name} missing from {reply:?}");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confident_model_choice_executes_with_model_params(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    let templates = seed_moderation(&repository, &tenant).await;
    let ban = templates
        .iter()
        .find(|item| item.name() == "ban")
        .expect("ban seeded");
    let reply = format!(
        r#"Sure thing: {{"commandId": "{}", "confidence": 92, "params": {{"user": "<@555>", "reason": "raiding"}}}}"#,
        ban.id()
    );
    let model = Arc::new(RecordingModel::new(reply));

    let decision = service(&repository)
        .with_model(model.clone())
        .resolve_for_tenant(&tenant, &utterance("get rid of that raider"))
        .await
        .expect("resolution succeeds");

    assert_eq!(decision.text(), "/ban 555 raiding");
    assert_eq!(model.prompts().len(), 1);
}
