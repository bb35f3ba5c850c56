//! In-memory integration tests for the template repository.

use super::helpers::{repository, template, tenant};
use parlance::template::{
    adapters::memory::InMemoryTemplateRepository,
    domain::TenantId,
    ports::{TemplateRepository, TemplateRepositoryError},
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_then_find_by_id_and_name(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    let ban = template(&tenant, "ban", "ban {user}", "/ban {user}");
    repository.register(&ban).await.expect("register");

    let by_id = repository.find_by_id(ban.id()).await.expect("lookup");
    let by_name = repository
        .find_by_name(&tenant, "  BAN ")
        .await
        .expect("lookup");

    assert_eq!(by_id, Some(ban.clone()));
    assert_eq!(by_name, Some(ban));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_registration_is_rejected(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    let ban = template(&tenant, "ban", "ban {user}", "/ban {user}");
    repository.register(&ban).await.expect("register");

    let same_id = repository.register(&ban).await;
    let same_name = repository
        .register(&template(&tenant, "ban", "banish {user}", "/ban {user}"))
        .await;

    assert!(matches!(
        same_id,
        Err(TemplateRepositoryError::DuplicateTemplate(id)) if id == ban.id()
    ));
    assert!(matches!(
        same_name,
        Err(TemplateRepositoryError::DuplicateName { name, .. }) if name == "ban"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_name_is_allowed_for_another_tenant(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    let other = TenantId::new("guild-other").expect("valid tenant");
    repository
        .register(&template(&tenant, "ban", "ban {user}", "/ban {user}"))
        .await
        .expect("register");

    repository
        .register(&template(&other, "ban", "ban {user}", "/ban {user}"))
        .await
        .expect("other tenant may reuse the name");

    let listed = repository.list_active(&other).await.expect("list");
    assert_eq!(listed.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_active_skips_inactive_templates(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    let ban = template(&tenant, "ban", "ban {user}", "/ban {user}");
    let mut kick = template(&tenant, "kick", "kick {user}", "/kick {user}");
    repository.register(&ban).await.expect("register");
    repository.register(&kick).await.expect("register");

    kick.deactivate();
    repository.update(&kick).await.expect("update");

    let names: Vec<String> = repository
        .list_active(&tenant)
        .await
        .expect("list")
        .iter()
        .map(|item| item.name().to_owned())
        .collect();
    assert_eq!(names, vec!["ban".to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_template_is_not_found(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    let ghost = template(&tenant, "ghost", "ghost", "/ghost");

    let result = repository.update(&ghost).await;

    assert!(matches!(result, Err(TemplateRepositoryError::NotFound(id)) if id == ghost.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn increment_usage_counts_each_call(
    repository: Arc<InMemoryTemplateRepository>,
    tenant: TenantId,
) {
    let ban = template(&tenant, "ban", "ban {user}", "/ban {user}");
    repository.register(&ban).await.expect("register");

    for _ in 0..3 {
        repository.increment_usage(ban.id()).await.expect("increment");
    }

    let stored = repository
        .find_by_id(ban.id())
        .await
        .expect("lookup")
        .expect("template exists");
    assert_eq!(stored.usage_count(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clear_removes_everything(repository: Arc<InMemoryTemplateRepository>, tenant: TenantId) {
    repository
        .register(&template(&tenant, "ban", "ban {user}", "/ban {user}"))
        .await
        .expect("register");

    repository.clear().expect("clear");

    assert!(repository.list_active(&tenant).await.expect("list").is_empty());
}
