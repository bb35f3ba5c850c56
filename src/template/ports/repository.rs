//! Repository port for command template persistence.

use crate::template::domain::{CommandTemplate, TemplateId, TenantId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for template repository operations.
pub type TemplateRepositoryResult<T> = Result<T, TemplateRepositoryError>;

/// Template registry persistence contract.
///
/// The resolution engine only reads active templates and bumps usage
/// counters; registration and lifecycle changes are used by discovery and by
/// hosts that author templates manually.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Stores a new template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError::DuplicateTemplate`] when the
    /// identifier exists or [`TemplateRepositoryError::DuplicateName`] when
    /// the tenant already has a template with the same name.
    async fn register(&self, template: &CommandTemplate) -> TemplateRepositoryResult<()>;

    /// Persists changes to an existing template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError::NotFound`] when the template does
    /// not exist.
    async fn update(&self, template: &CommandTemplate) -> TemplateRepositoryResult<()>;

    /// Finds a template by identifier.
    async fn find_by_id(&self, id: TemplateId) -> TemplateRepositoryResult<Option<CommandTemplate>>;

    /// Finds a tenant's template by command name.
    async fn find_by_name(
        &self,
        tenant_id: &TenantId,
        name: &str,
    ) -> TemplateRepositoryResult<Option<CommandTemplate>>;

    /// Returns the tenant's templates with `Active` status.
    async fn list_active(&self, tenant_id: &TenantId)
    -> TemplateRepositoryResult<Vec<CommandTemplate>>;

    /// Increments the usage counter of a template.
    ///
    /// Increments need not be strictly atomic across concurrent resolutions;
    /// adapters that need exact counts serialize them in storage.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError::NotFound`] when the template does
    /// not exist.
    async fn increment_usage(&self, id: TemplateId) -> TemplateRepositoryResult<()>;
}

/// Errors returned by template repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TemplateRepositoryError {
    /// A template with the same identifier already exists.
    #[error("duplicate template identifier: {0}")]
    DuplicateTemplate(TemplateId),

    /// The tenant already has a template with this name.
    #[error("duplicate template name '{name}' for tenant {tenant_id}")]
    DuplicateName {
        /// Owning tenant.
        tenant_id: TenantId,
        /// Conflicting command name.
        name: String,
    },

    /// The template was not found.
    #[error("template not found: {0}")]
    NotFound(TemplateId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TemplateRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
