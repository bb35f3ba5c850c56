//! In-memory template repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::template::{
    domain::{CommandTemplate, TemplateId, TenantId},
    ports::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult},
};

/// Thread-safe in-memory template repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateRepository {
    state: Arc<RwLock<InMemoryTemplateState>>,
}

#[derive(Debug, Default)]
struct InMemoryTemplateState {
    templates: HashMap<TemplateId, CommandTemplate>,
    name_index: HashMap<(TenantId, String), TemplateId>,
}

impl InMemoryTemplateRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stored template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn clear(&self) -> TemplateRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.templates.clear();
        state.name_index.clear();
        Ok(())
    }
}

fn name_key(template: &CommandTemplate) -> (TenantId, String) {
    (template.tenant_id().clone(), template.name().to_owned())
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn register(&self, template: &CommandTemplate) -> TemplateRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.templates.contains_key(&template.id()) {
            return Err(TemplateRepositoryError::DuplicateTemplate(template.id()));
        }

        let key = name_key(template);
        if state.name_index.contains_key(&key) {
            return Err(TemplateRepositoryError::DuplicateName {
                tenant_id: template.tenant_id().clone(),
                name: template.name().to_owned(),
            });
        }

        state.name_index.insert(key, template.id());
        state.templates.insert(template.id(), template.clone());
        Ok(())
    }

    async fn update(&self, template: &CommandTemplate) -> TemplateRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_key = state
            .templates
            .get(&template.id())
            .map(name_key)
            .ok_or(TemplateRepositoryError::NotFound(template.id()))?;

        let new_key = name_key(template);
        if new_key != old_key {
            if let Some(&indexed_id) = state.name_index.get(&new_key)
                && indexed_id != template.id()
            {
                return Err(TemplateRepositoryError::DuplicateName {
                    tenant_id: template.tenant_id().clone(),
                    name: template.name().to_owned(),
                });
            }
            state.name_index.remove(&old_key);
            state.name_index.insert(new_key, template.id());
        }

        state.templates.insert(template.id(), template.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TemplateId) -> TemplateRepositoryResult<Option<CommandTemplate>> {
        let state = self.state.read().map_err(|err| {
            TemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.templates.get(&id).cloned())
    }

    async fn find_by_name(
        &self,
        tenant_id: &TenantId,
        name: &str,
    ) -> TemplateRepositoryResult<Option<CommandTemplate>> {
        let state = self.state.read().map_err(|err| {
            TemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let key = (tenant_id.clone(), name.trim().to_ascii_lowercase());
        Ok(state
            .name_index
            .get(&key)
            .and_then(|id| state.templates.get(id))
            .cloned())
    }

    async fn list_active(
        &self,
        tenant_id: &TenantId,
    ) -> TemplateRepositoryResult<Vec<CommandTemplate>> {
        let state = self.state.read().map_err(|err| {
            TemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut active: Vec<CommandTemplate> = state
            .templates
            .values()
            .filter(|template| template.tenant_id() == tenant_id && template.is_active())
            .cloned()
            .collect();
        active.sort_by_key(CommandTemplate::id);
        Ok(active)
    }

    async fn increment_usage(&self, id: TemplateId) -> TemplateRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let template = state
            .templates
            .get_mut(&id)
            .ok_or(TemplateRepositoryError::NotFound(id))?;
        template.record_usage();
        Ok(())
    }
}
