//! Template discovery from platform command schemas.

use mockable::Clock;
use std::sync::Arc;

use super::pattern_generator::PatternGenerator;
use crate::template::{
    domain::{CommandSchema, CommandTemplate, SlotKind, TemplateDomainError, TenantId, placeholders},
    ports::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult},
};

/// A schema that discovery did not turn into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSchema {
    /// Command name from the schema.
    pub name: String,
    /// Why the schema was skipped.
    pub reason: String,
}

/// Outcome of a discovery batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryReport {
    /// Templates registered by this batch.
    pub registered: Vec<CommandTemplate>,
    /// Schemas that were skipped, with reasons.
    pub skipped: Vec<SkippedSchema>,
}

/// Registers generated templates for a tenant's platform commands.
#[derive(Clone)]
pub struct TemplateDiscoveryService<R, C>
where
    R: TemplateRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    generator: PatternGenerator,
}

impl<R, C> TemplateDiscoveryService<R, C>
where
    R: TemplateRepository,
    C: Clock + Send + Sync,
{
    /// Creates a discovery service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            generator: PatternGenerator::new(),
        }
    }

    /// Generates and registers templates for every new, valid schema.
    ///
    /// Invalid schemas and names the tenant already uses are reported as
    /// skipped; they never abort the batch.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError`] when the repository fails for a
    /// reason other than a name conflict.
    pub async fn discover(
        &self,
        tenant_id: &TenantId,
        schemas: &[CommandSchema],
    ) -> TemplateRepositoryResult<DiscoveryReport> {
        let mut report = DiscoveryReport::default();
        for schema in schemas {
            if self
                .repository
                .find_by_name(tenant_id, &schema.name)
                .await?
                .is_some()
            {
                report.skipped.push(SkippedSchema {
                    name: schema.name.clone(),
                    reason: "already registered".to_owned(),
                });
                continue;
            }

            let template = match self.template_for(tenant_id, schema) {
                Ok(template) => template,
                Err(error) => {
                    tracing::warn!(command = %schema.name, error = %error, "skipping invalid command schema");
                    report.skipped.push(SkippedSchema {
                        name: schema.name.clone(),
                        reason: error.to_string(),
                    });
                    continue;
                }
            };

            match self.repository.register(&template).await {
                Ok(()) => {
                    tracing::debug!(tenant = %tenant_id, command = %template.name(), "registered discovered template");
                    report.registered.push(template);
                }
                Err(TemplateRepositoryError::DuplicateName { name, .. }) => {
                    report.skipped.push(SkippedSchema {
                        name,
                        reason: "already registered".to_owned(),
                    });
                }
                Err(error) => return Err(error),
            }
        }
        Ok(report)
    }

    fn template_for(
        &self,
        tenant_id: &TenantId,
        schema: &CommandSchema,
    ) -> Result<CommandTemplate, TemplateDomainError> {
        schema.validate()?;
        let generated = self.generator.generate(schema);
        let in_pattern = placeholders(&generated.pattern);

        let mut builder = CommandTemplate::builder(
            tenant_id.clone(),
            schema.name.clone(),
            generated.pattern,
            generated.output_template,
        )
        .with_description(schema.description.clone())
        .with_aliases(generated.alternatives);

        for parameter in &schema.parameters {
            let covered = parameter.is_subcommand()
                || in_pattern.contains(&parameter.name)
                || SlotKind::for_placeholder(&parameter.name).is_some();
            if !covered {
                builder = builder.with_default(parameter.name.clone(), "");
            }
        }
        builder.build(&*self.clock)
    }
}
