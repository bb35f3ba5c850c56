//! Command template aggregate root.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::placeholder::{collapse_spaces, placeholders, substitute};
use super::{SlotKind, TemplateDomainError, TemplateId, TemplateStatus, TenantId};

/// Maximum command name length accepted by chat platforms.
const MAX_NAME_LENGTH: usize = 32;

/// A registered natural-language pattern mapped to a parameterized output.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use mockable::DefaultClock;
/// use parlance::template::domain::{CommandTemplate, TenantId};
///
/// let tenant = TenantId::new("guild-1").expect("valid tenant");
/// let template = CommandTemplate::builder(tenant, "ban", "ban {user} for {reason}", "/ban {user} {reason}")
///     .build(&DefaultClock)
///     .expect("valid template");
///
/// let mut values = BTreeMap::new();
/// values.insert("user".to_owned(), "123".to_owned());
/// assert_eq!(template.render(&values), "/ban 123 No reason provided");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTemplate {
    id: TemplateId,
    tenant_id: TenantId,
    name: String,
    natural_language_pattern: String,
    output_template: String,
    status: TemplateStatus,
    usage_count: u64,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    defaults: BTreeMap<String, String>,
}

impl CommandTemplate {
    /// Starts building a new active template.
    #[must_use]
    pub fn builder(
        tenant_id: TenantId,
        name: impl Into<String>,
        natural_language_pattern: impl Into<String>,
        output_template: impl Into<String>,
    ) -> CommandTemplateBuilder {
        CommandTemplateBuilder::new(tenant_id, name, natural_language_pattern, output_template)
    }

    /// Returns the template identifier.
    #[must_use]
    pub const fn id(&self) -> TemplateId {
        self.id
    }

    /// Returns the owning tenant.
    #[must_use]
    pub const fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the command name as words, as a user would type it.
    ///
    /// `add_role` becomes `add role`.
    #[must_use]
    pub fn command_phrase(&self) -> String {
        self.name.replace(['_', '-'], " ")
    }

    /// Returns the natural-language pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.natural_language_pattern
    }

    /// Returns the output template.
    #[must_use]
    pub fn output_template(&self) -> &str {
        &self.output_template
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TemplateStatus {
        self.status
    }

    /// Returns `true` when the template takes part in matching.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_matchable()
    }

    /// Returns the number of successful executions.
    #[must_use]
    pub const fn usage_count(&self) -> u64 {
        self.usage_count
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns alternative phrasings of the command.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns template-level documented defaults.
    #[must_use]
    pub const fn defaults(&self) -> &BTreeMap<String, String> {
        &self.defaults
    }

    /// Returns every placeholder the template declares, pattern first.
    #[must_use]
    pub fn placeholders(&self) -> Vec<String> {
        let mut names = placeholders(&self.natural_language_pattern);
        for name in placeholders(&self.output_template) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Returns `true` when the pattern or output template uses `{name}`.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.placeholders().iter().any(|declared| declared == name)
    }

    /// Returns the documented default for a placeholder, if any.
    ///
    /// Template-level defaults take precedence over slot defaults.
    #[must_use]
    pub fn default_for(&self, name: &str) -> Option<String> {
        self.defaults.get(name).cloned().or_else(|| {
            SlotKind::for_placeholder(name).map(|slot| slot.default_value().to_owned())
        })
    }

    /// Renders the output template.
    ///
    /// Each placeholder is replaced by its value, its documented default, or
    /// the empty string, in that order of preference. Runs of spaces left by
    /// empty substitutions collapse to one.
    #[must_use]
    pub fn render(&self, values: &BTreeMap<String, String>) -> String {
        let rendered = substitute(&self.output_template, |name| {
            values
                .get(name)
                .cloned()
                .or_else(|| self.default_for(name))
                .unwrap_or_default()
        });
        collapse_spaces(&rendered)
    }

    /// Records one successful execution.
    pub const fn record_usage(&mut self) {
        self.usage_count = self.usage_count.saturating_add(1);
    }

    /// Deactivates the template, excluding it from matching.
    pub const fn deactivate(&mut self) {
        self.status = TemplateStatus::Inactive;
    }

    /// Reactivates the template.
    pub const fn activate(&mut self) {
        self.status = TemplateStatus::Active;
    }
}

/// Builder for new [`CommandTemplate`] values.
#[derive(Debug, Clone)]
pub struct CommandTemplateBuilder {
    tenant_id: TenantId,
    name: String,
    natural_language_pattern: String,
    output_template: String,
    description: Option<String>,
    aliases: Vec<String>,
    defaults: BTreeMap<String, String>,
}

impl CommandTemplateBuilder {
    /// Creates a builder with the mandatory template fields.
    #[must_use]
    pub fn new(
        tenant_id: TenantId,
        name: impl Into<String>,
        natural_language_pattern: impl Into<String>,
        output_template: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id,
            name: name.into(),
            natural_language_pattern: natural_language_pattern.into(),
            output_template: output_template.into(),
            description: None,
            aliases: Vec::new(),
            defaults: BTreeMap::new(),
        }
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text = description.into();
        self.description = (!text.trim().is_empty()).then_some(text);
        self
    }

    /// Adds alternative phrasings.
    #[must_use]
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Documents a default value for a placeholder.
    #[must_use]
    pub fn with_default(mut self, placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults
            .insert(placeholder.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Validates the fields and builds an active template with zero usage.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError`] when the name, pattern, or output
    /// template is invalid, or when an output placeholder is neither in the
    /// pattern nor covered by a documented default.
    pub fn build(self, clock: &impl Clock) -> Result<CommandTemplate, TemplateDomainError> {
        let name = validate_name(&self.name)?;
        let pattern = self.natural_language_pattern.trim().to_owned();
        if pattern.is_empty() {
            return Err(TemplateDomainError::EmptyPattern);
        }
        let output_template = self.output_template.trim().to_owned();
        if output_template.is_empty() {
            return Err(TemplateDomainError::EmptyOutputTemplate);
        }

        let declared = placeholders(&pattern);
        for placeholder in placeholders(&output_template) {
            let documented = self.defaults.contains_key(&placeholder)
                || SlotKind::for_placeholder(&placeholder).is_some();
            if !declared.contains(&placeholder) && !documented {
                return Err(TemplateDomainError::UndeclaredPlaceholder { placeholder });
            }
        }

        Ok(CommandTemplate {
            id: TemplateId::new(),
            tenant_id: self.tenant_id,
            name,
            natural_language_pattern: pattern,
            output_template,
            status: TemplateStatus::Active,
            usage_count: 0,
            created_at: clock.utc(),
            description: self.description,
            aliases: self.aliases,
            defaults: self.defaults,
        })
    }
}

/// Normalizes and validates a command name.
pub(crate) fn validate_name(raw: &str) -> Result<String, TemplateDomainError> {
    let normalized = raw.trim().trim_start_matches('/').to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(TemplateDomainError::EmptyCommandName);
    }
    if normalized.chars().count() > MAX_NAME_LENGTH {
        return Err(TemplateDomainError::CommandNameTooLong(raw.to_owned()));
    }
    let is_valid = normalized
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-'));
    if !is_valid {
        return Err(TemplateDomainError::InvalidCommandName(raw.to_owned()));
    }
    Ok(normalized)
}
