//! Structured command schemas consumed by pattern generation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::TemplateDomainError;
use super::placeholder::is_placeholder_name;

/// Parameter type declared by a platform command schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandParameterType {
    /// Free-form string value.
    String,
    /// Integer value.
    Number,
    /// Boolean value.
    Boolean,
    /// Enumeration with allowed options.
    Select,
    /// Platform user reference.
    User,
    /// Platform channel reference.
    Channel,
    /// Platform role reference.
    Role,
    /// Nested subcommand; never rendered as a `key:{key}` pair.
    Subcommand,
}

/// Parameter specification for a command schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub parameter_type: CommandParameterType,
    /// Whether the parameter is required.
    pub required: bool,
    /// Allowed options for `select` parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl CommandParameterSpec {
    /// Creates a parameter specification.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        parameter_type: CommandParameterType,
        required: bool,
    ) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            parameter_type,
            required,
            options: Vec::new(),
        }
    }

    /// Adds allowed options for `select` parameters.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` for subcommand parameters.
    #[must_use]
    pub const fn is_subcommand(&self) -> bool {
        matches!(self.parameter_type, CommandParameterType::Subcommand)
    }
}

/// A structured command definition as exposed by a chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSchema {
    /// Command name without the leading slash.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Parameter definitions in declared order.
    #[serde(default)]
    pub parameters: Vec<CommandParameterSpec>,
}

impl CommandSchema {
    /// Creates a schema without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().trim_start_matches('/').to_ascii_lowercase(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Adds a parameter specification.
    #[must_use]
    pub fn with_parameter(mut self, parameter: CommandParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Validates parameter definitions.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::InvalidParameterName`] when a name cannot
    /// be written as a placeholder, [`TemplateDomainError::DuplicateParameter`]
    /// when a name repeats, or [`TemplateDomainError::MissingSelectOptions`]
    /// when a select parameter has no options.
    pub fn validate(&self) -> Result<(), TemplateDomainError> {
        let mut names = HashSet::new();
        for parameter in &self.parameters {
            if !is_placeholder_name(&parameter.name) {
                return Err(TemplateDomainError::InvalidParameterName {
                    command: self.name.clone(),
                    parameter: parameter.name.clone(),
                });
            }
            if !names.insert(parameter.name.as_str()) {
                return Err(TemplateDomainError::DuplicateParameter {
                    command: self.name.clone(),
                    parameter: parameter.name.clone(),
                });
            }
            if matches!(parameter.parameter_type, CommandParameterType::Select)
                && parameter.options.is_empty()
            {
                return Err(TemplateDomainError::MissingSelectOptions {
                    command: self.name.clone(),
                    parameter: parameter.name.clone(),
                });
            }
        }
        Ok(())
    }
}
