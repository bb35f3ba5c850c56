//! Error types for template domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing template domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateDomainError {
    /// The tenant identifier is empty after trimming.
    #[error("tenant identifier must not be empty")]
    EmptyTenantId,

    /// The command name is empty after trimming.
    #[error("command name must not be empty")]
    EmptyCommandName,

    /// The command name contains characters outside `[a-z0-9_-]`.
    #[error(
        "command name '{0}' contains invalid characters (only lowercase alphanumeric, '-' and '_' allowed)"
    )]
    InvalidCommandName(String),

    /// The command name exceeds the 32-character platform limit.
    #[error("command name exceeds 32 character limit: {0}")]
    CommandNameTooLong(String),

    /// The natural-language pattern is empty after trimming.
    #[error("natural-language pattern must not be empty")]
    EmptyPattern,

    /// The output template is empty after trimming.
    #[error("output template must not be empty")]
    EmptyOutputTemplate,

    /// The output template references a placeholder that neither the pattern
    /// declares nor any documented default covers.
    #[error("output placeholder '{{{placeholder}}}' is not in the pattern and has no default")]
    UndeclaredPlaceholder {
        /// The offending placeholder name.
        placeholder: String,
    },

    /// A command schema declares the same parameter twice.
    #[error("duplicate parameter definition '{parameter}' for command '{command}'")]
    DuplicateParameter {
        /// Command name.
        command: String,
        /// Duplicated parameter name.
        parameter: String,
    },

    /// A command schema parameter name cannot be written as a placeholder.
    #[error("parameter name '{parameter}' for command '{command}' is not a valid placeholder")]
    InvalidParameterName {
        /// Command name.
        command: String,
        /// Offending parameter name.
        parameter: String,
    },

    /// A select parameter declares no options.
    #[error("select parameter '{parameter}' for command '{command}' must provide options")]
    MissingSelectOptions {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
    },
}

