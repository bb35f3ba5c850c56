//! Natural-language pattern generation from structured command schemas.

use serde::{Deserialize, Serialize};

use crate::template::domain::{CommandParameterSpec, CommandSchema};

const BASE_CONFIDENCE: f64 = 0.7;
const CONFIDENCE_STEP: f64 = 0.1;
const MIN_CONFIDENCE: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 1.0;
const MAX_ALTERNATIVES: usize = 3;
const DESCRIPTIVE_TEXT_MIN_CHARS: usize = 10;
const MANY_PARAMETERS: usize = 5;

/// Optional parameters important enough to appear in the primary pattern.
const IMPORTANT_OPTIONAL: &[&str] = &["reason", "message", "duration"];

/// Parameter names the extractors understand natively.
const CANONICAL_SLOTS: &[&str] = &["user", "reason", "channel", "role", "message", "duration"];

const MODERATION_NAMES: &[&str] = &[
    "ban", "unban", "kick", "warn", "mute", "unmute", "timeout", "purge", "clear", "slowmode",
    "lock", "unlock",
];

const SYNONYMS: &[(&str, &[&str])] = &[
    ("ban", &["banish", "block", "exile"]),
    ("unban", &["pardon", "unblock", "allow back"]),
    ("kick", &["remove", "boot", "eject"]),
    ("warn", &["caution", "alert", "notify"]),
    ("mute", &["silence", "quiet", "shush"]),
    ("unmute", &["unsilence", "let speak"]),
    ("timeout", &["time out", "suspend", "silence"]),
    ("purge", &["delete", "clear", "clean up"]),
    ("clear", &["purge", "delete", "wipe"]),
    ("say", &["announce", "tell", "post"]),
    ("announce", &["broadcast", "post", "say"]),
    ("role", &["give role", "assign role", "grant role"]),
    ("slowmode", &["slow down", "rate limit"]),
    ("lock", &["lock down", "close", "freeze"]),
    ("unlock", &["open", "reopen", "unfreeze"]),
];

/// Output of [`PatternGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPattern {
    /// Primary natural-language pattern.
    pub pattern: String,
    /// Up to three alternative phrasings with the same placeholder order.
    pub alternatives: Vec<String>,
    /// Output template, `/name key:{key} ...`.
    pub output_template: String,
    /// Confidence in the generated pattern, in `[0.1, 1.0]`.
    pub confidence: f64,
}

/// Turns structured command schemas into natural-language patterns.
///
/// Generation is a pure function of the schema.
///
/// # Examples
///
/// ```
/// use parlance::template::domain::{CommandParameterSpec, CommandParameterType, CommandSchema};
/// use parlance::template::services::PatternGenerator;
///
/// let schema = CommandSchema::new("ban", "Ban a member from the server")
///     .with_parameter(CommandParameterSpec::new("user", CommandParameterType::User, true))
///     .with_parameter(CommandParameterSpec::new("reason", CommandParameterType::String, false));
///
/// let generated = PatternGenerator::new().generate(&schema);
/// assert_eq!(generated.pattern, "ban {user} {reason}");
/// assert_eq!(generated.output_template, "/ban user:{user} reason:{reason}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternGenerator;

impl PatternGenerator {
    /// Creates a pattern generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates the pattern, alternatives, output template, and confidence.
    #[must_use]
    pub fn generate(&self, schema: &CommandSchema) -> GeneratedPattern {
        let pattern_parameters: Vec<&CommandParameterSpec> = schema
            .parameters
            .iter()
            .filter(|parameter| !parameter.is_subcommand())
            .filter(|parameter| {
                parameter.required || IMPORTANT_OPTIONAL.contains(&parameter.name.as_str())
            })
            .collect();
        let placeholder_tail: String = pattern_parameters
            .iter()
            .map(|parameter| format!(" {{{}}}", parameter.name))
            .collect();

        let pattern = format!("{}{placeholder_tail}", schema.name);
        let alternatives = synonyms_for(&schema.name)
            .iter()
            .take(MAX_ALTERNATIVES)
            .map(|synonym| format!("{synonym}{placeholder_tail}"))
            .collect();

        GeneratedPattern {
            pattern,
            alternatives,
            output_template: output_template(schema),
            confidence: confidence(schema),
        }
    }
}

fn synonyms_for(name: &str) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(command, _)| *command == name)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or_default()
}

fn output_template(schema: &CommandSchema) -> String {
    let mut output = format!("/{}", schema.name);
    for parameter in schema
        .parameters
        .iter()
        .filter(|parameter| !parameter.is_subcommand())
    {
        output.push_str(&format!(" {0}:{{{0}}}", parameter.name));
    }
    output
}

fn confidence(schema: &CommandSchema) -> f64 {
    let mut score = BASE_CONFIDENCE;
    if schema.description.trim().chars().count() > DESCRIPTIVE_TEXT_MIN_CHARS {
        score += CONFIDENCE_STEP;
    }
    if schema
        .parameters
        .iter()
        .any(|parameter| CANONICAL_SLOTS.contains(&parameter.name.as_str()))
    {
        score += CONFIDENCE_STEP;
    }
    if schema.parameters.len() > MANY_PARAMETERS {
        score -= CONFIDENCE_STEP;
    }
    if MODERATION_NAMES.contains(&schema.name.as_str()) {
        score += CONFIDENCE_STEP;
    }
    score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
