//! Tunable thresholds, limits, and timeouts for intent resolution.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors for invalid resolution configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A threshold lies outside `[0, 1]`.
    #[error("threshold '{name}' must lie within [0, 1], got {value}")]
    ThresholdOutOfRange {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The clarify band starts above the accept threshold.
    #[error("clarify threshold {clarify} must not exceed accept threshold {accept}")]
    InvertedClarifyBand {
        /// Clarify threshold.
        clarify: f64,
        /// Accept threshold.
        accept: f64,
    },

    /// A limit, capacity, or timeout is zero.
    #[error("'{0}' must be greater than zero")]
    ZeroValue(&'static str),

    /// The configuration document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(String),
}

/// Configuration for the resolution policy and its matchers.
///
/// Every field has a default, so partial documents deserialize cleanly.
///
/// # Examples
///
/// ```
/// use parlance::intent::config::ResolutionConfig;
///
/// let config = ResolutionConfig::default();
/// assert!((config.accept_threshold - 0.6).abs() < f64::EPSILON);
///
/// let tuned = ResolutionConfig::from_json(r#"{"accept_threshold": 0.7}"#).expect("valid config");
/// assert!((tuned.accept_threshold - 0.7).abs() < f64::EPSILON);
/// assert_eq!(tuned.context_capacity, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Minimum confidence for executing a model or confirmed candidate.
    pub accept_threshold: f64,
    /// Lower edge of the yes/no clarification band.
    pub clarify_threshold: f64,
    /// Heuristic acceptance threshold for terse input.
    pub heuristic_threshold: f64,
    /// Heuristic acceptance threshold when politeness markers are present.
    pub polite_heuristic_threshold: f64,
    /// Generative model call timeout, in milliseconds.
    pub model_timeout_ms: u64,
    /// Template repository call timeout, in milliseconds.
    pub store_timeout_ms: u64,
    /// Maximum templates offered in a low-confidence clarification.
    pub max_clarify_options: usize,
    /// Maximum template names listed in a help reply.
    pub help_listing_limit: usize,
    /// Upper clamp applied to extracted amounts.
    pub max_amount: u32,
    /// Turns remembered per channel.
    pub context_capacity: usize,
    /// Lifetime of remembered turns, in seconds.
    pub context_ttl_secs: u64,
    /// Recent turns included in the model prompt.
    pub prompt_recent_turns: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            accept_threshold: 0.6,
            clarify_threshold: 0.4,
            heuristic_threshold: 0.25,
            polite_heuristic_threshold: 0.15,
            model_timeout_ms: 8_000,
            store_timeout_ms: 2_000,
            max_clarify_options: 8,
            help_listing_limit: 5,
            max_amount: 100,
            context_capacity: 10,
            context_ttl_secs: 2 * 60 * 60,
            prompt_recent_turns: 3,
        }
    }
}

impl ResolutionConfig {
    /// Creates a configuration that executes only on high confidence.
    ///
    /// Useful for destructive command sets where a wrong match is costly.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            accept_threshold: 0.75,
            clarify_threshold: 0.5,
            heuristic_threshold: 0.35,
            polite_heuristic_threshold: 0.25,
            ..Self::default()
        }
    }

    /// Creates a configuration that favours recall on casual phrasing.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            accept_threshold: 0.5,
            clarify_threshold: 0.3,
            heuristic_threshold: 0.2,
            polite_heuristic_threshold: 0.1,
            ..Self::default()
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or any validation
    /// error from [`ResolutionConfig::validate`].
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(document).map_err(|error| ConfigError::Parse(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks thresholds, bands, limits, and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("accept_threshold", self.accept_threshold),
            ("clarify_threshold", self.clarify_threshold),
            ("heuristic_threshold", self.heuristic_threshold),
            ("polite_heuristic_threshold", self.polite_heuristic_threshold),
        ];
        for (name, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if self.clarify_threshold > self.accept_threshold {
            return Err(ConfigError::InvertedClarifyBand {
                clarify: self.clarify_threshold,
                accept: self.accept_threshold,
            });
        }

        let positives = [
            ("model_timeout_ms", self.model_timeout_ms),
            ("store_timeout_ms", self.store_timeout_ms),
            ("context_ttl_secs", self.context_ttl_secs),
            ("max_amount", u64::from(self.max_amount)),
        ];
        for (name, value) in positives {
            if value == 0 {
                return Err(ConfigError::ZeroValue(name));
            }
        }
        let counts = [
            ("max_clarify_options", self.max_clarify_options),
            ("help_listing_limit", self.help_listing_limit),
            ("context_capacity", self.context_capacity),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(ConfigError::ZeroValue(name));
            }
        }
        Ok(())
    }

    /// Returns the model call timeout.
    #[must_use]
    pub const fn model_timeout(&self) -> Duration {
        Duration::from_millis(self.model_timeout_ms)
    }

    /// Returns the repository call timeout.
    #[must_use]
    pub const fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    /// Returns the conversation memory lifetime.
    #[must_use]
    pub const fn context_ttl(&self) -> Duration {
        Duration::from_secs(self.context_ttl_secs)
    }
}
