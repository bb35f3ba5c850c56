//! Extracted placeholder values and their merge precedence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::template::domain::CommandTemplate;

/// Where a parameter value came from.
///
/// Variants are ordered by precedence: a value from a later variant replaces
/// one from an earlier variant, never the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterSource {
    /// Documented default for the placeholder.
    Default,
    /// Derived from platform-resolved mentions.
    Mention,
    /// Extracted from text by the heuristic extractors.
    Heuristic,
    /// Returned by the generative model.
    Model,
}

/// A resolved placeholder value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterValue {
    /// The value text.
    pub value: String,
    /// The value's origin.
    pub source: ParameterSource,
}

/// Placeholder values merged by [`ParameterSource`] precedence.
///
/// # Examples
///
/// ```
/// use parlance::intent::domain::{ExtractedParameters, ParameterSource};
///
/// let mut params = ExtractedParameters::new();
/// params.insert("reason", "spam", ParameterSource::Heuristic);
/// params.insert("reason", "flooding chat", ParameterSource::Model);
/// params.insert("reason", "No reason provided", ParameterSource::Default);
///
/// assert_eq!(params.get("reason"), Some("flooding chat"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedParameters {
    values: BTreeMap<String, ParameterValue>,
}

impl ExtractedParameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value unless a higher-precedence value is already present.
    ///
    /// Blank values are ignored so that an empty model field never masks a
    /// heuristic extraction.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>, source: ParameterSource) {
        let text = value.into().trim().to_owned();
        if text.is_empty() {
            return;
        }
        let key = name.into().to_ascii_lowercase();
        let outranked = self
            .values
            .get(&key)
            .is_some_and(|existing| existing.source > source);
        if !outranked {
            self.values.insert(key, ParameterValue { value: text, source });
        }
    }

    /// Merges every value of `other` under the usual precedence rules.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in &other.values {
            self.insert(name.clone(), value.value.clone(), value.source);
        }
    }

    /// Returns the value for a placeholder.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|value| value.value.as_str())
    }

    /// Returns the origin of a placeholder value.
    #[must_use]
    pub fn source(&self, name: &str) -> Option<ParameterSource> {
        self.values.get(name).map(|value| value.source)
    }

    /// Returns `true` when the placeholder has a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Replaces a value regardless of precedence, keeping its source.
    ///
    /// Used for call-site normalization such as clamping amounts.
    pub fn replace_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(existing) = self.values.get_mut(name) {
            existing.value = value.into();
        }
    }

    /// Fills every placeholder the template declares that is still missing
    /// with its documented default.
    pub fn fill_defaults(&mut self, template: &CommandTemplate) {
        for name in template.placeholders() {
            if !self.contains(&name)
                && let Some(default) = template.default_for(&name)
            {
                self.insert(name, default, ParameterSource::Default);
            }
        }
    }

    /// Returns the number of resolved placeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no placeholder has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the plain name-to-value map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.value.clone()))
            .collect()
    }
}
