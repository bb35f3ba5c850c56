//! Scored template proposals.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::ExtractedParameters;
use crate::template::domain::CommandTemplate;

/// Which matcher produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrigin {
    /// The generative-model matcher.
    Model,
    /// The deterministic heuristic matcher.
    Heuristic,
}

/// A scored, parameter-bound proposal matching an utterance to a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The proposed template.
    pub template: CommandTemplate,
    /// Match confidence in `[0, 1]`.
    pub confidence: f64,
    /// Extracted parameters.
    pub params: ExtractedParameters,
    /// Producing matcher.
    pub origin: MatchOrigin,
    /// Uncapped heuristic score; equals `confidence` for model candidates.
    pub raw_score: f64,
}

impl MatchCandidate {
    /// Creates a candidate, clamping confidence into `[0, 1]`.
    #[must_use]
    pub fn new(
        template: CommandTemplate,
        confidence: f64,
        params: ExtractedParameters,
        origin: MatchOrigin,
    ) -> Self {
        let clamped = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            template,
            confidence: clamped,
            params,
            origin,
            raw_score: clamped,
        }
    }

    /// Sets the uncapped score used as the first tie-break.
    #[must_use]
    pub const fn with_raw_score(mut self, raw_score: f64) -> Self {
        self.raw_score = raw_score;
        self
    }

    /// Orders candidates best first.
    ///
    /// Confidence descending, then raw score descending, then historical usage
    /// descending, then template identifier ascending.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .confidence
            .total_cmp(&self.confidence)
            .then_with(|| other.raw_score.total_cmp(&self.raw_score))
            .then_with(|| other.template.usage_count().cmp(&self.template.usage_count()))
            .then_with(|| self.template.id().cmp(&other.template.id()))
    }
}

/// Sorts candidates best first using [`MatchCandidate::rank_cmp`].
pub fn rank_candidates(candidates: &mut [MatchCandidate]) {
    candidates.sort_by(MatchCandidate::rank_cmp);
}
