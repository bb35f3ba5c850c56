//! Deterministic, model-free template scoring.

use async_trait::async_trait;

use super::lexicon::{
    ACTION_VERBS, COMMAND_KEYWORDS, COMMAND_PHRASES, CONVERSATIONAL_PATTERNS, POLITENESS_MARKERS,
    STOP_WORDS, any_match, lookup,
};
use super::normalize::{contains_phrase, normalize, tokens};
use super::similarity::fuzzy_token_match;
use super::{MatchOutcome, MatchRequest, Matcher, MatcherError};
use crate::intent::config::ResolutionConfig;
use crate::intent::domain::{MatchCandidate, MatchOrigin, rank_candidates};
use crate::intent::extraction::extract_for_template;
use crate::template::domain::{CommandTemplate, strip_placeholders};

const NAME_WEIGHT: f64 = 0.8;
const PHRASE_WEIGHT: f64 = 0.7;
const PATTERN_WEIGHT: f64 = 0.5;
const KEYWORD_WEIGHT: f64 = 0.4;
const DESCRIPTION_WEIGHT: f64 = 0.2;
const PARTIAL_PHRASE_CREDIT: f64 = 0.5;
const MIN_CONTENT_WORD_LEN: usize = 3;
const MIN_DESCRIPTION_WORD_LEN: usize = 4;

/// Why an utterance was refused before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A token fuses two action verbs, such as `kickban`.
    GluedVerbs(String),
    /// Small talk without any command indicator.
    SmallTalk,
}

/// Scores templates by name, phrase, pattern, keyword, and description
/// overlap.
///
/// Scores are summed, capped at 1.0, and compared against a threshold that
/// is lower for politely phrased requests.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use parlance::intent::domain::{Author, ChannelId, ConversationContext, MessageId, UserId, Utterance};
/// use parlance::intent::extraction::DigitIdShape;
/// use parlance::intent::matching::{HeuristicMatcher, MatchRequest};
/// use parlance::template::domain::{CommandTemplate, TenantId};
///
/// let tenant = TenantId::new("guild-1").expect("valid tenant");
/// let purge = CommandTemplate::builder(tenant, "purge", "purge {amount}", "/purge {amount}")
///     .build(&DefaultClock)
///     .expect("valid template");
/// let utterance = Utterance::new(
///     MessageId::new("m-1"),
///     "can you please delete like 5 messages",
///     Author::new(UserId::new("42"), "mod"),
///     ChannelId::new("general"),
/// );
/// let context = ConversationContext::default();
/// let templates = [purge];
/// let request = MatchRequest {
///     utterance: &utterance,
///     templates: &templates,
///     context: &context,
///     id_shape: &DigitIdShape::snowflake(),
/// };
///
/// let best = HeuristicMatcher::default().best_match(&request).expect("purge matches");
/// assert_eq!(best.template.name(), "purge");
/// assert_eq!(best.params.get("amount"), Some("5"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMatcher {
    threshold: f64,
    polite_threshold: f64,
}

impl Default for HeuristicMatcher {
    fn default() -> Self {
        Self::from_config(&ResolutionConfig::default())
    }
}

impl HeuristicMatcher {
    /// Creates a matcher with explicit thresholds.
    #[must_use]
    pub const fn new(threshold: f64, polite_threshold: f64) -> Self {
        Self {
            threshold,
            polite_threshold,
        }
    }

    /// Creates a matcher using the configured thresholds.
    #[must_use]
    pub const fn from_config(config: &ResolutionConfig) -> Self {
        Self::new(config.heuristic_threshold, config.polite_heuristic_threshold)
    }

    /// Returns the acceptance threshold for normalized text.
    #[must_use]
    pub fn threshold_for(&self, normalized: &str) -> f64 {
        let words = tokens(normalized);
        if POLITENESS_MARKERS
            .iter()
            .any(|marker| contains_phrase(&words, marker))
        {
            self.polite_threshold
        } else {
            self.threshold
        }
    }

    /// Returns why normalized text should not be matched at all, if anything.
    #[must_use]
    pub fn rejection(normalized: &str, templates: &[CommandTemplate]) -> Option<Rejection> {
        let words = tokens(normalized);
        if let Some(glued) = words
            .iter()
            .find(|word| is_glued_verb_pair(word, templates))
        {
            return Some(Rejection::GluedVerbs(glued.clone()));
        }
        if any_match(&CONVERSATIONAL_PATTERNS, normalized)
            && !has_command_indicator(&words, templates)
        {
            return Some(Rejection::SmallTalk);
        }
        None
    }

    /// Returns the uncapped score of one template against utterance tokens.
    #[must_use]
    pub fn score(words: &[String], template: &CommandTemplate) -> f64 {
        let name = template.name();
        let name_signal = if contains_phrase(words, &template.command_phrase()) {
            1.0
        } else {
            0.0
        };

        let aliases: Vec<String> = template
            .aliases()
            .iter()
            .map(|alias| alias.to_lowercase())
            .collect();
        let phrases = lookup(COMMAND_PHRASES, name)
            .iter()
            .copied()
            .chain(aliases.iter().map(String::as_str));
        let phrase_signal = phrases
            .map(|phrase| phrase_score(words, phrase))
            .fold(0.0, f64::max);

        let pattern_words = content_words(&strip_placeholders(template.pattern()), MIN_CONTENT_WORD_LEN);
        let pattern_signal = fraction(&pattern_words, |word| {
            words.iter().any(|token| fuzzy_token_match(token, word))
        });

        let keywords = lookup(COMMAND_KEYWORDS, name);
        let keyword_signal = fraction(keywords, |keyword| {
            words.iter().any(|token| token.as_str() == *keyword)
        });

        let description_words = template
            .description()
            .map(|text| content_words(text, MIN_DESCRIPTION_WORD_LEN))
            .unwrap_or_default();
        let description_signal = fraction(&description_words, |word| {
            words.iter().any(|token| token == word)
        });

        NAME_WEIGHT * name_signal
            + PHRASE_WEIGHT * phrase_signal
            + PATTERN_WEIGHT * pattern_signal
            + KEYWORD_WEIGHT * keyword_signal
            + DESCRIPTION_WEIGHT * description_signal
    }

    /// Scores every active template and returns positive candidates, best
    /// first, without applying the acceptance threshold.
    ///
    /// Rejected utterances yield no candidates.
    #[must_use]
    pub fn rank(request: &MatchRequest<'_>) -> Vec<MatchCandidate> {
        let normalized = normalize(request.utterance.content());
        if let Some(rejection) = Self::rejection(&normalized, request.templates) {
            tracing::debug!(?rejection, "heuristic matcher refused utterance");
            return Vec::new();
        }
        let words = tokens(&normalized);
        let mut candidates: Vec<MatchCandidate> = request
            .templates
            .iter()
            .filter(|template| template.is_active())
            .filter_map(|template| {
                let raw = Self::score(&words, template);
                (raw > 0.0).then(|| {
                    let params = extract_for_template(
                        request.utterance.content(),
                        request.utterance.mentions(),
                        template,
                        request.id_shape,
                    );
                    MatchCandidate::new(template.clone(), raw.min(1.0), params, MatchOrigin::Heuristic)
                        .with_raw_score(raw)
                })
            })
            .collect();
        rank_candidates(&mut candidates);
        candidates
    }

    /// Returns the best candidate when it clears the applicable threshold.
    #[must_use]
    pub fn best_match(&self, request: &MatchRequest<'_>) -> Option<MatchCandidate> {
        let threshold = self.threshold_for(&normalize(request.utterance.content()));
        Self::rank(request)
            .into_iter()
            .next()
            .filter(|candidate| candidate.confidence >= threshold)
    }
}

#[async_trait]
impl Matcher for HeuristicMatcher {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn find_match(&self, request: &MatchRequest<'_>) -> Result<MatchOutcome, MatcherError> {
        Ok(self
            .best_match(request)
            .map_or(MatchOutcome::NoMatch, MatchOutcome::Command))
    }
}

fn phrase_score(words: &[String], phrase: &str) -> f64 {
    if contains_phrase(words, phrase) {
        return 1.0;
    }
    let phrase_words = content_words(phrase, MIN_CONTENT_WORD_LEN);
    PARTIAL_PHRASE_CREDIT
        * fraction(&phrase_words, |word| {
            words.iter().any(|token| fuzzy_token_match(token, word))
        })
}

fn content_words(text: &str, min_len: usize) -> Vec<String> {
    tokens(&text.to_lowercase())
        .into_iter()
        .filter(|word| word.chars().count() >= min_len && !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

#[expect(
    clippy::cast_precision_loss,
    reason = "word lists are far below f64 mantissa precision"
)]
fn fraction<T>(items: &[T], present: impl Fn(&T) -> bool) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let hits = items.iter().filter(|item| present(item)).count();
    hits as f64 / items.len() as f64
}

fn is_glued_verb_pair(word: &str, templates: &[CommandTemplate]) -> bool {
    if !word.chars().all(|ch| ch.is_ascii_alphabetic())
        || ACTION_VERBS.contains(&word)
        || templates.iter().any(|template| template.name() == word)
    {
        return false;
    }
    (1..word.len()).any(|split| {
        word.get(..split)
            .zip(word.get(split..))
            .is_some_and(|(head, tail)| ACTION_VERBS.contains(&head) && ACTION_VERBS.contains(&tail))
    })
}

fn has_command_indicator(words: &[String], templates: &[CommandTemplate]) -> bool {
    words.iter().any(|word| ACTION_VERBS.contains(&word.as_str()))
        || templates.iter().any(|template| {
            contains_phrase(words, &template.command_phrase())
                || lookup(COMMAND_PHRASES, template.name())
                    .iter()
                    .any(|phrase| contains_phrase(words, phrase))
        })
}
