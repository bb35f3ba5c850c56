//! Yes/no classification of follow-up replies.

use crate::intent::matching::{contains_phrase, normalize, tokens};

/// Cancellations that decline wherever they appear.
const CANCELLATIONS: &[&str] = &[
    "cancel",
    "stop",
    "abort",
    "do not",
    "never mind",
    "nevermind",
    "wrong",
];

const NEGATIVE: &[&str] = &["no", "n", "nope", "nah", "negative", "not really"];

/// Reassurances that start with a negative word but confirm.
const REASSURANCES: &[&str] = &[
    "no problem",
    "no worries",
    "no prob",
    "no doubt",
    "not a problem",
    "why not",
];

const AFFIRMATIVE: &[&str] = &[
    "yes",
    "y",
    "yeah",
    "yep",
    "yup",
    "sure",
    "ok",
    "okay",
    "confirm",
    "correct",
    "do it",
    "go ahead",
    "go for it",
    "affirmative",
    "absolutely",
    "please do",
    "exactly",
];

/// A user's answer to a yes/no clarification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// The user confirmed.
    Affirmative,
    /// The user declined.
    Negative,
    /// The reply is neither.
    Unclear,
}

/// Classifies a follow-up reply.
///
/// Cancellations decline anywhere in the reply. Otherwise the earliest cue
/// decides, with reassurances such as "no problem" counting as agreement.
///
/// # Examples
///
/// ```
/// use parlance::intent::services::{FollowUp, classify_follow_up};
///
/// assert_eq!(classify_follow_up("Yep, go ahead"), FollowUp::Affirmative);
/// assert_eq!(classify_follow_up("yes, no problem"), FollowUp::Affirmative);
/// assert_eq!(classify_follow_up("no, don't"), FollowUp::Negative);
/// assert_eq!(classify_follow_up("what?"), FollowUp::Unclear);
/// ```
#[must_use]
pub fn classify_follow_up(reply: &str) -> FollowUp {
    let words = tokens(&normalize(reply));
    if CANCELLATIONS.iter().any(|cue| contains_phrase(&words, cue)) {
        return FollowUp::Negative;
    }
    (0..words.len())
        .find_map(|start| {
            let opens = |cues: &[&str]| cues.iter().any(|cue| phrase_at(&words, start, cue));
            if opens(REASSURANCES) || opens(AFFIRMATIVE) {
                Some(FollowUp::Affirmative)
            } else if opens(NEGATIVE) {
                Some(FollowUp::Negative)
            } else {
                None
            }
        })
        .unwrap_or(FollowUp::Unclear)
}

fn phrase_at(words: &[String], start: usize, phrase: &str) -> bool {
    let wanted: Vec<&str> = phrase.split_whitespace().collect();
    words
        .get(start..start.saturating_add(wanted.len()))
        .is_some_and(|window| window.iter().zip(&wanted).all(|(word, cue)| word == cue))
}
