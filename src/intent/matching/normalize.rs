//! Text normalization shared by the matchers.

use regex::Regex;
use std::sync::LazyLock;

use crate::pattern::compile;

const CONTRACTIONS: &[(&str, &str)] = &[
    ("can't", "cannot"),
    ("won't", "will not"),
    ("let's", "let us"),
    ("what's", "what is"),
    ("how's", "how is"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("who's", "who is"),
    ("he's", "he is"),
    ("she's", "she is"),
];

static SUFFIX_CONTRACTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"([a-z])(n't|'re|'m|'ll|'ve|'d)\b"));

const TYPOS: &[(&str, &str)] = &[
    ("pls", "please"),
    ("plz", "please"),
    ("plox", "please"),
    ("u", "you"),
    ("ur", "your"),
    ("r", "are"),
    ("thx", "thanks"),
    ("ty", "thanks"),
    ("msg", "message"),
    ("msgs", "messages"),
    ("messges", "messages"),
    ("mesages", "messages"),
    ("bna", "ban"),
    ("bann", "ban"),
    ("kik", "kick"),
    ("kcik", "kick"),
    ("mue", "mute"),
    ("delte", "delete"),
    ("dlete", "delete"),
    ("purg", "purge"),
    ("tiemout", "timeout"),
    ("annouce", "announce"),
    ("reaosn", "reason"),
];

/// Lowercases, expands contractions, and fixes common typos.
///
/// Mention markup is preserved; surrounding punctuation on each token is
/// kept so quoted text survives.
///
/// # Examples
///
/// ```
/// use parlance::intent::matching::normalize;
///
/// assert_eq!(normalize("Can't you DELETE 5 msgs pls?"), "cannot you delete 5 messages please?");
/// assert_eq!(normalize("what's up"), "what is up");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut lowered = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
    for (contracted, expanded) in CONTRACTIONS {
        lowered = replace_word(&lowered, contracted, expanded);
    }
    let expanded = SUFFIX_CONTRACTION.replace_all(&lowered, |caps: &regex::Captures<'_>| {
        let stem = caps.get(1).map_or("", |m| m.as_str());
        let suffix = match caps.get(2).map_or("", |m| m.as_str()) {
            "n't" => " not",
            "'re" => " are",
            "'m" => " am",
            "'ll" => " will",
            "'ve" => " have",
            _ => " would",
        };
        format!("{stem}{suffix}")
    });

    expanded
        .split_whitespace()
        .map(fix_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits normalized text into alphanumeric tokens.
#[must_use]
pub fn tokens(normalized: &str) -> Vec<String> {
    normalized
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Returns `true` when `phrase` occurs as a contiguous token run.
#[must_use]
pub fn contains_phrase(tokens: &[String], phrase: &str) -> bool {
    let wanted: Vec<&str> = phrase.split_whitespace().collect();
    if wanted.is_empty() || wanted.len() > tokens.len() {
        return false;
    }
    tokens.windows(wanted.len()).any(|window| {
        window
            .iter()
            .zip(&wanted)
            .all(|(token, word)| token == word)
    })
}

fn replace_word(text: &str, from: &str, to: &str) -> String {
    text.split(' ')
        .map(|word| {
            let core = word.trim_matches(|ch: char| ch.is_ascii_punctuation() && ch != '\'');
            if core == from {
                word.replacen(from, to, 1)
            } else {
                word.to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn fix_token(token: &str) -> String {
    let core = token.trim_matches(|ch: char| ch.is_ascii_punctuation());
    TYPOS
        .iter()
        .find(|(typo, _)| *typo == core)
        .map_or_else(|| token.to_owned(), |(_, fixed)| token.replacen(core, fixed, 1))
}
