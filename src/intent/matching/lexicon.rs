//! Word tables used by heuristic scoring and conversational detection.

use regex::Regex;
use std::sync::LazyLock;

use crate::pattern::compile;

/// Verbs that signal a command request.
pub(crate) const ACTION_VERBS: &[&str] = &[
    "ban", "unban", "kick", "warn", "mute", "unmute", "timeout", "purge", "delete", "clear",
    "remove", "give", "add", "assign", "say", "announce", "tell", "lock", "unlock", "slowmode",
    "post", "send", "pin", "unpin", "silence", "boot",
];

/// Known phrasings per command name.
pub(crate) const COMMAND_PHRASES: &[(&str, &[&str])] = &[
    (
        "ban",
        &["ban", "banish", "kick out", "get rid of", "throw out", "block", "exile", "remove permanently"],
    ),
    ("unban", &["unban", "pardon", "let back in", "lift the ban", "allow back"]),
    ("kick", &["kick", "boot", "throw out", "remove from the server", "kick out"]),
    ("warn", &["warn", "give a warning", "issue a warning", "caution", "strike"]),
    ("mute", &["mute", "silence", "shut up", "quiet", "shush"]),
    ("unmute", &["unmute", "unsilence", "let speak", "let them talk"]),
    ("timeout", &["timeout", "time out", "put in timeout", "suspend", "cool down"]),
    (
        "purge",
        &["purge", "delete", "clear", "clean up", "wipe", "delete messages", "clear messages", "remove messages"],
    ),
    ("clear", &["clear", "delete", "clean up", "wipe", "purge"]),
    ("say", &["say", "post", "send a message", "tell everyone", "repeat"]),
    ("announce", &["announce", "announcement", "broadcast", "let everyone know", "tell everyone"]),
    ("role", &["give role", "add role", "assign role", "grant", "make"]),
    ("addrole", &["give role", "add role", "assign role", "grant"]),
    ("removerole", &["remove role", "take role", "revoke", "take away"]),
    ("slowmode", &["slowmode", "slow mode", "slow down", "rate limit"]),
    ("lock", &["lock", "lock down", "lockdown", "close the channel"]),
    ("unlock", &["unlock", "open the channel", "reopen"]),
];

/// Semantic keywords per command name.
pub(crate) const COMMAND_KEYWORDS: &[(&str, &[&str])] = &[
    ("ban", &["ban", "banish", "permanent", "forever", "remove", "block", "exile", "raid", "spam", "spamming"]),
    ("unban", &["unban", "pardon", "forgive", "return", "allow", "back"]),
    ("kick", &["kick", "boot", "remove", "throw", "out", "leave"]),
    ("warn", &["warn", "warning", "caution", "strike", "behave", "annoying", "rude"]),
    ("mute", &["mute", "silence", "quiet", "shut", "talking", "voice"]),
    ("unmute", &["unmute", "unsilence", "speak", "talk", "voice"]),
    ("timeout", &["timeout", "suspend", "temporarily", "cool", "break", "minutes", "hours"]),
    ("purge", &["purge", "delete", "clear", "messages", "clean", "remove", "wipe", "bulk"]),
    ("clear", &["clear", "delete", "messages", "clean", "wipe"]),
    ("say", &["say", "post", "send", "message", "repeat", "echo"]),
    ("announce", &["announce", "announcement", "broadcast", "everyone", "news", "notice"]),
    ("role", &["role", "give", "assign", "grant", "promote", "rank"]),
    ("addrole", &["role", "give", "assign", "grant", "promote"]),
    ("removerole", &["role", "remove", "revoke", "demote", "take"]),
    ("slowmode", &["slowmode", "slow", "rate", "limit", "cooldown"]),
    ("lock", &["lock", "close", "freeze", "channel", "lockdown"]),
    ("unlock", &["unlock", "open", "reopen", "channel"]),
];

/// Words carrying no matching signal.
pub(crate) const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "that", "this", "you", "are", "was", "were", "his",
    "her", "their", "them", "they", "its", "into", "onto", "about", "some", "any", "all", "can",
    "could", "would", "should", "will", "please", "just", "like", "want", "need", "have", "has",
    "been", "being", "not", "out", "our", "your", "who", "what", "when", "where", "why", "how",
    "a", "an", "to", "of", "in", "on", "at", "by", "is", "it", "be", "me", "my", "us", "or",
];

/// Markers of a politely phrased request.
pub(crate) const POLITENESS_MARKERS: &[&str] = &[
    "please",
    "could you",
    "can you",
    "would you",
    "will you",
    "would you mind",
    "kindly",
    "i need you to",
    "i want you to",
    "i would like",
    "help me",
    "go ahead and",
    "let us",
];

/// Small-talk patterns, matched against normalized text.
pub(crate) static CONVERSATIONAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(?:hi|hey|hello|howdy|yo|sup|hiya|heya|greetings)\b",
        r"\bhow are you\b",
        r"\bhow is it going\b",
        r"\bwhat is up\b",
        r"\bgood (?:morning|afternoon|evening|night)\b",
        r"\b(?:thanks|thank you|cheers)\b",
        r"\bnothing much\b",
        r"\bnot much\b",
        r"\bwho are you\b",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

/// Help-request patterns.
pub(crate) static HELP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^help\b",
        r"\bwhat can you do\b",
        r"\bwhat do you do\b",
        r"\bwhat commands\b",
        r"\b(?:list|show)(?: me)?(?: the| your)? commands\b",
        r"\bhow do i use you\b",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

/// Status-inquiry patterns.
pub(crate) static STATUS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bare you (?:there|online|alive|awake|working|up)\b",
        r"\byou (?:there|alive|awake)\b",
        r"^ping\b",
        r"\bstatus\b",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

/// Greeting patterns used to pick a canned reply.
pub(crate) static GREETING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(?:hi|hey|hello|howdy|yo|sup|hiya|heya|greetings)\b",
        r"\bhow are you\b",
        r"\bhow is it going\b",
        r"\bwhat is up\b",
        r"\bgood (?:morning|afternoon|evening)\b",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

/// Returns the table entry for a command name.
pub(crate) fn lookup(
    table: &'static [(&'static str, &'static [&'static str])],
    command: &str,
) -> &'static [&'static str] {
    table
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, words)| *words)
        .unwrap_or_default()
}

/// Returns `true` when any pattern matches.
pub(crate) fn any_match(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(text))
}
