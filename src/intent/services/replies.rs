//! Canned conversational replies.

use minijinja::Environment;
use serde_json::{Value, json};

use crate::intent::domain::ConversationalIntent;
use crate::intent::matching::lexicon::{GREETING_PATTERNS, HELP_PATTERNS, STATUS_PATTERNS, any_match};
use crate::template::domain::CommandTemplate;

const GREETING: &str = "Hey {{ author }}! I'm around and happy to help. \
Just tell me what you need in plain words.";
const STATUS: &str = "I'm online and listening{% if count %}, with {{ count }} \
command{{ 's' if count != 1 else '' }} ready to go{% endif %}.";
const HELP: &str = "Here are some things I can do: {{ names | join(', ') }}\
{% if more %} and {{ more }} more{% endif %}. Describe what you need and I'll pick the right one.";
const GENERIC: &str = "I'm not sure what you'd like me to do.\
{% if example %} Try something like \"{{ example }}\".{% endif %}";
const UNCONFIGURED: &str = "No commands are set up here yet, so there's nothing I can run. \
An admin can register some to get started.";
const CONFIRM: &str = "Did you mean /{{ name }}? That would run `{{ rendered }}`. Reply yes or no.";
const OPTIONS: &str = "I'm not sure which command you meant. \
Did you mean one of these: {{ names | join(', ') }}?";
const DECLINED: &str = "Okay, I won't run that.";

/// Classifies normalized text that matched no template.
#[must_use]
pub fn detect_conversational_intent(normalized: &str) -> ConversationalIntent {
    if any_match(&HELP_PATTERNS, normalized) {
        ConversationalIntent::HelpRequest
    } else if any_match(&STATUS_PATTERNS, normalized) {
        ConversationalIntent::StatusInquiry
    } else if any_match(&GREETING_PATTERNS, normalized) {
        ConversationalIntent::Greeting
    } else {
        ConversationalIntent::Generic
    }
}

/// Builds the canned reply for a conversational intent.
///
/// `templates` are the tenant's active templates; help replies list at most
/// `listing_limit` of them, most used first.
#[must_use]
pub fn conversational_reply(
    intent: ConversationalIntent,
    author: &str,
    templates: &[CommandTemplate],
    listing_limit: usize,
) -> String {
    let ranked = by_usage(templates);
    match intent {
        ConversationalIntent::Greeting => render(GREETING, &json!({ "author": author }), "Hey there!"),
        ConversationalIntent::StatusInquiry => render(
            STATUS,
            &json!({ "count": templates.len() }),
            "I'm online and listening.",
        ),
        ConversationalIntent::HelpRequest if !ranked.is_empty() => {
            let names: Vec<String> = ranked
                .iter()
                .take(listing_limit)
                .map(|template| format!("/{}", template.name()))
                .collect();
            let more = ranked.len().saturating_sub(names.len());
            render(
                HELP,
                &json!({ "names": names, "more": more }),
                "Describe what you need and I'll pick the right command.",
            )
        }
        ConversationalIntent::NoCommandsConfigured | ConversationalIntent::HelpRequest => {
            render(UNCONFIGURED, &Value::Null, UNCONFIGURED)
        }
        ConversationalIntent::Declined => render(DECLINED, &Value::Null, DECLINED),
        ConversationalIntent::Generic | ConversationalIntent::ModelResponse => {
            let example = ranked.first().map(|template| template.pattern());
            render(
                GENERIC,
                &json!({ "example": example }),
                "I'm not sure what you'd like me to do.",
            )
        }
    }
}

/// Builds the yes/no question for a proposed command.
#[must_use]
pub fn confirmation_question(name: &str, rendered: &str) -> String {
    render(
        CONFIRM,
        &json!({ "name": name, "rendered": rendered }),
        "Did you mean that command? Reply yes or no.",
    )
}

/// Builds the question listing candidate command names.
#[must_use]
pub fn options_question(names: &[String]) -> String {
    render(
        OPTIONS,
        &json!({ "names": names }),
        "I'm not sure which command you meant.",
    )
}

fn by_usage(templates: &[CommandTemplate]) -> Vec<&CommandTemplate> {
    let mut ranked: Vec<&CommandTemplate> = templates.iter().collect();
    ranked.sort_by(|left, right| {
        right
            .usage_count()
            .cmp(&left.usage_count())
            .then_with(|| left.name().cmp(right.name()))
    });
    ranked
}

fn render(template: &str, context: &Value, fallback: &str) -> String {
    Environment::new()
        .render_str(template, context)
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "reply template failed to render, using fallback");
            fallback.to_owned()
        })
}
