//! Prompt rendering for the model-backed matcher.

use minijinja::Environment;
use serde_json::{Map, Value, json};

use crate::intent::domain::ConversationTurn;
use crate::intent::matching::{MatchRequest, MatcherError};

const PROMPT_TEMPLATE: &str = r#"You map chat messages to bot commands for a community server.

Available commands:
{% for command in commands -%}
- id: {{ command.id }}
  name: {{ command.name }}
  pattern: {{ command.pattern }}
  output: {{ command.output }}
{%- if command.aliases %}
  also phrased as: {{ command.aliases | join(", ") }}
{%- endif %}
{% endfor %}
{%- if linked_reply %}
The user is replying to this earlier bot message:
"{{ linked_reply }}"
{% endif %}
{%- if recent %}
Recent conversation, oldest first:
{% for turn in recent -%}
- {{ turn.speaker }}: {{ turn.content }}
{% endfor %}
{%- endif %}
Message from {{ author }}:
"{{ message }}"

Answer with a single JSON object and nothing else.
If the message asks for one of the commands, answer
{"commandId": "<id>", "confidence": <0-100>, "params": {"<placeholder>": "<value>"}}
using only placeholders that appear in that command's pattern or output.
Otherwise answer {"conversationalResponse": "<short friendly reply>"}.
"#;

/// Renders the model prompt for a request.
///
/// Lists every supplied template with identifier, pattern, output and
/// aliases, then the linked bot reply and at most `recent_turns` recent
/// turns, then the utterance.
///
/// # Errors
///
/// Returns [`MatcherError::Prompt`] when rendering fails.
pub fn build_prompt(request: &MatchRequest<'_>, recent_turns: usize) -> Result<String, MatcherError> {
    let environment = Environment::new();
    environment
        .render_str(PROMPT_TEMPLATE, build_prompt_context(request, recent_turns))
        .map_err(|error| MatcherError::Prompt(error.to_string()))
}

fn build_prompt_context(request: &MatchRequest<'_>, recent_turns: usize) -> Map<String, Value> {
    let commands: Vec<Value> = request
        .templates
        .iter()
        .map(|template| {
            json!({
                "id": template.id().to_string(),
                "name": template.name(),
                "pattern": template.pattern(),
                "output": template.output_template(),
                "aliases": template.aliases(),
            })
        })
        .collect();

    let current = request.utterance.message_id();
    let earlier: Vec<&ConversationTurn> = request
        .context
        .recent
        .iter()
        .filter(|turn| &turn.message_id != current)
        .collect();
    let skip = earlier.len().saturating_sub(recent_turns);
    let recent: Vec<Value> = earlier.into_iter().skip(skip).map(describe_turn).collect();

    let mut context = Map::new();
    context.insert("commands".to_owned(), Value::Array(commands));
    context.insert("recent".to_owned(), Value::Array(recent));
    context.insert(
        "linked_reply".to_owned(),
        request
            .context
            .linked_reply
            .as_ref()
            .map_or(Value::Null, |turn| Value::String(turn.content.clone())),
    );
    context.insert(
        "author".to_owned(),
        Value::String(request.utterance.author().name.clone()),
    );
    context.insert(
        "message".to_owned(),
        Value::String(request.utterance.content().to_owned()),
    );
    context
}

fn describe_turn(turn: &ConversationTurn) -> Value {
    let speaker = if turn.is_bot_authored {
        "bot".to_owned()
    } else {
        format!("user {}", turn.author_id)
    };
    json!({ "speaker": speaker, "content": turn.content })
}
