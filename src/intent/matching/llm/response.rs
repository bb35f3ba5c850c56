//! Parsing of raw model replies.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::intent::matching::MatcherError;

/// A parsed model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply {
    /// The model proposed a template.
    Command {
        /// Identifier of the proposed template, as returned.
        command_id: String,
        /// Confidence normalized into `[0, 1]`.
        confidence: f64,
        /// Placeholder values as strings.
        params: BTreeMap<String, String>,
    },
    /// The model answered conversationally.
    Conversational(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawReply {
    Command {
        #[serde(rename = "commandId", alias = "command_id")]
        command_id: String,
        #[serde(default)]
        confidence: Value,
        #[serde(default)]
        params: BTreeMap<String, Value>,
    },
    Conversational {
        #[serde(rename = "conversationalResponse", alias = "conversational_response")]
        conversational_response: String,
    },
}

const CONFIDENCE_SCALE: f64 = 100.0;

/// Parses a model reply, tolerating prose around the JSON object.
///
/// Confidence is read on a 0 to 100 scale and normalized into `[0, 1]`.
///
/// # Errors
///
/// Returns [`MatcherError::MalformedResponse`] when no JSON object is found
/// or the object matches neither reply shape.
///
/// # Examples
///
/// ```
/// use parlance::intent::matching::{ModelReply, parse_model_reply};
///
/// let reply = parse_model_reply(
///     r#"Sure! {"commandId": "abc", "confidence": 85, "params": {"amount": 5}} Hope that helps."#,
/// )
/// .expect("parseable reply");
///
/// let ModelReply::Command { command_id, confidence, params } = reply else {
///     panic!("expected a command reply");
/// };
/// assert_eq!(command_id, "abc");
/// assert!((confidence - 0.85).abs() < 1e-9);
/// assert_eq!(params.get("amount").map(String::as_str), Some("5"));
/// ```
pub fn parse_model_reply(raw: &str) -> Result<ModelReply, MatcherError> {
    let object = first_json_object(raw)
        .ok_or_else(|| MatcherError::MalformedResponse("no JSON object in reply".to_owned()))?;
    let reply: RawReply = serde_json::from_str(object)
        .map_err(|error| MatcherError::MalformedResponse(error.to_string()))?;
    Ok(match reply {
        RawReply::Command {
            command_id,
            confidence,
            params,
        } => ModelReply::Command {
            command_id: command_id.trim().to_owned(),
            confidence: normalize_confidence(&confidence),
            params: params
                .into_iter()
                .filter_map(|(name, value)| value_text(value).map(|text| (name, text)))
                .collect(),
        },
        RawReply::Conversational {
            conversational_response,
        } => ModelReply::Conversational(conversational_response.trim().to_owned()),
    })
}

/// Returns the first balanced `{...}` object in `text`.
///
/// Braces inside JSON strings, including escaped quotes, are ignored.
#[must_use]
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in text.get(start..)?.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return text.get(start..=start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn normalize_confidence(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(number) => number.as_f64().unwrap_or_default(),
        Value::String(text) => text.trim().trim_end_matches('%').parse().unwrap_or_default(),
        _ => 0.0,
    };
    let scaled = raw / CONFIDENCE_SCALE;
    if scaled.is_finite() {
        scaled.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}
