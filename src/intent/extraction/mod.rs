//! Parameter extraction from free text.
//!
//! Each slot has a pure extractor that is safe on arbitrary input. The
//! per-template entry point runs the extractor for every placeholder the
//! template declares and tags values with their [`ParameterSource`].

mod amount;
mod channel;
mod duration;
mod id_shape;
mod message;
mod reason;
mod role;
mod user;

pub use amount::{extract_amount, parse_amount};
pub use channel::extract_channel;
pub use duration::extract_duration;
pub use id_shape::{DigitIdShape, IdShape, find_bare_id};
pub use message::extract_message;
pub use reason::extract_reason;
pub use role::extract_role;
pub use user::{extract_user, inline_mentions, strip_mentions};

use crate::intent::domain::{ExtractedParameters, ParameterSource, UserId};
use crate::template::domain::{CommandTemplate, SlotKind};

/// Runs the extractor for one slot.
///
/// `allow_bare_id` enables the bare identifier scan for user slots; it is
/// set only when the target template declares a user placeholder.
#[must_use]
pub fn extract_slot(
    slot: SlotKind,
    text: &str,
    mentions: &[UserId],
    allow_bare_id: bool,
    shape: &dyn IdShape,
) -> Option<String> {
    match slot {
        SlotKind::User => extract_user(text, mentions, allow_bare_id, shape),
        SlotKind::Reason => extract_reason(text),
        SlotKind::Amount => extract_amount(text).map(|amount| amount.to_string()),
        SlotKind::Duration => extract_duration(text),
        SlotKind::Message => extract_message(text),
        SlotKind::Role => extract_role(text),
        SlotKind::Channel => extract_channel(text),
    }
}

/// Extracts values for every known-slot placeholder the template declares.
///
/// User values equal to a platform-resolved mention are tagged
/// [`ParameterSource::Mention`]; everything else is
/// [`ParameterSource::Heuristic`]. Defaults are not applied here.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use parlance::intent::domain::ParameterSource;
/// use parlance::intent::extraction::{DigitIdShape, extract_for_template};
/// use parlance::template::domain::{CommandTemplate, TenantId};
///
/// let tenant = TenantId::new("guild-1").expect("valid tenant");
/// let template = CommandTemplate::builder(tenant, "warn", "warn {user} for {reason}", "/warn {user} {reason}")
///     .build(&DefaultClock)
///     .expect("valid template");
///
/// let params = extract_for_template(
///     "warn <@999> for being annoying",
///     &[],
///     &template,
///     &DigitIdShape::snowflake(),
/// );
/// assert_eq!(params.get("user"), Some("999"));
/// assert_eq!(params.get("reason"), Some("being annoying"));
/// assert_eq!(params.source("reason"), Some(ParameterSource::Heuristic));
/// ```
#[must_use]
pub fn extract_for_template(
    text: &str,
    mentions: &[UserId],
    template: &CommandTemplate,
    shape: &dyn IdShape,
) -> ExtractedParameters {
    let mut params = ExtractedParameters::new();
    for name in template.placeholders() {
        let Some(slot) = SlotKind::for_placeholder(&name) else {
            continue;
        };
        let Some(value) = extract_slot(slot, text, mentions, true, shape) else {
            continue;
        };
        let source = if slot == SlotKind::User
            && mentions.iter().any(|mention| mention.as_str() == value)
        {
            ParameterSource::Mention
        } else {
            ParameterSource::Heuristic
        };
        params.insert(name, value, source);
    }
    params
}

