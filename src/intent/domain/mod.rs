//! Domain types for intent resolution.
//!
//! Utterances come in, decisions go out. Everything here is pure data with
//! no infrastructure dependencies.

mod candidate;
mod conversation;
mod decision;
mod ids;
mod parameters;
mod utterance;

pub use candidate::{MatchCandidate, MatchOrigin, rank_candidates};
pub use conversation::{ConversationContext, ConversationTurn};
pub use decision::{ConversationalIntent, ResolutionDecision};
pub use ids::{ChannelId, MessageId, UserId};
pub use parameters::{ExtractedParameters, ParameterSource, ParameterValue};
pub use utterance::{Author, Utterance};
