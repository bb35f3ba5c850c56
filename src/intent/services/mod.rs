//! Application services for intent resolution.

mod confirmation;
mod replies;
mod resolution;

pub use confirmation::{FollowUp, classify_follow_up};
pub use replies::{
    confirmation_question, conversational_reply, detect_conversational_intent, options_question,
};
pub use resolution::{IntentResolutionService, ResolutionError, ResolutionResult};
