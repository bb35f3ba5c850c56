//! Natural-language intent resolution.
//!
//! Utterances are matched against a tenant's command templates and turned
//! into an execute, clarify, or converse decision. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Slot extractors in [`extraction`]
//! - Heuristic and model-backed matchers in [`matching`]
//! - Conversation memory in [`context`]
//! - The resolution policy in [`services`]

pub mod config;
pub mod context;
pub mod domain;
pub mod extraction;
pub mod matching;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
