//! Parlance: natural-language command resolution for chat bots.
//!
//! This crate turns free-form chat messages into structured invocations of
//! a server's registered commands, asks for clarification when unsure, and
//! answers conversationally when nothing applies.
//!
//! # Architecture
//!
//! Parlance follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`template`]: Command templates, pattern generation, and discovery
//! - [`intent`]: Parameter extraction, matching, and the resolution policy

pub mod intent;
mod pattern;
pub mod template;
