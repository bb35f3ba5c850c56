//! Application services for the template registry.

mod discovery;
mod pattern_generator;

pub use discovery::{DiscoveryReport, SkippedSchema, TemplateDiscoveryService};
pub use pattern_generator::{GeneratedPattern, PatternGenerator};
