//! Domain model for the command template registry.
//!
//! Templates pair a natural-language pattern such as `ban {user} for {reason}`
//! with an output template such as `/ban {user} {reason}`. All types are pure
//! and serialisable via serde.

mod error;
mod ids;
mod placeholder;
mod schema;
mod slot;
mod status;
mod template;

pub use error::TemplateDomainError;
pub use ids::{TemplateId, TenantId};
pub use placeholder::{fill_placeholders, placeholders, strip_placeholders};
pub use schema::{CommandParameterSpec, CommandParameterType, CommandSchema};
pub use slot::SlotKind;
pub use status::TemplateStatus;
pub use template::{CommandTemplate, CommandTemplateBuilder};
