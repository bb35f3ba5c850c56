//! Port contracts consumed by the resolution engine.
//!
//! Template persistence lives in [`crate::template::ports`]; this module holds
//! the generative model collaborator.

pub mod model;

#[cfg(test)]
pub use model::MockGenerativeModel;
pub use model::{GenerativeModel, GenerativeModelError, GenerativeModelResult};
