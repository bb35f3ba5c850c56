//! Port contracts for the template registry.

pub mod repository;

#[cfg(test)]
pub use repository::MockTemplateRepository;
pub use repository::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult};
