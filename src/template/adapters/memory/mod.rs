//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! tests and for hosts that keep templates in process.

mod repository;

pub use repository::InMemoryTemplateRepository;
