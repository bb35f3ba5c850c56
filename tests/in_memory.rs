//! In-memory integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `template_repository_tests`: Registration, lookup, lifecycle, usage
//! - `resolution_flow_tests`: Tenant-scoped resolution end to end
//! - `conversation_memory_tests`: Reply linking and prompt context

mod in_memory {
    pub mod helpers;

    mod conversation_memory_tests;
    mod resolution_flow_tests;
    mod template_repository_tests;
}
