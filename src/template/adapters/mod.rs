//! Adapter implementations for template registry ports.

pub mod memory;
