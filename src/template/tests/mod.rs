//! Unit tests for the template registry.
