//! Unit tests for intent resolution.

mod config_tests;
mod extraction_tests;
mod support;
