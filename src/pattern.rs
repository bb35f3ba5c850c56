//! Shared helpers for statically known regular expressions.

use regex::Regex;

/// Compiles a regular expression literal.
///
/// Every caller passes a string literal that the unit tests exercise, so a
/// failure here is a programming error rather than a runtime condition.
#[expect(
    clippy::expect_used,
    reason = "only compile-time literal patterns reach this helper"
)]
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regular expression must compile")
}
