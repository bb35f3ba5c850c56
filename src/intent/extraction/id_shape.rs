//! Platform identifier shapes for bare-id detection.

use std::fmt;

/// Recognizes a bare platform user identifier inside free text.
///
/// Implementations describe the token shape only; they never consult the
/// platform. Hosts on other platforms plug in their own shape.
pub trait IdShape: Send + Sync + fmt::Debug {
    /// Returns `true` when `token` looks like a user identifier.
    fn matches(&self, token: &str) -> bool;
}

/// Digit-only identifiers within a length range.
///
/// # Examples
///
/// ```
/// use parlance::intent::extraction::{DigitIdShape, IdShape};
///
/// let shape = DigitIdShape::snowflake();
/// assert!(shape.matches("123456789012345678"));
/// assert!(!shape.matches("12345"));
/// assert!(!shape.matches("12345678901234567a"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitIdShape {
    min_len: usize,
    max_len: usize,
}

impl DigitIdShape {
    /// Creates a shape accepting `min_len..=max_len` ASCII digits.
    #[must_use]
    pub const fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    /// Snowflake-style identifiers: 17 to 19 digits.
    #[must_use]
    pub const fn snowflake() -> Self {
        Self::new(17, 19)
    }
}

impl Default for DigitIdShape {
    fn default() -> Self {
        Self::snowflake()
    }
}

impl IdShape for DigitIdShape {
    fn matches(&self, token: &str) -> bool {
        (self.min_len..=self.max_len).contains(&token.len())
            && token.bytes().all(|byte| byte.is_ascii_digit())
    }
}

/// Returns the first token in `text` matching `shape`.
#[must_use]
pub fn find_bare_id(text: &str, shape: &dyn IdShape) -> Option<String> {
    text.split(|ch: char| !ch.is_ascii_alphanumeric())
        .find(|token| shape.matches(token))
        .map(ToOwned::to_owned)
}
