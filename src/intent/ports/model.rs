//! Generative model port.
//!
//! The engine sends one prompt per utterance and tolerates prose around the
//! JSON payload in the reply.

use async_trait::async_trait;
use thiserror::Error;

/// Result type for generative model calls.
pub type GenerativeModelResult<T> = Result<T, GenerativeModelError>;

/// Text-generation contract for the model-backed matcher.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Returns the raw model text for a prompt.
    ///
    /// # Errors
    ///
    /// Returns [`GenerativeModelError`] when the provider cannot be reached
    /// or refuses the request.
    async fn generate(&self, prompt: &str) -> GenerativeModelResult<String>;

    /// Returns the model name for logging.
    fn model_name(&self) -> &str;
}

/// Errors returned by generative model adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerativeModelError {
    /// The provider could not be reached.
    #[error("model transport failure: {0}")]
    Transport(String),

    /// The provider rejected the request (quota, safety, auth).
    #[error("model rejected the request: {0}")]
    Rejected(String),
}
