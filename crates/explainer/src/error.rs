//! Error types for the explainer crate.
//!
//! None of these reach the caller of `Explainer::annotate`: every failure
//! ends in the fallback text. They exist so backends can tell the loop
//! whether the next model is worth trying.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while asking a backend for an explanation
#[derive(Error, Debug)]
pub enum ExplainerError {
    /// The service rejected the API key; no other model will accept it either
    #[error("API key rejected by {backend}: {message}")]
    InvalidCredential { backend: String, message: String },

    /// No API key configured
    #[error("No API key configured")]
    MissingApiKey,

    /// The service answered with a non-success status
    #[error("HTTP {status} from {backend}: {message}")]
    Http {
        backend: String,
        status: u16,
        message: String,
    },

    /// The request never completed
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend did not answer in time
    #[error("No answer within {0:?}")]
    Timeout(Duration),

    /// The answer could not be used as an explanation
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ExplainerError {
    /// Whether trying further models is pointless
    pub fn is_invalid_credential(&self) -> bool {
        matches!(self, ExplainerError::InvalidCredential { .. })
    }

    /// Whether the model itself was not found for this key
    pub fn is_model_not_found(&self) -> bool {
        matches!(self, ExplainerError::Http { status: 404, .. })
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ExplainerError>;
