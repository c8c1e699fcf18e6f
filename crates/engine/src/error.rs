//! Error types for the engine crate.

use thiserror::Error;

/// Errors returned by the recommendation engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The input cannot produce a recommendation (e.g. no participants)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
