//! Error types for the roster crate.
//!
//! Loading a roster can fail on I/O, on malformed JSON, or on records that
//! violate the participant invariants (empty or duplicated identifiers).
//! Availability entries are never a source of errors here: a time range
//! that cannot be parsed simply leaves that day unavailable.

use thiserror::Error;

/// Errors that can occur while loading or validating participants
#[derive(Error, Debug)]
pub enum RosterError {
    /// Roster file could not be found
    #[error("Failed to open roster file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the roster
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Roster JSON could not be decoded
    #[error("Invalid roster JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A clock time was not in `HH:MM` form
    #[error("Invalid clock time: {value}")]
    InvalidTime { value: String },

    /// A field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two participants share the same identifier
    #[error("Duplicate participant id: {id}")]
    DuplicateParticipant { id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RosterError>;
