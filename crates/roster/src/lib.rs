//! # Roster Crate
//!
//! Participant records for a group: who they are, what topics they care
//! about, when they can meet, and where they are.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Participant, Availability, Day, TimeRange)
//! - **parser**: Load and validate a roster from JSON
//! - **error**: Error types for roster loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use roster::Roster;
//! use std::path::Path;
//!
//! let roster = Roster::load_from_file(Path::new("group.json"))?;
//! for participant in roster.participants() {
//!     println!("{} can meet on {:?}", participant.id, participant.availability.available_days());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{Result, RosterError};
pub use parser::Roster;
pub use types::{
    // Type aliases
    ParticipantId,
    // Core types
    Availability,
    ClockTime,
    Day,
    DayAvailability,
    Participant,
    TimeRange,
};
