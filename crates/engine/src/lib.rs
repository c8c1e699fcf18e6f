//! Recommendation engine for group meetings.
//!
//! This crate ties the pipeline together: it takes a participant list and
//! returns the best (day, window, location) for the group, the runner-ups,
//! and the fairness and distance numbers behind them.
//!
//! ```ignore
//! use engine::RecommendationEngine;
//!
//! let outcome = RecommendationEngine::new().recommend(roster.participants())?;
//! println!("{} on {}", outcome.best_option.title, outcome.best_option.day);
//! ```

pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod outcome;

pub use config::EngineConfig;
pub use engine::{RecommendationEngine, recommend};
pub use error::{EngineError, Result};
pub use outcome::{Outcome, OutcomeStats, SlotAttendance};
