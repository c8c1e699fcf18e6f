//! # Slots Crate
//!
//! Candidate generation for group meetings.
//!
//! ## Components
//!
//! ### Topic Aggregation
//! Tallies interests across the group and picks the dominant topic, which
//! names every candidate.
//!
//! ### Slot Enumeration
//! Crosses the fixed day list with the fixed window list, decides per
//! participant whether they can attend each slot (at least 60 minutes of
//! overlap), and ranks the slots by attendance.
//!
//! ## Example Usage
//!
//! ```ignore
//! use slots::{build_group_context, SlotEnumerator};
//!
//! let context = build_group_context(roster.participants());
//! let ranked = SlotEnumerator::new().get_ranked_candidates(roster.participants(), &context);
//! println!("Best slot: {}", ranked[0].slot_label());
//! ```

// Public modules
pub mod candidate;
pub mod enumerator;
pub mod group_context;
pub mod topic;
pub mod window;

// Re-export commonly used types
pub use candidate::{Candidate, ONLINE_LOCATION};
pub use enumerator::{
    DEFAULT_MIN_OVERLAP_MINUTES, SlotEnumerator, attendance_score, consensus_location,
    rank_candidates,
};
pub use group_context::{GroupContext, build_group_context};
pub use topic::{DEFAULT_TOPIC, TopicCount, TopicTally};
pub use window::{SlotCatalogue, TimeWindow};
