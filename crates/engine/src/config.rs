//! Engine configuration.
//!
//! Defaults are the documented constants; overriding them is meant for
//! experiments and tests, not for production groups.

use evaluation::evaluators::fairness::{DEFAULT_AVAILABILITY_WEIGHT, DEFAULT_INTEREST_WEIGHT};
use slots::{DEFAULT_MIN_OVERLAP_MINUTES, SlotCatalogue};

/// Number of runner-up options returned next to the best one
pub const DEFAULT_ALTERNATIVES: usize = 3;

/// Groups at or below this size get the illustrative demo result
pub const DEFAULT_DEMO_THRESHOLD: usize = 1;

/// Tunable knobs of the recommendation engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Days and windows to enumerate
    pub catalogue: SlotCatalogue,
    /// Minimum shared minutes for a participant to attend a slot
    pub min_overlap_minutes: u32,
    /// Maximum number of alternatives in an outcome
    pub alternatives: usize,
    /// Weight of raw attendance in the fairness blend
    pub availability_weight: f64,
    /// Weight of topic interest in the fairness blend
    pub interest_weight: f64,
    /// Largest group size that triggers the demo substitution
    pub demo_threshold: usize,
}

impl EngineConfig {
    pub fn with_catalogue(mut self, catalogue: SlotCatalogue) -> Self {
        self.catalogue = catalogue;
        self
    }

    pub fn with_min_overlap_minutes(mut self, minutes: u32) -> Self {
        self.min_overlap_minutes = minutes;
        self
    }

    pub fn with_alternatives(mut self, alternatives: usize) -> Self {
        self.alternatives = alternatives;
        self
    }

    pub fn with_weights(mut self, availability: f64, interest: f64) -> Self {
        self.availability_weight = availability;
        self.interest_weight = interest;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalogue: SlotCatalogue::default(),
            min_overlap_minutes: DEFAULT_MIN_OVERLAP_MINUTES,
            alternatives: DEFAULT_ALTERNATIVES,
            availability_weight: DEFAULT_AVAILABILITY_WEIGHT,
            interest_weight: DEFAULT_INTEREST_WEIGHT,
            demo_threshold: DEFAULT_DEMO_THRESHOLD,
        }
    }
}
