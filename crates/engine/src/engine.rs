//! # Recommendation Engine
//!
//! Coordinates the recommendation pipeline for one group:
//! 1. Validate input
//! 2. Build the group context (topic tally, dominant topic, locations)
//! 3. Enumerate and score every (day, window) slot
//! 4. Rank slots by attendance, keep the best and the runner-ups
//! 5. Evaluate fairness and distance for the survivors
//! 6. Apply the demo substitution for single-person groups
//! 7. Assemble the Outcome
//!
//! The engine does no I/O and keeps no state between calls, so one
//! instance can be shared across threads behind an `Arc`.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, instrument};

use evaluation::{DistanceEvaluator, EvaluationPipeline, FairnessEvaluator};
use roster::Participant;
use slots::{Candidate, SlotEnumerator, build_group_context, rank_candidates};

use crate::config::EngineConfig;
use crate::demo::apply_demo_policy;
use crate::error::{EngineError, Result};
use crate::outcome::{Outcome, OutcomeStats};

/// Main engine that turns a participant list into an Outcome
pub struct RecommendationEngine {
    enumerator: SlotEnumerator,
    evaluation: EvaluationPipeline,
    alternatives: usize,
    demo_threshold: usize,
}

impl RecommendationEngine {
    /// Create an engine with the documented defaults
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine from an explicit configuration
    pub fn with_config(config: EngineConfig) -> Self {
        let enumerator = SlotEnumerator::new()
            .with_catalogue(config.catalogue)
            .with_min_overlap_minutes(config.min_overlap_minutes);
        let evaluation = EvaluationPipeline::new()
            .add_evaluator(
                FairnessEvaluator::new()
                    .with_weights(config.availability_weight, config.interest_weight),
            )
            .add_evaluator(DistanceEvaluator::new());

        Self {
            enumerator,
            evaluation,
            alternatives: config.alternatives,
            demo_threshold: config.demo_threshold,
        }
    }

    /// Main entry point: recommend a slot for a group
    ///
    /// # Arguments
    /// * `participants` - The group, in the order it was collected
    ///
    /// # Returns
    /// The best option plus up to three alternatives, or
    /// `EngineError::InvalidInput` for an empty group
    #[instrument(skip_all, fields(participants = participants.len()))]
    pub fn recommend(&self, participants: &[Participant]) -> Result<Outcome> {
        let start_time = Instant::now();

        if participants.is_empty() {
            return Err(EngineError::InvalidInput(
                "cannot recommend a slot for a group with no participants".to_string(),
            ));
        }

        // Group-wide aggregates
        let context = build_group_context(participants);
        debug!(
            "Dominant topic '{}' across {} participants ({} distinct locations)",
            context.dominant_topic, context.total_participants, context.unique_locations
        );

        // Score every slot, then rank
        let candidates = self.enumerator.get_candidates(participants, &context);
        let stats = OutcomeStats::collect(&context, &candidates);
        let (best, alternatives) = self.select(rank_candidates(candidates))?;
        debug!(
            "Best slot {} ({}%), {} alternatives",
            best.slot_label(),
            best.raw_score,
            alternatives.len()
        );

        // Evaluate survivors only
        let best = self.evaluation.evaluate(best, participants, &context);
        let alternatives: Vec<Candidate> = alternatives
            .into_iter()
            .map(|alt| {
                self.evaluation
                    .evaluate(alt, participants, &context)
                    .as_alternative()
            })
            .collect();

        let is_demo_data = participants.len() <= self.demo_threshold;
        let (best, alternatives) = if is_demo_data {
            debug!("Group too small to score, substituting illustrative numbers");
            apply_demo_policy(best, alternatives)
        } else {
            (best, alternatives)
        };

        let fairness_score = best.fairness_score.unwrap_or_default();
        info!(
            "Recommended '{}' on {} at {} (fairness {}, demo: {}) in {:.2?}",
            best.title,
            best.day,
            best.location,
            fairness_score,
            is_demo_data,
            start_time.elapsed()
        );

        Ok(Outcome {
            best_option: best,
            alternatives,
            fairness_score,
            computed_at: Utc::now(),
            stats: Some(stats),
            total_participants: participants.len(),
            is_demo_data,
            explanation: None,
            is_ai_generated: None,
        })
    }

    /// Split the ranked list into the best option and its runner-ups
    fn select(&self, ranked: Vec<Candidate>) -> Result<(Candidate, Vec<Candidate>)> {
        let mut ranked = ranked.into_iter();
        let best = ranked.next().ok_or_else(|| {
            EngineError::InvalidInput("slot catalogue has no days or windows".to_string())
        })?;
        let alternatives = ranked.take(self.alternatives).collect();
        Ok((best, alternatives))
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommend with the default engine
pub fn recommend(participants: &[Participant]) -> Result<Outcome> {
    RecommendationEngine::new().recommend(participants)
}
