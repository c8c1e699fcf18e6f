//! The EvaluationPipeline runs several evaluators over a candidate.
//!
//! Evaluators are chained with the builder pattern and applied in the
//! order they were added.

use crate::evaluators::{DistanceEvaluator, FairnessEvaluator};
use crate::traits::Evaluator;
use roster::Participant;
use slots::{Candidate, GroupContext};
use tracing::debug;

/// Chains evaluators into one pass.
///
/// ## Usage
/// ```ignore
/// let pipeline = EvaluationPipeline::new()
///     .add_evaluator(FairnessEvaluator::new())
///     .add_evaluator(DistanceEvaluator::new());
///
/// let best = pipeline.evaluate(best, participants, &context);
/// ```
pub struct EvaluationPipeline {
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl EvaluationPipeline {
    /// Create a new empty EvaluationPipeline.
    pub fn new() -> Self {
        Self {
            evaluators: Vec::new(),
        }
    }

    /// Fairness followed by distance, with their default constants
    pub fn standard() -> Self {
        Self::new()
            .add_evaluator(FairnessEvaluator::new())
            .add_evaluator(DistanceEvaluator::new())
    }

    /// Add an evaluator to the pipeline (builder pattern).
    pub fn add_evaluator(mut self, evaluator: impl Evaluator + 'static) -> Self {
        self.evaluators.push(Box::new(evaluator));
        self
    }

    /// Apply every evaluator in sequence to one candidate.
    pub fn evaluate(
        &self,
        candidate: Candidate,
        participants: &[Participant],
        context: &GroupContext,
    ) -> Candidate {
        let mut current = candidate;
        for evaluator in &self.evaluators {
            debug!(
                "Applying evaluator: {} to {}",
                evaluator.name(),
                current.slot_label()
            );
            current = evaluator.evaluate(current, participants, context);
        }
        current
    }

    /// Evaluate a list of candidates, preserving order
    pub fn evaluate_all(
        &self,
        candidates: Vec<Candidate>,
        participants: &[Participant],
        context: &GroupContext,
    ) -> Vec<Candidate> {
        candidates
            .into_iter()
            .map(|candidate| self.evaluate(candidate, participants, context))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }
}

impl Default for EvaluationPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::Day;
    use slots::{SlotEnumerator, build_group_context};

    fn setup() -> (Vec<Participant>, GroupContext, Vec<Candidate>) {
        let participants = vec![
            Participant::new("a")
                .with_topics(["AI"])
                .with_location("Berlin")
                .with_day(Day::Tuesday, "09:00", "13:00"),
        ];
        let context = build_group_context(&participants);
        let candidates = SlotEnumerator::new().get_ranked_candidates(&participants, &context);
        (participants, context, candidates)
    }

    #[test]
    fn test_empty_pipeline() {
        let (participants, context, candidates) = setup();
        let pipeline = EvaluationPipeline::new();
        assert!(pipeline.is_empty());

        let evaluated = pipeline.evaluate(candidates[0].clone(), &participants, &context);
        assert_eq!(evaluated, candidates[0]);
    }

    #[test]
    fn test_single_evaluator() {
        let (participants, context, candidates) = setup();
        let pipeline = EvaluationPipeline::new().add_evaluator(DistanceEvaluator::new());

        let evaluated = pipeline.evaluate(candidates[0].clone(), &participants, &context);
        assert_eq!(evaluated.avg_distance, Some(1.5));
        assert_eq!(evaluated.fairness_score, None);
    }

    #[test]
    fn test_standard_pipeline_preserves_order() {
        let (participants, context, candidates) = setup();
        let pipeline = EvaluationPipeline::standard();
        assert_eq!(pipeline.len(), 2);

        let top: Vec<Candidate> = candidates.into_iter().take(4).collect();
        let labels: Vec<String> = top.iter().map(Candidate::slot_label).collect();
        let evaluated = pipeline.evaluate_all(top, &participants, &context);

        let evaluated_labels: Vec<String> = evaluated.iter().map(Candidate::slot_label).collect();
        assert_eq!(labels, evaluated_labels);
        assert_eq!(evaluated[0].slot_label(), "TUE Morning Session");
        assert_eq!(evaluated[0].fairness_score, Some(100));
        assert!(evaluated.iter().all(|c| c.avg_distance == Some(1.5)));
    }
}
