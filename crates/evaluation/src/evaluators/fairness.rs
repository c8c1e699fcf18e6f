//! Weighted fairness score.
//!
//! fairness = round(0.7 * raw_attendance + 0.3 * topic_interest)
//!
//! where topic_interest is the share of a candidate's attendees who list
//! the group's dominant topic, rounded to a whole percentage. Availability
//! dominates; topical fit breaks near-ties.

use crate::traits::Evaluator;
use roster::Participant;
use slots::{Candidate, GroupContext};
use std::collections::HashMap;

/// Default weight of the raw attendance score
pub const DEFAULT_AVAILABILITY_WEIGHT: f64 = 0.7;
/// Default weight of the topic-interest score
pub const DEFAULT_INTEREST_WEIGHT: f64 = 0.3;

/// Computes the fairness score for a candidate.
///
/// ## Algorithm
/// 1. Resolve the candidate's attendee ids against the participant list
/// 2. Count attendees interested in the dominant topic
/// 3. topic_interest = round(100 * interested / attendees), 0 if nobody attends
/// 4. Blend with the raw attendance score and round
pub struct FairnessEvaluator {
    availability_weight: f64,
    interest_weight: f64,
}

impl FairnessEvaluator {
    pub fn new() -> Self {
        Self {
            availability_weight: DEFAULT_AVAILABILITY_WEIGHT,
            interest_weight: DEFAULT_INTEREST_WEIGHT,
        }
    }

    /// Configure the blend (default: 0.7 availability, 0.3 interest)
    pub fn with_weights(mut self, availability: f64, interest: f64) -> Self {
        self.availability_weight = availability;
        self.interest_weight = interest;
        self
    }

    /// Share of attendees interested in `topic`, as a rounded percentage
    pub fn topic_interest_score(
        &self,
        candidate: &Candidate,
        participants: &[Participant],
        topic: &str,
    ) -> u8 {
        if candidate.attendees.is_empty() {
            return 0;
        }

        let by_id: HashMap<&str, &Participant> =
            participants.iter().map(|p| (p.id.as_str(), p)).collect();

        let interested = candidate
            .attendees
            .iter()
            .filter(|id| {
                by_id
                    .get(id.as_str())
                    .is_some_and(|p| p.is_interested_in(topic))
            })
            .count();

        let pct = (100.0 * interested as f64 / candidate.attendees.len() as f64).round();
        pct.clamp(0.0, 100.0) as u8
    }

    /// Blend a raw attendance score with a topic-interest score
    pub fn fairness_score(&self, raw_score: u8, topic_interest: u8) -> u8 {
        let blended = self.availability_weight * f64::from(raw_score)
            + self.interest_weight * f64::from(topic_interest);
        blended.round().clamp(0.0, 100.0) as u8
    }
}

impl Default for FairnessEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for FairnessEvaluator {
    fn name(&self) -> &str {
        "FairnessEvaluator"
    }

    fn evaluate(
        &self,
        candidate: Candidate,
        participants: &[Participant],
        context: &GroupContext,
    ) -> Candidate {
        let interest =
            self.topic_interest_score(&candidate, participants, &context.dominant_topic);
        let fairness = self.fairness_score(candidate.raw_score, interest);
        candidate.with_fairness(fairness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::Day;
    use slots::{SlotEnumerator, build_group_context};

    fn group() -> Vec<Participant> {
        vec![
            Participant::new("a")
                .with_topics(["AI"])
                .with_day(Day::Monday, "09:00", "17:00"),
            Participant::new("b")
                .with_topics(["AI", "Design"])
                .with_day(Day::Monday, "09:00", "13:00"),
            Participant::new("c")
                .with_topics(["Design"])
                .with_day(Day::Monday, "13:00", "17:00"),
        ]
    }

    #[test]
    fn test_fairness_formula() {
        let evaluator = FairnessEvaluator::new();
        assert_eq!(evaluator.fairness_score(100, 100), 100);
        assert_eq!(evaluator.fairness_score(67, 50), 62); // 46.9 + 15 = 61.9
        assert_eq!(evaluator.fairness_score(50, 0), 35);
        assert_eq!(evaluator.fairness_score(0, 0), 0);
    }

    #[test]
    fn test_topic_interest_among_attendees() {
        let participants = group();
        let context = build_group_context(&participants);
        assert_eq!(context.dominant_topic, "AI");

        let candidates = SlotEnumerator::new().get_candidates(&participants, &context);
        let evaluator = FairnessEvaluator::new();

        // MON morning: a and b, both into AI
        let morning = &candidates[0];
        assert_eq!(
            evaluator.topic_interest_score(morning, &participants, "AI"),
            100
        );

        // MON afternoon: a and c, only a into AI
        let afternoon = &candidates[1];
        assert_eq!(afternoon.attendees, vec!["a", "c"]);
        assert_eq!(
            evaluator.topic_interest_score(afternoon, &participants, "AI"),
            50
        );

        // MON evening: nobody
        let evening = &candidates[2];
        assert_eq!(
            evaluator.topic_interest_score(evening, &participants, "AI"),
            0
        );
    }

    #[test]
    fn test_evaluate_sets_fairness() {
        let participants = group();
        let context = build_group_context(&participants);
        let candidates = SlotEnumerator::new().get_candidates(&participants, &context);
        let evaluator = FairnessEvaluator::new();

        let afternoon = evaluator.evaluate(candidates[1].clone(), &participants, &context);
        // raw 67, interest 50
        assert_eq!(afternoon.raw_score, 67);
        assert_eq!(afternoon.fairness_score, Some(62));

        let evening = evaluator.evaluate(candidates[2].clone(), &participants, &context);
        assert_eq!(evening.fairness_score, Some(0));
    }

    #[test]
    fn test_custom_weights() {
        let evaluator = FairnessEvaluator::new().with_weights(0.5, 0.5);
        assert_eq!(evaluator.fairness_score(80, 40), 60);
    }
}
