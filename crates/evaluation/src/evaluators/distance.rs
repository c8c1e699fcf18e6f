//! Location-consensus distance heuristic.
//!
//! No coordinates are collected, so travel burden is approximated by how
//! scattered the whole group is: every distinct location string adds a
//! fixed penalty, with a floor for a group that all shares one place.

use crate::traits::Evaluator;
use roster::Participant;
use slots::{Candidate, GroupContext};

/// Smallest distance ever reported (km)
pub const MIN_DISTANCE_KM: f64 = 0.5;
/// Penalty per distinct location in the group (km)
pub const KM_PER_LOCATION: f64 = 1.5;

/// Attaches the distance heuristic to a candidate.
///
/// The value depends on the group, not on the candidate's attendees, so
/// every candidate of one recommendation gets the same distance.
pub struct DistanceEvaluator {
    min_distance_km: f64,
    km_per_location: f64,
}

impl DistanceEvaluator {
    pub fn new() -> Self {
        Self {
            min_distance_km: MIN_DISTANCE_KM,
            km_per_location: KM_PER_LOCATION,
        }
    }

    /// max(0.5, unique_locations * 1.5)
    pub fn distance_km(&self, unique_locations: usize) -> f64 {
        (unique_locations as f64 * self.km_per_location).max(self.min_distance_km)
    }
}

impl Default for DistanceEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for DistanceEvaluator {
    fn name(&self) -> &str {
        "DistanceEvaluator"
    }

    fn evaluate(
        &self,
        candidate: Candidate,
        _participants: &[Participant],
        context: &GroupContext,
    ) -> Candidate {
        candidate.with_distance(self.distance_km(context.unique_locations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::Day;
    use slots::{SlotEnumerator, build_group_context};

    #[test]
    fn test_distance_formula() {
        let evaluator = DistanceEvaluator::new();
        assert_eq!(evaluator.distance_km(0), 0.5);
        assert_eq!(evaluator.distance_km(1), 1.5);
        assert_eq!(evaluator.distance_km(3), 4.5);
    }

    #[test]
    fn test_distance_counts_whole_group() {
        // only "a" can attend, but all three locations count
        let participants = vec![
            Participant::new("a")
                .with_location("Berlin")
                .with_day(Day::Monday, "09:00", "13:00"),
            Participant::new("b").with_location("Hamburg"),
            Participant::new("c").with_location(" hamburg"),
        ];
        let context = build_group_context(&participants);
        let candidates = SlotEnumerator::new().get_candidates(&participants, &context);

        let evaluated = DistanceEvaluator::new().evaluate(
            candidates[0].clone(),
            &participants,
            &context,
        );
        assert_eq!(evaluated.attendees, vec!["a"]);
        assert_eq!(evaluated.avg_distance, Some(3.0));
    }
}
