//! Illustrative result for groups too small to score.
//!
//! A single person previewing the tool would otherwise see one attendee
//! and a lonely score. Instead the best option is padded with placeholder
//! attendees and fixed example numbers. The outcome always carries
//! `is_demo_data = true` when this runs, so a consumer can tell the
//! numbers are not real.

use slots::Candidate;

/// Prefix reserved for placeholder attendee ids
pub const DEMO_ATTENDEE_PREFIX: &str = "demo-";

/// Number of placeholder attendees added to the best option
pub const DEMO_ATTENDEE_COUNT: usize = 5;

/// Smallest attendee list the best option shows in demo mode
pub const DEMO_MIN_PARTY_SIZE: usize = 6;

/// Fairness shown for the best option
pub const DEMO_BEST_FAIRNESS: u8 = 94;

/// Distance shown for the best option (km)
pub const DEMO_BEST_DISTANCE_KM: f64 = 1.2;

/// Fairness shown for alternatives, by position
pub const DEMO_ALTERNATIVE_FAIRNESS: [u8; 3] = [85, 80, 75];

/// Distance shown for alternatives, by position (km)
pub const DEMO_ALTERNATIVE_DISTANCE_KM: [f64; 3] = [2.5, 3.7, 4.9];

/// Pros shown for the best option
pub const DEMO_BEST_PROS: [&str; 2] = ["Maximum overlap found", "High topic alignment"];

/// Whether an id is a placeholder added by the demo substitution
pub fn is_demo_attendee(id: &str) -> bool {
    id.starts_with(DEMO_ATTENDEE_PREFIX)
}

/// Placeholder ids `demo-1` .. `demo-{count}`
pub fn demo_attendees(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("{DEMO_ATTENDEE_PREFIX}{i}"))
        .collect()
}

/// Replace real scores with the illustrative ones.
///
/// Returns new candidates; the inputs are consumed. The best option gets
/// five placeholders, or more if that is needed to reach a party of six,
/// and its real cons are dropped along with its pros.
/// Alternatives past the third keep the last illustrative value.
pub fn apply_demo_policy(
    best: Candidate,
    alternatives: Vec<Candidate>,
) -> (Candidate, Vec<Candidate>) {
    let padding =
        DEMO_ATTENDEE_COUNT.max(DEMO_MIN_PARTY_SIZE.saturating_sub(best.attendee_count()));
    let best = best
        .with_extra_attendees(demo_attendees(padding))
        .with_fairness(DEMO_BEST_FAIRNESS)
        .with_distance(DEMO_BEST_DISTANCE_KM)
        .with_pros(DEMO_BEST_PROS.iter().map(|p| p.to_string()).collect())
        .with_cons(Vec::new());

    let last = DEMO_ALTERNATIVE_FAIRNESS.len() - 1;
    let alternatives = alternatives
        .into_iter()
        .enumerate()
        .map(|(idx, alt)| {
            let slot = idx.min(last);
            alt.with_fairness(DEMO_ALTERNATIVE_FAIRNESS[slot])
                .with_distance(DEMO_ALTERNATIVE_DISTANCE_KM[slot])
        })
        .collect();

    (best, alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::Day;
    use slots::TimeWindow;

    fn candidate(attendees: &[&str]) -> Candidate {
        Candidate::new(
            "AI",
            Day::Monday,
            TimeWindow::standard().remove(0),
            attendees.iter().map(|a| a.to_string()).collect(),
            100,
            "Berlin".to_string(),
            1,
        )
    }

    #[test]
    fn test_demo_attendees_are_marked() {
        let ids = demo_attendees(DEMO_ATTENDEE_COUNT);
        assert_eq!(ids.len(), 5);
        assert_eq!(ids[0], "demo-1");
        assert!(ids.iter().all(|id| is_demo_attendee(id)));
        assert!(!is_demo_attendee("u1"));
    }

    #[test]
    fn test_apply_demo_policy() {
        let best = candidate(&["u1"]);
        let alternatives = vec![candidate(&["u1"]), candidate(&[]), candidate(&[])];

        let (best, alternatives) = apply_demo_policy(best, alternatives);

        assert_eq!(best.attendees.len(), 6);
        assert_eq!(best.attendees[0], "u1");
        assert_eq!(best.fairness_score, Some(DEMO_BEST_FAIRNESS));
        assert_eq!(best.avg_distance, Some(DEMO_BEST_DISTANCE_KM));
        assert_eq!(best.pros, vec!["Maximum overlap found", "High topic alignment"]);

        let fairness: Vec<_> = alternatives.iter().map(|a| a.fairness_score).collect();
        assert_eq!(fairness, vec![Some(85), Some(80), Some(75)]);
        let distance: Vec<_> = alternatives.iter().map(|a| a.avg_distance).collect();
        assert_eq!(distance, vec![Some(2.5), Some(3.7), Some(4.9)]);
        // real attendee lists of alternatives are untouched
        assert_eq!(alternatives[0].attendees, vec!["u1"]);
    }

    #[test]
    fn test_demo_pads_to_party_of_six() {
        let unattended = candidate(&[]);
        assert_eq!(unattended.cons, vec!["1 participant(s) unavailable"]);

        let (best, _) = apply_demo_policy(unattended, vec![]);
        assert_eq!(best.attendees.len(), DEMO_MIN_PARTY_SIZE);
        assert!(best.attendees.iter().all(|id| is_demo_attendee(id)));
        assert!(best.cons.is_empty());
        assert_eq!(best.pros, vec!["Maximum overlap found", "High topic alignment"]);
    }
}
