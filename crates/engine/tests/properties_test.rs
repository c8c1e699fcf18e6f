//! End-to-end properties of the recommendation engine.
//!
//! Groups are generated deterministically from a seed so that every run
//! checks the same inputs.

use engine::{EngineError, RecommendationEngine, recommend};
use roster::{Day, Participant};
use std::sync::Arc;

const TOPICS: [&str; 4] = ["AI", "Rust", "Design", "Music"];
const LOCATIONS: [&str; 4] = ["Berlin", "berlin ", "Hamburg", "Online"];
const RANGES: [(&str, &str); 5] = [
    ("09:00", "17:00"),
    ("09:00", "10:00"),
    ("12:30", "15:00"),
    ("16:00", "21:00"),
    ("bad", "10:00"),
];

/// Small linear congruential generator so the groups stay reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}

fn generated_group(seed: u64, size: usize) -> Vec<Participant> {
    let mut rng = Lcg(seed);
    (0..size)
        .map(|i| {
            let mut participant = Participant::new(format!("p{i}"))
                .with_topics([TOPICS[rng.next(TOPICS.len())], TOPICS[rng.next(TOPICS.len())]])
                .with_location(LOCATIONS[rng.next(LOCATIONS.len())]);
            for day in Day::ALL {
                if rng.next(3) == 0 {
                    let (start, end) = RANGES[rng.next(RANGES.len())];
                    participant = participant.with_day(day, start, end);
                }
            }
            participant
        })
        .collect()
}

#[test]
fn test_best_option_dominates_alternatives() {
    let engine = RecommendationEngine::new();
    for seed in 0..40 {
        let size = 1 + (seed as usize % 9);
        let group = generated_group(seed, size);
        let outcome = engine.recommend(&group).unwrap();

        assert!(outcome.alternatives.len() <= 3);
        for alt in &outcome.alternatives {
            assert!(outcome.best_option.raw_score >= alt.raw_score);
        }
        for option in outcome.options() {
            let fairness = option.fairness_score.expect("surviving options are evaluated");
            assert!(fairness <= 100);
            assert!(option.avg_distance.unwrap() >= 0.5);
        }
        assert_eq!(outcome.is_demo_data, size <= 1);
        assert_eq!(Some(outcome.fairness_score), outcome.best_option.fairness_score);
    }
}

#[test]
fn test_idempotent() {
    let group = generated_group(7, 6);
    let first = recommend(&group).unwrap();
    let second = recommend(&group).unwrap();

    assert_eq!(first.best_option, second.best_option);
    assert_eq!(first.alternatives, second.alternatives);
    assert_eq!(first.fairness_score, second.fairness_score);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_tie_break_is_enumeration_order() {
    // everyone free all week: every day/window ties at 100
    let group: Vec<Participant> = (0..3)
        .map(|i| {
            Day::ALL.into_iter().fold(Participant::new(format!("p{i}")), |p, day| {
                p.with_day(day, "08:00", "22:00")
            })
        })
        .collect();

    for _ in 0..5 {
        let outcome = recommend(&group).unwrap();
        assert_eq!(outcome.best_option.slot_label(), "MON Morning Session");
        let labels: Vec<_> = outcome.alternatives.iter().map(|a| a.slot_label()).collect();
        assert_eq!(
            labels,
            vec!["MON Afternoon Session", "MON Evening Session", "TUE Morning Session"]
        );
    }
}

#[test]
fn test_two_berlin_ai_fans() {
    let group: Vec<Participant> = ["u1", "u2"]
        .into_iter()
        .map(|id| {
            Participant::new(id)
                .with_topics(["AI"])
                .with_location("Berlin")
                .with_day(Day::Monday, "09:00", "17:00")
        })
        .collect();

    let outcome = recommend(&group).unwrap();
    let best = &outcome.best_option;

    assert_eq!(best.day, Day::Monday);
    assert_eq!(best.title, "AI Morning Session");
    assert_eq!(best.attendees, vec!["u1", "u2"]);
    assert_eq!(best.raw_score, 100);
    assert_eq!(best.fairness_score, Some(100));
    assert_eq!(best.avg_distance, Some(1.5));
    assert!(!outcome.is_demo_data);
}

#[test]
fn test_overlap_threshold_through_engine() {
    // u1 shares 30 minutes with the morning window, u2 exactly 60
    let group = vec![
        Participant::new("u1").with_day(Day::Thursday, "08:00", "09:30"),
        Participant::new("u2").with_day(Day::Thursday, "08:00", "10:00"),
    ];
    let outcome = recommend(&group).unwrap();
    assert_eq!(outcome.best_option.slot_label(), "THU Morning Session");
    assert_eq!(outcome.best_option.attendees, vec!["u2"]);
    assert_eq!(outcome.best_option.raw_score, 50);
}

#[test]
fn test_single_participant_demo_result() {
    let group = vec![Participant::new("solo").with_topics(["Rust"])];
    let outcome = recommend(&group).unwrap();

    assert!(outcome.is_demo_data);
    assert!(outcome.best_option.attendees.len() >= 6);
    assert_eq!(outcome.fairness_score, 94);
    // solo cannot make any slot, yet the padded best option shows no cons
    assert!(outcome.best_option.cons.is_empty());
    let fairness: Vec<_> = outcome
        .alternatives
        .iter()
        .map(|a| a.fairness_score.unwrap())
        .collect();
    assert_eq!(fairness, vec![85, 80, 75]);
}

#[test]
fn test_empty_group_is_rejected() {
    assert!(matches!(recommend(&[]), Err(EngineError::InvalidInput(_))));
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = Arc::new(RecommendationEngine::new());
    let group = Arc::new(generated_group(11, 8));
    let expected = engine.recommend(&group).unwrap().best_option;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let group = Arc::clone(&group);
            std::thread::spawn(move || engine.recommend(&group).unwrap().best_option)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_outcome_json_shape() {
    let group = generated_group(3, 4);
    let outcome = recommend(&group).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert!(json["bestOption"]["rawScore"].is_u64());
    assert!(json["alternatives"].is_array());
    assert!(json["computedAt"].is_string());
    assert_eq!(json["isDemoData"], false);
    assert!(json.get("explanation").is_none());
    assert_eq!(json["stats"]["totalParticipants"], 4);
}
