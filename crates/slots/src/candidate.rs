//! Candidate meeting options.
//!
//! A candidate is one (day, window) pairing with everything derived from
//! it. Once scored it is treated as a value: later stages never edit a
//! candidate in place, they build a new one through the `with_*` methods.

use crate::window::TimeWindow;
use roster::{Day, ParticipantId};
use serde::{Deserialize, Serialize};

/// Location used when nobody can attend a slot
pub const ONLINE_LOCATION: &str = "Online";

/// One scored (day, window) proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub title: String,
    pub description: String,
    pub day: Day,
    pub window: TimeWindow,
    /// Most common location among attendees
    pub location: String,
    /// Percentage of all participants who can attend (0-100)
    pub raw_score: u8,
    /// Set by the fairness evaluator
    pub fairness_score: Option<u8>,
    /// Set by the distance evaluator
    pub avg_distance: Option<f64>,
    pub attendees: Vec<ParticipantId>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl Candidate {
    /// Build an unevaluated candidate for a slot
    pub fn new(
        topic: &str,
        day: Day,
        window: TimeWindow,
        attendees: Vec<ParticipantId>,
        raw_score: u8,
        location: String,
        total_participants: usize,
    ) -> Self {
        let attending = attendees.len();
        let mut cons = Vec::new();
        if attending < total_participants {
            cons.push(format!(
                "{} participant(s) unavailable",
                total_participants - attending
            ));
        }

        Self {
            title: format!("{topic} {}", window.label),
            description: format!("A session focused on {topic}, maximizing attendance."),
            day,
            window,
            location,
            raw_score,
            fairness_score: None,
            avg_distance: None,
            attendees,
            pros: vec![format!("{attending}/{total_participants} Available")],
            cons,
        }
    }

    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }

    /// Short slot label, e.g. `MON Morning Session`
    pub fn slot_label(&self) -> String {
        format!("{} {}", self.day, self.window.label)
    }

    pub fn with_fairness(self, fairness_score: u8) -> Self {
        Self {
            fairness_score: Some(fairness_score.min(100)),
            ..self
        }
    }

    pub fn with_distance(self, avg_distance: f64) -> Self {
        Self {
            avg_distance: Some(avg_distance),
            ..self
        }
    }

    pub fn with_pros(self, pros: Vec<String>) -> Self {
        Self { pros, ..self }
    }

    pub fn with_cons(self, cons: Vec<String>) -> Self {
        Self { cons, ..self }
    }

    /// Append extra attendee ids after the real ones
    pub fn with_extra_attendees<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = ParticipantId>,
    {
        self.attendees.extend(extra);
        self
    }

    /// Re-title a runner-up as a plan ("AI Morning Session" -> "AI Morning Plan")
    pub fn as_alternative(mut self) -> Self {
        if let Some(stem) = self.title.strip_suffix("Session") {
            self.title = format!("{stem}Plan");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Candidate {
        let window = TimeWindow::standard().remove(0);
        Candidate::new(
            "AI",
            Day::Monday,
            window,
            vec!["a".to_string(), "b".to_string()],
            67,
            "Berlin".to_string(),
            3,
        )
    }

    #[test]
    fn test_new_candidate_fields() {
        let candidate = sample();
        assert_eq!(candidate.title, "AI Morning Session");
        assert_eq!(
            candidate.description,
            "A session focused on AI, maximizing attendance."
        );
        assert_eq!(candidate.pros, vec!["2/3 Available"]);
        assert_eq!(candidate.cons, vec!["1 participant(s) unavailable"]);
        assert_eq!(candidate.fairness_score, None);
        assert_eq!(candidate.avg_distance, None);
        assert_eq!(candidate.slot_label(), "MON Morning Session");
    }

    #[test]
    fn test_overrides_produce_new_values() {
        let original = sample();
        let evaluated = original.clone().with_fairness(120).with_distance(1.5);

        assert_eq!(evaluated.fairness_score, Some(100));
        assert_eq!(evaluated.avg_distance, Some(1.5));
        assert_eq!(original.fairness_score, None);

        let padded = original.clone().with_extra_attendees(vec!["demo-1".to_string()]);
        assert_eq!(padded.attendee_count(), 3);
        assert_eq!(original.attendee_count(), 2);
    }

    #[test]
    fn test_as_alternative_retitles() {
        let alternative = sample().as_alternative();
        assert_eq!(alternative.title, "AI Morning Plan");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["rawScore"], 67);
        assert_eq!(json["day"], "MON");
        assert_eq!(json["window"]["start"], "09:00");
        assert!(json["fairnessScore"].is_null());
    }
}
