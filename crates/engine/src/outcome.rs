//! The result of one recommendation run.

use chrono::{DateTime, Utc};
use roster::Day;
use serde::{Deserialize, Serialize};
use slots::{Candidate, GroupContext, TopicCount};

/// How many participants can make one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAttendance {
    pub day: Day,
    pub window: String,
    pub attendees: usize,
}

/// Aggregate numbers behind a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeStats {
    /// Interest counts in first-encountered order
    pub topics: Vec<TopicCount>,
    /// Attendance per slot, in enumeration order
    pub availability: Vec<SlotAttendance>,
    pub total_participants: usize,
}

impl OutcomeStats {
    /// Collect stats from the unranked candidate list
    pub fn collect(context: &GroupContext, candidates: &[Candidate]) -> Self {
        Self {
            topics: context.topic_tally.counts().to_vec(),
            availability: candidates
                .iter()
                .map(|c| SlotAttendance {
                    day: c.day,
                    window: c.window.label.clone(),
                    attendees: c.attendee_count(),
                })
                .collect(),
            total_participants: context.total_participants,
        }
    }
}

/// Best option, runner-ups and the numbers behind them.
///
/// `explanation` and `is_ai_generated` are never set by the engine; the
/// explanation collaborator fills them in afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub best_option: Candidate,
    pub alternatives: Vec<Candidate>,
    /// Copy of the best option's fairness score
    pub fairness_score: u8,
    pub computed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<OutcomeStats>,
    pub total_participants: usize,
    /// Set when the numbers are illustrative rather than computed
    pub is_demo_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_ai_generated: Option<bool>,
}

impl Outcome {
    /// Attach an explanation, returning a new outcome
    pub fn with_explanation(self, explanation: impl Into<String>, is_ai_generated: bool) -> Self {
        Self {
            explanation: Some(explanation.into()),
            is_ai_generated: Some(is_ai_generated),
            ..self
        }
    }

    /// Best option followed by the alternatives
    pub fn options(&self) -> impl Iterator<Item = &Candidate> {
        std::iter::once(&self.best_option).chain(self.alternatives.iter())
    }
}
