//! Core trait for the evaluation stage.
//!
//! Evaluators attach derived scores to a ranked candidate. They are pure:
//! the output depends only on the candidate, the participants and the
//! group context.

use roster::Participant;
use slots::{Candidate, GroupContext};

/// Attaches one derived value to a candidate.
///
/// Evaluators take the candidate by value and hand back a new one, so a
/// scored candidate is never edited behind a caller's back. `Send + Sync`
/// lets a shared engine run evaluations from several threads.
pub trait Evaluator: Send + Sync {
    /// Returns the name of this evaluator (for logging/debugging)
    fn name(&self) -> &str;

    /// Evaluate a single candidate.
    ///
    /// # Arguments
    /// * `candidate` - The candidate to evaluate (takes ownership)
    /// * `participants` - The full group, not only the attendees
    /// * `context` - Group-wide aggregates (dominant topic, location count)
    fn evaluate(
        &self,
        candidate: Candidate,
        participants: &[Participant],
        context: &GroupContext,
    ) -> Candidate;
}
