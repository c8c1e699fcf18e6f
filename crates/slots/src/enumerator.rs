//! Slot Enumerator - candidate generation and attendance scoring
//!
//! Builds one candidate per (day, window) pair and scores it by how many
//! participants can actually be there.
//!
//! ## Algorithm
//! 1. Walk the catalogue days-outer, windows-inner
//! 2. For each slot, a participant attends iff the day is selected and
//!    their declared range overlaps the window by at least 60 minutes
//! 3. Raw score = round(attendees / total * 100)
//! 4. Consensus location = most common attendee location (first seen on
//!    ties, "Online" when nobody attends)
//! 5. Stable sort by raw score, highest first; equal scores keep
//!    enumeration order

use crate::candidate::{Candidate, ONLINE_LOCATION};
use crate::group_context::GroupContext;
use crate::window::{SlotCatalogue, TimeWindow};
use rayon::prelude::*;
use roster::{Day, Participant};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Minimum shared minutes for a participant to count as attending
pub const DEFAULT_MIN_OVERLAP_MINUTES: u32 = 60;

/// Generates and ranks candidates for a group
#[derive(Debug, Clone)]
pub struct SlotEnumerator {
    catalogue: SlotCatalogue,

    /// Minimum overlap between a participant's range and the window
    min_overlap_minutes: u32,
}

impl SlotEnumerator {
    /// Create an enumerator over the default catalogue
    pub fn new() -> Self {
        Self {
            catalogue: SlotCatalogue::default(),
            min_overlap_minutes: DEFAULT_MIN_OVERLAP_MINUTES,
        }
    }

    /// Use a different day/window catalogue
    pub fn with_catalogue(mut self, catalogue: SlotCatalogue) -> Self {
        self.catalogue = catalogue;
        self
    }

    /// Configure the attendance threshold (default: 60 minutes)
    pub fn with_min_overlap_minutes(mut self, minutes: u32) -> Self {
        self.min_overlap_minutes = minutes;
        self
    }

    pub fn catalogue(&self) -> &SlotCatalogue {
        &self.catalogue
    }

    /// Score every slot, in enumeration order (unsorted)
    #[instrument(skip_all, fields(participants = participants.len()))]
    pub fn get_candidates(
        &self,
        participants: &[Participant],
        context: &GroupContext,
    ) -> Vec<Candidate> {
        let candidates: Vec<Candidate> = self
            .catalogue
            .slots()
            .par_iter()
            .map(|(day, window)| self.score_slot(*day, window, participants, context))
            .collect();

        debug!("Scored {} candidate slots", candidates.len());
        candidates
    }

    /// Score every slot and rank them, best first
    pub fn get_ranked_candidates(
        &self,
        participants: &[Participant],
        context: &GroupContext,
    ) -> Vec<Candidate> {
        rank_candidates(self.get_candidates(participants, context))
    }

    /// Whether a participant can make a given slot
    pub fn attends(&self, participant: &Participant, day: Day, window: &TimeWindow) -> bool {
        participant
            .availability
            .range_on(day)
            .is_some_and(|range| range.overlap_minutes(&window.range()) >= self.min_overlap_minutes)
    }

    /// Build the candidate for one slot
    fn score_slot(
        &self,
        day: Day,
        window: &TimeWindow,
        participants: &[Participant],
        context: &GroupContext,
    ) -> Candidate {
        let attendees: Vec<&Participant> = participants
            .iter()
            .filter(|p| self.attends(p, day, window))
            .collect();

        let raw_score = attendance_score(attendees.len(), participants.len());
        let location = consensus_location(&attendees);

        Candidate::new(
            &context.dominant_topic,
            day,
            window.clone(),
            attendees.iter().map(|p| p.id.clone()).collect(),
            raw_score,
            location,
            participants.len(),
        )
    }
}

impl Default for SlotEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Percentage of the group that attends, rounded to the nearest integer
pub fn attendance_score(attending: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (attending as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Most common location among attendees, first seen on ties
pub fn consensus_location(attendees: &[&Participant]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for participant in attendees {
        let location = participant.location.as_str();
        match positions.get(location) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(location, counts.len());
                counts.push((location, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (location, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((location, count));
        }
    }

    match best {
        Some((location, _)) if !location.trim().is_empty() => location.to_string(),
        _ => ONLINE_LOCATION.to_string(),
    }
}

/// Sort candidates by raw score, highest first.
///
/// `sort_by` is stable, so equal scores keep their enumeration order.
pub fn rank_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.raw_score.cmp(&a.raw_score));
    candidates
}
