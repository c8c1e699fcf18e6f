//! Group-wide facts gathered once per recommendation.
//!
//! Everything here is a pure function of the participant list, computed
//! upfront so that scoring and evaluation never re-scan the group.

use crate::topic::TopicTally;
use roster::Participant;
use std::collections::HashSet;

/// Aggregated view of a group used by every later stage
#[derive(Debug, Clone)]
pub struct GroupContext {
    pub total_participants: usize,
    pub topic_tally: TopicTally,
    /// Topic every candidate is titled after
    pub dominant_topic: String,
    /// Distinct lower-cased, trimmed location strings across the whole group
    pub unique_locations: usize,
}

/// Build a GroupContext from the participant list
pub fn build_group_context(participants: &[Participant]) -> GroupContext {
    let topic_tally = TopicTally::from_participants(participants);
    let dominant_topic = topic_tally.dominant_or_default().to_string();

    let unique_locations = participants
        .iter()
        .map(Participant::normalized_location)
        .collect::<HashSet<_>>()
        .len();

    GroupContext {
        total_participants: participants.len(),
        topic_tally,
        dominant_topic,
        unique_locations,
    }
}
