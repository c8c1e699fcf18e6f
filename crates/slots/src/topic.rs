//! Topic popularity across a group.
//!
//! Each participant contributes at most one count per topic. The dominant
//! topic is the one with the highest count; on a tie the topic seen first
//! wins, so the result depends only on input order.

use roster::Participant;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Topic used when nobody listed any interest
pub const DEFAULT_TOPIC: &str = "General Meetup";

/// Interest count for one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

/// Interest counts in first-encountered order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicTally {
    counts: Vec<TopicCount>,
}

impl TopicTally {
    /// Count interests across all participants
    pub fn from_participants(participants: &[Participant]) -> Self {
        let mut counts: Vec<TopicCount> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for participant in participants {
            let mut seen: HashSet<&str> = HashSet::new();
            for topic in &participant.topics {
                if !seen.insert(topic.as_str()) {
                    continue;
                }
                match positions.get(topic.as_str()) {
                    Some(&idx) => counts[idx].count += 1,
                    None => {
                        positions.insert(topic.as_str(), counts.len());
                        counts.push(TopicCount {
                            topic: topic.clone(),
                            count: 1,
                        });
                    }
                }
            }
        }

        Self { counts }
    }

    /// Highest-count topic, first seen on ties
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<&TopicCount> = None;
        for entry in &self.counts {
            if best.is_none_or(|b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best.map(|entry| entry.topic.as_str())
    }

    /// Dominant topic, or [`DEFAULT_TOPIC`] for a group with no interests
    pub fn dominant_or_default(&self) -> &str {
        self.dominant().unwrap_or(DEFAULT_TOPIC)
    }

    pub fn counts(&self) -> &[TopicCount] {
        &self.counts
    }

    pub fn count_of(&self, topic: &str) -> usize {
        self.counts
            .iter()
            .find(|entry| entry.topic == topic)
            .map_or(0, |entry| entry.count)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_topics(id: &str, topics: &[&str]) -> Participant {
        let mut p = Participant::new(id);
        // bypass the builder's de-duplication to exercise the tally's own guard
        p.topics = topics.iter().map(|t| t.to_string()).collect();
        p
    }

    #[test]
    fn test_counts_one_per_participant() {
        let participants = vec![
            with_topics("a", &["AI", "AI", "Rust"]),
            with_topics("b", &["AI"]),
        ];
        let tally = TopicTally::from_participants(&participants);

        assert_eq!(tally.count_of("AI"), 2);
        assert_eq!(tally.count_of("Rust"), 1);
        assert_eq!(tally.count_of("Go"), 0);
        assert_eq!(tally.dominant(), Some("AI"));
    }

    #[test]
    fn test_tie_goes_to_first_encountered() {
        let participants = vec![
            with_topics("a", &["Design", "AI"]),
            with_topics("b", &["AI", "Design"]),
        ];
        let tally = TopicTally::from_participants(&participants);
        assert_eq!(tally.dominant(), Some("Design"));

        let reversed: Vec<_> = participants.into_iter().rev().collect();
        let tally = TopicTally::from_participants(&reversed);
        assert_eq!(tally.dominant(), Some("AI"));
    }

    #[test]
    fn test_later_topic_can_overtake() {
        let participants = vec![
            with_topics("a", &["Design"]),
            with_topics("b", &["AI"]),
            with_topics("c", &["AI"]),
        ];
        let tally = TopicTally::from_participants(&participants);
        assert_eq!(tally.dominant(), Some("AI"));
        let order: Vec<_> = tally.counts().iter().map(|c| c.topic.as_str()).collect();
        assert_eq!(order, vec!["Design", "AI"]);
    }

    #[test]
    fn test_default_topic_when_no_interests() {
        let participants = vec![Participant::new("a"), Participant::new("b")];
        let tally = TopicTally::from_participants(&participants);
        assert!(tally.is_empty());
        assert_eq!(tally.dominant(), None);
        assert_eq!(tally.dominant_or_default(), DEFAULT_TOPIC);
    }
}
