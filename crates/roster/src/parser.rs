//! Load participant records from JSON.
//!
//! The stored format is a JSON array of participant objects, as written by
//! the preferences form. Both the time-range and the legacy AM/PM day
//! entries are accepted (see [`crate::types::DayAvailability`]).
//!
//! ```json
//! [
//!   {
//!     "userId": "u1",
//!     "email": "ada@example.com",
//!     "topics": ["AI", "Rust"],
//!     "availability": {
//!       "MON": { "selected": true, "start": "09:00", "end": "17:00" },
//!       "WED": { "am": true, "pm": false }
//!     },
//!     "location": "Berlin",
//!     "travelRadius": 10
//!   }
//! ]
//! ```

use crate::error::{Result, RosterError};
use crate::types::{Participant, ParticipantId};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// An ordered, validated set of participants.
///
/// Order matters: topic and location ties are broken by first occurrence,
/// so the roster preserves the order records were supplied in.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Validate and wrap a list of participants.
    ///
    /// Topic labels are trimmed and de-duplicated per participant; empty or
    /// duplicated ids are rejected.
    pub fn new(participants: Vec<Participant>) -> Result<Self> {
        let mut seen: HashSet<ParticipantId> = HashSet::new();
        let mut cleaned = Vec::with_capacity(participants.len());

        for mut participant in participants {
            if participant.id.trim().is_empty() {
                return Err(RosterError::InvalidValue {
                    field: "id".to_string(),
                    value: participant.id,
                });
            }
            if !seen.insert(participant.id.clone()) {
                return Err(RosterError::DuplicateParticipant { id: participant.id });
            }

            participant.topics = participant
                .topics
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            participant.dedup_topics();
            cleaned.push(participant);
        }

        Ok(Self {
            participants: cleaned,
        })
    }

    /// Parse a roster from a JSON array
    pub fn from_json(json: &str) -> Result<Self> {
        let participants: Vec<Participant> = serde_json::from_str(json)?;
        debug!("Decoded {} participant records", participants.len());
        Self::new(participants)
    }

    /// Load a roster from a JSON file on disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RosterError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let roster = Self::from_json(&contents)?;
        info!(
            "Loaded {} participants from {}",
            roster.len(),
            path.display()
        );
        Ok(roster)
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }

    /// Look up a participant by id
    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
