//! Named time windows and the day x window catalogue.
//!
//! Candidates are enumerated days-outer, windows-inner, so the catalogue
//! order is also the tie-break order once candidates are ranked.

use roster::{ClockTime, Day, TimeRange};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named interval within a day, e.g. "Morning Session" 09:00-13:00
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub label: String,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeWindow {
    /// Create a window from `HH:MM` bounds
    pub fn new(label: impl Into<String>, start: &str, end: &str) -> roster::Result<Self> {
        let range = TimeRange::parse(start, end)?;
        Ok(Self::from_range(label, range))
    }

    pub fn from_range(label: impl Into<String>, range: TimeRange) -> Self {
        Self {
            label: label.into(),
            start: range.start,
            end: range.end,
        }
    }

    /// The window as a plain time range
    pub fn range(&self) -> TimeRange {
        TimeRange {
            start: self.start,
            end: self.end,
        }
    }

    /// The three standard windows: morning, afternoon and evening
    pub fn standard() -> Vec<TimeWindow> {
        STANDARD_WINDOWS
            .iter()
            .map(|(label, start, end)| TimeWindow {
                label: (*label).to_string(),
                start: ClockTime::clamped(*start, 0),
                end: ClockTime::clamped(*end, 0),
            })
            .collect()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.label, self.start, self.end)
    }
}

/// (label, start hour, end hour)
const STANDARD_WINDOWS: [(&str, u16, u16); 3] = [
    ("Morning Session", 9, 13),
    ("Afternoon Session", 13, 17),
    ("Evening Session", 17, 21),
];

/// The fixed set of days and windows every recommendation is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCatalogue {
    days: Vec<Day>,
    windows: Vec<TimeWindow>,
}

impl SlotCatalogue {
    pub fn new(days: Vec<Day>, windows: Vec<TimeWindow>) -> Self {
        Self { days, windows }
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn windows(&self) -> &[TimeWindow] {
        &self.windows
    }

    /// Every (day, window) pair in enumeration order
    pub fn slots(&self) -> Vec<(Day, &TimeWindow)> {
        self.days
            .iter()
            .flat_map(|day| self.windows.iter().map(move |window| (*day, window)))
            .collect()
    }

    /// Number of candidates this catalogue produces
    pub fn len(&self) -> usize {
        self.days.len() * self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SlotCatalogue {
    /// Monday to Sunday crossed with the standard windows
    fn default() -> Self {
        Self::new(Day::ALL.to_vec(), TimeWindow::standard())
    }
}
