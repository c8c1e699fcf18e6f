//! Core domain types for group participants.
//!
//! A participant declares topic interests, a location, and per-day
//! availability. Availability has a single representation: each day label
//! maps to a selected flag plus an optional clock-time range. The older
//! AM/PM checkbox form is accepted on input and converted into fixed ranges.

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a participant
pub type ParticipantId = String;

// =============================================================================
// Clock Times
// =============================================================================

/// Minutes in a full day; `24:00` is accepted as an end-of-day marker
const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time, stored as minutes past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build a clock time from hours and minutes.
    ///
    /// Returns `None` for anything past `24:00`.
    pub const fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        if minutes >= 60 {
            return None;
        }
        let total = hours as u32 * 60 + minutes as u32;
        if total > MINUTES_PER_DAY as u32 {
            None
        } else {
            Some(Self(total as u16))
        }
    }

    /// Like [`ClockTime::from_hm`] but clamps to `24:00` instead of failing.
    ///
    /// Meant for compile-time constants such as the window catalogue.
    pub const fn clamped(hours: u16, minutes: u16) -> Self {
        match Self::from_hm(hours, if minutes > 59 { 59 } else { minutes }) {
            Some(time) => time,
            None => Self(MINUTES_PER_DAY),
        }
    }

    /// Minutes past midnight
    pub const fn minutes(self) -> u32 {
        self.0 as u32
    }
}

impl FromStr for ClockTime {
    type Err = RosterError;

    /// Parses `HH:MM` (single-digit hours are fine: `9:30`)
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RosterError::InvalidTime {
            value: s.to_string(),
        };
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        if minutes.len() != 2 {
            return Err(invalid());
        }
        let hours: u16 = hours.parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
        Self::from_hm(hours, minutes).ok_or_else(invalid)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl TryFrom<String> for ClockTime {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A non-empty interval between two clock times (end is exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeRange {
    /// Returns `None` unless `start < end`.
    pub fn new(start: ClockTime, end: ClockTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Parse a range from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start: ClockTime = start.parse()?;
        let end: ClockTime = end.parse()?;
        Self::new(start, end).ok_or_else(|| RosterError::InvalidValue {
            field: "time range".to_string(),
            value: format!("{start}-{end}"),
        })
    }

    /// Length of the range in minutes
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }

    /// Minutes shared by two ranges, zero when they do not intersect.
    pub fn overlap_minutes(&self, other: &TimeRange) -> u32 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        end.minutes().saturating_sub(start.minutes())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// =============================================================================
// Days
// =============================================================================

/// Day of the week, in the order candidates are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "MON")]
    Monday,
    #[serde(rename = "TUE")]
    Tuesday,
    #[serde(rename = "WED")]
    Wednesday,
    #[serde(rename = "THU")]
    Thursday,
    #[serde(rename = "FRI")]
    Friday,
    #[serde(rename = "SAT")]
    Saturday,
    #[serde(rename = "SUN")]
    Sunday,
}

impl Day {
    /// All days, Monday first
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Three-letter label used as the availability key (`MON`)
    pub const fn label(self) -> &'static str {
        match self {
            Day::Monday => "MON",
            Day::Tuesday => "TUE",
            Day::Wednesday => "WED",
            Day::Thursday => "THU",
            Day::Friday => "FRI",
            Day::Saturday => "SAT",
            Day::Sunday => "SUN",
        }
    }

    /// Full English name (`Monday`)
    pub const fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        Day::ALL
            .into_iter()
            .find(|day| day.label() == wanted || day.name().to_ascii_uppercase() == wanted)
            .ok_or_else(|| RosterError::InvalidValue {
                field: "day".to_string(),
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Availability
// =============================================================================

/// Fixed range the legacy "AM" checkbox stands for
pub const LEGACY_AM: (u16, u16) = (9 * 60, 13 * 60);
/// Fixed range the legacy "PM" checkbox stands for
pub const LEGACY_PM: (u16, u16) = (13 * 60, 17 * 60);

/// What a participant declared for one day.
///
/// `range` is `None` when the declared times were missing or malformed;
/// such a day never counts as available.
///
/// Decoding never fails: an entry that is not an object becomes an
/// unselected day, and fields of the wrong type are read as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "DayAvailabilityRepr")]
pub struct DayAvailability {
    pub selected: bool,
    pub range: Option<TimeRange>,
}

impl DayAvailability {
    /// A selected day with the given range
    pub fn selected(range: TimeRange) -> Self {
        Self {
            selected: true,
            range: Some(range),
        }
    }

    /// Convert the AM/PM checkbox form into a time range
    pub fn from_legacy(am: bool, pm: bool) -> Self {
        let bounds = match (am, pm) {
            (true, true) => Some((LEGACY_AM.0, LEGACY_PM.1)),
            (true, false) => Some(LEGACY_AM),
            (false, true) => Some(LEGACY_PM),
            (false, false) => None,
        };
        let range = bounds.and_then(|(start, end)| {
            TimeRange::new(ClockTime(start), ClockTime(end))
        });
        Self {
            selected: range.is_some(),
            range,
        }
    }

    /// The usable range, only if the day is selected
    pub fn active_range(&self) -> Option<TimeRange> {
        if self.selected { self.range } else { None }
    }
}

impl From<serde_json::Value> for DayAvailability {
    fn from(value: serde_json::Value) -> Self {
        let Some(entry) = value.as_object() else {
            return Self::default();
        };
        let flag = |key: &str| entry.get(key).and_then(serde_json::Value::as_bool);
        let text = |key: &str| entry.get(key).and_then(serde_json::Value::as_str);

        // legacy checkbox form: `am` and/or `pm`, no `selected`
        if !entry.contains_key("selected") && (entry.contains_key("am") || entry.contains_key("pm"))
        {
            return Self::from_legacy(flag("am").unwrap_or(false), flag("pm").unwrap_or(false));
        }

        let range = match (text("start"), text("end")) {
            (Some(start), Some(end)) => TimeRange::parse(start, end).ok(),
            _ => None,
        };
        Self {
            selected: flag("selected").unwrap_or(false),
            range,
        }
    }
}

/// Wire form written for a day entry
#[derive(Serialize)]
struct DayAvailabilityRepr {
    selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<String>,
}

impl From<DayAvailability> for DayAvailabilityRepr {
    fn from(day: DayAvailability) -> Self {
        DayAvailabilityRepr {
            selected: day.selected,
            start: day.range.map(|r| r.start.to_string()),
            end: day.range.map(|r| r.end.to_string()),
        }
    }
}

/// Per-day availability keyed by day label.
///
/// Keys are kept as strings so that unknown labels in stored records are
/// carried along rather than rejected; they are simply never consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability {
    days: BTreeMap<String, DayAvailability>,
}

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry for a day, replacing any previous one
    pub fn insert(&mut self, day: Day, entry: DayAvailability) {
        self.days.insert(day.label().to_string(), entry);
    }

    /// Raw entry for a day, selected or not
    pub fn get(&self, day: Day) -> Option<&DayAvailability> {
        self.days.get(day.label()).or_else(|| {
            self.days
                .iter()
                .find(|(key, _)| key.trim().eq_ignore_ascii_case(day.label()))
                .map(|(_, entry)| entry)
        })
    }

    /// The time range a participant can attend on `day`, if any
    pub fn range_on(&self, day: Day) -> Option<TimeRange> {
        self.get(day).and_then(DayAvailability::active_range)
    }

    /// Days with a usable range, in week order
    pub fn available_days(&self) -> Vec<Day> {
        Day::ALL
            .into_iter()
            .filter(|day| self.range_on(*day).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

// =============================================================================
// Participant
// =============================================================================

/// One member of a group, as collected by the preferences form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(alias = "userId")]
    pub id: ParticipantId,
    #[serde(default)]
    pub email: String,
    /// Interest labels; first occurrence wins, duplicates are dropped on load
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub location: String,
    #[serde(default, alias = "travelRadius")]
    pub travel_radius_km: f64,
}

impl Participant {
    /// Create a participant with no interests, availability or location
    pub fn new(id: impl Into<ParticipantId>) -> Self {
        Self {
            id: id.into(),
            email: String::new(),
            topics: Vec::new(),
            availability: Availability::new(),
            location: String::new(),
            travel_radius_km: 0.0,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Add interest labels, skipping ones already present
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for topic in topics {
            let topic = topic.into();
            if !self.topics.contains(&topic) {
                self.topics.push(topic);
            }
        }
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_travel_radius(mut self, km: f64) -> Self {
        self.travel_radius_km = km;
        self
    }

    /// Mark `day` as selected between `start` and `end` (`HH:MM`).
    ///
    /// Malformed times leave the day selected but unusable.
    pub fn with_day(mut self, day: Day, start: &str, end: &str) -> Self {
        let range = TimeRange::parse(start, end).ok();
        self.availability.insert(
            day,
            DayAvailability {
                selected: true,
                range,
            },
        );
        self
    }

    /// Set the raw entry for a day
    pub fn with_day_entry(mut self, day: Day, entry: DayAvailability) -> Self {
        self.availability.insert(day, entry);
        self
    }

    /// Whether `topic` is one of this participant's interests
    pub fn is_interested_in(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    /// Location lower-cased and trimmed, used to count distinct places
    pub fn normalized_location(&self) -> String {
        self.location.trim().to_lowercase()
    }

    /// Drop repeated topic labels while keeping first-seen order
    pub(crate) fn dedup_topics(&mut self) {
        let mut seen = HashSet::new();
        self.topics.retain(|t| seen.insert(t.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_parsing() {
        let time: ClockTime = "09:30".parse().unwrap();
        assert_eq!(time.minutes(), 570);
        assert_eq!(time.to_string(), "09:30");

        assert_eq!("9:05".parse::<ClockTime>().unwrap().minutes(), 545);
        assert_eq!("24:00".parse::<ClockTime>().unwrap().minutes(), 1440);
        assert!("24:01".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
        assert!("12:5".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_time_range_requires_start_before_end() {
        assert!(TimeRange::parse("10:00", "09:00").is_err());
        assert!(TimeRange::parse("10:00", "10:00").is_err());
        assert_eq!(TimeRange::parse("09:00", "13:00").unwrap().duration_minutes(), 240);
    }

    #[test]
    fn test_overlap_minutes() {
        let window = TimeRange::parse("09:30", "13:00").unwrap();

        let short = TimeRange::parse("09:00", "10:00").unwrap();
        assert_eq!(window.overlap_minutes(&short), 30);

        let longer = TimeRange::parse("09:00", "10:30").unwrap();
        assert_eq!(window.overlap_minutes(&longer), 60);

        let disjoint = TimeRange::parse("14:00", "18:00").unwrap();
        assert_eq!(window.overlap_minutes(&disjoint), 0);
    }

    #[test]
    fn test_day_parsing() {
        assert_eq!("mon".parse::<Day>().unwrap(), Day::Monday);
        assert_eq!("Sunday".parse::<Day>().unwrap(), Day::Sunday);
        assert!("Funday".parse::<Day>().is_err());
        assert_eq!(Day::ALL.len(), 7);
    }

    #[test]
    fn test_legacy_conversion() {
        let both = DayAvailability::from_legacy(true, true);
        assert_eq!(both.active_range().unwrap().to_string(), "09:00-17:00");

        let pm = DayAvailability::from_legacy(false, true);
        assert_eq!(pm.active_range().unwrap().to_string(), "13:00-17:00");

        let none = DayAvailability::from_legacy(false, false);
        assert!(!none.selected);
        assert!(none.active_range().is_none());
    }

    #[test]
    fn test_unselected_day_is_unavailable() {
        let mut availability = Availability::new();
        availability.insert(
            Day::Monday,
            DayAvailability {
                selected: false,
                range: Some(TimeRange::parse("09:00", "17:00").unwrap()),
            },
        );
        assert!(availability.range_on(Day::Monday).is_none());
        assert!(availability.available_days().is_empty());

        let range = TimeRange::parse("18:00", "20:00").unwrap();
        availability.insert(Day::Tuesday, DayAvailability::selected(range));
        assert_eq!(availability.range_on(Day::Tuesday), Some(range));
        assert_eq!(availability.available_days(), vec![Day::Tuesday]);
    }

    #[test]
    fn test_participant_builder() {
        let p = Participant::new("u1")
            .with_topics(["AI", "Rust", "AI"])
            .with_location("  Berlin ")
            .with_day(Day::Wednesday, "10:00", "12:00")
            .with_day(Day::Friday, "bad", "12:00")
            .with_day_entry(Day::Saturday, DayAvailability::from_legacy(false, true))
            .with_travel_radius(12.5);

        assert_eq!(p.topics, vec!["AI", "Rust"]);
        assert!(p.is_interested_in("Rust"));
        assert!(!p.is_interested_in("rust"));
        assert_eq!(p.normalized_location(), "berlin");
        assert_eq!(
            p.availability.available_days(),
            vec![Day::Wednesday, Day::Saturday]
        );
        assert_eq!(p.travel_radius_km, 12.5);
    }
}
