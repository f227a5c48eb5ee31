//! Weekday and half-hour time label models.
//!
//! # Time Model
//! A [`TimeLabel`] is an instant within a day stored as minutes since
//! midnight. Labels are compared and sorted numerically; the wire form is
//! the `HH:MM` string used by availability grids.
//!
//! Days are independent for scheduling purposes. Their ordering only fixes
//! iteration order so that generated schedules are reproducible.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AcademyError;

/// Minutes in one class session.
pub const SESSION_MINUTES: u16 = 60;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days in weekday order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// English day name (e.g. `"Monday"`).
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = AcademyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AcademyError::UnknownDay(s.to_string()))
    }
}

/// A time of day, in minutes since midnight.
///
/// Serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeLabel(u16);

impl TimeLabel {
    /// Creates a label from hour and minute.
    ///
    /// Returns `None` if the pair is not a valid time of day.
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Creates a label from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Creates a label at a whole hour.
    ///
    /// # Panics
    /// Panics if `hour >= 24`. Intended for constants and tests.
    pub const fn at_hour(hour: u16) -> Self {
        assert!(hour < 24);
        Self(hour * 60)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Whether the label sits on a half-hour boundary.
    #[inline]
    pub fn is_half_hour_aligned(self) -> bool {
        self.0 % 30 == 0
    }

    /// The label one session length later, if still within the same day.
    pub fn plus_hour(self) -> Option<Self> {
        Self::from_minutes(self.0 + SESSION_MINUTES)
    }

    /// Half-hour labels from `first` to `last`, both inclusive.
    pub fn half_hour_grid(first: TimeLabel, last: TimeLabel) -> Vec<TimeLabel> {
        (first.0..=last.0)
            .step_by(30)
            .map(TimeLabel)
            .collect()
    }

    /// Labels offered on the teacher availability grid (08:00–21:30).
    pub fn teacher_grid() -> Vec<TimeLabel> {
        Self::half_hour_grid(TEACHER_GRID_FIRST, GRID_LAST)
    }

    /// Labels offered on the student availability grid (12:00–21:30).
    pub fn student_grid() -> Vec<TimeLabel> {
        Self::half_hour_grid(STUDENT_GRID_FIRST, GRID_LAST)
    }
}

/// First label of the teacher grid.
pub const TEACHER_GRID_FIRST: TimeLabel = TimeLabel(8 * 60);
/// First label of the student grid.
pub const STUDENT_GRID_FIRST: TimeLabel = TimeLabel(12 * 60);
/// Last label of both grids.
pub const GRID_LAST: TimeLabel = TimeLabel(21 * 60 + 30);

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeLabel {
    type Err = AcademyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AcademyError::InvalidTimeLabel(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if m.len() != 2 || h.is_empty() || h.len() > 2 {
            return Err(invalid());
        }
        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        TimeLabel::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeLabel {
    type Error = AcademyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeLabel> for String {
    fn from(label: TimeLabel) -> Self {
        label.to_string()
    }
}
