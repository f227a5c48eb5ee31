//! Schedule (solution) model.
//!
//! A schedule lists, per teaching day, the class sessions produced by a
//! run in the order they were created. Each session occupies one slot:
//! a `(day, start)` pair with an implied one-hour duration.
//!
//! # Invariant
//! At most one session exists per `(day, start)`. A slot hosts exactly one
//! class for one level even if several levels could have filled it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Day, Level, TimeLabel};
use crate::error::{AcademyError, Result};

/// One class session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    /// Teaching day.
    pub day: Day,
    /// Start label. The session ends one hour later.
    pub start: TimeLabel,
    /// Level taught.
    pub level: Level,
    /// Names of seated students, in roster order.
    pub students: Vec<String>,
}

impl ClassSession {
    /// Creates a session.
    pub fn new(day: Day, start: TimeLabel, level: Level, students: Vec<String>) -> Self {
        Self {
            day,
            start,
            level,
            students,
        }
    }

    /// End label (`start + 1h`), or `None` if the hour crosses midnight.
    #[inline]
    pub fn end(&self) -> Option<TimeLabel> {
        self.start.plus_hour()
    }

    /// Number of seated students.
    #[inline]
    pub fn size(&self) -> usize {
        self.students.len()
    }

    /// Whether a student (by name) is seated in this session.
    pub fn has_student(&self, name: &str) -> bool {
        self.students.iter().any(|s| s == name)
    }
}

/// A weekly schedule.
///
/// Serialized in the snapshot wire form (day name to `{time, level,
/// students}` records); deserializing rejects double-booked slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "crate::snapshot::ScheduleRecord",
    into = "crate::snapshot::ScheduleRecord"
)]
pub struct Schedule {
    days: BTreeMap<Day, Vec<ClassSession>>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Schedule {
    /// Creates an empty schedule with every teaching day present.
    pub fn new() -> Self {
        Self {
            days: Day::ALL.into_iter().map(|d| (d, Vec::new())).collect(),
        }
    }

    /// Adds a session, rejecting it if its slot is already taken.
    pub fn try_insert(&mut self, session: ClassSession) -> Result<()> {
        if self.session_at(session.day, session.start).is_some() {
            return Err(AcademyError::SlotOccupied {
                day: session.day,
                time: session.start,
            });
        }
        self.push(session);
        Ok(())
    }

    /// Appends without the slot check. The placement loop visits each
    /// slot once, so it cannot collide.
    pub(crate) fn push(&mut self, session: ClassSession) {
        self.days.entry(session.day).or_default().push(session);
    }

    /// Sessions of a day in creation order.
    pub fn sessions(&self, day: Day) -> &[ClassSession] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All sessions, by day then creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassSession> {
        self.days.values().flatten()
    }

    /// The session occupying a slot, if any.
    pub fn session_at(&self, day: Day, start: TimeLabel) -> Option<&ClassSession> {
        self.sessions(day).iter().find(|s| s.start == start)
    }

    /// Sessions a student is seated in.
    pub fn sessions_for_student<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a ClassSession> + 'a {
        self.iter().filter(move |s| s.has_student(name))
    }

    /// Distinct days on which a student is seated, in weekday order.
    pub fn days_for_student(&self, name: &str) -> Vec<Day> {
        self.days
            .iter()
            .filter(|(_, sessions)| sessions.iter().any(|s| s.has_student(name)))
            .map(|(d, _)| *d)
            .collect()
    }

    /// Total number of sessions.
    pub fn session_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Total number of seats filled.
    pub fn seat_count(&self) -> usize {
        self.iter().map(ClassSession::size).sum()
    }

    /// Whether no session was produced.
    pub fn is_empty(&self) -> bool {
        self.session_count() == 0
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weekly Schedule:")?;
        for (day, sessions) in &self.days {
            writeln!(f)?;
            writeln!(f, "{day}:")?;
            if sessions.is_empty() {
                writeln!(f, "  No classes scheduled")?;
            }
            for s in sessions {
                match s.end() {
                    Some(end) => writeln!(f, "  {} - {}: {} Class", s.start, end, s.level)?,
                    None => writeln!(f, "  {}: {} Class", s.start, s.level)?,
                }
                writeln!(f, "    Students: {}", s.students.join(", "))?;
            }
        }
        Ok(())
    }
}
