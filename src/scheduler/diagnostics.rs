//! Unscheduled-student diagnostics.
//!
//! A pure pass over a finished schedule. Every student who did not get all
//! required sessions receives a reason; nothing here alters placement.
//!
//! # Reasons
//!
//! | Situation | Reason |
//! |-----------|--------|
//! | No sessions, no availability at all | no available time slots |
//! | No sessions, a same-level class ran in one of their windows | class was full |
//! | No sessions, otherwise | no matching class times |
//! | Twice-weekly, 1 session, fewer than 2 available days | insufficient availability for twice-weekly classes |
//! | Twice-weekly, 1 session, matching class on another day | second class was full |
//! | Twice-weekly, 1 session, otherwise | no matching time for second class |

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::PlacementCounts;
use crate::models::{Day, Level, Schedule, Student};

/// Why a student is not fully scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnscheduledReason {
    NoAvailableTimeSlots,
    ClassWasFull,
    NoMatchingClassTimes,
    InsufficientTwiceWeeklyAvailability,
    SecondClassFull,
    NoMatchingSecondTime,
}

impl UnscheduledReason {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoAvailableTimeSlots => "no available time slots",
            Self::ClassWasFull => "class was full",
            Self::NoMatchingClassTimes => "no matching class times",
            Self::InsufficientTwiceWeeklyAvailability => {
                "insufficient availability for twice-weekly classes"
            }
            Self::SecondClassFull => "second class was full",
            Self::NoMatchingSecondTime => "no matching time for second class",
        }
    }
}

impl fmt::Display for UnscheduledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One under-placed student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnscheduledStudent {
    pub name: String,
    /// Sessions actually placed.
    pub scheduled: u8,
    /// Sessions required per week.
    pub required: u8,
    pub reason: UnscheduledReason,
}

impl fmt::Display for UnscheduledStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scheduled == 0 {
            write!(f, "{}: {}", self.name, self.reason)
        } else {
            write!(
                f,
                "{} ({}/{}): {}",
                self.name, self.scheduled, self.required, self.reason
            )
        }
    }
}

/// Under-placed students grouped by level.
///
/// Levels are listed in progression order; students within a level keep
/// roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnscheduledReport {
    by_level: BTreeMap<Level, Vec<UnscheduledStudent>>,
}

impl UnscheduledReport {
    /// Entries for one level.
    pub fn level(&self, level: Level) -> &[UnscheduledStudent] {
        self.by_level.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(level, entries)` pairs for levels with at least one entry.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &[UnscheduledStudent])> {
        self.by_level.iter().map(|(l, e)| (*l, e.as_slice()))
    }

    /// The entry for a student, if they are under-placed.
    pub fn entry_for(&self, name: &str) -> Option<&UnscheduledStudent> {
        self.by_level.values().flatten().find(|e| e.name == name)
    }

    /// The reason for a student, if they are under-placed.
    pub fn reason_for(&self, name: &str) -> Option<UnscheduledReason> {
        self.entry_for(name).map(|e| e.reason)
    }

    /// Total number of under-placed students.
    pub fn len(&self) -> usize {
        self.by_level.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_level.is_empty()
    }

    fn push(&mut self, level: Level, entry: UnscheduledStudent) {
        self.by_level.entry(level).or_default().push(entry);
    }
}

impl fmt::Display for UnscheduledReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        writeln!(f, "Unscheduled Students:")?;
        for (level, entries) in &self.by_level {
            writeln!(f, "  {level}:")?;
            for e in entries {
                writeln!(f, "    {e}")?;
            }
        }
        Ok(())
    }
}

/// Explains every under-placed student in `roster`.
///
/// `counts` must be aligned with `roster` (as produced by the run that
/// built `schedule`, or by [`PlacementCounts::from_schedule`]).
pub fn diagnose(
    schedule: &Schedule,
    roster: &[Student],
    counts: &PlacementCounts,
) -> UnscheduledReport {
    let mut report = UnscheduledReport::default();

    for (idx, student) in roster.iter().enumerate() {
        let scheduled = counts.count(idx);
        let required = student.required_sessions();

        let reason = if scheduled == 0 {
            first_session_reason(schedule, student)
        } else if student.twice_weekly && scheduled < 2 {
            second_session_reason(schedule, student, counts.days(idx))
        } else {
            continue;
        };

        report.push(
            student.level,
            UnscheduledStudent {
                name: student.name.clone(),
                scheduled,
                required,
                reason,
            },
        );
    }

    report
}

fn first_session_reason(schedule: &Schedule, student: &Student) -> UnscheduledReason {
    if student.availability.is_empty() {
        UnscheduledReason::NoAvailableTimeSlots
    } else if has_matching_session(schedule, student, &[]) {
        UnscheduledReason::ClassWasFull
    } else {
        UnscheduledReason::NoMatchingClassTimes
    }
}

fn second_session_reason(
    schedule: &Schedule,
    student: &Student,
    placed_days: &[Day],
) -> UnscheduledReason {
    if student.availability.available_days().count() < 2 {
        UnscheduledReason::InsufficientTwiceWeeklyAvailability
    } else if has_matching_session(schedule, student, placed_days) {
        UnscheduledReason::SecondClassFull
    } else {
        UnscheduledReason::NoMatchingSecondTime
    }
}

/// Whether a session of the student's level ran inside one of their
/// windows on a day not in `exclude_days`.
fn has_matching_session(schedule: &Schedule, student: &Student, exclude_days: &[Day]) -> bool {
    schedule.iter().any(|s| {
        s.level == student.level
            && !exclude_days.contains(&s.day)
            && student.covers_hour(s.day, s.start)
    })
}
