//! Per-run placement counters.
//!
//! Each run owns a fresh [`PlacementCounts`] aligned with the roster it
//! was given, so counters cannot leak between runs and roster records are
//! never mutated.

use crate::models::{Day, Schedule, Student};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    sessions: u8,
    days: Vec<Day>,
}

/// Sessions placed per student during one run, indexed by roster position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementCounts {
    entries: Vec<Entry>,
}

impl PlacementCounts {
    /// Zeroed counters for a roster.
    pub fn for_roster(roster: &[Student]) -> Self {
        Self {
            entries: roster
                .iter()
                .map(|s| Entry {
                    name: s.name.clone(),
                    sessions: 0,
                    days: Vec::new(),
                })
                .collect(),
        }
    }

    /// Recomputes counters from an existing schedule (e.g. one reloaded
    /// from a snapshot). Students are matched by name.
    pub fn from_schedule(schedule: &Schedule, roster: &[Student]) -> Self {
        let mut counts = Self::for_roster(roster);
        for session in schedule.iter() {
            for (idx, student) in roster.iter().enumerate() {
                if session.has_student(&student.name) {
                    counts.record(idx, session.day);
                }
            }
        }
        counts
    }

    /// Records one placement of the student at `idx` on `day`.
    pub(crate) fn record(&mut self, idx: usize, day: Day) {
        if let Some(e) = self.entries.get_mut(idx) {
            e.sessions = e.sessions.saturating_add(1);
            if !e.days.contains(&day) {
                e.days.push(day);
            }
        }
    }

    /// Sessions placed for the student at roster index `idx`.
    #[inline]
    pub fn count(&self, idx: usize) -> u8 {
        self.entries.get(idx).map_or(0, |e| e.sessions)
    }

    /// Distinct days the student at `idx` was placed on, in placement order.
    pub fn days(&self, idx: usize) -> &[Day] {
        self.entries.get(idx).map(|e| e.days.as_slice()).unwrap_or(&[])
    }

    /// Whether the student at `idx` already has a session on `day`.
    #[inline]
    pub fn placed_on(&self, idx: usize, day: Day) -> bool {
        self.days(idx).contains(&day)
    }

    /// Sessions placed for the first student with this name.
    pub fn get(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.sessions)
    }

    /// `(name, sessions)` in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.sessions))
    }

    /// Total seats filled in the run.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.sessions as usize).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
