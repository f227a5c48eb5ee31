//! Weekly availability model.
//!
//! An [`Availability`] records, per teaching day, the set of half-hour
//! labels at which a person is free. The teacher owns one calendar and
//! each student owns another.
//!
//! # Session Coverage
//! A one-hour session starting at `t` is covered iff both `t` and
//! `t + 60min` are marked for that day. The half-hour in between is not
//! consulted: the grid marks instants, not intervals.
//!
//! # Snapshots
//! `Clone` produces a fully independent copy. Collaborators snapshot the
//! live availability before a run so edits made while scheduling never
//! reach the scheduler.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{Day, TimeLabel};

/// Per-day sets of available time labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability {
    slots: BTreeMap<Day, BTreeSet<TimeLabel>>,
}

impl Availability {
    /// Creates an empty availability (free at no time).
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a label as available.
    pub fn with_time(mut self, day: Day, time: TimeLabel) -> Self {
        self.insert(day, time);
        self
    }

    /// Marks every label of a day as available.
    pub fn with_times(mut self, day: Day, times: impl IntoIterator<Item = TimeLabel>) -> Self {
        for t in times {
            self.insert(day, t);
        }
        self
    }

    /// Marks the start and end label of a one-hour session.
    ///
    /// Does nothing to the end label if the hour would run past midnight.
    pub fn with_hour(mut self, day: Day, start: TimeLabel) -> Self {
        self.insert(day, start);
        if let Some(end) = start.plus_hour() {
            self.insert(day, end);
        }
        self
    }

    /// Flips membership of a label. Returns the new membership state.
    pub fn toggle(&mut self, day: Day, time: TimeLabel) -> bool {
        if self.remove(day, time) {
            false
        } else {
            self.insert(day, time);
            true
        }
    }

    /// Marks a label as available. Returns `false` if it already was.
    pub fn insert(&mut self, day: Day, time: TimeLabel) -> bool {
        self.slots.entry(day).or_default().insert(time)
    }

    /// Clears a label. Returns `false` if it was not set.
    pub fn remove(&mut self, day: Day, time: TimeLabel) -> bool {
        let Some(times) = self.slots.get_mut(&day) else {
            return false;
        };
        let removed = times.remove(&time);
        if times.is_empty() {
            self.slots.remove(&day);
        }
        removed
    }

    /// Clears every label of a day.
    pub fn clear_day(&mut self, day: Day) {
        self.slots.remove(&day);
    }

    /// Whether a label is available.
    #[inline]
    pub fn contains(&self, day: Day, time: TimeLabel) -> bool {
        self.slots.get(&day).is_some_and(|t| t.contains(&time))
    }

    /// Whether a full one-hour session starting at `start` is covered.
    pub fn covers_hour(&self, day: Day, start: TimeLabel) -> bool {
        match start.plus_hour() {
            Some(end) => self.contains(day, start) && self.contains(day, end),
            None => false,
        }
    }

    /// Available labels of a day, ascending.
    pub fn times(&self, day: Day) -> impl Iterator<Item = TimeLabel> + '_ {
        self.slots.get(&day).into_iter().flatten().copied()
    }

    /// Days with at least one available label, in weekday order.
    pub fn available_days(&self) -> impl Iterator<Item = Day> + '_ {
        self.slots
            .iter()
            .filter(|(_, t)| !t.is_empty())
            .map(|(d, _)| *d)
    }

    /// Whether no label is set on any day.
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(BTreeSet::is_empty)
    }

    /// Total number of available labels across all days.
    pub fn total_slots(&self) -> usize {
        self.slots.values().map(BTreeSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeLabel {
        s.parse().unwrap()
    }

    #[test]
    fn test_toggle() {
        let mut a = Availability::new();
        assert!(a.toggle(Day::Monday, t("14:00")));
        assert!(a.contains(Day::Monday, t("14:00")));
        assert!(!a.toggle(Day::Monday, t("14:00")));
        assert!(!a.contains(Day::Monday, t("14:00")));
        assert!(a.is_empty());
    }

    #[test]
    fn test_covers_hour() {
        let a = Availability::new()
            .with_time(Day::Monday, t("14:00"))
            .with_time(Day::Monday, t("15:00"));

        assert!(a.covers_hour(Day::Monday, t("14:00")));
        assert!(!a.covers_hour(Day::Monday, t("15:00"))); // 16:00 missing
        assert!(!a.covers_hour(Day::Tuesday, t("14:00")));
    }

    #[test]
    fn test_covers_hour_ignores_midpoint() {
        // 14:30 is not required
        let a = Availability::new().with_hour(Day::Friday, t("14:00"));
        assert_eq!(a.total_slots(), 2);
        assert!(a.covers_hour(Day::Friday, t("14:00")));
    }

    #[test]
    fn test_times_sorted() {
        let a = Availability::new()
            .with_time(Day::Tuesday, t("16:00"))
            .with_time(Day::Tuesday, t("12:30"))
            .with_time(Day::Tuesday, t("14:00"));

        let times: Vec<String> = a.times(Day::Tuesday).map(|x| x.to_string()).collect();
        assert_eq!(times, vec!["12:30", "14:00", "16:00"]);
        assert_eq!(a.times(Day::Monday).count(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut live = Availability::new().with_hour(Day::Monday, t("14:00"));
        let snapshot = live.clone();

        live.toggle(Day::Monday, t("14:00"));
        live.insert(Day::Wednesday, t("12:00"));

        assert!(snapshot.covers_hour(Day::Monday, t("14:00")));
        assert!(!snapshot.contains(Day::Wednesday, t("12:00")));
        assert_ne!(live, snapshot);
    }

    #[test]
    fn test_available_days() {
        let mut a = Availability::new()
            .with_time(Day::Thursday, t("12:00"))
            .with_time(Day::Monday, t("12:00"));
        let days: Vec<Day> = a.available_days().collect();
        assert_eq!(days, vec![Day::Monday, Day::Thursday]);

        a.clear_day(Day::Monday);
        assert_eq!(a.available_days().count(), 1);
    }

    #[test]
    fn test_serde_shape() {
        let a = Availability::new()
            .with_time(Day::Monday, t("15:00"))
            .with_time(Day::Monday, t("14:00"));
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"Monday":["14:00","15:00"]}"#);

        let back: Availability = serde_json::from_str(r#"{"Tuesday":["12:00","12:00"]}"#).unwrap();
        assert_eq!(back.total_slots(), 1); // duplicates collapse
    }
}
