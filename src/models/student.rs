//! Student model.
//!
//! A student is identified by display name, belongs to one proficiency
//! level, and needs one or two sessions per week.
//!
//! Placement progress is deliberately absent from this record: each
//! scheduling run keeps its own counters (see
//! [`PlacementCounts`](crate::scheduler::PlacementCounts)), so roster
//! records stay untouched by scheduling.

use serde::{Deserialize, Serialize};

use super::{Availability, Day, Level, TimeLabel};

/// A student on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name. Unique (case-insensitively) within a roster.
    pub name: String,
    /// Proficiency level.
    pub level: Level,
    /// Weekly availability.
    #[serde(default)]
    pub availability: Availability,
    /// Whether the student needs two sessions per week.
    #[serde(default)]
    pub twice_weekly: bool,
}

impl Student {
    /// Creates a once-weekly student with no availability.
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level,
            availability: Availability::new(),
            twice_weekly: false,
        }
    }

    /// Sets the weekly availability.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Marks a one-hour window (start and end labels) as available.
    pub fn with_hour(mut self, day: Day, start: TimeLabel) -> Self {
        self.availability = self.availability.with_hour(day, start);
        self
    }

    /// Requires two sessions per week.
    pub fn twice_weekly(mut self) -> Self {
        self.twice_weekly = true;
        self
    }

    /// Sessions needed per week (1 or 2).
    #[inline]
    pub fn required_sessions(&self) -> u8 {
        if self.twice_weekly {
            2
        } else {
            1
        }
    }

    /// Whether the student is free for a full session starting at `start`.
    #[inline]
    pub fn covers_hour(&self, day: Day, start: TimeLabel) -> bool {
        self.availability.covers_hour(day, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let s = Student::new("John Doe", Level::KidsI)
            .with_hour(Day::Monday, TimeLabel::at_hour(14))
            .twice_weekly();

        assert_eq!(s.name, "John Doe");
        assert_eq!(s.level, Level::KidsI);
        assert!(s.twice_weekly);
        assert_eq!(s.required_sessions(), 2);
        assert!(s.covers_hour(Day::Monday, TimeLabel::at_hour(14)));
    }

    #[test]
    fn test_once_weekly_default() {
        let s = Student::new("Alice", Level::PreTeensI);
        assert!(!s.twice_weekly);
        assert_eq!(s.required_sessions(), 1);
        assert!(s.availability.is_empty());
    }

    #[test]
    fn test_serde_shape() {
        let s = Student::new("Bob", Level::TeensIII).with_hour(Day::Tuesday, TimeLabel::at_hour(12));
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["name"], "Bob");
        assert_eq!(json["level"], "Teens III");
        assert_eq!(json["twice_weekly"], false);
        assert_eq!(json["availability"]["Tuesday"][1], "13:00");

        // availability and twice_weekly are optional on input
        let minimal: Student = serde_json::from_str(r#"{"name":"Eve","level":"First"}"#).unwrap();
        assert!(minimal.availability.is_empty());
        assert!(!minimal.twice_weekly);
    }
}
