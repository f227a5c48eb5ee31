//! Persisted academy state.
//!
//! A [`Snapshot`] is the document collaborators save and reload: teacher
//! availability, the roster, and optionally the last generated schedule.
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "teacher_availability": { "Monday": ["14:00", "15:00"] },
//!   "students": [
//!     { "name": "Ana", "level": "Kids I",
//!       "availability": { "Monday": ["14:00", "15:00"] },
//!       "twice_weekly": false }
//!   ],
//!   "generated_schedule": {
//!     "Monday": [ { "time": "14:00", "level": "Kids I", "students": ["Ana"] } ]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AcademyError, Result};
use crate::models::{Availability, ClassSession, Day, Level, Schedule, Student, TimeLabel};
use crate::scheduler::{diagnose, PlacementCounts, UnscheduledReport};

/// Saved teacher calendar, roster and (optionally) schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub teacher_availability: Availability,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_schedule: Option<Schedule>,
}

impl Snapshot {
    pub fn new(teacher_availability: Availability, students: Vec<Student>) -> Self {
        Self {
            teacher_availability,
            students,
            generated_schedule: None,
        }
    }

    /// Attaches a generated schedule.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.generated_schedule = Some(schedule);
        self
    }

    /// Parses a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Renders the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a snapshot from any byte source.
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        let snapshot: Self = serde_json::from_reader(reader)?;
        debug!(
            students = snapshot.students.len(),
            teacher_slots = snapshot.teacher_availability.total_slots(),
            has_schedule = snapshot.generated_schedule.is_some(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Writes the snapshot as JSON to any byte sink.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Diagnostics for the saved schedule against the saved roster.
    ///
    /// Counters are rebuilt from the schedule itself, so this works for
    /// schedules produced by earlier sessions.
    pub fn saved_report(&self) -> Option<UnscheduledReport> {
        let schedule = self.generated_schedule.as_ref()?;
        let counts = PlacementCounts::from_schedule(schedule, &self.students);
        Some(diagnose(schedule, &self.students, &counts))
    }
}

/// Wire form of one session; the day is the enclosing map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    time: TimeLabel,
    level: Level,
    #[serde(default)]
    students: Vec<String>,
}

/// Wire form of a schedule: day name to sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleRecord(BTreeMap<Day, Vec<SessionRecord>>);

impl From<Schedule> for ScheduleRecord {
    fn from(schedule: Schedule) -> Self {
        let mut days = BTreeMap::new();
        for day in Day::ALL {
            let sessions: Vec<SessionRecord> = schedule
                .sessions(day)
                .iter()
                .map(|s| SessionRecord {
                    time: s.start,
                    level: s.level,
                    students: s.students.clone(),
                })
                .collect();
            days.insert(day, sessions);
        }
        Self(days)
    }
}

impl TryFrom<ScheduleRecord> for Schedule {
    type Error = AcademyError;

    fn try_from(record: ScheduleRecord) -> Result<Self> {
        let mut schedule = Schedule::new();
        for (day, sessions) in record.0 {
            for s in sessions {
                schedule.try_insert(ClassSession::new(day, s.time, s.level, s.students))?;
            }
        }
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{ClassScheduler, UnscheduledReason};

    fn t(h: u16) -> TimeLabel {
        TimeLabel::at_hour(h)
    }

    fn sample_snapshot() -> Snapshot {
        let teacher = Availability::new().with_hour(Day::Monday, t(14));
        let mut students: Vec<Student> = ["Ana", "Ben", "Cai"]
            .iter()
            .map(|n| Student::new(*n, Level::KidsI).with_hour(Day::Monday, t(14)))
            .collect();
        students.push(Student::new("Dee", Level::TeensII).twice_weekly());
        Snapshot::new(teacher, students)
    }

    #[test]
    fn test_json_keys() {
        let json = sample_snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["teacher_availability"]["Monday"][0], "14:00");
        assert_eq!(value["students"][0]["name"], "Ana");
        assert_eq!(value["students"][3]["twice_weekly"], true);
        assert!(value.get("generated_schedule").is_none());
    }

    #[test]
    fn test_reload_with_schedule() {
        let snapshot = sample_snapshot();
        let outcome = ClassScheduler::new()
            .generate(&snapshot.teacher_availability, &snapshot.students);
        let saved = snapshot.with_schedule(outcome.schedule.clone());

        let mut buf = Vec::new();
        saved.write_to(&mut buf).unwrap();
        let loaded = Snapshot::read_from(buf.as_slice()).unwrap();

        assert_eq!(loaded, saved);
        let schedule = loaded.generated_schedule.as_ref().unwrap();
        assert_eq!(schedule.sessions(Day::Monday)[0].students, vec!["Ana", "Ben", "Cai"]);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let session = &value["generated_schedule"]["Monday"][0];
        assert_eq!(session["time"], "14:00");
        assert_eq!(session["level"], "Kids I");
    }

    #[test]
    fn test_saved_report_matches_run() {
        let snapshot = sample_snapshot();
        let outcome = ClassScheduler::new()
            .generate(&snapshot.teacher_availability, &snapshot.students);
        let saved = snapshot.with_schedule(outcome.schedule);

        let report = saved.saved_report().unwrap();
        assert_eq!(report, outcome.unscheduled);
        assert_eq!(report.reason_for("Dee"), Some(UnscheduledReason::NoAvailableTimeSlots));
        assert!(sample_snapshot().saved_report().is_none());
    }

    #[test]
    fn test_load_legacy_document() {
        let text = r#"{
            "students": [{"name": "Test Student", "level": "Kids I",
                          "availability": {"Monday": [], "Tuesday": []},
                          "twice_weekly": false}],
            "teacher_availability": {"Monday": ["09:00"], "Friday": ["09:00"]},
            "generated_schedule": {}
        }"#;
        let snapshot = Snapshot::from_json(text).unwrap();

        assert_eq!(snapshot.students.len(), 1);
        assert!(snapshot.students[0].availability.is_empty());
        assert_eq!(snapshot.teacher_availability.total_slots(), 2);
        assert!(snapshot.generated_schedule.unwrap().is_empty());
    }

    #[test]
    fn test_conflicting_schedule_rejected() {
        let text = r#"{
            "teacher_availability": {},
            "students": [],
            "generated_schedule": {"Monday": [
                {"time": "14:00", "level": "Kids I", "students": ["a", "b", "c"]},
                {"time": "14:00", "level": "Teens I", "students": ["d", "e", "f"]}
            ]}
        }"#;
        let err = Snapshot::from_json(text).unwrap_err();
        assert!(matches!(err, AcademyError::Json(_)));
        assert!(err.to_string().contains("already hosts a class"));
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(Snapshot::from_json("not json"), Err(AcademyError::Json(_))));
        let bad_level = r#"{"students": [{"name": "X", "level": "Adults"}]}"#;
        assert!(Snapshot::from_json(bad_level).is_err());
        let bad_time = r#"{"teacher_availability": {"Monday": ["25:00"]}}"#;
        assert!(Snapshot::from_json(bad_time).is_err());
    }
}
