//! Scheduling domain models.
//!
//! Provides the availability data model consumed by the scheduler and the
//! schedule it produces.
//!
//! # Domain Mappings
//!
//! | u-academy | Classroom meaning |
//! |-----------|-------------------|
//! | Availability | Free half-hour marks per weekday |
//! | Student | Roster entry with level and weekly frequency |
//! | ClassSession | One-hour class for a single level |
//! | Schedule | Weekly timetable, one class per slot |

mod availability;
mod level;
mod schedule;
mod student;
mod time;

pub use availability::Availability;
pub use level::Level;
pub use schedule::{ClassSession, Schedule};
pub use student::Student;
pub use time::{
    Day, TimeLabel, GRID_LAST, SESSION_MINUTES, STUDENT_GRID_FIRST, TEACHER_GRID_FIRST,
};
