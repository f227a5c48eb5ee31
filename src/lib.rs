//! Class-session scheduling for language academies.
//!
//! Assigns a roster of students to one-hour class sessions subject to the
//! teacher's availability, each student's availability, and a shared
//! proficiency level, within class-size bounds and weekly frequency needs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `TimeLabel`, `Availability`,
//!   `Level`, `Student`, `ClassSession`, `Schedule`
//! - **`policy`**: Pluggable level-selection and seat-allocation rules
//! - **`scheduler`**: Greedy placement (`ClassScheduler`) and the
//!   unscheduled-student diagnostics pass
//! - **`validation`**: Input integrity checks (duplicate names, off-grid labels)
//! - **`snapshot`**: Saved-state document and its JSON form
//!
//! # Architecture
//!
//! Placement is a synchronous pure function of (teacher availability,
//! roster, configuration). Per-run counters are owned by the run, so
//! repeated calls with the same inputs yield identical results.
//!
//! # Example
//!
//! ```
//! use u_academy::models::{Availability, Day, Level, Student, TimeLabel};
//! use u_academy::scheduler::generate_schedule;
//!
//! let two_pm = TimeLabel::at_hour(14);
//! let teacher = Availability::new().with_hour(Day::Monday, two_pm);
//! let roster: Vec<Student> = (0..4)
//!     .map(|i| Student::new(format!("S{i}"), Level::KidsI).with_hour(Day::Monday, two_pm))
//!     .collect();
//!
//! let (schedule, unscheduled) = generate_schedule(&teacher, &roster);
//! assert_eq!(schedule.sessions(Day::Monday).len(), 1);
//! assert!(unscheduled.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod scheduler;
pub mod snapshot;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::{AcademyError, Result};
pub use scheduler::{generate_schedule, ClassScheduler, ScheduleOutcome};
