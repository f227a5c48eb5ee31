//! Class placement and unscheduled-student diagnostics.
//!
//! # Algorithm
//!
//! [`ClassScheduler`] uses a greedy, first-fit, level-matched heuristic:
//! each teacher hour hosts at most one class, for the first level with
//! enough eligible students. It is deterministic but not optimal.
//!
//! # Diagnostics
//!
//! [`diagnose`] is a separate pure pass over the finished schedule that
//! explains every student left with fewer sessions than required.

mod counts;
mod diagnostics;
mod placement;

pub use counts::PlacementCounts;
pub use diagnostics::{diagnose, UnscheduledReason, UnscheduledReport, UnscheduledStudent};
pub use placement::{ClassScheduler, ScheduleOutcome};

use crate::models::{Availability, Schedule, Student};

/// Generates a weekly schedule with the default scheduler.
///
/// Shorthand for [`ClassScheduler::new`] followed by
/// [`ClassScheduler::generate`].
pub fn generate_schedule(
    teacher: &Availability,
    roster: &[Student],
) -> (Schedule, UnscheduledReport) {
    let outcome = ClassScheduler::new().generate(teacher, roster);
    (outcome.schedule, outcome.unscheduled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Level, TimeLabel};

    #[test]
    fn test_generate_schedule_shorthand() {
        let teacher = Availability::new().with_hour(Day::Wednesday, TimeLabel::at_hour(17));
        let roster: Vec<Student> = (0..4)
            .map(|i| {
                Student::new(format!("S{i}"), Level::B1Plus)
                    .with_hour(Day::Wednesday, TimeLabel::at_hour(17))
            })
            .collect();

        let (schedule, unscheduled) = generate_schedule(&teacher, &roster);
        assert_eq!(schedule.session_count(), 1);
        assert_eq!(schedule.sessions(Day::Wednesday)[0].level, Level::B1Plus);
        assert!(unscheduled.is_empty());
    }
}
