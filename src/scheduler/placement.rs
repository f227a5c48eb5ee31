//! Greedy, level-matched class placement.
//!
//! # Algorithm
//!
//! 1. Start a fresh [`PlacementCounts`] for the roster.
//! 2. Group the roster by level in first-seen order.
//! 3. For each day, walk the teacher's start times ascending. Skip a start
//!    unless the teacher is also free one hour later.
//! 4. For each level group, collect the students eligible for the slot.
//! 5. Let the level rule pick at most one group; seat students from it via
//!    the seating rule, bump their counters, and record the session.
//!    A slot never hosts a second class.
//!
//! Days are scheduled independently and students are never moved once
//! seated. The result is deterministic for a given input.
//!
//! # Complexity
//! O(d * t * n) where d=days, t=teacher start times per day, n=students.

use std::sync::Arc;

use tracing::{debug, debug_span, info, trace, warn};

use super::{diagnose, PlacementCounts, UnscheduledReport};
use crate::config::SchedulerConfig;
use crate::models::{Availability, ClassSession, Day, Level, Schedule, Student, TimeLabel};
use crate::policy::{rules, LevelCandidate, LevelSelection, SeatAllocation};

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Weekly timetable.
    pub schedule: Schedule,
    /// Reasons for every under-placed student.
    pub unscheduled: UnscheduledReport,
    /// Sessions placed per student during this run.
    pub placements: PlacementCounts,
}

/// Greedy class scheduler.
///
/// # Example
///
/// ```
/// use u_academy::models::{Availability, Day, Level, Student, TimeLabel};
/// use u_academy::scheduler::ClassScheduler;
///
/// let teacher = Availability::new().with_hour(Day::Monday, TimeLabel::at_hour(14));
/// let roster: Vec<Student> = ["Ana", "Ben", "Cai"]
///     .iter()
///     .map(|n| Student::new(*n, Level::KidsI).with_hour(Day::Monday, TimeLabel::at_hour(14)))
///     .collect();
///
/// let outcome = ClassScheduler::new().generate(&teacher, &roster);
/// assert_eq!(outcome.schedule.session_count(), 1);
/// assert!(outcome.unscheduled.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ClassScheduler {
    config: SchedulerConfig,
    level_rule: Arc<dyn LevelSelection>,
    seating: Arc<dyn SeatAllocation>,
}

impl ClassScheduler {
    /// Creates a scheduler with the default configuration, first-fit level
    /// selection and roster-order seating.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            level_rule: Arc::new(rules::FirstFit),
            seating: Arc::new(rules::RosterOrder),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the level selection rule.
    pub fn with_level_rule<R: LevelSelection + 'static>(mut self, rule: R) -> Self {
        self.level_rule = Arc::new(rule);
        self
    }

    /// Sets the seat allocation rule.
    pub fn with_seating<R: SeatAllocation + 'static>(mut self, rule: R) -> Self {
        self.seating = Arc::new(rule);
        self
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Places the roster and explains every under-placed student.
    ///
    /// Inputs are only read; callers pass snapshots and get an
    /// independent result back.
    pub fn generate(&self, teacher: &Availability, roster: &[Student]) -> ScheduleOutcome {
        let span = debug_span!(
            "generate_schedule",
            students = roster.len(),
            level_rule = self.level_rule.name(),
            seating = self.seating.name(),
            strict = self.config.strict_availability,
        );
        let _enter = span.enter();

        let (schedule, placements) = self.place(teacher, roster);
        let unscheduled = diagnose(&schedule, roster, &placements);

        info!(
            sessions = schedule.session_count(),
            seats = schedule.seat_count(),
            unscheduled = unscheduled.len(),
            "schedule generated"
        );

        ScheduleOutcome {
            schedule,
            unscheduled,
            placements,
        }
    }

    /// Runs the placement pass only.
    ///
    /// An unsatisfiable configuration places nothing.
    pub fn place(&self, teacher: &Availability, roster: &[Student]) -> (Schedule, PlacementCounts) {
        let mut schedule = Schedule::new();
        let mut counts = PlacementCounts::for_roster(roster);

        if let Err(err) = self.config.validate() {
            warn!(%err, "no sessions placed");
            return (schedule, counts);
        }

        let groups = group_by_level(roster);

        for day in Day::ALL {
            for start in teacher.times(day) {
                let Some(end) = start.plus_hour() else {
                    continue;
                };
                if !teacher.contains(day, end) {
                    trace!(%day, %start, "teacher not free for the full hour");
                    continue;
                }

                let candidates: Vec<LevelCandidate> = groups
                    .iter()
                    .map(|(level, members)| {
                        let eligible = members
                            .iter()
                            .copied()
                            .filter(|&idx| self.is_eligible(&roster[idx], idx, &counts, day, start))
                            .collect();
                        LevelCandidate::new(*level, eligible)
                    })
                    .collect();

                let Some(chosen) = self.level_rule.select(&candidates, self.config.min_class_size)
                else {
                    continue;
                };
                let Some(candidate) = candidates.get(chosen) else {
                    warn!(chosen, "level rule returned an out-of-range index");
                    continue;
                };

                let seated = self
                    .seating
                    .allocate(&candidate.eligible, self.config.max_class_size);
                if seated.len() < self.config.min_class_size {
                    continue;
                }

                for &idx in &seated {
                    counts.record(idx, day);
                }

                debug!(
                    %day,
                    %start,
                    level = %candidate.level,
                    seated = seated.len(),
                    eligible = candidate.eligible.len(),
                    "session committed"
                );

                schedule.push(ClassSession::new(
                    day,
                    start,
                    candidate.level,
                    seated.iter().map(|&i| roster[i].name.clone()).collect(),
                ));
            }
        }

        (schedule, counts)
    }

    /// Eligibility of one student for the session at `(day, start)`.
    ///
    /// Strict: the student covers the hour and still has budget.
    /// Legacy: `(covers && none placed) || (twice-weekly && fewer than 2)`,
    /// so twice-weekly students with budget are eligible anywhere.
    fn is_eligible(
        &self,
        student: &Student,
        idx: usize,
        counts: &PlacementCounts,
        day: Day,
        start: TimeLabel,
    ) -> bool {
        if self.config.one_session_per_day && counts.placed_on(idx, day) {
            return false;
        }

        let placed = counts.count(idx);
        let covers = student.covers_hour(day, start);

        if self.config.strict_availability {
            covers && placed < student.required_sessions()
        } else {
            (covers && placed == 0) || (student.twice_weekly && placed < 2)
        }
    }
}

impl Default for ClassScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Roster indices grouped by level, groups in first-seen order.
fn group_by_level(roster: &[Student]) -> Vec<(Level, Vec<usize>)> {
    let mut groups: Vec<(Level, Vec<usize>)> = Vec::new();
    for (idx, student) in roster.iter().enumerate() {
        match groups.iter_mut().find(|(l, _)| *l == student.level) {
            Some((_, members)) => members.push(idx),
            None => groups.push((student.level, vec![idx])),
        }
    }
    groups
}
