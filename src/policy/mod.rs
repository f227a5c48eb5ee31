//! Placement policies.
//!
//! Two decisions in the placement loop are policy rather than mechanism:
//!
//! - **Level selection**: which level's class a slot hosts when more than
//!   one level has enough eligible students.
//! - **Seat allocation**: who is seated when more students are eligible
//!   than the cap allows.
//!
//! Both sit behind traits so they can be tested and swapped without
//! touching the loop in [`ClassScheduler`](crate::scheduler::ClassScheduler).
//!
//! # Usage
//!
//! ```
//! use u_academy::policy::rules;
//! use u_academy::scheduler::ClassScheduler;
//!
//! let scheduler = ClassScheduler::new()
//!     .with_level_rule(rules::MostEligible)
//!     .with_seating(rules::RosterOrder);
//! ```

pub mod rules;

use std::fmt::Debug;

use crate::models::Level;

/// The eligible students of one level for a candidate slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCandidate {
    /// Level of the group.
    pub level: Level,
    /// Roster indices of eligible students, in roster order.
    pub eligible: Vec<usize>,
}

impl LevelCandidate {
    pub fn new(level: Level, eligible: Vec<usize>) -> Self {
        Self { level, eligible }
    }

    /// Whether enough students are eligible to run a class.
    #[inline]
    pub fn is_viable(&self, min_class_size: usize) -> bool {
        self.eligible.len() >= min_class_size
    }
}

/// Chooses which level, if any, claims a slot.
///
/// Candidates arrive in level grouping order (first-seen in the roster).
pub trait LevelSelection: Send + Sync + Debug {
    /// Rule name (e.g. "FIRST_FIT").
    fn name(&self) -> &'static str;

    /// Returns the index into `candidates` of the level that gets the
    /// slot, or `None` to leave the slot empty.
    fn select(&self, candidates: &[LevelCandidate], min_class_size: usize) -> Option<usize>;

    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Chooses which eligible students are seated in a session.
pub trait SeatAllocation: Send + Sync + Debug {
    /// Rule name (e.g. "ROSTER_ORDER").
    fn name(&self) -> &'static str;

    /// Returns at most `cap` roster indices drawn from `eligible`.
    fn allocate(&self, eligible: &[usize], cap: usize) -> Vec<usize>;

    fn description(&self) -> &'static str {
        self.name()
    }
}
