//! Built-in placement rules.
//!
//! # Level Selection
//! - **FIRST_FIT**: first level in grouping order that reaches the minimum.
//! - **MOST_ELIGIBLE**: level with the most eligible students.
//!
//! # Seat Allocation
//! - **ROSTER_ORDER**: first `cap` eligible students; the rest stay unplaced.

use super::{LevelCandidate, LevelSelection, SeatAllocation};

/// First-fit level selection.
///
/// The slot goes to the first level (in first-seen roster order) whose
/// eligible count reaches the minimum. Later levels are not examined,
/// even if larger. Unplaced-student diagnostics assume this rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl LevelSelection for FirstFit {
    fn name(&self) -> &'static str {
        "FIRST_FIT"
    }

    fn select(&self, candidates: &[LevelCandidate], min_class_size: usize) -> Option<usize> {
        candidates.iter().position(|c| c.is_viable(min_class_size))
    }

    fn description(&self) -> &'static str {
        "First level reaching the minimum class size"
    }
}

/// Best-fit level selection.
///
/// The slot goes to the viable level with the most eligible students.
/// Ties go to the earlier level in grouping order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostEligible;

impl LevelSelection for MostEligible {
    fn name(&self) -> &'static str {
        "MOST_ELIGIBLE"
    }

    fn select(&self, candidates: &[LevelCandidate], min_class_size: usize) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, c) in candidates.iter().enumerate() {
            if !c.is_viable(min_class_size) {
                continue;
            }
            match best {
                Some(b) if candidates[b].eligible.len() >= c.eligible.len() => {}
                _ => best = Some(i),
            }
        }
        best
    }

    fn description(&self) -> &'static str {
        "Level with the most eligible students"
    }
}

/// Seats eligible students in roster order up to the cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterOrder;

impl SeatAllocation for RosterOrder {
    fn name(&self) -> &'static str {
        "ROSTER_ORDER"
    }

    fn allocate(&self, eligible: &[usize], cap: usize) -> Vec<usize> {
        eligible.iter().take(cap).copied().collect()
    }

    fn description(&self) -> &'static str {
        "First eligible students in roster order, capped"
    }
}
