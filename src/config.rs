//! Scheduler configuration.
//!
//! # Availability Resolution
//! Historically, twice-weekly students were eligible for any slot while
//! they had budget left, whether or not their availability covered it:
//! the window test and the twice-weekly budget test were OR-ed. The
//! `strict_availability` switch selects between that behavior (`false`)
//! and requiring coverage for every student (`true`, the default).

use serde::{Deserialize, Serialize};

use crate::error::{AcademyError, Result};

/// Default minimum students for a session to run.
pub const DEFAULT_MIN_CLASS_SIZE: usize = 3;
/// Default seat cap per session.
pub const DEFAULT_MAX_CLASS_SIZE: usize = 7;

/// Tunables for a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Require every placed student to cover the full session hour.
    pub strict_availability: bool,
    /// Never seat a twice-weekly student twice on the same day.
    pub one_session_per_day: bool,
    /// Fewest eligible students for a level to claim a slot.
    pub min_class_size: usize,
    /// Most students seated in one session.
    pub max_class_size: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            strict_availability: true,
            one_session_per_day: true,
            min_class_size: DEFAULT_MIN_CLASS_SIZE,
            max_class_size: DEFAULT_MAX_CLASS_SIZE,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reproduces the historical placement rules exactly.
    pub fn legacy() -> Self {
        Self {
            strict_availability: false,
            one_session_per_day: false,
            ..Self::default()
        }
    }

    pub fn with_strict_availability(mut self, strict: bool) -> Self {
        self.strict_availability = strict;
        self
    }

    pub fn with_one_session_per_day(mut self, enabled: bool) -> Self {
        self.one_session_per_day = enabled;
        self
    }

    /// Sets the class-size bounds (both inclusive).
    pub fn with_class_size(mut self, min: usize, max: usize) -> Self {
        self.min_class_size = min;
        self.max_class_size = max;
        self
    }

    /// Checks that the class-size bounds can be satisfied.
    pub fn validate(&self) -> Result<()> {
        if self.min_class_size == 0 {
            return Err(AcademyError::InvalidConfig(
                "min_class_size must be at least 1".into(),
            ));
        }
        if self.min_class_size > self.max_class_size {
            return Err(AcademyError::InvalidConfig(format!(
                "min_class_size ({}) exceeds max_class_size ({})",
                self.min_class_size, self.max_class_size
            )));
        }
        Ok(())
    }
}
