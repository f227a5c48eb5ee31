//! Error types.
//!
//! Placement itself never fails: slots and students that do not fit are
//! skipped or reported as diagnostics. Errors only arise when parsing
//! labels, validating configuration, or moving snapshots in and out of
//! their serialized form.

use thiserror::Error;

use crate::models::{Day, TimeLabel};

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, AcademyError>;

/// Errors raised outside of the placement pass.
#[derive(Debug, Error)]
pub enum AcademyError {
    /// A time label was not of the form `HH:MM` within one day.
    #[error("invalid time label '{0}' (expected HH:MM between 00:00 and 23:59)")]
    InvalidTimeLabel(String),

    /// A day name did not match any teaching weekday.
    #[error("unknown day '{0}'")]
    UnknownDay(String),

    /// A level label did not match any proficiency level.
    #[error("unknown level '{0}'")]
    UnknownLevel(String),

    /// A second session was offered in an occupied slot.
    #[error("slot {day} {time} already hosts a class")]
    SlotOccupied { day: Day, time: TimeLabel },

    /// Scheduler configuration is not satisfiable.
    #[error("invalid scheduler configuration: {0}")]
    InvalidConfig(String),

    #[error("snapshot encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
