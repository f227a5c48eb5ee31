//! Proficiency levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AcademyError;

/// A proficiency level. Students and sessions must match exactly.
///
/// Declaration order follows the academy's progression and is the order
/// used when reports are listed by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "Kids I")]
    KidsI,
    #[serde(rename = "Kids II")]
    KidsII,
    #[serde(rename = "Kids III")]
    KidsIII,
    #[serde(rename = "Pre-Teens I")]
    PreTeensI,
    #[serde(rename = "Pre-Teens II")]
    PreTeensII,
    #[serde(rename = "Pre-Teens III")]
    PreTeensIII,
    #[serde(rename = "Teens I")]
    TeensI,
    #[serde(rename = "Teens II")]
    TeensII,
    #[serde(rename = "Teens III")]
    TeensIII,
    #[serde(rename = "B1+")]
    B1Plus,
    #[serde(rename = "First")]
    First,
}

impl Level {
    /// Every level in progression order.
    pub const ALL: [Level; 11] = [
        Level::KidsI,
        Level::KidsII,
        Level::KidsIII,
        Level::PreTeensI,
        Level::PreTeensII,
        Level::PreTeensIII,
        Level::TeensI,
        Level::TeensII,
        Level::TeensIII,
        Level::B1Plus,
        Level::First,
    ];

    /// Display label (e.g. `"Pre-Teens II"`).
    pub fn label(self) -> &'static str {
        match self {
            Level::KidsI => "Kids I",
            Level::KidsII => "Kids II",
            Level::KidsIII => "Kids III",
            Level::PreTeensI => "Pre-Teens I",
            Level::PreTeensII => "Pre-Teens II",
            Level::PreTeensIII => "Pre-Teens III",
            Level::TeensI => "Teens I",
            Level::TeensII => "Teens II",
            Level::TeensIII => "Teens III",
            Level::B1Plus => "B1+",
            Level::First => "First",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = AcademyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.label() == s.trim())
            .ok_or_else(|| AcademyError::UnknownLevel(s.to_string()))
    }
}
