use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Accepted work duration, in minutes.
pub const WORK_MINUTES_RANGE: RangeInclusive<u32> = 1..=120;
/// Accepted break duration, in minutes.
pub const BREAK_MINUTES_RANGE: RangeInclusive<u32> = 1..=60;

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    Work,
    Break,
}

impl Session {
    /// The session that follows this one.
    pub fn next(self) -> Self {
        match self {
            Session::Work => Session::Break,
            Session::Break => Session::Work,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Work => f.write_str("Work"),
            Session::Break => f.write_str("Break"),
        }
    }
}

/// Named work/break pairs offered as one-click presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// 25 / 5
    Classic,
    /// 50 / 10
    Extended,
    /// 90 / 20
    Deep,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Classic, Preset::Extended, Preset::Deep];

    /// `(work_minutes, break_minutes)`.
    pub fn durations(self) -> (u32, u32) {
        match self {
            Preset::Classic => (25, 5),
            Preset::Extended => (50, 10),
            Preset::Deep => (90, 20),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Extended => "extended",
            Preset::Deep => "deep",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<_> = Preset::ALL.iter().map(|p| p.name()).collect();
                format!("unknown preset '{s}' (expected one of: {})", names.join(", "))
            })
    }
}
