//! Envelope phases that have a measurable duration.

use std::fmt;
use std::str::FromStr;

use crate::error::AdsrError;

/// A timed envelope phase. Sustain is a level, not a duration, and has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Attack,
    Decay,
    Release,
}

impl Phase {
    /// All timed phases, in report order.
    pub const ALL: [Phase; 3] = [Phase::Attack, Phase::Decay, Phase::Release];

    /// Position in [`Phase::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used in CLI arguments and CSV output.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Attack => "attack",
            Phase::Decay => "decay",
            Phase::Release => "release",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = AdsrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attack" | "a" => Ok(Phase::Attack),
            "decay" | "d" => Ok(Phase::Decay),
            "release" | "r" => Ok(Phase::Release),
            other => Err(AdsrError::invalid("phase", format!("unknown phase '{other}'"))),
        }
    }
}
