//! Level and experience value objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Experience needed to fill the bar once.
pub const EXPERIENCE_PER_LEVEL: u32 = 100;

// ============================================================================
// Level
// ============================================================================

/// Character level (always >= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    pub const FIRST: Level = Level(1);

    /// # Errors
    ///
    /// Returns `DomainError::Validation` for level 0.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::validation("Level must be at least 1"));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Level {
        Level(self.0.saturating_add(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Level {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> u32 {
        level.0
    }
}

// ============================================================================
// Experience
// ============================================================================

/// Experience inside the current level, in `[0, EXPERIENCE_PER_LEVEL)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Experience(u32);

/// Result of adding experience: the wrapped value and how many bars were filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceGain {
    pub experience: Experience,
    pub levels_filled: u32,
}

impl Experience {
    pub const ZERO: Experience = Experience(0);

    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `value >= EXPERIENCE_PER_LEVEL`.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value >= EXPERIENCE_PER_LEVEL {
            return Err(DomainError::validation(format!(
                "Experience must be below {}, got {}",
                EXPERIENCE_PER_LEVEL, value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Share of the bar filled, 0-99.
    pub fn percentage(self) -> u32 {
        self.0 * 100 / EXPERIENCE_PER_LEVEL
    }

    /// Add `amount`, carrying the remainder past each full bar.
    pub fn add(self, amount: u32) -> ExperienceGain {
        let total = u64::from(self.0) + u64::from(amount);
        let per_level = u64::from(EXPERIENCE_PER_LEVEL);
        ExperienceGain {
            experience: Experience((total % per_level) as u32),
            levels_filled: (total / per_level) as u32,
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, EXPERIENCE_PER_LEVEL)
    }
}

impl TryFrom<u32> for Experience {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Experience> for u32 {
    fn from(exp: Experience) -> u32 {
        exp.0
    }
}
