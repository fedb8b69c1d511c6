//! Validated name and goal newtypes.
//!
//! Each type is valid by construction and deserializes through its
//! constructor, so a malformed snapshot fails to parse instead of producing
//! an invalid value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DomainError;

// ============================================================================
// TaskName
// ============================================================================

/// A validated task name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskName(String);

impl TaskName {
    /// Create a new validated task name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Task name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TaskName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<TaskName> for String {
    fn from(name: TaskName) -> String {
        name.0
    }
}

// ============================================================================
// DailyGoal
// ============================================================================

/// Default daily target: three hours.
pub const DEFAULT_DAILY_GOAL_MINUTES: u32 = 180;

/// Daily tracked-minutes target. Cosmetic: it only feeds the progress ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DailyGoal(u32);

impl DailyGoal {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a zero-minute goal.
    pub fn new(minutes: u32) -> Result<Self, DomainError> {
        if minutes == 0 {
            return Err(DomainError::validation(
                "Daily goal must be at least one minute",
            ));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    /// `min(tracked / goal * 100, 100)`
    pub fn progress_percentage(self, tracked_minutes: u32) -> f64 {
        (f64::from(tracked_minutes) / f64::from(self.0) * 100.0).min(100.0)
    }
}

impl Default for DailyGoal {
    fn default() -> Self {
        Self(DEFAULT_DAILY_GOAL_MINUTES)
    }
}

impl fmt::Display for DailyGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

impl TryFrom<u32> for DailyGoal {
    type Error = DomainError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<DailyGoal> for u32 {
    fn from(goal: DailyGoal) -> u32 {
        goal.0
    }
}
