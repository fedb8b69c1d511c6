//! Progression-related domain events
//!
//! These types communicate what happened when the player state was modified,
//! allowing callers to log, save, or render accordingly.

use crate::value_objects::{JobClass, Level};

/// Why a level was gained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelUpCause {
    /// The experience bar filled and wrapped.
    ExperienceOverflow,
    /// The session crossed a five-minute mark.
    FiveMinuteMark,
}

/// A single level gained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub level: Level,
    pub job_title: &'static str,
    /// True when this level crossed a ladder threshold.
    pub title_changed: bool,
    pub cause: LevelUpCause,
}

/// Outcome of switching job class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobClassChange {
    Changed {
        from: JobClass,
        to: JobClass,
        job_title: &'static str,
    },
    Unchanged {
        class: JobClass,
    },
}

/// Outcome of stopping a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStopped {
    pub session_seconds: u64,
    pub total_tracked_seconds: u64,
}

/// A minute boundary crossed by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteBoundary {
    /// 1-based minute index since session start.
    pub minute: u64,
    /// Whether this minute is also a multiple of five.
    pub five_minute_mark: bool,
}

/// Everything a single tick changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub elapsed_seconds: u64,
    pub boundaries: Vec<MinuteBoundary>,
    pub level_ups: Vec<LevelUp>,
}

impl TickOutcome {
    /// No boundary crossed, so nothing beyond the elapsed counter moved.
    pub fn is_idle(&self) -> bool {
        self.boundaries.is_empty()
    }
}
