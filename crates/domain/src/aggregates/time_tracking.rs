//! TimeTracking aggregate - timer sessions and daily bookkeeping
//!
//! Elapsed time is always recomputed from the captured start instant, so a
//! late or skipped tick never loses time. Minute boundaries are guarded by the
//! index of the last one fired: each is reported exactly once, and a tick that
//! arrives after several boundaries reports all of them.

use chrono::{DateTime, Utc};

use crate::events::{MinuteBoundary, SessionStopped};
use crate::value_objects::DailyGoal;
use crate::DomainError;

pub const SECONDS_PER_MINUTE: u64 = 60;

/// Every this many minutes the session awards a bonus level.
pub const LEVEL_UP_INTERVAL_MINUTES: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveSession {
    started_at: DateTime<Utc>,
    elapsed_seconds: u64,
    last_minute_fired: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeTracking {
    total_tracked_seconds: u64,
    daily_tracked_minutes: u32,
    levels_gained_today: u32,
    daily_goal: DailyGoal,
    session: Option<ActiveSession>,
}

impl TimeTracking {
    /// Idle tracker with zeroed counters.
    pub fn new(daily_goal: DailyGoal) -> Self {
        Self {
            daily_goal,
            ..Self::default()
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn total_tracked_seconds(&self) -> u64 {
        self.total_tracked_seconds
    }

    /// Seconds in the running session, 0 when idle.
    pub fn session_elapsed_seconds(&self) -> u64 {
        self.session.map(|s| s.elapsed_seconds).unwrap_or(0)
    }

    pub fn daily_tracked_minutes(&self) -> u32 {
        self.daily_tracked_minutes
    }

    pub fn levels_gained_today(&self) -> u32 {
        self.levels_gained_today
    }

    pub fn daily_goal(&self) -> DailyGoal {
        self.daily_goal
    }

    /// Total plus the running session, or the total alone when idle.
    pub fn display_seconds(&self) -> u64 {
        self.total_tracked_seconds + self.session_elapsed_seconds()
    }

    pub fn daily_progress_percentage(&self) -> f64 {
        self.daily_goal
            .progress_percentage(self.daily_tracked_minutes)
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// # Errors
    ///
    /// `InvalidStateTransition` when a session is already running.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.session.is_some() {
            return Err(DomainError::invalid_state_transition(
                "timer is already running",
            ));
        }
        self.session = Some(ActiveSession {
            started_at: now,
            elapsed_seconds: 0,
            last_minute_fired: 0,
        });
        Ok(())
    }

    /// Fold the session into the total.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` when no session is running.
    pub fn stop(&mut self) -> Result<SessionStopped, DomainError> {
        let session = self
            .session
            .take()
            .ok_or_else(|| DomainError::invalid_state_transition("timer is not running"))?;
        self.total_tracked_seconds += session.elapsed_seconds;
        Ok(SessionStopped {
            session_seconds: session.elapsed_seconds,
            total_tracked_seconds: self.total_tracked_seconds,
        })
    }

    /// Recompute elapsed time and report newly crossed minute boundaries.
    ///
    /// Each reported boundary adds one daily minute. Returns `None` when idle.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Option<(u64, Vec<MinuteBoundary>)> {
        let session = self.session.as_mut()?;

        let elapsed = u64::try_from((now - session.started_at).num_seconds()).unwrap_or(0);
        session.elapsed_seconds = elapsed;

        let current_minute = elapsed / SECONDS_PER_MINUTE;
        let boundaries: Vec<MinuteBoundary> = (session.last_minute_fired + 1..=current_minute)
            .map(|minute| MinuteBoundary {
                minute,
                five_minute_mark: minute % LEVEL_UP_INTERVAL_MINUTES == 0,
            })
            .collect();
        session.last_minute_fired = session.last_minute_fired.max(current_minute);

        let crossed = u32::try_from(boundaries.len()).unwrap_or(u32::MAX);
        self.daily_tracked_minutes = self.daily_tracked_minutes.saturating_add(crossed);
        Some((elapsed, boundaries))
    }

    // =========================================================================
    // Counters
    // =========================================================================

    pub fn record_level_gained(&mut self) {
        self.levels_gained_today = self.levels_gained_today.saturating_add(1);
    }

    pub fn set_daily_goal(&mut self, goal: DailyGoal) {
        self.daily_goal = goal;
    }

    /// Zero the daily minutes and levels gained; the total is kept.
    pub fn reset_daily(&mut self) {
        self.daily_tracked_minutes = 0;
        self.levels_gained_today = 0;
    }

    /// Drop any running session and zero every time counter.
    ///
    /// Returns whether a session was running. The discarded session is not
    /// folded into the total.
    pub fn reset_all(&mut self) -> bool {
        let was_running = self.session.take().is_some();
        self.total_tracked_seconds = 0;
        self.reset_daily();
        was_running
    }
}
