//! PlayerState aggregate - the whole widget state behind one owner
//!
//! Composes [`Progression`], [`TimeTracking`] and [`TaskList`] and owns the
//! rules that cross them: ticks turn minute boundaries into experience and
//! levels, and every level gained is counted for the day.
//!
//! # Tick rules
//!
//! For each minute boundary crossed:
//! 1. one daily minute is tracked;
//! 2. `EXPERIENCE_PER_MINUTE` experience is added, leveling on overflow;
//! 3. on every fifth minute one more level is granted.
//!
//! Rules 2 and 3 coincide on every fifth minute, so a fresh session gains two
//! levels per five minutes.

use chrono::{DateTime, Utc};

use crate::aggregates::{Progression, TaskList, TimeTracking};
use crate::events::{JobClassChange, LevelUp, LevelUpCause, SessionStopped, TickOutcome};
use crate::value_objects::{DailyGoal, JobClass};
use crate::{DomainError, TaskId};

/// Experience awarded at every minute boundary.
pub const EXPERIENCE_PER_MINUTE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    progression: Progression,
    time: TimeTracking,
    tasks: TaskList,
}

impl PlayerState {
    /// First-launch state: level 1 Swordsman Novice with the sample tasks.
    pub fn new(daily_goal: DailyGoal) -> Self {
        Self {
            progression: Progression::new(),
            time: TimeTracking::new(daily_goal),
            tasks: TaskList::sample(),
        }
    }

    /// Assemble from already restored parts.
    pub fn from_parts(progression: Progression, time: TimeTracking, tasks: TaskList) -> Self {
        Self {
            progression,
            time,
            tasks,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn time(&self) -> &TimeTracking {
        &self.time
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn is_running(&self) -> bool {
        self.time.is_running()
    }

    pub fn display_seconds(&self) -> u64 {
        self.time.display_seconds()
    }

    // =========================================================================
    // Progression
    // =========================================================================

    /// # Errors
    ///
    /// `InvalidStateTransition` if a session is already running.
    pub fn start_session(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.time.start(now)
    }

    /// # Errors
    ///
    /// `InvalidStateTransition` if no session is running.
    pub fn stop_session(&mut self) -> Result<SessionStopped, DomainError> {
        self.time.stop()
    }

    /// Apply one tick at `now`. A no-op returning an idle outcome when stopped.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        let Some((elapsed_seconds, boundaries)) = self.time.advance(now) else {
            return TickOutcome::default();
        };

        let mut level_ups = Vec::new();
        for boundary in &boundaries {
            for level_up in self.progression.add_experience(EXPERIENCE_PER_MINUTE) {
                self.time.record_level_gained();
                level_ups.push(level_up);
            }
            if boundary.five_minute_mark {
                level_ups.push(self.gain_level(LevelUpCause::FiveMinuteMark));
            }
        }

        TickOutcome {
            elapsed_seconds,
            boundaries,
            level_ups,
        }
    }

    /// Gain one level and count it towards today.
    pub fn gain_level(&mut self, cause: LevelUpCause) -> LevelUp {
        self.time.record_level_gained();
        self.progression.gain_level(cause)
    }

    pub fn select_job_class(&mut self, class: JobClass) -> JobClassChange {
        self.progression.select_job_class(class)
    }

    pub fn set_daily_goal(&mut self, goal: DailyGoal) {
        self.time.set_daily_goal(goal);
    }

    pub fn reset_daily(&mut self) {
        self.time.reset_daily();
    }

    /// Zero every time counter, stopping a running session. Level, experience,
    /// class and tasks are untouched.
    pub fn reset_all(&mut self) -> bool {
        self.time.reset_all()
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    pub fn add_task(&mut self, name: &str, now_millis: u64) -> Option<TaskId> {
        self.tasks.add(name, now_millis)
    }

    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        self.tasks.toggle(id)
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        self.tasks.delete(id).is_some()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DailyGoal::default())
    }
}
