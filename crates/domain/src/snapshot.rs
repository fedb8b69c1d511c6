//! Persisted snapshot - the flat record written under the storage key
//!
//! The snapshot carries every counter so a save taken mid-session is complete,
//! but [`PersistedSnapshot::into_state`] never restores tracked time: a reload
//! always starts with zeroed time counters and an idle timer.

use serde::{Deserialize, Serialize};

use crate::aggregates::{PlayerState, Progression, TaskList, TimeTracking};
use crate::entities::Task;
use crate::value_objects::{DailyGoal, Experience, JobClass, Level, DEFAULT_DAILY_GOAL_MINUTES};
use crate::DomainError;

fn default_daily_goal_minutes() -> u32 {
    DEFAULT_DAILY_GOAL_MINUTES
}

/// Wire shape of the saved widget state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    pub level: u32,
    #[serde(alias = "exp")]
    pub experience: u32,
    pub job_class: String,
    pub job: String,
    #[serde(default)]
    pub total_time_tracked_seconds: u64,
    #[serde(default = "default_daily_goal_minutes")]
    pub daily_goal_minutes: u32,
    #[serde(default)]
    pub daily_tracked_minutes: u32,
    #[serde(default)]
    pub levels_gained: u32,
    #[serde(default)]
    pub task_list: Vec<Task>,
}

impl PersistedSnapshot {
    /// Capture the full state, time counters included.
    pub fn from_state(state: &PlayerState) -> Self {
        let progression = state.progression();
        let time = state.time();
        Self {
            level: progression.level().value(),
            experience: progression.experience().value(),
            job_class: progression.job_class().to_string(),
            job: progression.job_title().to_string(),
            total_time_tracked_seconds: time.total_tracked_seconds(),
            daily_goal_minutes: time.daily_goal().minutes(),
            daily_tracked_minutes: time.daily_tracked_minutes(),
            levels_gained: time.levels_gained_today(),
            task_list: state.tasks().tasks().to_vec(),
        }
    }

    /// Whether `job_class` names a known class (otherwise Swordsman is used).
    pub fn has_known_job_class(&self) -> bool {
        self.job_class.parse::<JobClass>().is_ok()
    }

    /// Rebuild the player state.
    ///
    /// Tracked seconds, daily minutes and levels gained are forced to zero, and
    /// the job title is rederived from level and class rather than read from
    /// `job`.
    ///
    /// # Errors
    ///
    /// `Validation` when level, experience or daily goal are out of range.
    pub fn into_state(self) -> Result<PlayerState, DomainError> {
        let level = Level::new(self.level)?;
        let experience = Experience::new(self.experience)?;
        let daily_goal = DailyGoal::new(self.daily_goal_minutes)?;
        let job_class = JobClass::from_name_or_default(&self.job_class);

        Ok(PlayerState::from_parts(
            Progression::restore(level, experience, job_class),
            TimeTracking::new(daily_goal),
            TaskList::from_tasks(self.task_list),
        ))
    }
}
