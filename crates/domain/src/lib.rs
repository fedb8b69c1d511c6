//! Real Life RPG domain: progression rules, task list, and the persisted
//! snapshot.
//!
//! Pure and synchronous. Time enters only as `DateTime<Utc>` arguments and
//! storage only as the [`PersistedSnapshot`] value, so the runtime and I/O
//! stay in the player crate.

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod job_progression;
pub mod snapshot;
pub mod value_objects;

pub use aggregates::{
    PlayerState, Progression, TaskList, TimeTracking, EXPERIENCE_PER_MINUTE,
    LEVEL_UP_INTERVAL_MINUTES, SECONDS_PER_MINUTE,
};
pub use entities::Task;
pub use error::DomainError;
pub use events::{
    JobClassChange, LevelUp, LevelUpCause, MinuteBoundary, SessionStopped, TickOutcome,
};
pub use ids::TaskId;
pub use job_progression::{
    job_progress_percentage, job_title_for, job_title_for_class_name, next_job, JobRank,
    MAX_LEVEL, MAX_LEVEL_TITLE, NOVICE_TITLE,
};
pub use snapshot::PersistedSnapshot;
pub use value_objects::{
    DailyGoal, Experience, ExperienceGain, JobClass, Level, TaskName, DEFAULT_DAILY_GOAL_MINUTES,
    EXPERIENCE_PER_LEVEL,
};
