//! Value objects - Immutable objects defined by their attributes

mod experience;
mod job_class;
mod names;

pub use experience::{Experience, ExperienceGain, Level, EXPERIENCE_PER_LEVEL};
pub use job_class::JobClass;
pub use names::{DailyGoal, TaskName, DEFAULT_DAILY_GOAL_MINUTES};
