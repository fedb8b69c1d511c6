//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations

pub mod player_state;
pub mod progression;
pub mod task_list;
pub mod time_tracking;

pub use player_state::{PlayerState, EXPERIENCE_PER_MINUTE};
pub use progression::Progression;
pub use task_list::TaskList;
pub use time_tracking::{TimeTracking, LEVEL_UP_INTERVAL_MINUTES, SECONDS_PER_MINUTE};
