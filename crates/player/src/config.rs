//! Runtime configuration read from the environment.
//!
//! `dotenvy` loads a `.env` file first (see `main.rs`); every variable is
//! optional and an unparseable value falls back to its default with a warning.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rlrpg_domain::DailyGoal;

use crate::ports::outbound::storage_keys;

pub const STORAGE_PATH_VAR: &str = "RLRPG_STORAGE_PATH";
pub const STORAGE_KEY_VAR: &str = "RLRPG_STORAGE_KEY";
pub const DAILY_GOAL_VAR: &str = "RLRPG_DAILY_GOAL_MINUTES";
pub const TICK_INTERVAL_VAR: &str = "RLRPG_TICK_INTERVAL_MS";
pub const SAVE_DELAY_VAR: &str = "RLRPG_SAVE_DELAY_MS";

const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;
const DEFAULT_SAVE_DELAY_MS: u64 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Storage file; `None` uses the platform config directory.
    pub storage_path: Option<PathBuf>,
    pub storage_key: String,
    /// Goal applied when no snapshot exists yet.
    pub daily_goal: DailyGoal,
    pub tick_interval: Duration,
    /// Delay before a task-list change is flushed.
    pub save_delay: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            storage_key: storage_keys::PLAYER_SNAPSHOT.to_string(),
            daily_goal: DailyGoal::default(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            save_delay: Duration::from_millis(DEFAULT_SAVE_DELAY_MS),
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let storage_path = lookup(STORAGE_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let storage_key = lookup(STORAGE_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.storage_key);
        let daily_goal = parse_var::<u32>(&lookup, DAILY_GOAL_VAR)
            .and_then(|minutes| match DailyGoal::new(minutes) {
                Ok(goal) => Some(goal),
                Err(e) => {
                    tracing::warn!(var = DAILY_GOAL_VAR, error = %e, "Ignoring daily goal");
                    None
                }
            })
            .unwrap_or(defaults.daily_goal);
        let tick_interval = parse_var::<u64>(&lookup, TICK_INTERVAL_VAR)
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);
        let save_delay = parse_var::<u64>(&lookup, SAVE_DELAY_VAR)
            .map(Duration::from_millis)
            .unwrap_or(defaults.save_delay);

        Self {
            storage_path,
            storage_key,
            daily_goal,
            tick_interval,
            save_delay,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = key, value = %raw, "Unparseable value, using default");
            None
        }
    }
}
