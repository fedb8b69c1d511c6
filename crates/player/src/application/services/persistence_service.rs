//! Persistence gateway - the one place the player snapshot meets storage
//!
//! Built once at startup around an injected [`StorageProvider`]. Saves are
//! fire-and-forget: every failure is logged and swallowed. Loads never fail:
//! a missing, unreadable, or invalid snapshot yields the first-launch state.

use std::sync::Arc;

use rlrpg_domain::{DailyGoal, PersistedSnapshot, PlayerState};

use crate::ports::outbound::StorageProvider;

pub struct PersistenceGateway {
    storage: Arc<dyn StorageProvider>,
    key: String,
    default_goal: DailyGoal,
}

impl PersistenceGateway {
    pub fn new(
        storage: Arc<dyn StorageProvider>,
        key: impl Into<String>,
        default_goal: DailyGoal,
    ) -> Self {
        Self {
            storage,
            key: key.into(),
            default_goal,
        }
    }

    /// Write the full state, time counters included, over any prior value.
    pub fn save(&self, state: &PlayerState) {
        let snapshot = PersistedSnapshot::from_state(state);
        let json = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize player snapshot");
                return;
            }
        };

        match self.storage.save(&self.key, &json) {
            Ok(()) => tracing::info!(
                level = snapshot.level,
                tasks = snapshot.task_list.len(),
                "Game progress saved"
            ),
            Err(e) => tracing::error!(error = %e, key = %self.key, "Error saving data"),
        }
    }

    /// Read the snapshot, or the first-launch state if there is none usable.
    ///
    /// A restored state always has zeroed tracked time and a title derived
    /// from its level and class.
    pub fn load(&self) -> PlayerState {
        let raw = match self.storage.load(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!(key = %self.key, "No saved data, starting fresh");
                return self.default_state();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error loading saved data");
                return self.default_state();
            }
        };

        let snapshot: PersistedSnapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "Saved data is not a valid snapshot");
                return self.default_state();
            }
        };

        if !snapshot.has_known_job_class() {
            tracing::warn!(
                job_class = %snapshot.job_class,
                "Unknown job class in saved data, using Swordsman"
            );
        }
        let stored_title = snapshot.job.clone();

        match snapshot.into_state() {
            Ok(state) => {
                let title = state.progression().job_title();
                if title != stored_title {
                    tracing::warn!(stored = %stored_title, derived = title, "Job title rederived");
                }
                tracing::info!(
                    level = state.progression().level().value(),
                    class = %state.progression().job_class(),
                    "Loaded saved data"
                );
                state
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved data out of range");
                self.default_state()
            }
        }
    }

    /// Zero today's minutes and levels gained, then save.
    pub fn reset_daily(&self, state: &mut PlayerState) {
        state.reset_daily();
        self.save(state);
    }

    /// Stop any session and zero every time counter, then save.
    ///
    /// Returns whether a session was running.
    pub fn reset_all(&self, state: &mut PlayerState) -> bool {
        let was_running = state.reset_all();
        self.save(state);
        was_running
    }

    fn default_state(&self) -> PlayerState {
        PlayerState::new(self.default_goal)
    }
}
