//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates the platform service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in `infrastructure/platform/desktop.rs`, or
//!   from fixtures in tests
//! - Built once by the runner and handed to the widget service

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::ports::outbound::{StorageProvider, TimeProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProvider>,
    storage: Arc<dyn StorageProvider>,
}

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, S>(time: Tm, storage: S) -> Self
    where
        Tm: TimeProvider + 'static,
        S: StorageProvider + 'static,
    {
        Self::from_arcs(Arc::new(time), Arc::new(storage))
    }

    /// Create a Platform from already shared providers
    pub fn from_arcs(time: Arc<dyn TimeProvider>, storage: Arc<dyn StorageProvider>) -> Self {
        Self { time, storage }
    }

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    pub fn now(&self) -> DateTime<Utc> {
        self.time.now()
    }

    pub fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    pub fn storage(&self) -> Arc<dyn StorageProvider> {
        Arc::clone(&self.storage)
    }
}

impl std::fmt::Debug for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{fixed_instant, InMemoryStorage, ManualClock};
    use crate::ports::outbound::{MockTimeProvider, StorageProvider, TimeProvider};

    #[test]
    fn delegates_to_providers() {
        let mut time = MockTimeProvider::new();
        time.expect_now().times(1).return_const(fixed_instant());
        time.expect_now_millis()
            .times(1)
            .return_const(1_709_283_600_000_u64);
        let storage = InMemoryStorage::new();
        let platform = Platform::new(time, storage.clone());

        assert_eq!(platform.now(), fixed_instant());
        assert_eq!(platform.now_millis(), 1_709_283_600_000);
        platform.storage().save("k", "v").expect("save");
        assert_eq!(storage.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn default_millis_come_from_now() {
        let clock = ManualClock::default();
        assert_eq!(clock.now_millis(), 1_709_283_600_000);
        clock.advance_secs(2);
        assert_eq!(clock.now_millis(), 1_709_283_602_000);
    }
}
