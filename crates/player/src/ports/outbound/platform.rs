//! Platform abstraction ports
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors reported by storage adapters.
///
/// Callers in the application layer log these and carry on; they never reach
/// the user as a blocking error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Wall-clock abstraction
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current time in milliseconds since epoch
    fn now_millis(&self) -> u64 {
        u64::try_from(self.now().timestamp_millis()).unwrap_or(0)
    }
}

/// Persistent key-value storage abstraction (file-based on desktop)
#[cfg_attr(test, mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Load a string value by key, returns `Ok(None)` if not found
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    /// The whole widget snapshot lives under this one key.
    pub const PLAYER_SNAPSHOT: &str = "realLifeRPGData";
}
