//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use directories::ProjectDirs;

use crate::config::PlayerConfig;
use crate::ports::outbound::{StorageError, StorageProvider, TimeProvider};
use crate::state::Platform;

/// Desktop time provider using the system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/rlrpg/storage.json
/// - macOS: ~/Library/Application Support/io.rlrpg.rlrpg/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\rlrpg\rlrpg\config\storage.json
///
/// unless an explicit path is configured.
#[derive(Debug)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: RwLock<HashMap<String, String>>,
}

impl DesktopStorageProvider {
    /// Open the storage file at the platform config location.
    pub fn at_default_location() -> Self {
        Self::new(default_storage_path())
    }

    /// Open (or lazily create) the storage file at `storage_path`.
    ///
    /// An unreadable or corrupt file is logged and treated as empty; the next
    /// save overwrites it.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: RwLock::new(cache),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Persist the cache to disk
    fn persist(&self, cache: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(cache)?;
        fs::write(&self.storage_path, data)?;
        Ok(())
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.cache.write().map_err(|_| StorageError::LockPoisoned)?;
        guard.insert(key.to_string(), value.to_string());
        self.persist(&guard)
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.cache.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.get(key).cloned())
    }
}

fn default_storage_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("io", "rlrpg", "rlrpg") {
        dirs.config_dir().join("storage.json")
    } else {
        // Fallback to current directory if project dirs unavailable
        PathBuf::from("rlrpg_storage.json")
    }
}

/// Create the desktop platform with all providers
pub fn create_platform(config: &PlayerConfig) -> Platform {
    let storage = match &config.storage_path {
        Some(path) => DesktopStorageProvider::new(path.clone()),
        None => DesktopStorageProvider::at_default_location(),
    };
    tracing::info!(path = ?storage.path(), "Using desktop storage");
    Platform::new(DesktopTimeProvider, storage)
}
