mod config;
pub mod database;
mod memory;
pub mod profile_store;

pub use config::{Config, ProgressionConfig, RewardsConfig, StorageConfig};
pub use database::Database;
pub use memory::MemoryStore;
pub use profile_store::{ProfileStore, DEFAULT_KEY_PREFIX};

use std::path::PathBuf;

use crate::error::StorageError;

/// String key-value storage the profile is persisted to.
///
/// Values are JSON documents. Writes across keys are not atomic; readers
/// must tolerate any key being absent.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Returns `~/.config/mythic[-dev]/` based on MYTHIC_ENV.
///
/// Set MYTHIC_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MYTHIC_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("mythic-dev")
    } else {
        base_dir.join("mythic")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
