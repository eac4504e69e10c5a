//! Core error types for mythic-core.
//!
//! This module defines the error hierarchy using thiserror. Only
//! validation, lookup and admission failures ever reach the caller of a
//! progression operation; storage failures are logged by the session and
//! never roll back in-memory state.

use std::path::PathBuf;
use thiserror::Error;

use crate::quest::Denial;

/// Core error type for mythic-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input rejected before any state change
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The task is no longer in the active list (e.g. a double tap)
    #[error("Task not found: {id}")]
    TaskNotFound { id: String },

    /// Preset quest is on cooldown or has hit its daily cap
    #[error("Quest not allowed: {0}")]
    QuestNotAllowed(Denial),

    /// No preset quest with this id exists in the catalog
    #[error("Unknown quest: {id}")]
    UnknownQuest { id: String },

    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Key-value storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Task title was empty after trimming whitespace
    #[error("Task title must not be empty")]
    EmptyTitle,

    /// Display name was empty after trimming whitespace
    #[error("Display name must not be empty")]
    EmptyDisplayName,

    /// Display name is fixed once onboarding has set it
    #[error("Display name is already set to '{0}'")]
    DisplayNameAlreadySet(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) => {
                if e.code == rusqlite::ErrorCode::DatabaseLocked
                    || e.code == rusqlite::ErrorCode::DatabaseBusy
                {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
