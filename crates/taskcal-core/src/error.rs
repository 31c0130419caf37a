//! Core error types for taskcal-core.
//!
//! This module defines the error hierarchy using thiserror. Validation
//! errors are the caller-facing precondition failures; storage and config
//! errors cover the persistence boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for taskcal-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Precondition failures surfaced to the user
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Precondition failures detected before the distribution algorithm runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A person with this name is already on the roster
    #[error("'{0}' is already on the roster")]
    DuplicateName(String),

    /// Blank person name
    #[error("person name must not be empty")]
    EmptyName,

    /// Blank task title
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Task creation attempted with nobody on the roster
    #[error("add at least one person before creating tasks")]
    EmptyRoster,
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

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Snapshot storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The data directory could not be resolved or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
