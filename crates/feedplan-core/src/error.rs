//! Core error types for feedplan-core.
//!
//! The calculation entry points never fail; these errors cover the fallible
//! edges around them: configuration files, the day's session file, edits to
//! the feeding log by index and input validation. File I/O failures are
//! reported through the storage variants with the path they concern.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for feedplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session storage errors
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Feeding log errors
    #[error("Feeding log error: {0}")]
    Log(#[from] LogError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable at {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Session storage errors.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Failed to read the session file
    #[error("Failed to read session from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// Failed to write the session file
    #[error("Failed to write session to {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

/// Feeding log errors.
#[derive(Error, Debug, PartialEq)]
pub enum LogError {
    /// Index does not address an entry
    #[error("No feed at position {index} (log has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Amount outside the accepted range
    #[error("Invalid amount {amount_ml} ml: must be a finite, non-negative number")]
    InvalidAmount { amount_ml: f64 },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Value is negative where only non-negative values make sense
    #[error("Invalid value for '{field}': {value} must not be negative")]
    Negative { field: &'static str, value: f64 },

    /// Value must be strictly positive
    #[error("Invalid value for '{field}': {value} must be greater than zero")]
    NotPositive { field: &'static str, value: f64 },

    /// Value above the largest accepted one
    #[error("Invalid value for '{field}': {value} must not exceed {max}")]
    TooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },

    /// NaN or infinite input
    #[error("Invalid value for '{field}': must be a finite number")]
    NotFinite { field: &'static str },

    /// Cutoff hour outside a day
    #[error("Invalid cutoff hour {0}: must be between 0 and 23")]
    CutoffHour(u32),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
