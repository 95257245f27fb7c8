//! Error types for zonelint
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use thiserror::Error;

/// Main error type for zonelint
#[derive(Error, Debug)]
pub enum ZonelintError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scan-related errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Report serialization errors
    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Errors that occur while loading or writing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse the configuration file
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to write a configuration file
    #[error("Failed to write config '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Refusing to overwrite an existing configuration file
    #[error("Configuration file '{path}' already exists")]
    AlreadyExists {
        /// Path to the existing file
        path: String,
    },
}

/// Errors that occur during project scanning
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory
    #[error("Project directory '{path}' not found")]
    RootNotFound {
        /// Path that was expected to be a directory
        path: String,
    },

    /// Failed to write the rendered report
    #[error("Failed to write report '{path}': {source}")]
    ReportWrite {
        /// Path to the file that failed to write
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}
