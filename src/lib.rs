//! zonelint Library
//!
//! Core functionality for scanning JavaScript/TypeScript projects and
//! reporting violations of naming, structure, content, and
//! framework-convention rules.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod rules;
pub mod scanner;

pub use error::ZonelintError;

/// Exit codes for the CLI
pub mod exit_codes {
    /// Success - no violations found
    pub const SUCCESS: i32 = 0;
    /// Error-severity violations found
    pub const ERRORS: i32 = 1;
    /// Warnings found but no errors
    pub const WARNINGS: i32 = 2;
    /// Configuration or runtime error
    pub const FAILURE: i32 = 3;
}
