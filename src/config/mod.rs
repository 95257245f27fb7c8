//! Configuration module

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};

/// Per-rule override
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Severity override (error, warning, info)
    pub severity: Option<String>,
}

fn default_true() -> bool {
    true
}

/// User-defined regex rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRule {
    /// Regex pattern; a match on a line is a violation on that line
    pub pattern: String,

    /// Severity level (error, warning, info)
    #[serde(default = "default_custom_severity")]
    pub severity: String,

    /// Category name; defaults to content
    pub category: Option<String>,

    /// Message shown with each violation
    pub message: Option<String>,
}

fn default_custom_severity() -> String {
    "warning".to_string()
}
