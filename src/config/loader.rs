//! Configuration loader
//!
//! Loads `.zonelint.toml`, then merges rule overrides and custom rules over
//! the built-in catalog to produce the final [`RuleSet`] fed to the engine.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, ZonelintError};
use crate::rules::{
    catalog, default_extensions, Category, CheckOutcome, Rule, RuleSet, Severity,
};

use super::{CustomRule, RuleConfig};

pub const CONFIG_FILENAME: &str = ".zonelint.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// File extensions to scan; defaults to ts, tsx, js, jsx
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    /// Glob patterns excluded from the scan
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Rule overrides keyed by rule name
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    /// Custom regex rules keyed by rule name
    #[serde(default)]
    pub custom: HashMap<String, CustomRule>,
}

impl Config {
    /// Load configuration from the given directory or return the default
    pub fn load_or_default(dir: &Path) -> Result<Self, ZonelintError> {
        let config_path = dir.join(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ZonelintError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ZonelintError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        toml::from_str(&content)
            .map_err(ConfigError::Parse)
            .map_err(Into::into)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Merge overrides and custom rules over the built-in catalog into the
    /// final ordered rule list plus scan settings
    pub fn build_ruleset(&self) -> RuleSet {
        let mut rules: Vec<Rule> = catalog::default_rules()
            .into_iter()
            .filter_map(|rule| self.apply_override(rule))
            .collect();

        // Custom rules run after the catalog, sorted by name for a stable
        // rule order across runs.
        let mut custom: Vec<(&String, &CustomRule)> = self.custom.iter().collect();
        custom.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (name, custom_rule) in custom {
            if let Some(rule) = compile_custom_rule(name, custom_rule) {
                rules.push(rule);
            }
        }

        RuleSet {
            rules,
            extensions: self
                .extensions
                .clone()
                .unwrap_or_else(default_extensions),
            ignore: self.ignore.clone(),
        }
    }

    fn apply_override(&self, mut rule: Rule) -> Option<Rule> {
        let Some(rule_config) = self.rules.get(&rule.name) else {
            return Some(rule);
        };

        if !rule_config.enabled {
            return None;
        }

        if let Some(severity) = &rule_config.severity {
            match Severity::from_string(severity) {
                Some(s) => rule.severity = s,
                None => warn!(
                    rule = %rule.name,
                    severity = %severity,
                    "Unknown severity override, keeping default"
                ),
            }
        }

        Some(rule)
    }
}

/// Compile a user-defined regex rule. Invalid patterns are logged and
/// skipped rather than failing the scan.
fn compile_custom_rule(name: &str, custom: &CustomRule) -> Option<Rule> {
    let regex = match Regex::new(&custom.pattern) {
        Ok(r) => r,
        Err(e) => {
            warn!(rule = %name, error = %e, "Invalid regex in custom rule, skipping");
            return None;
        }
    };

    let severity = Severity::from_string(&custom.severity).unwrap_or(Severity::Warning);
    let category = custom
        .category
        .as_deref()
        .and_then(Category::from_string)
        .unwrap_or(Category::Content);
    let message = custom
        .message
        .clone()
        .unwrap_or_else(|| format!("Pattern '{}' matched", custom.pattern));

    Some(Rule::new(
        name,
        category,
        severity,
        message,
        move |content, _| {
            let lines: Vec<usize> = content
                .lines()
                .enumerate()
                .filter(|(_, line)| regex.is_match(line))
                .map(|(i, _)| i + 1)
                .collect();

            if lines.is_empty() {
                CheckOutcome::Pass
            } else {
                CheckOutcome::FailAtLines(lines)
            }
        },
    ))
}
