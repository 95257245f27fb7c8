//! Rules module - Rule model, violation model, and evaluation engine

pub mod catalog;
pub mod engine;
pub mod validators;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Rule name reserved for engine-level failures (unreadable files, escaped
/// panics). Reports carry it like any other rule name.
pub const FILE_VALIDATION_ERROR: &str = "File validation error";

/// Severity levels for violations.
///
/// - **Error** - Convention breaches that should fail CI
/// - **Warning** - Should be addressed, but not blocking
/// - **Info** - Suggestions for improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Breaches that should fail the scan.
    Error,
    /// Issues that should be addressed before merge.
    Warning,
    /// Informational suggestions.
    Info,
}

impl Severity {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" | "critical" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            "info" | "information" | "note" => Some(Self::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Rule categories. Used for grouping in reports and statistics only;
/// never an input to execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Structure,
    Naming,
    Content,
    Style,
    Documentation,
    Typescript,
    React,
    Imports,
    Performance,
    Accessibility,
}

impl Category {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "structure" => Some(Self::Structure),
            "naming" => Some(Self::Naming),
            "content" => Some(Self::Content),
            "style" => Some(Self::Style),
            "documentation" => Some(Self::Documentation),
            "typescript" => Some(Self::Typescript),
            "react" => Some(Self::React),
            "imports" => Some(Self::Imports),
            "performance" => Some(Self::Performance),
            "accessibility" => Some(Self::Accessibility),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Naming => "naming",
            Self::Content => "content",
            Self::Style => "style",
            Self::Documentation => "documentation",
            Self::Typescript => "typescript",
            Self::React => "react",
            Self::Imports => "imports",
            Self::Performance => "performance",
            Self::Accessibility => "accessibility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single rule check against one file.
///
/// Rules declare at definition time which shape they produce, instead of the
/// engine inferring it from a runtime value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No violation.
    Pass,
    /// One violation for the file, no line information.
    Fail,
    /// One violation per 1-based line number. An empty list is a pass.
    FailAtLines(Vec<usize>),
    /// One violation with a rule-authored message elaboration
    /// (e.g. naming the shadowed variable) replacing the static message.
    FailWithDetail {
        message: String,
        line: Option<usize>,
    },
}

/// Signature shared by every rule check: pure function of file content and
/// file path. Must not perform I/O; the engine tolerates panics.
pub type CheckFn = Arc<dyn Fn(&str, &str) -> CheckOutcome + Send + Sync>;

/// A named convention check with a category, severity, and message template.
#[derive(Clone)]
pub struct Rule {
    /// Unique rule name. Deduplication key component, statistics grouping
    /// key, and the key users reference in configuration overrides.
    pub name: String,

    /// Reporting category.
    pub category: Category,

    /// Default severity, overridable via configuration.
    pub severity: Severity,

    /// Human-readable explanation shown with each violation.
    pub message: String,

    /// The check itself.
    pub check: CheckFn,

    /// Rules whose violations are produced by a dedicated pipeline stage
    /// set this so the basic rule pass never invokes their check.
    pub skip_in_basic_pass: bool,
}

impl Rule {
    /// Create a new rule
    pub fn new(
        name: impl Into<String>,
        category: Category,
        severity: Severity,
        message: impl Into<String>,
        check: impl Fn(&str, &str) -> CheckOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            severity,
            message: message.into(),
            check: Arc::new(check),
            skip_in_basic_pass: false,
        }
    }

    /// Mark this rule as excluded from the basic rule pass
    pub fn skipped_in_basic_pass(mut self) -> Self {
        self.skip_in_basic_pass = true;
        self
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("severity", &self.severity)
            .field("skip_in_basic_pass", &self.skip_in_basic_pass)
            .finish()
    }
}

/// One reported instance of a rule failing for a file.
///
/// Violations reference their rule by name only, so rule sets can be swapped
/// between scans without dangling references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the triggering rule, or [`FILE_VALIDATION_ERROR`].
    pub rule: String,

    /// The rule's static message or a rule-authored elaboration.
    pub message: String,

    /// Project-relative path of the offending file.
    pub file_path: String,

    /// Severity copied from the rule (forced to error for engine failures).
    pub severity: Severity,

    /// Category copied from the rule (forced to content for engine failures).
    pub category: Category,

    /// Optional 1-based line number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Violation {
    /// Create a violation from a rule, without line information
    pub fn from_rule(rule: &Rule, file_path: impl Into<String>) -> Self {
        Self {
            rule: rule.name.clone(),
            message: rule.message.clone(),
            file_path: file_path.into(),
            severity: rule.severity,
            category: rule.category,
            line: None,
        }
    }

    /// Set the line number
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Replace the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// The final ordered rule list plus scan settings, as produced by the
/// configuration loader. Immutable for the duration of a scan.
#[derive(Clone)]
pub struct RuleSet {
    /// Ordered list of rules to apply to every candidate file.
    pub rules: Vec<Rule>,

    /// File extensions to scan (without leading dot).
    pub extensions: Vec<String>,

    /// Glob patterns for paths excluded from the scan.
    pub ignore: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: catalog::default_rules(),
            extensions: default_extensions(),
            ignore: Vec::new(),
        }
    }
}

/// Default extension allow-list
pub fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_string() {
        assert_eq!(Severity::from_string("error"), Some(Severity::Error));
        assert_eq!(Severity::from_string("critical"), Some(Severity::Error));
        assert_eq!(Severity::from_string("WARNING"), Some(Severity::Warning));
        assert_eq!(Severity::from_string("warn"), Some(Severity::Warning));
        assert_eq!(Severity::from_string("info"), Some(Severity::Info));
        assert_eq!(Severity::from_string("note"), Some(Severity::Info));
        assert_eq!(Severity::from_string("unknown"), None);
        assert_eq!(Severity::from_string(""), None);
    }

    #[test]
    fn test_violation_builder() {
        let rule = Rule::new(
            "No var",
            Category::Content,
            Severity::Error,
            "Use const or let instead of var",
            |_, _| CheckOutcome::Pass,
        );

        let violation = Violation::from_rule(&rule, "src/app.ts").at_line(4);

        assert_eq!(violation.rule, "No var");
        assert_eq!(violation.file_path, "src/app.ts");
        assert_eq!(violation.severity, Severity::Error);
        assert_eq!(violation.category, Category::Content);
        assert_eq!(violation.line, Some(4));
    }

    #[test]
    fn test_rule_skipped_in_basic_pass() {
        let rule = Rule::new(
            "No unused variables",
            Category::Content,
            Severity::Warning,
            "Remove unused variables",
            |_, _| CheckOutcome::Fail,
        )
        .skipped_in_basic_pass();

        assert!(rule.skip_in_basic_pass);
    }

    #[test]
    fn test_default_ruleset_has_rules() {
        let ruleset = RuleSet::default();
        assert!(!ruleset.rules.is_empty());
        assert_eq!(ruleset.extensions, vec!["ts", "tsx", "js", "jsx"]);
    }

    #[test]
    fn test_violation_serializes_without_null_line() {
        let rule = Rule::new(
            "No any",
            Category::Typescript,
            Severity::Warning,
            "Avoid the any type",
            |_, _| CheckOutcome::Pass,
        );
        let violation = Violation::from_rule(&rule, "src/a.ts");

        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["rule"], "No any");
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["category"], "typescript");
        assert!(json.get("line").is_none());
    }
}
