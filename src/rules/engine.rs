//! Rule evaluation engine
//!
//! Applies a [`RuleSet`] to individual files and normalizes every outcome
//! into [`Violation`] records. The engine's public contract is that
//! [`RuleEngine::validate_file`] never panics and never returns an error:
//! a broken rule or an unreadable file degrades the report for that file,
//! it does not abort the scan.

use std::any::Any;
use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, warn};

use super::validators;
use super::{CheckOutcome, Rule, RuleSet, Severity, Violation, FILE_VALIDATION_ERROR};
use crate::rules::Category;

/// Basenames exempt from index-file-only logic
const INDEX_FILES: [&str; 4] = ["index.ts", "index.tsx", "index.js", "index.jsx"];

/// Main rule evaluation engine.
///
/// Holds an immutable rule set for the duration of a scan. Re-configuring
/// across zones means constructing a fresh engine, not mutating a shared one,
/// so concurrent `validate_file` calls across distinct files need no locking.
pub struct RuleEngine {
    ruleset: RuleSet,
}

impl RuleEngine {
    /// Create a new engine with the given rule set
    pub fn new(ruleset: RuleSet) -> Self {
        Self { ruleset }
    }

    /// The rule set this engine applies
    pub fn ruleset(&self) -> &RuleSet {
        &self.ruleset
    }

    /// Validate a single file, reading its content from disk.
    ///
    /// Never returns an error: read failures and escaped panics surface as a
    /// single synthetic violation named [`FILE_VALIDATION_ERROR`].
    pub async fn validate_file(&self, file_path: &str) -> Vec<Violation> {
        // Configuration files are categorically exempt from content rules.
        if is_configuration_file(file_path) {
            debug!(file = file_path, "Skipping configuration file");
            return Vec::new();
        }

        let content = match tokio::fs::read_to_string(file_path).await {
            Ok(c) => c,
            Err(e) => {
                warn!(file = file_path, error = %e, "Failed to read file");
                return vec![file_error(
                    file_path,
                    format!("Failed to read file: {e}"),
                )];
            }
        };

        // Rule checks are pure and synchronous; guard the whole phase so an
        // escaped panic becomes a reportable violation instead of unwinding
        // through the scan loop.
        let path = file_path.to_string();
        let result = catch_unwind(AssertUnwindSafe(|| self.check_content(&content, &path)));

        match result {
            Ok(violations) => dedup(violations),
            Err(payload) => {
                let detail = panic_message(payload.as_ref());
                warn!(file = file_path, detail = %detail, "File validation panicked");
                vec![file_error(
                    file_path,
                    format!("File validation failed: {detail}"),
                )]
            }
        }
    }

    /// Validate content for a file path.
    ///
    /// The `content` parameter is accepted for interface symmetry with rule
    /// checks, but the engine re-reads the file itself: disk state at
    /// validation time is the single source of truth for what got validated.
    pub async fn validate(&self, _content: &str, file_path: &str) -> Vec<Violation> {
        self.validate_file(file_path).await
    }

    /// Run every applicable rule plus the additional-validator battery
    /// against in-memory content. Individual failures are isolated here.
    fn check_content(&self, content: &str, file_path: &str) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in &self.ruleset.rules {
            if rule.skip_in_basic_pass {
                continue;
            }
            violations.extend(self.apply_rule(rule, content, file_path));
        }

        // Index files are conventionally re-export aggregators, not authored
        // logic, so the heuristic battery does not apply to them.
        if !is_index_file(file_path) {
            violations.extend(run_validator_battery(content, file_path));
        }

        violations
    }

    /// Apply a single rule, mapping its outcome to zero or more violations.
    /// A panicking check is logged and contributes nothing.
    fn apply_rule(&self, rule: &Rule, content: &str, file_path: &str) -> Vec<Violation> {
        let outcome = match catch_unwind(AssertUnwindSafe(|| (rule.check)(content, file_path))) {
            Ok(outcome) => outcome,
            Err(payload) => {
                warn!(
                    rule = %rule.name,
                    file = file_path,
                    detail = %panic_message(payload.as_ref()),
                    "Rule check panicked, skipping"
                );
                return Vec::new();
            }
        };

        match outcome {
            CheckOutcome::Pass => Vec::new(),
            CheckOutcome::Fail => vec![Violation::from_rule(rule, file_path)],
            CheckOutcome::FailAtLines(lines) => lines
                .into_iter()
                .map(|line| Violation::from_rule(rule, file_path).at_line(line))
                .collect(),
            CheckOutcome::FailWithDetail { message, line } => {
                let mut violation = Violation::from_rule(rule, file_path).with_message(message);
                violation.line = line;
                vec![violation]
            }
        }
    }
}

/// Run the content-based and path-based validator batteries, each validator
/// isolated so one failure never aborts the file.
fn run_validator_battery(content: &str, file_path: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    for validator in validators::content_validators() {
        match catch_unwind(AssertUnwindSafe(|| (validator.run)(content, file_path))) {
            Ok(found) => violations.extend(found),
            Err(payload) => warn!(
                validator = validator.name,
                file = file_path,
                detail = %panic_message(payload.as_ref()),
                "Failed to run content validators"
            ),
        }
    }

    for validator in validators::file_validators() {
        match catch_unwind(AssertUnwindSafe(|| (validator.run)(content, file_path))) {
            Ok(found) => violations.extend(found),
            Err(payload) => warn!(
                validator = validator.name,
                file = file_path,
                detail = %panic_message(payload.as_ref()),
                "Failed to run file validators"
            ),
        }
    }

    violations
}

/// Check whether a path names a configuration file.
///
/// Purely filename-pattern based, independent of content. Exposed for
/// collaborators that need the same exemption logic.
pub fn is_configuration_file(file_path: &str) -> bool {
    let name = basename(file_path);

    if name.starts_with(".eslintrc") || name.starts_with(".prettierrc") {
        return true;
    }

    if name.starts_with("tsconfig") && name.ends_with(".json") {
        return true;
    }

    if matches!(
        name,
        "package.json" | "package-lock.json" | ".babelrc" | ".npmrc" | ".nvmrc" | ".swcrc"
    ) {
        return true;
    }

    // Covers jest.config.ts, vite.config.mjs, next.config.js, ...
    [
        ".config.js",
        ".config.ts",
        ".config.mjs",
        ".config.cjs",
        ".config.json",
    ]
    .iter()
    .any(|suffix| name.ends_with(suffix))
}

/// Check whether a path names an index file (`index.{ts,tsx,js,jsx}`)
pub fn is_index_file(file_path: &str) -> bool {
    INDEX_FILES.contains(&basename(file_path))
}

fn basename(file_path: &str) -> &str {
    Path::new(file_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
}

/// Build the synthetic violation used for engine-level failures
fn file_error(file_path: &str, message: String) -> Violation {
    Violation {
        rule: FILE_VALIDATION_ERROR.to_string(),
        message,
        file_path: file_path.to_string(),
        severity: Severity::Error,
        category: Category::Content,
        line: None,
    }
}

/// Drop violations that duplicate an earlier one. Two violations are
/// duplicates when file path, rule name, and line coincide; message text is
/// not part of the key. First occurrence order is preserved.
fn dedup(violations: Vec<Violation>) -> Vec<Violation> {
    let mut seen: HashSet<(String, String, Option<usize>)> = HashSet::new();
    violations
        .into_iter()
        .filter(|v| seen.insert((v.file_path.clone(), v.rule.clone(), v.line)))
        .collect()
}

/// Render an arbitrary panic payload as a displayable message
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
