//! Import rules

use lazy_static::lazy_static;
use regex::Regex;

use super::lines_matching;
use crate::rules::{Category, CheckOutcome, Rule, Severity};

lazy_static! {
    static ref WILDCARD_IMPORT: Regex = Regex::new(r"import\s+\*\s+as\s+").unwrap();
    static ref REQUIRE_CALL: Regex = Regex::new(r"\brequire\s*\(").unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "No wildcard imports",
            Category::Imports,
            Severity::Info,
            "Import only what is used; wildcard imports defeat tree shaking",
            |content, _| lines_matching(content, &WILDCARD_IMPORT),
        ),
        Rule::new(
            "No require in modules",
            Category::Imports,
            Severity::Warning,
            "Use ES module imports instead of require",
            |content, file_path| {
                if !file_path.ends_with(".ts") && !file_path.ends_with(".tsx") {
                    return CheckOutcome::Pass;
                }
                lines_matching(content, &REQUIRE_CALL)
            },
        ),
    ]
}
