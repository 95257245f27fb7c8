//! Naming rules

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::rules::{Category, CheckOutcome, Rule, Severity};

lazy_static! {
    static ref PASCAL_CASE: Regex = Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap();
    static ref SINGLE_CHAR_DECL: Regex = Regex::new(r"\b(?:const|let)\s+[a-z]\b\s*=").unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "Components must be PascalCase",
            Category::Naming,
            Severity::Error,
            "Component files must use PascalCase names",
            |_, file_path| check_component_case(file_path),
        ),
        Rule::new(
            "No single-character names",
            Category::Naming,
            Severity::Info,
            "Single-character variable names hurt readability",
            |content, _| super::lines_matching(content, &SINGLE_CHAR_DECL),
        ),
    ]
}

fn check_component_case(file_path: &str) -> CheckOutcome {
    let in_components =
        file_path.contains("/components/") || file_path.starts_with("components/");
    if !in_components {
        return CheckOutcome::Pass;
    }

    let path = Path::new(file_path);
    let is_component_source = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx") | Some("jsx")
    );
    if !is_component_source {
        return CheckOutcome::Pass;
    }

    let stem = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .unwrap_or("");

    if stem == "index" || PASCAL_CASE.is_match(stem) {
        CheckOutcome::Pass
    } else {
        CheckOutcome::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_case() {
        assert_eq!(
            check_component_case("src/components/UserCard.tsx"),
            CheckOutcome::Pass
        );
        assert_eq!(
            check_component_case("src/components/userCard.tsx"),
            CheckOutcome::Fail
        );
        assert_eq!(
            check_component_case("src/components/Button/index.tsx"),
            CheckOutcome::Pass
        );
        // non-component sources in the folder are not components
        assert_eq!(
            check_component_case("src/components/helpers.ts"),
            CheckOutcome::Pass
        );
        assert_eq!(
            check_component_case("src/pages/userCard.tsx"),
            CheckOutcome::Pass
        );
    }

    #[test]
    fn test_single_char_names() {
        let r = rules()
            .into_iter()
            .find(|r| r.name == "No single-character names")
            .unwrap();

        assert_eq!(
            (r.check)("const x = 1;", "a.ts"),
            CheckOutcome::FailAtLines(vec![1])
        );
        assert_eq!((r.check)("const total = 1;", "a.ts"), CheckOutcome::Pass);
    }
}
