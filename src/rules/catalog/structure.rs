//! Structure rules

use lazy_static::lazy_static;
use regex::Regex;

use super::lines_matching;
use crate::rules::{Category, CheckOutcome, Rule, Severity};

lazy_static! {
    static ref DEEP_RELATIVE: Regex = Regex::new(r#"from\s+['"](\.\./){3,}"#).unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "Test file location",
            Category::Structure,
            Severity::Warning,
            "Test files belong under a __tests__ directory",
            |_, file_path| {
                let is_test = file_path.contains(".test.") || file_path.contains(".spec.");
                if is_test && !file_path.contains("__tests__") {
                    CheckOutcome::Fail
                } else {
                    CheckOutcome::Pass
                }
            },
        ),
        Rule::new(
            "No deep relative imports",
            Category::Structure,
            Severity::Warning,
            "Imports reaching three or more levels up should use a path alias",
            |content, _| lines_matching(content, &DEEP_RELATIVE),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> Rule {
        rules().into_iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_test_file_location() {
        let r = rule("Test file location");
        assert_eq!(
            (r.check)("", "src/utils/format.test.ts"),
            CheckOutcome::Fail
        );
        assert_eq!(
            (r.check)("", "src/utils/__tests__/format.test.ts"),
            CheckOutcome::Pass
        );
        assert_eq!((r.check)("", "src/utils/format.ts"), CheckOutcome::Pass);
    }

    #[test]
    fn test_deep_relative_imports() {
        let r = rule("No deep relative imports");
        assert_eq!(
            (r.check)("import { a } from '../../../shared/a';", "x.ts"),
            CheckOutcome::FailAtLines(vec![1])
        );
        assert_eq!(
            (r.check)("import { a } from '../../shared/a';", "x.ts"),
            CheckOutcome::Pass
        );
    }
}
