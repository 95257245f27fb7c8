//! Style rules

use lazy_static::lazy_static;
use regex::Regex;

use super::lines_matching;
use crate::rules::{Category, Rule, Severity};

lazy_static! {
    static ref IMPORTANT: Regex = Regex::new(r"!important").unwrap();
    static ref HIGH_Z_INDEX: Regex = Regex::new(r"(?i)z-?index['\x22]?\s*:\s*\d{4,}").unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "No !important",
            Category::Style,
            Severity::Warning,
            "Avoid !important; fix specificity instead",
            |content, _| lines_matching(content, &IMPORTANT),
        ),
        Rule::new(
            "No extreme z-index",
            Category::Style,
            Severity::Info,
            "z-index values above 999 signal stacking-context problems",
            |content, _| lines_matching(content, &HIGH_Z_INDEX),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CheckOutcome;

    #[test]
    fn test_no_important() {
        let r = &rules()[0];
        assert_eq!(
            (r.check)("color: red !important;", "a.ts"),
            CheckOutcome::FailAtLines(vec![1])
        );
        assert_eq!((r.check)("color: red;", "a.ts"), CheckOutcome::Pass);
    }

    #[test]
    fn test_extreme_z_index() {
        let r = &rules()[1];
        assert_eq!(
            (r.check)("zIndex: 9999,", "a.tsx"),
            CheckOutcome::FailAtLines(vec![1])
        );
        assert_eq!(
            (r.check)("'z-index': 10000", "a.tsx"),
            CheckOutcome::FailAtLines(vec![1])
        );
        assert_eq!((r.check)("zIndex: 10,", "a.tsx"), CheckOutcome::Pass);
    }
}
