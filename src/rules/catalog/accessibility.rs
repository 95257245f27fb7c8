//! Accessibility rules

use lazy_static::lazy_static;
use regex::Regex;

use super::lines_matching;
use crate::rules::{Category, CheckOutcome, Rule, Severity};

lazy_static! {
    static ref POSITIVE_TABINDEX: Regex =
        Regex::new(r#"tabIndex=(\{|["'])\s*[1-9]"#).unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "Images need alt text",
            Category::Accessibility,
            Severity::Warning,
            "img elements must carry an alt attribute",
            |content, _| {
                let lines: Vec<usize> = content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains("<img") && !line.contains("alt="))
                    .map(|(i, _)| i + 1)
                    .collect();

                if lines.is_empty() {
                    CheckOutcome::Pass
                } else {
                    CheckOutcome::FailAtLines(lines)
                }
            },
        ),
        Rule::new(
            "No positive tabIndex",
            Category::Accessibility,
            Severity::Warning,
            "Positive tabIndex values break natural tab order",
            |content, _| lines_matching(content, &POSITIVE_TABINDEX),
        ),
    ]
}
