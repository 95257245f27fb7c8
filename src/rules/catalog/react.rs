//! React rules

use lazy_static::lazy_static;
use regex::Regex;

use super::lines_matching;
use crate::rules::{Category, Rule, Severity};

lazy_static! {
    static ref INDEX_KEY: Regex = Regex::new(r"key=\{\s*(index|idx|i)\s*\}").unwrap();
    static ref DANGEROUS_HTML: Regex = Regex::new(r"dangerouslySetInnerHTML").unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "No array index keys",
            Category::React,
            Severity::Warning,
            "Array indexes as keys break reconciliation; use a stable id",
            |content, _| lines_matching(content, &INDEX_KEY),
        ),
        Rule::new(
            "No dangerouslySetInnerHTML",
            Category::React,
            Severity::Error,
            "dangerouslySetInnerHTML is an XSS vector; sanitize and render normally",
            |content, _| lines_matching(content, &DANGEROUS_HTML),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CheckOutcome;

    #[test]
    fn test_index_keys() {
        let r = &rules()[0];
        assert_eq!(
            (r.check)("<li key={index}>{item}</li>", "a.tsx"),
            CheckOutcome::FailAtLines(vec![1])
        );
        assert_eq!(
            (r.check)("<li key={item.id}>{item}</li>", "a.tsx"),
            CheckOutcome::Pass
        );
    }

    #[test]
    fn test_dangerous_html() {
        let r = &rules()[1];
        assert_eq!(
            (r.check)("<div dangerouslySetInnerHTML={{ __html: raw }} />", "a.tsx"),
            CheckOutcome::FailAtLines(vec![1])
        );
    }
}
