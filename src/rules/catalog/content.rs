//! Content rules

use lazy_static::lazy_static;
use regex::Regex;

use super::lines_matching;
use crate::rules::{Category, CheckOutcome, Rule, Severity};

lazy_static! {
    static ref VAR_DECL: Regex = Regex::new(r"\bvar\s+[A-Za-z_$]").unwrap();
    static ref CONSOLE_LOG: Regex = Regex::new(r"\bconsole\.(log|debug)\s*\(").unwrap();
    static ref DEBUGGER: Regex = Regex::new(r"\bdebugger\b").unwrap();
    static ref DECLARATION: Regex = Regex::new(r"\b(?:const|let)\s+([A-Za-z_$][\w$]*)").unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "No var",
            Category::Content,
            Severity::Error,
            "Use const or let instead of var",
            |content, _| lines_matching(content, &VAR_DECL),
        ),
        Rule::new(
            "No console.log",
            Category::Content,
            Severity::Warning,
            "Remove console.log before committing",
            |content, _| lines_matching(content, &CONSOLE_LOG),
        ),
        Rule::new(
            "No debugger",
            Category::Content,
            Severity::Error,
            "Remove debugger statements",
            |content, _| lines_matching(content, &DEBUGGER),
        ),
        Rule::new(
            "No variable shadowing",
            Category::Content,
            Severity::Warning,
            "Avoid shadowing variables from an outer scope",
            |content, _| check_shadowing(content),
        ),
        // Produced by a dedicated pipeline stage, never by the basic pass.
        Rule::new(
            "No unused variables",
            Category::Content,
            Severity::Warning,
            "Remove unused variables",
            |_, _| CheckOutcome::Pass,
        )
        .skipped_in_basic_pass(),
    ]
}

/// Heuristic shadowing detector: a `const`/`let` re-declaration of a name at
/// deeper indentation than its first declaration.
fn check_shadowing(content: &str) -> CheckOutcome {
    let mut first_seen: Vec<(String, usize, usize)> = Vec::new(); // (name, line, indent)

    for (i, line) in content.lines().enumerate() {
        let indent = line.len() - line.trim_start().len();

        for caps in DECLARATION.captures_iter(line) {
            let name = caps[1].to_string();

            let earlier = first_seen
                .iter()
                .find(|(n, _, _)| *n == name)
                .map(|(_, decl_line, decl_indent)| (*decl_line, *decl_indent));

            match earlier {
                Some((decl_line, decl_indent)) if indent > decl_indent => {
                    return CheckOutcome::FailWithDetail {
                        message: format!(
                            "Variable '{name}' shadows the declaration on line {decl_line}"
                        ),
                        line: Some(i + 1),
                    };
                }
                Some(_) => {}
                None => first_seen.push((name, i + 1, indent)),
            }
        }
    }

    CheckOutcome::Pass
}
