//! Built-in rule catalog
//!
//! Declarative convention rules grouped by category. Each module exposes a
//! `rules()` constructor; [`default_rules`] concatenates them into the
//! default ordered rule list. Order is stable for reporting but carries no
//! semantic weight: rules are order-independent by contract.

pub mod accessibility;
pub mod content;
pub mod documentation;
pub mod imports;
pub mod naming;
pub mod performance;
pub mod react;
pub mod structure;
pub mod style;
pub mod typescript;

use regex::Regex;

use super::{CheckOutcome, Rule};

/// The full built-in rule list
pub fn default_rules() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(structure::rules());
    rules.extend(naming::rules());
    rules.extend(content::rules());
    rules.extend(style::rules());
    rules.extend(documentation::rules());
    rules.extend(typescript::rules());
    rules.extend(react::rules());
    rules.extend(imports::rules());
    rules.extend(performance::rules());
    rules.extend(accessibility::rules());
    rules
}

/// Outcome with one violation per line matching the pattern
pub(crate) fn lines_matching(content: &str, pattern: &Regex) -> CheckOutcome {
    let lines: Vec<usize> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(i, _)| i + 1)
        .collect();

    if lines.is_empty() {
        CheckOutcome::Pass
    } else {
        CheckOutcome::FailAtLines(lines)
    }
}
