//! Documentation rules

use lazy_static::lazy_static;
use regex::Regex;

use crate::rules::{Category, CheckOutcome, Rule, Severity};

lazy_static! {
    static ref TODO: Regex = Regex::new(r"\b(TODO|FIXME)\b").unwrap();
    // TODO(ABC-123) style references carry a ticket
    static ref TODO_WITH_TICKET: Regex = Regex::new(r"\b(TODO|FIXME)\([A-Z]+-\d+\)").unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![Rule::new(
        "No TODO without ticket",
        Category::Documentation,
        Severity::Info,
        "TODO comments must reference a ticket, e.g. TODO(ABC-123)",
        |content, _| {
            let lines: Vec<usize> = content
                .lines()
                .enumerate()
                .filter(|(_, line)| TODO.is_match(line) && !TODO_WITH_TICKET.is_match(line))
                .map(|(i, _)| i + 1)
                .collect();

            if lines.is_empty() {
                CheckOutcome::Pass
            } else {
                CheckOutcome::FailAtLines(lines)
            }
        },
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_without_ticket() {
        let r = &rules()[0];
        assert_eq!(
            (r.check)("// TODO: fix later", "a.ts"),
            CheckOutcome::FailAtLines(vec![1])
        );
        assert_eq!(
            (r.check)("// TODO(APP-42): fix later", "a.ts"),
            CheckOutcome::Pass
        );
        assert_eq!((r.check)("// all done", "a.ts"), CheckOutcome::Pass);
    }
}
