//! TypeScript rules

use lazy_static::lazy_static;
use regex::Regex;

use super::lines_matching;
use crate::rules::{Category, CheckOutcome, Rule, Severity};

lazy_static! {
    static ref ANY_TYPE: Regex = Regex::new(r":\s*any\b").unwrap();
    static ref TS_IGNORE: Regex = Regex::new(r"@ts-ignore").unwrap();
    static ref NON_NULL: Regex = Regex::new(r"[\w\)\]]!(\.|\[|\))").unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "No any",
            Category::Typescript,
            Severity::Warning,
            "Avoid the any type; use unknown or a concrete type",
            |content, file_path| {
                if !is_typescript(file_path) {
                    return CheckOutcome::Pass;
                }
                lines_matching(content, &ANY_TYPE)
            },
        ),
        Rule::new(
            "No ts-ignore",
            Category::Typescript,
            Severity::Error,
            "Use @ts-expect-error with a reason instead of @ts-ignore",
            |content, _| lines_matching(content, &TS_IGNORE),
        ),
        Rule::new(
            "No non-null assertion",
            Category::Typescript,
            Severity::Info,
            "Non-null assertions hide real nullability; narrow the type instead",
            |content, file_path| {
                if !is_typescript(file_path) {
                    return CheckOutcome::Pass;
                }
                lines_matching(content, &NON_NULL)
            },
        ),
    ]
}

fn is_typescript(file_path: &str) -> bool {
    file_path.ends_with(".ts") || file_path.ends_with(".tsx")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> Rule {
        rules().into_iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_no_any() {
        let r = rule("No any");
        assert_eq!(
            (r.check)("function f(x: any) {}", "a.ts"),
            CheckOutcome::FailAtLines(vec![1])
        );
        assert_eq!(
            (r.check)("function f(x: anything) {}", "a.ts"),
            CheckOutcome::Pass
        );
        // javascript files have no type annotations to police
        assert_eq!(
            (r.check)("function f(x: any) {}", "a.js"),
            CheckOutcome::Pass
        );
    }

    #[test]
    fn test_no_ts_ignore() {
        let r = rule("No ts-ignore");
        assert_eq!(
            (r.check)("// @ts-ignore\nfoo();", "a.ts"),
            CheckOutcome::FailAtLines(vec![1])
        );
    }

    #[test]
    fn test_non_null_assertion() {
        let r = rule("No non-null assertion");
        assert_eq!(
            (r.check)("const name = user!.name;", "a.ts"),
            CheckOutcome::FailAtLines(vec![1])
        );
        assert_eq!(
            (r.check)("if (a !== b) {}", "a.ts"),
            CheckOutcome::Pass
        );
    }
}
