//! Performance rules

use lazy_static::lazy_static;
use regex::Regex;

use super::lines_matching;
use crate::rules::{Category, Rule, Severity};

lazy_static! {
    static ref JSON_CLONE: Regex = Regex::new(r"JSON\.parse\s*\(\s*JSON\.stringify").unwrap();
    static ref DELETE_PROP: Regex = Regex::new(r"\bdelete\s+[A-Za-z_$][\w$]*\.").unwrap();
}

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "No JSON deep clone",
            Category::Performance,
            Severity::Info,
            "Use structuredClone instead of JSON.parse(JSON.stringify(...))",
            |content, _| lines_matching(content, &JSON_CLONE),
        ),
        Rule::new(
            "No delete operator",
            Category::Performance,
            Severity::Info,
            "delete deoptimizes object shapes; set the property to undefined",
            |content, _| lines_matching(content, &DELETE_PROP),
        ),
    ]
}
