//! Additional validators
//!
//! Heuristics that are hardcoded logic rather than declarative [`Rule`]
//! entries. The engine runs both batteries for every non-index file, each
//! validator isolated so one failure never aborts the file.
//!
//! [`Rule`]: super::Rule

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use super::{Category, Severity, Violation};

/// A validator expressed as hardcoded logic. `name` identifies it in logs;
/// the violations it emits carry their own rule names.
pub struct Validator {
    pub name: &'static str,
    pub run: fn(&str, &str) -> Vec<Violation>,
}

/// Content-based validators
pub fn content_validators() -> &'static [Validator] {
    &[
        Validator {
            name: "inline-styles",
            run: check_inline_styles,
        },
        Validator {
            name: "commented-out-code",
            run: check_commented_out_code,
        },
        Validator {
            name: "hardcoded-literals",
            run: check_hardcoded_literals,
        },
        Validator {
            name: "missing-function-comments",
            run: check_missing_function_comments,
        },
        Validator {
            name: "declaration-naming",
            run: check_declaration_naming,
        },
        Validator {
            name: "style-object-naming",
            run: check_style_object_naming,
        },
    ]
}

/// Path-based validators
pub fn file_validators() -> &'static [Validator] {
    &[
        Validator {
            name: "enum-location",
            run: check_enum_location,
        },
        Validator {
            name: "hook-file-conventions",
            run: check_hook_file_conventions,
        },
        Validator {
            name: "asset-naming",
            run: check_asset_naming,
        },
        Validator {
            name: "file-naming",
            run: check_file_naming,
        },
        Validator {
            name: "component-folder-match",
            run: check_component_folder_match,
        },
    ]
}

lazy_static! {
    static ref COMMENTED_CODE: Regex = Regex::new(
        r"^\s*//\s*(const |let |var |function |if\s*\(|for\s*\(|while\s*\(|return |import |export )"
    )
    .unwrap();
    static ref HEX_COLOR: Regex = Regex::new(r#"['"]#[0-9a-fA-F]{3,8}['"]"#).unwrap();
    static ref URL_LITERAL: Regex = Regex::new(r#"['"]https?://"#).unwrap();
    static ref FUNCTION_DECL: Regex =
        Regex::new(r"^export\s+(?:async\s+)?function\s+([A-Za-z_$][\w$]*)").unwrap();
    static ref ARROW_DECL: Regex =
        Regex::new(r"^export\s+const\s+([A-Za-z_$][\w$]*)\s*=\s*(?:async\s*)?\(").unwrap();
    static ref INTERFACE_DECL: Regex = Regex::new(r"\binterface\s+([A-Za-z_$][\w$]*)").unwrap();
    static ref NAMED_FUNCTION: Regex = Regex::new(r"\bfunction\s+([A-Za-z_$][\w$]*)").unwrap();
    static ref STYLE_OBJECT: Regex =
        Regex::new(r"\bconst\s+([A-Za-z_$][\w$]*[Ss]tyle)\s*=").unwrap();
    static ref PASCAL_CASE: Regex = Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap();
    static ref CAMEL_CASE: Regex = Regex::new(r"^[a-z][A-Za-z0-9]*$").unwrap();
    static ref KEBAB_CASE: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
}

fn violation(
    rule: &str,
    category: Category,
    severity: Severity,
    message: impl Into<String>,
    file_path: &str,
    line: Option<usize>,
) -> Violation {
    Violation {
        rule: rule.to_string(),
        message: message.into(),
        file_path: file_path.to_string(),
        severity,
        category,
        line,
    }
}

fn matching_lines(content: &str, pred: impl Fn(&str) -> bool) -> Vec<usize> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| pred(line))
        .map(|(i, _)| i + 1)
        .collect()
}

fn basename(file_path: &str) -> &str {
    Path::new(file_path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
}

/// Basename without any extensions (`Button.test.tsx` -> `Button.test` is
/// wrong for naming checks, so everything after the first dot is dropped)
fn stem(file_path: &str) -> &str {
    let name = basename(file_path);
    name.split('.').next().unwrap_or(name)
}

fn extension(file_path: &str) -> &str {
    Path::new(file_path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
}

fn is_react_file(file_path: &str) -> bool {
    matches!(extension(file_path), "tsx" | "jsx")
}

fn check_inline_styles(content: &str, file_path: &str) -> Vec<Violation> {
    if !is_react_file(file_path) {
        return Vec::new();
    }

    matching_lines(content, |line| line.contains("style={{"))
        .into_iter()
        .map(|line| {
            violation(
                "No inline styles",
                Category::React,
                Severity::Warning,
                "Avoid inline styles; use a stylesheet or styled component",
                file_path,
                Some(line),
            )
        })
        .collect()
}

fn check_commented_out_code(content: &str, file_path: &str) -> Vec<Violation> {
    matching_lines(content, |line| COMMENTED_CODE.is_match(line))
        .into_iter()
        .map(|line| {
            violation(
                "No commented-out code",
                Category::Content,
                Severity::Info,
                "Remove commented-out code; version control keeps the history",
                file_path,
                Some(line),
            )
        })
        .collect()
}

fn check_hardcoded_literals(content: &str, file_path: &str) -> Vec<Violation> {
    // Constants and theme modules are where these literals belong.
    let lowered = file_path.to_lowercase();
    if lowered.contains("constant") || lowered.contains("theme") {
        return Vec::new();
    }

    matching_lines(content, |line| {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") || trimmed.starts_with('*') {
            return false;
        }
        HEX_COLOR.is_match(line) || URL_LITERAL.is_match(line)
    })
    .into_iter()
    .map(|line| {
        violation(
            "No hardcoded literals",
            Category::Content,
            Severity::Warning,
            "Move hardcoded colors and URLs into a constants module",
            file_path,
            Some(line),
        )
    })
    .collect()
}

fn check_missing_function_comments(content: &str, file_path: &str) -> Vec<Violation> {
    let lines: Vec<&str> = content.lines().collect();
    let mut violations = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !FUNCTION_DECL.is_match(line) && !ARROW_DECL.is_match(line) {
            continue;
        }

        let documented = lines[..i]
            .iter()
            .rev()
            .find(|l| !l.trim().is_empty())
            .map(|l| {
                let t = l.trim();
                t.ends_with("*/") || t.starts_with("//")
            })
            .unwrap_or(false);

        if !documented {
            violations.push(violation(
                "Missing function comment",
                Category::Documentation,
                Severity::Info,
                "Exported functions should carry a doc comment",
                file_path,
                Some(i + 1),
            ));
        }
    }

    violations
}

fn check_declaration_naming(content: &str, file_path: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if let Some(caps) = INTERFACE_DECL.captures(line) {
            let name = &caps[1];
            if !PASCAL_CASE.is_match(name) {
                violations.push(violation(
                    "Interface naming",
                    Category::Typescript,
                    Severity::Warning,
                    format!("Interface '{name}' must be PascalCase"),
                    file_path,
                    Some(i + 1),
                ));
            }
        }

        if let Some(caps) = NAMED_FUNCTION.captures(line) {
            let name = &caps[1];
            // PascalCase function names are components in react files.
            let ok = CAMEL_CASE.is_match(name)
                || (is_react_file(file_path) && PASCAL_CASE.is_match(name));
            if !ok {
                violations.push(violation(
                    "Function naming",
                    Category::Naming,
                    Severity::Warning,
                    format!("Function '{name}' must be camelCase"),
                    file_path,
                    Some(i + 1),
                ));
            }
        }
    }

    violations
}

fn check_style_object_naming(content: &str, file_path: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if let Some(caps) = STYLE_OBJECT.captures(line) {
            let name = &caps[1];
            violations.push(violation(
                "Style object naming",
                Category::Style,
                Severity::Info,
                format!("Style object '{name}' should use a 'Styles' suffix"),
                file_path,
                Some(i + 1),
            ));
        }
    }

    violations
}

fn check_enum_location(_content: &str, file_path: &str) -> Vec<Violation> {
    let name = basename(file_path);
    let in_enums_dir = file_path.contains("/enums/") || file_path.starts_with("enums/");

    if name.ends_with(".enum.ts") && !in_enums_dir {
        return vec![violation(
            "Enum file location",
            Category::Structure,
            Severity::Warning,
            "Enum files belong under an enums/ directory",
            file_path,
            None,
        )];
    }

    Vec::new()
}

fn check_hook_file_conventions(_content: &str, file_path: &str) -> Vec<Violation> {
    let name = basename(file_path);
    let file_stem = stem(file_path);
    let is_hook_name = file_stem.len() > 3
        && file_stem.starts_with("use")
        && file_stem[3..].starts_with(|c: char| c.is_ascii_uppercase());
    let in_hooks_dir = file_path.contains("/hooks/") || file_path.starts_with("hooks/");

    let mut violations = Vec::new();

    if is_hook_name && matches!(extension(file_path), "js" | "jsx") {
        violations.push(violation(
            "Hook file extension",
            Category::React,
            Severity::Warning,
            format!("Hook file '{name}' should use the .ts or .tsx extension"),
            file_path,
            None,
        ));
    }

    if in_hooks_dir && !is_hook_name && !super::engine::is_index_file(file_path) {
        violations.push(violation(
            "Hook naming",
            Category::React,
            Severity::Warning,
            format!("File '{name}' in hooks/ should be named use<Thing>"),
            file_path,
            None,
        ));
    }

    violations
}

fn check_asset_naming(_content: &str, file_path: &str) -> Vec<Violation> {
    let in_assets_dir = file_path.contains("/assets/") || file_path.starts_with("assets/");
    if !in_assets_dir {
        return Vec::new();
    }

    let file_stem = stem(file_path);
    if !KEBAB_CASE.is_match(file_stem) {
        return vec![violation(
            "Asset naming",
            Category::Naming,
            Severity::Warning,
            format!("Asset '{}' should be kebab-case", basename(file_path)),
            file_path,
            None,
        )];
    }

    Vec::new()
}

fn check_file_naming(_content: &str, file_path: &str) -> Vec<Violation> {
    let file_stem = stem(file_path);
    if file_stem.is_empty() {
        return Vec::new();
    }

    let ok = PASCAL_CASE.is_match(file_stem)
        || CAMEL_CASE.is_match(file_stem)
        || KEBAB_CASE.is_match(file_stem);

    if !ok {
        return vec![violation(
            "File naming convention",
            Category::Naming,
            Severity::Warning,
            format!(
                "File '{}' should be camelCase, PascalCase, or kebab-case",
                basename(file_path)
            ),
            file_path,
            None,
        )];
    }

    Vec::new()
}

fn check_component_folder_match(_content: &str, file_path: &str) -> Vec<Violation> {
    if !is_react_file(file_path) {
        return Vec::new();
    }

    let components: Vec<&str> = Path::new(file_path)
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    let Some(pos) = components.iter().position(|c| *c == "components") else {
        return Vec::new();
    };

    // components/<Folder>/<Name>.tsx with the file directly inside the folder
    if pos + 2 != components.len() - 1 {
        return Vec::new();
    }

    let folder = components[pos + 1];
    let file_stem = stem(file_path);

    if PASCAL_CASE.is_match(folder)
        && PASCAL_CASE.is_match(file_stem)
        && folder != file_stem
        && !super::engine::is_index_file(file_path)
    {
        return vec![violation(
            "Component folder match",
            Category::React,
            Severity::Info,
            format!("Component '{file_stem}' should match its folder name '{folder}'"),
            file_path,
            None,
        )];
    }

    Vec::new()
}
