//! Terminal output formatting with colors

use colored::Colorize;

use super::ReportRenderer;
use crate::error::ZonelintError;
use crate::report::stats::OK_MARKER;
use crate::report::ScanReport;
use crate::rules::{Severity, Violation};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, report: &ScanReport) -> String {
        format!(
            "\n{} v{}\n\n{} {}\n",
            "zonelint".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "Project:".dimmed(),
            report.project.white().bold(),
        )
    }

    fn format_zones(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        for (zone, violations) in &report.zones {
            let failures: Vec<&Violation> = violations
                .iter()
                .filter(|v| !v.message.starts_with(OK_MARKER))
                .collect();

            if failures.is_empty() {
                continue;
            }

            output.push_str(&format!(
                "\n{}\n  {} ({})\n\n",
                "━".repeat(50).dimmed(),
                zone.bold(),
                failures.len()
            ));

            for violation in failures {
                output.push_str(&self.format_violation(violation));
            }
        }

        output
    }

    fn format_violation(&self, violation: &Violation) -> String {
        let severity = match violation.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
        };

        let location = match violation.line {
            Some(line) => format!("{}:{}", violation.file_path, line),
            None => violation.file_path.clone(),
        };

        format!(
            "  {} {} [{}] {}\n    {} {}\n",
            "•".dimmed(),
            severity,
            violation.rule.cyan(),
            violation.message,
            "└─".dimmed(),
            location.dimmed()
        )
    }

    fn format_summary(&self, report: &ScanReport) -> String {
        let mut output = format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SUMMARY".bold()
        );

        output.push_str(&format!(
            "Errors: {} │ Warnings: {} │ Info: {}\n",
            report.stats.total_errors.to_string().red().bold(),
            report.stats.total_warnings.to_string().yellow().bold(),
            report.stats.total_infos.to_string().blue().bold()
        ));

        if !report.summary.is_empty() {
            output.push_str(&format!("\n{}\n", "Top rules:".dimmed()));
            for row in report.summary.iter().take(10) {
                output.push_str(&format!(
                    "  {:>4}  {:>5}%  {}\n",
                    row.count,
                    row.percentage,
                    row.rule.cyan()
                ));
            }
        }

        if !report.stats.oks_by_zone.is_empty() {
            output.push_str(&format!("\n{}\n", "Passing checks:".dimmed()));
            for (zone, count) in &report.stats.oks_by_zone {
                output.push_str(&format!("  {} {} {}\n", OK_MARKER.green(), zone, count));
            }
        }

        if report.stats.total() == 0 {
            output.push_str(&format!("\n{}\n", "No violations found.".green().bold()));
        }

        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render(&self, report: &ScanReport) -> Result<String, ZonelintError> {
        let mut output = self.format_header(report);
        output.push_str(&self.format_zones(report));
        output.push_str(&self.format_summary(report));
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Category;
    use std::collections::BTreeMap;

    fn violation(rule: &str, severity: Severity, line: Option<usize>) -> Violation {
        Violation {
            rule: rule.to_string(),
            message: "message".to_string(),
            file_path: "src/a.ts".to_string(),
            severity,
            category: Category::Content,
            line,
        }
    }

    #[test]
    fn test_render_contains_zone_and_rule() {
        let mut zones = BTreeMap::new();
        zones.insert(
            "packages/web".to_string(),
            vec![violation("No var", Severity::Error, Some(3))],
        );
        let report = ScanReport::new("my-app", zones);

        let rendered = TerminalOutput::new().render(&report).unwrap();

        assert!(rendered.contains("my-app"));
        assert!(rendered.contains("packages/web"));
        assert!(rendered.contains("No var"));
        assert!(rendered.contains("src/a.ts:3"));
    }

    #[test]
    fn test_render_clean_report() {
        let report = ScanReport::new("my-app", BTreeMap::new());
        let rendered = TerminalOutput::new().render(&report).unwrap();

        assert!(rendered.contains("No violations found."));
    }

    #[test]
    fn test_violation_without_line_prints_path_only() {
        let output = TerminalOutput::new();
        let rendered = output.format_violation(&violation("Asset naming", Severity::Warning, None));

        assert!(rendered.contains("src/a.ts"));
        assert!(!rendered.contains("src/a.ts:"));
    }
}
