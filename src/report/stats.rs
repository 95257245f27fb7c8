//! Scan statistics
//!
//! A stateless fold over per-zone violation lists. The only state is the
//! accumulator built during the fold; it is discarded once the summary is
//! produced.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::rules::{Severity, Violation};

/// Messages starting with this marker are informational successes emitted by
/// rules, not failures, and are tracked separately.
pub const OK_MARKER: &str = "✓";

/// Aggregated counts for a full scan
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStatistics {
    pub total_errors: usize,
    pub total_warnings: usize,
    pub total_infos: usize,

    /// Violation counts per rule, per severity tier
    pub errors_by_rule: BTreeMap<String, usize>,
    pub warnings_by_rule: BTreeMap<String, usize>,
    pub infos_by_rule: BTreeMap<String, usize>,

    /// Failure counts per zone
    pub violations_by_zone: BTreeMap<String, usize>,

    /// Informational success counts per zone
    pub oks_by_zone: BTreeMap<String, usize>,
}

impl ScanStatistics {
    pub fn total(&self) -> usize {
        self.total_errors + self.total_warnings + self.total_infos
    }

    /// Rule counts across all severity tiers
    pub fn counts_by_rule(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for map in [
            &self.errors_by_rule,
            &self.warnings_by_rule,
            &self.infos_by_rule,
        ] {
            for (rule, count) in map {
                *counts.entry(rule.clone()).or_insert(0) += count;
            }
        }
        counts
    }
}

/// One row of the ranked rule summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    pub rule: String,
    pub count: usize,
    /// Share of the grand total, formatted to one decimal (e.g. "66.7")
    pub percentage: String,
}

/// Whether a path looks like a test file. Test files are excluded from
/// failure statistics; their OK markers are still tracked.
pub fn is_test_file(file_path: &str) -> bool {
    file_path.contains(".test.") || file_path.contains(".spec.") || file_path.contains("__tests__")
}

/// Fold per-zone violation lists into scan statistics
pub fn aggregate(zones: &BTreeMap<String, Vec<Violation>>) -> ScanStatistics {
    let mut stats = ScanStatistics::default();

    for (zone, violations) in zones {
        for violation in violations {
            if violation.message.starts_with(OK_MARKER) {
                *stats.oks_by_zone.entry(zone.clone()).or_insert(0) += 1;
                continue;
            }

            if is_test_file(&violation.file_path) {
                continue;
            }

            let by_rule = match violation.severity {
                Severity::Error => {
                    stats.total_errors += 1;
                    &mut stats.errors_by_rule
                }
                Severity::Warning => {
                    stats.total_warnings += 1;
                    &mut stats.warnings_by_rule
                }
                Severity::Info => {
                    stats.total_infos += 1;
                    &mut stats.infos_by_rule
                }
            };
            *by_rule.entry(violation.rule.clone()).or_insert(0) += 1;

            *stats.violations_by_zone.entry(zone.clone()).or_insert(0) += 1;
        }
    }

    stats
}

/// Turn a `{rule -> count}` map plus a grand total into a ranked summary,
/// sorted descending by count with ties broken by rule name. A zero total
/// yields an empty list.
pub fn generate_summary(counts: &BTreeMap<String, usize>, total: usize) -> Vec<RuleSummary> {
    if total == 0 {
        return Vec::new();
    }

    let mut summary: Vec<RuleSummary> = counts
        .iter()
        .map(|(rule, count)| RuleSummary {
            rule: rule.clone(),
            count: *count,
            percentage: format!("{:.1}", (*count as f64) / (total as f64) * 100.0),
        })
        .collect();

    summary.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.rule.cmp(&b.rule)));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Category;
    use pretty_assertions::assert_eq;

    fn violation(rule: &str, file: &str, severity: Severity, message: &str) -> Violation {
        Violation {
            rule: rule.to_string(),
            message: message.to_string(),
            file_path: file.to_string(),
            severity,
            category: Category::Content,
            line: None,
        }
    }

    #[test]
    fn test_generate_summary_empty() {
        assert_eq!(generate_summary(&BTreeMap::new(), 0), Vec::new());
    }

    #[test]
    fn test_generate_summary_ranked_with_percentages() {
        let mut counts = BTreeMap::new();
        counts.insert("a".to_string(), 2);
        counts.insert("b".to_string(), 1);

        let summary = generate_summary(&counts, 3);

        assert_eq!(
            summary,
            vec![
                RuleSummary {
                    rule: "a".to_string(),
                    count: 2,
                    percentage: "66.7".to_string(),
                },
                RuleSummary {
                    rule: "b".to_string(),
                    count: 1,
                    percentage: "33.3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_generate_summary_tie_break_is_deterministic() {
        let mut counts = BTreeMap::new();
        counts.insert("zeta".to_string(), 1);
        counts.insert("alpha".to_string(), 1);

        let summary = generate_summary(&counts, 2);
        assert_eq!(summary[0].rule, "alpha");
        assert_eq!(summary[1].rule, "zeta");
    }

    #[test]
    fn test_aggregate_buckets_by_severity_and_zone() {
        let mut zones = BTreeMap::new();
        zones.insert(
            "web".to_string(),
            vec![
                violation("No var", "src/a.ts", Severity::Error, "Use const"),
                violation("No var", "src/b.ts", Severity::Error, "Use const"),
                violation("No any", "src/a.ts", Severity::Warning, "Avoid any"),
            ],
        );
        zones.insert(
            "api".to_string(),
            vec![violation("No TODO", "src/c.ts", Severity::Info, "Ticket")],
        );

        let stats = aggregate(&zones);

        assert_eq!(stats.total_errors, 2);
        assert_eq!(stats.total_warnings, 1);
        assert_eq!(stats.total_infos, 1);
        assert_eq!(stats.errors_by_rule.get("No var"), Some(&2));
        assert_eq!(stats.violations_by_zone.get("web"), Some(&3));
        assert_eq!(stats.violations_by_zone.get("api"), Some(&1));
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_aggregate_skips_test_files() {
        let mut zones = BTreeMap::new();
        zones.insert(
            "web".to_string(),
            vec![
                violation("No var", "src/a.test.ts", Severity::Error, "Use const"),
                violation("No var", "src/__tests__/b.ts", Severity::Error, "Use const"),
                violation("No var", "src/a.ts", Severity::Error, "Use const"),
            ],
        );

        let stats = aggregate(&zones);
        assert_eq!(stats.total_errors, 1);
    }

    #[test]
    fn test_aggregate_routes_ok_markers() {
        let mut zones = BTreeMap::new();
        zones.insert(
            "web".to_string(),
            vec![
                violation("Coverage", "src/a.test.ts", Severity::Info, "✓ suite passes"),
                violation("No var", "src/a.ts", Severity::Error, "Use const"),
            ],
        );

        let stats = aggregate(&zones);

        assert_eq!(stats.oks_by_zone.get("web"), Some(&1));
        assert_eq!(stats.total_errors, 1);
        assert_eq!(stats.total_infos, 0);
    }

    #[test]
    fn test_counts_by_rule_merges_tiers() {
        let mut zones = BTreeMap::new();
        zones.insert(
            "web".to_string(),
            vec![
                violation("No var", "src/a.ts", Severity::Error, "Use const"),
                violation("No any", "src/a.ts", Severity::Warning, "Avoid any"),
            ],
        );

        let stats = aggregate(&zones);
        let counts = stats.counts_by_rule();

        assert_eq!(counts.get("No var"), Some(&1));
        assert_eq!(counts.get("No any"), Some(&1));
    }
}
