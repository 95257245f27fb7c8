//! Report module - Scan results and statistics

pub mod stats;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::rules::{Severity, Violation};
use stats::{RuleSummary, ScanStatistics};

/// Complete results of a project scan, consumed by the renderers
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Name of the scanned project
    pub project: String,

    /// When the scan ran
    pub timestamp: DateTime<Utc>,

    /// Violations grouped by zone
    pub zones: BTreeMap<String, Vec<Violation>>,

    /// Aggregated counts
    pub stats: ScanStatistics,

    /// Ranked per-rule summary
    pub summary: Vec<RuleSummary>,
}

impl ScanReport {
    /// Build a report from per-zone violation lists
    pub fn new(project: impl Into<String>, zones: BTreeMap<String, Vec<Violation>>) -> Self {
        let stats = stats::aggregate(&zones);
        let summary = stats::generate_summary(&stats.counts_by_rule(), stats.total());

        Self {
            project: project.into(),
            timestamp: Utc::now(),
            zones,
            stats,
            summary,
        }
    }

    /// Whether any violation carries error severity
    pub fn has_errors(&self) -> bool {
        self.stats.total_errors > 0
    }

    /// Whether any violation carries warning severity
    pub fn has_warnings(&self) -> bool {
        self.stats.total_warnings > 0
    }

    /// Iterate all violations across zones with the given severity,
    /// excluding OK markers and test files (mirrors the statistics fold)
    pub fn violations_by_severity(&self, severity: Severity) -> impl Iterator<Item = &Violation> {
        self.zones
            .values()
            .flatten()
            .filter(move |v| v.severity == severity)
            .filter(|v| !v.message.starts_with(stats::OK_MARKER))
            .filter(|v| !stats::is_test_file(&v.file_path))
    }
}
