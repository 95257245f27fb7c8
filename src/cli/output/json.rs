//! JSON output formatting

use super::ReportRenderer;
use crate::error::ZonelintError;
use crate::report::ScanReport;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonOutput {
    fn render(&self, report: &ScanReport) -> Result<String, ZonelintError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
