//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::error::ZonelintError;
use crate::report::ScanReport;

/// Trait for rendering scan reports
pub trait ReportRenderer {
    fn render(&self, report: &ScanReport) -> Result<String, ZonelintError>;
}
