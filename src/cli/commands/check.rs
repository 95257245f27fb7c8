//! Check command - Scan the project and report violations

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::{CheckArgs, OutputFormat};
use crate::cli::output::{JsonOutput, ReportRenderer, TerminalOutput};
use crate::config::Config;
use crate::error::{ScanError, ZonelintError};
use crate::exit_codes;
use crate::report::ScanReport;
use crate::rules::engine::RuleEngine;
use crate::rules::Violation;
use crate::scanner::{build_ignore_set, detect_zones, Scanner};

pub async fn execute(
    args: CheckArgs,
    root: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<i32, ZonelintError> {
    let config = match &config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&root)?,
    };
    let ruleset = config.build_ruleset();

    let scanner = Scanner::new(root)?;
    let project = scanner.project_name();

    let ignore = build_ignore_set(&ruleset.ignore);
    let files = scanner.source_files(&ruleset.extensions, &ignore);
    info!(project = %project, files = files.len(), rules = ruleset.rules.len(), "Starting scan");

    let zones = detect_zones(&project, files);
    let total_files: usize = zones.values().map(Vec::len).sum();
    let progress = scan_progress_bar(total_files as u64);

    let mut zone_results: BTreeMap<String, Vec<Violation>> = BTreeMap::new();
    for (zone, zone_files) in zones {
        debug!(zone = %zone, files = zone_files.len(), "Scanning zone");

        // Fresh engine per zone; engine state is immutable during a scan.
        let engine = RuleEngine::new(ruleset.clone());
        let mut violations = Vec::new();

        for relative in zone_files {
            let full = scanner.full_path(&relative);
            let mut found = engine.validate_file(&full.to_string_lossy()).await;

            // Reports carry project-relative paths.
            for violation in &mut found {
                violation.file_path = relative.clone();
            }
            violations.extend(found);
            progress.inc(1);
        }

        zone_results.insert(zone, violations);
    }
    progress.finish_and_clear();

    let report = ScanReport::new(project, zone_results);

    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render(&report)?;

    match &args.output {
        Some(path) => write_report(path, &rendered)?,
        None => println!("{rendered}"),
    }

    // Exit status is driven only by violation totals, never by internal
    // tooling errors.
    let exit_code = if report.has_errors() {
        exit_codes::ERRORS
    } else if report.has_warnings() {
        exit_codes::WARNINGS
    } else {
        exit_codes::SUCCESS
    };

    Ok(exit_code)
}

fn write_report(path: &Path, rendered: &str) -> Result<(), ZonelintError> {
    std::fs::write(path, rendered).map_err(|e| {
        ZonelintError::Scan(ScanError::ReportWrite {
            path: path.display().to_string(),
            source: e,
        })
    })
}

fn scan_progress_bar(total: u64) -> ProgressBar {
    let progress = ProgressBar::new(total);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn check_args() -> CheckArgs {
        CheckArgs {
            format: OutputFormat::Json,
            output: None,
        }
    }

    #[tokio::test]
    async fn test_check_clean_project() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/app.ts"), "const total = 1;\n").unwrap();

        let code = execute(check_args(), dir.path().to_path_buf(), None)
            .await
            .unwrap();

        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[tokio::test]
    async fn test_check_project_with_errors() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/app.ts"), "var legacy = 1;\n").unwrap();

        let code = execute(check_args(), dir.path().to_path_buf(), None)
            .await
            .unwrap();

        assert_eq!(code, exit_codes::ERRORS);
    }

    #[tokio::test]
    async fn test_check_writes_report_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/app.ts"), "var legacy = 1;\n").unwrap();
        let out = dir.path().join("report.json");

        let args = CheckArgs {
            format: OutputFormat::Json,
            output: Some(out.clone()),
        };
        execute(args, dir.path().to_path_buf(), None).await.unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(report["stats"]["total_errors"], 1);
    }

    #[tokio::test]
    async fn test_check_missing_root_fails() {
        let result = execute(check_args(), PathBuf::from("/nonexistent/project"), None).await;
        assert!(result.is_err());
    }
}
