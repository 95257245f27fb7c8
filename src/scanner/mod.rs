//! Scanner module - File system walking and zone detection

mod filesystem;
mod zones;

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::warn;

pub use filesystem::FileInfo;
pub use zones::detect_zones;

use crate::error::{ScanError, ZonelintError};

/// Main scanner for a project tree
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    file_cache: Vec<FileInfo>,
}

impl Scanner {
    /// Create a new scanner for the given project root
    pub fn new(root: PathBuf) -> Result<Self, ZonelintError> {
        if !root.is_dir() {
            return Err(ScanError::RootNotFound {
                path: root.display().to_string(),
            }
            .into());
        }

        let file_cache = filesystem::scan_directory(&root);
        Ok(Self { root, file_cache })
    }

    /// Project name derived from the root directory name
    pub fn project_name(&self) -> String {
        self.root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("project")
            .to_string()
    }

    /// The project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path for a cached relative path
    pub fn full_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// All cached files
    pub fn all_files(&self) -> &[FileInfo] {
        &self.file_cache
    }

    /// Relative paths of candidate source files: extension allow-list
    /// applied, ignore globs removed
    pub fn source_files(&self, extensions: &[String], ignore: &GlobSet) -> Vec<String> {
        self.file_cache
            .iter()
            .filter(|f| {
                Path::new(&f.path)
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|ext| extensions.iter().any(|allowed| allowed == ext))
                    .unwrap_or(false)
            })
            .filter(|f| !ignore.is_match(&f.path))
            .map(|f| f.path.clone())
            .collect()
    }
}

/// Compile ignore patterns into a glob set. Invalid patterns are logged and
/// skipped rather than failing the scan.
pub fn build_ignore_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => warn!(pattern = %pattern, error = %e, "Invalid ignore pattern, skipping"),
        }
    }

    builder.build().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to build ignore set, ignoring nothing");
        GlobSet::empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn extensions() -> Vec<String> {
        crate::rules::default_extensions()
    }

    #[test]
    fn test_scanner_requires_existing_root() {
        let err = Scanner::new(PathBuf::from("/nonexistent/project")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_source_files_filters_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.ts"), "x").unwrap();
        fs::write(dir.path().join("styles.css"), "x").unwrap();
        fs::write(dir.path().join("README.md"), "x").unwrap();

        let scanner = Scanner::new(dir.path().to_path_buf()).unwrap();
        let files = scanner.source_files(&extensions(), &GlobSet::empty());

        assert_eq!(files, vec!["app.ts".to_string()]);
    }

    #[test]
    fn test_source_files_honors_ignore_globs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("generated")).unwrap();
        fs::write(dir.path().join("generated/api.ts"), "x").unwrap();
        fs::write(dir.path().join("app.ts"), "x").unwrap();

        let scanner = Scanner::new(dir.path().to_path_buf()).unwrap();
        let ignore = build_ignore_set(&["generated/**".to_string()]);
        let files = scanner.source_files(&extensions(), &ignore);

        assert_eq!(files, vec!["app.ts".to_string()]);
    }

    #[test]
    fn test_build_ignore_set_skips_invalid_patterns() {
        let ignore = build_ignore_set(&["[invalid".to_string(), "dist/**".to_string()]);
        assert!(ignore.is_match("dist/bundle.js"));
    }
}
