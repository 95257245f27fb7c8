//! File system scanning utilities

use ignore::WalkBuilder;
use std::path::Path;

/// Information about a file in the project tree
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Relative path from the project root, with forward slashes
    pub path: String,
    /// File size in bytes
    pub size: u64,
}

/// Walk a directory tree honoring gitignore rules and return every file
pub fn scan_directory(root: &Path) -> Vec<FileInfo> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .ignore(true)
        .parents(true)
        .build();

    for entry in walker.flatten() {
        let path = entry.path();

        if path == root {
            continue;
        }

        if path.components().any(|c| {
            let name = c.as_os_str();
            name == ".git" || name == "node_modules"
        }) {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(_) => continue,
        };

        if metadata.is_dir() {
            continue;
        }

        let relative_path = path
            .strip_prefix(root)
            .ok()
            .and_then(|p| p.to_str())
            .map(|s| s.replace('\\', "/"))
            .unwrap_or_default();

        if relative_path.is_empty() {
            continue;
        }

        files.push(FileInfo {
            path: relative_path,
            size: metadata.len(),
        });
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::write(root.join("app.ts"), "const x = 1;").unwrap();
        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src/nested.ts"), "const y = 2;").unwrap();

        let files = scan_directory(root);

        assert!(files.iter().any(|f| f.path == "app.ts"));
        assert!(files.iter().any(|f| f.path == "src/nested.ts"));
    }

    #[test]
    fn test_scan_directory_skips_node_modules() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "x").unwrap();
        fs::write(root.join("app.ts"), "x").unwrap();

        let files = scan_directory(root);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "app.ts");
    }
}
