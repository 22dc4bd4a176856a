use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Scanner for finding Rust source files in a directory
pub struct Scanner {
    /// Root directory to scan
    source_dir: PathBuf,
    /// Patterns to exclude
    exclude_patterns: Vec<String>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(source_dir: PathBuf, exclude_patterns: Vec<String>) -> Self {
        Scanner {
            source_dir,
            exclude_patterns,
        }
    }

    /// Scan for all Rust source files, sorted by path
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut rust_files = Vec::new();

        for entry in WalkDir::new(&self.source_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e.path()))
        {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.is_rust_file(path) {
                rust_files.push(path.to_path_buf());
            }
        }

        // Deterministic order keeps the signature report stable between runs
        rust_files.sort();
        debug!(count = rust_files.len(), dir = %self.source_dir.display(), "scanned sources");

        Ok(rust_files)
    }

    /// Check if a path is a Rust source file
    fn is_rust_file(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext == "rs")
            .unwrap_or(false)
    }

    /// Check if a path should be excluded.
    ///
    /// A pattern matches a whole path component below the source directory,
    /// so `tests` excludes `src/tests/a.rs` but not `my_tests/a.rs`.
    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.source_dir).unwrap_or(path);

        relative.components().any(|component| {
            let name = component.as_os_str().to_string_lossy();
            self.exclude_patterns.iter().any(|pattern| name == pattern.as_str())
        })
    }
}
