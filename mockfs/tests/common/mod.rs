//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for directory trees used to
//! exercise the mockfs library.

use std::fs;
use std::path::{Path, PathBuf};

use mockfs::RelativePath;
use tempfile::TempDir;

/// A temporary directory tree built from relative file paths.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::with_files(&["a/x.txt", "b/x.txt"]);
/// assert!(tree.root().join("a/x.txt").exists());
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Creates a tree holding an empty file at each relative path.
    pub fn with_files(files: &[&str]) -> Self {
        let tree = Self::new();
        for file in files {
            tree.touch(file);
        }
        tree
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates an empty file, along with any missing parent directories.
    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create parent directory");
        fs::write(&path, "").expect("Failed to create file");
        path
    }

    /// Creates an empty directory.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }
}

/// Parses a relative path, panicking on invalid input.
#[allow(dead_code)]
pub fn rel(path: &str) -> RelativePath {
    path.parse().expect("valid relative path")
}

/// Renders and sorts paths for order-independent comparisons.
#[allow(dead_code)]
pub fn sorted_strings(paths: &[RelativePath]) -> Vec<String> {
    let mut strings: Vec<String> = paths.iter().map(ToString::to_string).collect();
    strings.sort();
    strings
}
