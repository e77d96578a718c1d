//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated configuration
//! - Fixture tree construction

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into tests.
const MOCKFS_VARS: &[&str] = &[
    "MOCKFS_CONFIG",
    "MOCKFS_DATA_DIR",
    "MOCKFS_LOG_MODE",
    "MOCKFS_EXCLUDE",
    "MOCKFS_USE_DEFAULT_EXCLUDES",
    "MOCKFS_INCLUDE_HIDDEN",
    "MOCKFS_FOLLOW_LINKS",
    "MOCKFS_SORT_ENTRIES",
    "MOCKFS_UNIQUE_PATHS",
    "MOCKFS_URI_PREFIX",
    "MOCKFS_OUTPUT",
    "MOCKFS_FORMAT",
    "MOCKFS_COLLECTION_NAME",
];

/// Test environment with an isolated tree, working directory and data
/// directory.
///
/// Layout under a fresh temporary directory:
/// - `tree/`: the directory to scan
/// - `work/`: the working directory commands run in
/// - `data/`: the user configuration directory
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory scanned by default
    pub tree: PathBuf,
    /// Working directory for commands
    pub work: PathBuf,
    /// User configuration directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tree = temp_dir.path().join("tree");
        let work = temp_dir.path().join("work");
        let data_dir = temp_dir.path().join("data");
        for dir in [&tree, &work, &data_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        Self {
            temp_dir,
            tree,
            work,
            data_dir,
        }
    }

    /// Get a bare command builder running in the working directory with
    /// host `MOCKFS_*` variables removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("mockfs").expect("Failed to find mockfs binary");
        cmd.current_dir(&self.work);
        for var in MOCKFS_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// A command scanning the tree with sorted, progress-free output.
    pub fn generate(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg(&self.tree).arg("--sort").arg("--no-progress");
        cmd
    }

    /// Create an empty file (and its parents) under the tree.
    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.tree.join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create parent directory");
        fs::write(&path, "").expect("Failed to create test file");
        path
    }

    /// Write a file relative to the working directory.
    pub fn write_work_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.work.join(relative);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Read a file relative to the working directory.
    pub fn read_work_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work.join(relative)).expect("Failed to read output file")
    }

    /// The default artifact location.
    pub fn default_output(&self) -> PathBuf {
        self.work.join("mockFileStructure.ts")
    }

    /// Path of the temporary root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Render TypeScript records the way the tool does, for exact comparisons.
#[allow(dead_code)]
pub fn expected_module(entries: &[(&str, &str)]) -> String {
    let body = entries
        .iter()
        .map(|(full, unique)| {
            format!("  {{ uri: 'file:///workspace/{full}', uniquePath: '{unique}' }}")
        })
        .collect::<Vec<_>>()
        .join(",\n");
    format!("export const mockFileStructure = [\n{body}\n];\n")
}
