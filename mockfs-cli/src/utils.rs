//! Utility functions for CLI operations.
//!
//! This module provides helpers shared by the command implementation:
//! path resolution, configuration loading and console progress.

use crate::error::CliError;
use mockfs::path::normalize::{normalize, resolve_scan_root};
use mockfs::resolve::{percent, ProgressObserver};
use mockfs::{Config, ConfigBuilder, Error as LibError, Logger};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Global CLI options.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Not every field is read by every command
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress progress and completion messages.
    pub quiet: bool,

    /// Override the directory holding the user config.yaml.
    pub data_dir: Option<PathBuf>,

    /// An additional configuration file.
    pub config: Option<PathBuf>,

    /// Logger configured from the flags above.
    pub logger: Logger,
}

/// Resolve the directory to scan.
///
/// The path is tilde-expanded and made absolute against the current
/// directory, then checked to be an existing directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf, CliError> {
    resolve_scan_root(path).map_err(|e| match e {
        LibError::InvalidPath { .. } => CliError::InvalidArguments(e.to_string()),
        other => CliError::from(other),
    })
}

/// Normalize a user-supplied path (make absolute, expand ~) without
/// requiring it to exist.
pub fn normalize_path(path: &Path) -> Result<PathBuf, CliError> {
    normalize(path).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (`overrides`, highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Project and user configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(&normalize_path(data_dir)?);
    }

    if let Some(ref file) = global.config {
        builder = builder.with_config_file(&normalize_path(file)?);
    }

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Prints resolution progress as a percentage, rewriting the current line.
///
/// A line is only written when the whole percentage changes.
pub struct ConsoleProgress<W: Write> {
    out: W,
    last: Option<u8>,
}

impl ConsoleProgress<io::Stdout> {
    /// Progress on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    /// Progress written to `out`.
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    /// Consumes the reporter, returning the writer.
    #[allow(dead_code)] // Used by tests
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressObserver for ConsoleProgress<W> {
    fn on_progress(&mut self, current: usize, total: usize) {
        let pct = percent(current, total);
        if self.last == Some(pct) {
            return;
        }
        self.last = Some(pct);

        // Write failures are ignored.
        let _ = write!(self.out, "\rResolving unique paths: {pct}%");
        let _ = self.out.flush();
    }

    fn on_finish(&mut self) {
        if self.last.is_some() {
            let _ = writeln!(self.out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(events: &[(usize, usize)]) -> String {
        let mut progress = ConsoleProgress::new(Vec::new());
        for &(current, total) in events {
            progress.on_progress(current, total);
        }
        progress.on_finish();
        String::from_utf8(progress.into_inner()).unwrap()
    }

    #[test]
    fn test_progress_only_prints_changes() {
        let events: Vec<_> = (1..=400).map(|i| (i, 400)).collect();
        let output = render(&events);
        assert_eq!(output.matches('\r').count(), 101);
        assert!(output.ends_with("Resolving unique paths: 100%\n"));
    }

    #[test]
    fn test_progress_small_total() {
        assert_eq!(
            render(&[(1, 2), (2, 2)]),
            "\rResolving unique paths: 50%\rResolving unique paths: 100%\n"
        );
    }

    #[test]
    fn test_no_events_no_output() {
        assert_eq!(render(&[]), "");
    }
}
