//! CLI structure and argument definitions.
//!
//! mockfs has a single operation, so the generate arguments are flattened
//! into the top-level parser next to the global options.

use crate::commands::GenerateCommand;
use clap::Parser;
use std::path::PathBuf;

/// Generate a mock file structure module from a directory tree.
#[derive(Parser)]
#[command(name = "mockfs")]
#[command(
    version,
    about = "Generate a mock file structure module from a directory",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress progress and completion messages
    #[arg(long)]
    pub quiet: bool,

    /// Override the directory holding the user config.yaml
    #[arg(long, value_name = "PATH", env = "MOCKFS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Load an additional configuration file
    #[arg(long, value_name = "FILE", env = "MOCKFS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub generate: GenerateCommand,
}
