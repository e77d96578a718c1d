//! Main entry point for the mockfs CLI.
//!
//! Scans a directory and writes a module exporting one record per file,
//! pairing each file's URI with its shortest unique trailing path.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    // Usage errors exit with 1; --help and --version exit normally.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(CliError::Usage(e.to_string()).exit_code());
        }
        Err(e) => e.exit(),
    };

    let logger = mockfs::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: logger.is_quiet(),
        data_dir: cli.data_dir,
        config: cli.config,
        logger,
    };

    match cli.generate.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
