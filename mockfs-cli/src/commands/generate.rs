//! Generate command implementation.
//!
//! Scans a directory, resolves unique paths and writes the mock file
//! structure module.

use crate::error::CliError;
use crate::utils::{load_configuration, normalize_path, resolve_root, ConsoleProgress, GlobalOptions};
use clap::{Args, ValueEnum};
use mockfs::config::OutputConfig;
use mockfs::output::OutputFormat;
use mockfs::resolve::ProgressObserver;
use mockfs::{Config, GenerateOptions, GeneratePlan, PlanExecutor};
use std::path::PathBuf;

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// TypeScript module
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    /// JSON array
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::TypeScript => OutputFormat::TypeScript,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Scan a directory and write its mock file structure.
#[derive(Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateCommand {
    /// Directory to scan
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Output file (default: ./mockFileStructure.ts)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Name of the exported collection
    #[arg(long, value_name = "NAME")]
    pub collection_name: Option<String>,

    /// Prefix prepended to each file's path to build its URI
    #[arg(long, value_name = "PREFIX")]
    pub uri_prefix: Option<String>,

    /// Skip entries with this name (repeatable)
    #[arg(short, long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Do not skip the built-in list of dependency and build directories
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Include entries whose name starts with a dot
    #[arg(long)]
    pub include_hidden: bool,

    /// Follow symbolic links
    #[arg(long)]
    pub follow_links: bool,

    /// Visit directory entries in name order
    #[arg(long)]
    pub sort: bool,

    /// Use each file's full path as its unique path
    #[arg(long)]
    pub full_paths: bool,

    /// Print the generated module instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Do not print resolution progress
    #[arg(long)]
    pub no_progress: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger;

        // 1. Resolve the scan root
        let root = resolve_root(&self.directory)?;

        // 2. Load configuration with command-line flags on top
        let overrides = self.overrides()?;
        let config = load_configuration(global, overrides)?;

        // 3. Build options; a relative output path is relative to the CWD
        let mut options = GenerateOptions::from_config(root, &config);
        options.output_path = normalize_path(&options.output_path)?;
        logger.info(&format!(
            "Scanning {} ({} excluded names)",
            options.root.display(),
            options.filter.names().count()
        ));

        // 4. Plan
        let show_progress =
            !global.quiet && !self.no_progress && !self.dry_run && options.unique_paths;
        let mut console = ConsoleProgress::stdout();
        let mut silent = |_: usize, _: usize| {};
        let observer: &mut dyn ProgressObserver = if show_progress {
            &mut console
        } else {
            &mut silent
        };

        let plan = GeneratePlan::new(options).build_plan(observer)?;
        logger.info(&format!("Resolved {} file(s)", plan.record_count()));

        // 5. Execute
        if self.dry_run {
            let result = PlanExecutor::new().dry_run().execute(&plan)?;
            print!("{}", plan.content);
            if !global.quiet {
                eprintln!(
                    "Dry run - would write {} record(s) to {}",
                    result.records_written,
                    result.output_path.display()
                );
            }
            return Ok(());
        }

        let result = PlanExecutor::new().execute(&plan)?;
        if !global.quiet {
            println!("Done! Created: {}", result.output_path.display());
        }

        Ok(())
    }

    /// Configuration expressed by the command-line flags.
    ///
    /// Only flags that were given produce a value, so unset flags never
    /// mask configuration files or the environment.
    fn overrides(&self) -> Result<Config, CliError> {
        let output_path = match self.output {
            Some(ref path) => Some(normalize_path(path)?),
            None => None,
        };

        let output = if output_path.is_some()
            || self.format.is_some()
            || self.collection_name.is_some()
        {
            Some(OutputConfig {
                path: output_path,
                format: self.format.map(OutputFormat::from),
                collection_name: self.collection_name.clone(),
            })
        } else {
            None
        };

        Ok(Config {
            exclude: (!self.exclude.is_empty()).then(|| self.exclude.clone()),
            use_default_excludes: self.no_default_excludes.then_some(false),
            include_hidden: self.include_hidden.then_some(true),
            follow_links: self.follow_links.then_some(true),
            sort_entries: self.sort.then_some(true),
            unique_paths: self.full_paths.then_some(false),
            uri_prefix: self.uri_prefix.clone(),
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn command(args: &[&str]) -> GenerateCommand {
        let mut argv = vec!["mockfs"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().generate
    }

    #[test]
    fn test_no_flags_no_overrides() {
        let overrides = command(&["src"]).overrides().unwrap();
        assert_eq!(overrides, Config::default());
    }

    #[test]
    fn test_flags_become_overrides() {
        let overrides = command(&[
            "src",
            "--exclude",
            "fixtures",
            "--no-default-excludes",
            "--sort",
            "--full-paths",
            "--format",
            "ts",
            "--collection-name",
            "files",
        ])
        .overrides()
        .unwrap();

        assert_eq!(overrides.exclude(), ["fixtures"]);
        assert!(!overrides.use_default_excludes());
        assert!(overrides.sort_entries());
        assert!(!overrides.unique_paths());
        assert_eq!(overrides.output_format(), OutputFormat::TypeScript);
        assert_eq!(overrides.collection_name(), "files");
    }

    #[test]
    fn test_output_is_made_absolute() {
        let overrides = command(&["src", "-o", "out/files.ts"]).overrides().unwrap();
        let path = overrides.output_path();
        assert!(path.is_absolute());
        assert!(path.ends_with("out/files.ts"));
    }
}
