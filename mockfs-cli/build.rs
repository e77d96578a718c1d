//! Build script for mockfs-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .action(ArgAction::SetTrue)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/generate.rs.
fn build_cli() -> Command {
    Command::new("mockfs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a mock file structure module from a directory")
        .long_about(
            "Scan a directory and write a module listing every file with its URI and the \
             shortest trailing path that identifies it among files sharing its name",
        )
        .arg(flag("verbose", "Enable verbose output"))
        .arg(flag("quiet", "Suppress progress and completion messages"))
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the directory holding the user config.yaml")
                .value_name("PATH")
                .env("MOCKFS_DATA_DIR"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("FILE")
                .env("MOCKFS_CONFIG"),
        )
        .arg(
            Arg::new("directory")
                .help("Directory to scan")
                .value_name("DIRECTORY")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (default: ./mockFileStructure.ts)")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_name("FORMAT")
                .value_parser(["typescript", "ts", "json"]),
        )
        .arg(
            Arg::new("collection-name")
                .long("collection-name")
                .help("Name of the exported collection")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("uri-prefix")
                .long("uri-prefix")
                .help("Prefix prepended to each file's path to build its URI")
                .value_name("PREFIX"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Skip entries with this name (repeatable)")
                .value_name("NAME")
                .action(ArgAction::Append),
        )
        .arg(flag(
            "no-default-excludes",
            "Do not skip the built-in list of dependency and build directories",
        ))
        .arg(flag(
            "include-hidden",
            "Include entries whose name starts with a dot",
        ))
        .arg(flag("follow-links", "Follow symbolic links"))
        .arg(flag("sort", "Visit directory entries in name order"))
        .arg(flag(
            "full-paths",
            "Use each file's full path as its unique path",
        ))
        .arg(flag(
            "dry-run",
            "Print the generated module instead of writing it",
        ))
        .arg(flag("no-progress", "Do not print resolution progress"))
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("mockfs.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
