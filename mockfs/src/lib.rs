#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # mockfs
//!
//! A library for generating mock file structure modules from a directory.
//!
//! A directory is walked recursively and every file becomes a record holding
//! its path relative to the scan root plus the shortest trailing run of path
//! segments that tells it apart from every other file sharing its name. The
//! records are rendered as a TypeScript module (or JSON) for use as test
//! fixtures.
//!
//! ## Core Types
//!
//! - [`RelativePath`]: Segment-wise path relative to the scan root
//! - [`scan::DirectoryWalker`] and [`scan::ExclusionFilter`]: Directory walking
//! - [`resolve::UniqueSuffixResolver`]: Shortest unique suffix resolution
//! - [`PathRecord`] and [`RecordEmitter`]: Records in walk order
//! - [`GeneratePlan`] and [`PlanExecutor`]: The end-to-end pipeline
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use mockfs::resolve::UniqueSuffixResolver;
//! use mockfs::RelativePath;
//!
//! let paths: Vec<RelativePath> = ["a/x.txt", "b/x.txt", "c/y.txt"]
//!     .iter()
//!     .map(|p| p.parse().unwrap())
//!     .collect();
//!
//! let map = UniqueSuffixResolver::new().resolve(&paths);
//! assert_eq!(map.get(&paths[0]).unwrap().to_string(), "a/x.txt");
//! assert_eq!(map.get(&paths[2]).unwrap().to_string(), "y.txt");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod path;
pub mod record;
pub mod resolve;
pub mod scan;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    ExecutionResult, GenerateOptions, GeneratePlan, GenerationPlan, PlanExecutor,
};
pub use path::RelativePath;
pub use record::{PathRecord, RecordEmitter};
