//! Generate operation using the plan-execute pattern.
//!
//! Planning and writing are separate so the rendered artifact can be
//! inspected (or printed for a dry run) before anything touches the disk.
//!
//! # Architecture
//!
//! 1. **Planning**: walk the root, resolve unique paths, render the records
//! 2. **Execution**: write the rendered artifact to its destination
//!
//! # Examples
//!
//! ```no_run
//! use mockfs::config::ConfigBuilder;
//! use mockfs::operations::{GenerateOptions, GeneratePlan, PlanExecutor};
//! use std::path::PathBuf;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let options = GenerateOptions::from_config(PathBuf::from("./project"), &config);
//!
//! let plan = GeneratePlan::new(options)
//!     .build_plan(&mut |_: usize, _: usize| {})
//!     .unwrap();
//! let result = PlanExecutor::new().execute(&plan).unwrap();
//! println!("{} records", result.records_written);
//! ```

pub mod executor;
pub mod generate;

pub use executor::{ExecutionResult, PlanExecutor};
pub use generate::{GenerateOptions, GeneratePlan, GenerationPlan};
