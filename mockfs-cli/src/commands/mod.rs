//! CLI command implementations.
//!
//! - `generate`: Scan a directory and write the mock file structure module

pub mod generate;

pub use generate::GenerateCommand;
