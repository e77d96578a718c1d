//! Configuration system for mockfs.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `mockfs.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`MOCKFS_*`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (nearest `mockfs.yaml` at or above the working directory)
//! 5. User config (`~/.mockfs/config.yaml`)
//! 6. Built-in defaults
//!
//! The `exclude` list is the exception: entries from every source are kept.
//!
//! # Examples
//!
//! ```no_run
//! use mockfs::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("writing {}", config.output_path().display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputConfig, DEFAULT_COLLECTION_NAME, DEFAULT_URI_PREFIX};
pub use validator::ConfigValidator;
