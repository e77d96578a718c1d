//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `MOCKFS_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use mockfs::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unknown format name or a malformed boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // MOCKFS_EXCLUDE (comma-separated, accumulated)
        if let Ok(value) = env::var("MOCKFS_EXCLUDE") {
            let exclude = config.exclude.get_or_insert_with(Vec::new);
            for name in Self::parse_list(&value) {
                if !exclude.contains(&name) {
                    exclude.push(name);
                }
            }
        }

        if let Some(value) = Self::bool_var("MOCKFS_USE_DEFAULT_EXCLUDES")? {
            config.use_default_excludes = Some(value);
        }

        if let Some(value) = Self::bool_var("MOCKFS_INCLUDE_HIDDEN")? {
            config.include_hidden = Some(value);
        }

        if let Some(value) = Self::bool_var("MOCKFS_FOLLOW_LINKS")? {
            config.follow_links = Some(value);
        }

        if let Some(value) = Self::bool_var("MOCKFS_SORT_ENTRIES")? {
            config.sort_entries = Some(value);
        }

        if let Some(value) = Self::bool_var("MOCKFS_UNIQUE_PATHS")? {
            config.unique_paths = Some(value);
        }

        if let Ok(prefix) = env::var("MOCKFS_URI_PREFIX") {
            config.uri_prefix = Some(prefix);
        }

        Self::apply_output_overrides(config)
    }

    /// Apply output-related environment variable overrides.
    fn apply_output_overrides(config: &mut Config) -> Result<()> {
        let mut output = config.output.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(path) = env::var("MOCKFS_OUTPUT") {
            output.path = Some(PathBuf::from(path));
            modified = true;
        }

        if let Ok(format) = env::var("MOCKFS_FORMAT") {
            output.format = Some(OutputFormat::parse(&format).map_err(|message| {
                Error::Validation {
                    field: "MOCKFS_FORMAT".into(),
                    message,
                }
            })?);
            modified = true;
        }

        if let Ok(name) = env::var("MOCKFS_COLLECTION_NAME") {
            output.collection_name = Some(name);
            modified = true;
        }

        if modified {
            config.output = Some(output);
        }

        Ok(())
    }

    fn bool_var(name: &str) -> Result<Option<bool>> {
        match env::var(name) {
            Ok(value) => Self::parse_bool(name, &value).map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Parse a boolean value from an environment variable.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the variable for any other value.
    pub fn parse_bool(var_name: &str, value: &str) -> Result<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: var_name.into(),
                message: format!("Invalid boolean value: {value}"),
            }),
        }
    }

    /// Split a comma-separated list, dropping blank items.
    #[must_use]
    pub fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}
