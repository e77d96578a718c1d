//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading mockfs configuration files
//! from various locations with proper precedence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of a project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "mockfs.yaml";

/// Precedence of the user configuration file.
pub const USER_PRECEDENCE: u8 = 1;
/// Precedence of a discovered project configuration file.
pub const PROJECT_PRECEDENCE: u8 = 2;
/// Precedence of a configuration file named explicitly.
pub const EXPLICIT_PRECEDENCE: u8 = 3;

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use mockfs::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None, None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Loads, in order of increasing precedence:
    /// 1. The user config `config.yaml` in the data directory (`~/.mockfs`
    ///    unless `data_dir` is given), if present
    /// 2. The nearest `mockfs.yaml` walking up from `working_dir`, if any
    /// 3. `explicit`, which must exist
    ///
    /// # Errors
    ///
    /// Returns an error if any file exists but cannot be read or parsed, or
    /// if the explicit file does not exist.
    pub fn load_all(
        working_dir: &Path,
        data_dir: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        if let Some(path) = explicit {
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: EXPLICIT_PRECEDENCE,
                config: Self::load_file(path)?,
            });
        }

        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if it exists.
    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => return Ok(None),
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: USER_PRECEDENCE,
            config,
        }))
    }

    /// Find the nearest `mockfs.yaml` in `start_dir` or its ancestors.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: PROJECT_PRECEDENCE,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Default data directory: `~/.mockfs`.
    #[must_use]
    pub fn default_data_dir() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".mockfs"))
    }

    fn user_config_path() -> Option<PathBuf> {
        Self::default_data_dir().map(|dir| dir.join("config.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/mockfs.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("mockfs.yaml");
        fs::write(&config_path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_none() {
        let temp_dir = TempDir::new().unwrap();
        let found = ConfigLoader::discover_project_config(temp_dir.path()).unwrap();
        // An ancestor of the temp dir could hold a mockfs.yaml; only check
        // that nothing was found inside the temp dir itself.
        if let Some(source) = found {
            assert!(!source.path.starts_with(temp_dir.path()));
        }
    }

    #[test]
    fn test_discover_from_child() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child").join("grandchild");
        fs::create_dir_all(&child).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "sort_entries: true\n").unwrap();

        let source = ConfigLoader::discover_project_config(&child)
            .unwrap()
            .unwrap();
        assert_eq!(source.precedence, PROJECT_PRECEDENCE);
        assert_eq!(source.config.sort_entries, Some(true));
    }

    #[test]
    fn test_discover_nearest_wins() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child");
        fs::create_dir(&child).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "uri_prefix: 'outer/'\n").unwrap();
        fs::write(child.join(PROJECT_CONFIG_FILE), "uri_prefix: 'inner/'\n").unwrap();

        let source = ConfigLoader::discover_project_config(&child)
            .unwrap()
            .unwrap();
        assert_eq!(source.config.uri_prefix.as_deref(), Some("inner/"));
    }

    #[test]
    fn test_load_all_sorts_by_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        fs::create_dir(&data_dir).unwrap();
        fs::write(data_dir.join("config.yaml"), "include_hidden: true\n").unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "sort_entries: true\n").unwrap();
        let explicit = temp_dir.path().join("custom.yaml");
        fs::write(&explicit, "unique_paths: false\n").unwrap();

        let sources =
            ConfigLoader::load_all(temp_dir.path(), Some(&data_dir), Some(&explicit)).unwrap();

        let precedences: Vec<u8> = sources.iter().map(|s| s.precedence).collect();
        assert_eq!(
            precedences,
            [USER_PRECEDENCE, PROJECT_PRECEDENCE, EXPLICIT_PRECEDENCE]
        );
    }

    #[test]
    fn test_load_all_missing_explicit_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigLoader::load_all(
            temp_dir.path(),
            Some(temp_dir.path()),
            Some(&temp_dir.path().join("missing.yaml")),
        );
        assert!(result.is_err());
    }
}
