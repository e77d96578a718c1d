//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from several
//! sources can be merged. Accessor methods apply the built-in defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Default prefix prepended to every full path to form a record's `uri`.
pub const DEFAULT_URI_PREFIX: &str = "file:///workspace/";

/// Default name of the exported collection.
pub const DEFAULT_COLLECTION_NAME: &str = "mockFileStructure";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use mockfs::config::{Config, OutputConfig};
/// use mockfs::output::OutputFormat;
///
/// let config = Config {
///     exclude: Some(vec!["fixtures".to_string()]),
///     output: Some(OutputConfig {
///         format: Some(OutputFormat::Json),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert_eq!(config.collection_name(), "mockFileStructure");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Extra entry names to skip during the walk.
    #[serde(default)]
    pub exclude: Option<Vec<String>>,

    /// Whether the built-in build/dependency/VCS exclusions apply.
    pub use_default_excludes: Option<bool>,

    /// Keep entries whose names start with a dot.
    pub include_hidden: Option<bool>,

    /// Follow symbolic links during the walk.
    pub follow_links: Option<bool>,

    /// Visit directory entries sorted by name.
    pub sort_entries: Option<bool>,

    /// Resolve shortest unique paths (otherwise the full path is used).
    pub unique_paths: Option<bool>,

    /// Prefix for each record's `uri`.
    pub uri_prefix: Option<String>,

    /// Artifact settings.
    pub output: Option<OutputConfig>,
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination file. Relative paths are resolved against the current
    /// working directory.
    pub path: Option<PathBuf>,

    /// Artifact format.
    pub format: Option<OutputFormat>,

    /// Name of the exported collection.
    pub collection_name: Option<String>,
}

impl Config {
    /// Extra exclusion names.
    #[must_use]
    pub fn exclude(&self) -> &[String] {
        self.exclude.as_deref().unwrap_or_default()
    }

    /// Whether the default exclusion set applies (default true).
    #[must_use]
    pub fn use_default_excludes(&self) -> bool {
        self.use_default_excludes.unwrap_or(true)
    }

    /// Whether hidden entries are kept (default false).
    #[must_use]
    pub fn include_hidden(&self) -> bool {
        self.include_hidden.unwrap_or(false)
    }

    /// Whether symlinks are followed (default false).
    #[must_use]
    pub fn follow_links(&self) -> bool {
        self.follow_links.unwrap_or(false)
    }

    /// Whether entries are sorted by name (default false).
    #[must_use]
    pub fn sort_entries(&self) -> bool {
        self.sort_entries.unwrap_or(false)
    }

    /// Whether unique paths are resolved (default true).
    #[must_use]
    pub fn unique_paths(&self) -> bool {
        self.unique_paths.unwrap_or(true)
    }

    /// The URI prefix.
    #[must_use]
    pub fn uri_prefix(&self) -> &str {
        self.uri_prefix.as_deref().unwrap_or(DEFAULT_URI_PREFIX)
    }

    /// The artifact format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    /// The exported collection name.
    #[must_use]
    pub fn collection_name(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.collection_name.as_deref())
            .unwrap_or(DEFAULT_COLLECTION_NAME)
    }

    /// The configured output path, or `<collection>.<ext>`.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .as_ref()
            .and_then(|o| o.path.clone())
            .unwrap_or_else(|| {
                PathBuf::from(
                    self.output_format()
                        .default_file_name(self.collection_name()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.exclude().is_empty());
        assert!(config.use_default_excludes());
        assert!(!config.include_hidden());
        assert!(!config.follow_links());
        assert!(!config.sort_entries());
        assert!(config.unique_paths());
        assert_eq!(config.uri_prefix(), "file:///workspace/");
        assert_eq!(config.output_format(), OutputFormat::TypeScript);
        assert_eq!(config.output_path(), PathBuf::from("mockFileStructure.ts"));
    }

    #[test]
    fn test_output_path_follows_format_and_name() {
        let config = Config {
            output: Some(OutputConfig {
                format: Some(OutputFormat::Json),
                collection_name: Some("files".to_string()),
                path: None,
            }),
            ..Default::default()
        };
        assert_eq!(config.output_path(), PathBuf::from("files.json"));
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r"
exclude: [fixtures, snapshots]
include_hidden: true
uri_prefix: 'memfs:///'
output:
  path: generated/files.ts
  format: typescript
  collection_name: projectFiles
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.exclude(), ["fixtures", "snapshots"]);
        assert!(config.include_hidden());
        assert_eq!(config.uri_prefix(), "memfs:///");
        assert_eq!(config.collection_name(), "projectFiles");
        assert_eq!(config.output_path(), PathBuf::from("generated/files.ts"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(serde_yaml::from_str::<Config>("excludes: [a]\n").is_err());
        assert!(serde_yaml::from_str::<Config>("output:\n  file: x.ts\n").is_err());
    }
}
