//! Configuration merging and precedence handling.
//!
//! Higher-precedence sources overwrite scalar fields; the `exclude` list is
//! accumulated across all sources.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, OutputConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use mockfs::config::{Config, ConfigMerger};
///
/// let low = Config {
///     exclude: Some(vec!["fixtures".to_string()]),
///     uri_prefix: Some("low/".to_string()),
///     ..Default::default()
/// };
/// let high = Config {
///     exclude: Some(vec!["snapshots".to_string()]),
///     uri_prefix: Some("high/".to_string()),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.uri_prefix(), "high/");
/// assert_eq!(result.exclude(), ["fixtures", "snapshots"]);
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - `exclude`: accumulated, duplicates dropped
    /// - `output`: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.use_default_excludes.is_some() {
            target.use_default_excludes = source.use_default_excludes;
        }

        if source.include_hidden.is_some() {
            target.include_hidden = source.include_hidden;
        }

        if source.follow_links.is_some() {
            target.follow_links = source.follow_links;
        }

        if source.sort_entries.is_some() {
            target.sort_entries = source.sort_entries;
        }

        if source.unique_paths.is_some() {
            target.unique_paths = source.unique_paths;
        }

        if source.uri_prefix.is_some() {
            target.uri_prefix.clone_from(&source.uri_prefix);
        }

        if let Some(ref source_exclude) = source.exclude {
            let target_exclude = target.exclude.get_or_insert_with(Vec::new);
            for name in source_exclude {
                if !target_exclude.contains(name) {
                    target_exclude.push(name.clone());
                }
            }
        }

        if let Some(ref source_output) = source.output {
            target.output = Some(match &target.output {
                Some(target_output) => Self::merge_output(target_output, source_output),
                None => source_output.clone(),
            });
        }
    }

    fn merge_output(target: &OutputConfig, source: &OutputConfig) -> OutputConfig {
        OutputConfig {
            path: source.path.clone().or_else(|| target.path.clone()),
            format: source.format.or(target.format),
            collection_name: source
                .collection_name
                .clone()
                .or_else(|| target.collection_name.clone()),
        }
    }
}
