//! Generate operation planning.
//!
//! Planning runs the whole pipeline in memory: walk the root, resolve
//! unique paths, emit records and render the artifact. Nothing is written;
//! the resulting [`GenerationPlan`] is handed to the executor.

use std::path::PathBuf;

use crate::config::{Config, DEFAULT_COLLECTION_NAME, DEFAULT_URI_PREFIX};
use crate::error::Result;
use crate::output::OutputFormat;
use crate::record::{PathRecord, RecordEmitter};
use crate::resolve::{ProgressObserver, SuffixMap, UniqueSuffixResolver};
use crate::scan::{DirectoryWalker, ExclusionFilter};

/// Options for a generate operation.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateOptions {
    /// Directory to scan.
    pub root: PathBuf,

    /// Where the artifact is written.
    pub output_path: PathBuf,

    /// Entry names skipped during the walk.
    pub filter: ExclusionFilter,

    /// Follow symbolic links.
    pub follow_links: bool,

    /// Visit directory entries sorted by name.
    pub sort_entries: bool,

    /// Resolve shortest unique paths instead of repeating the full path.
    pub unique_paths: bool,

    /// Artifact format.
    pub format: OutputFormat,

    /// Name of the exported collection.
    pub collection_name: String,

    /// Prefix for each record's `uri`.
    pub uri_prefix: String,
}

impl GenerateOptions {
    /// Creates options for scanning `root` with built-in defaults:
    /// - default exclusion filter, hidden entries skipped
    /// - no symlink following, native entry order
    /// - unique paths resolved
    /// - TypeScript output to `mockFileStructure.ts`
    ///
    /// # Examples
    ///
    /// ```
    /// use mockfs::operations::GenerateOptions;
    /// use std::path::PathBuf;
    ///
    /// let options = GenerateOptions::new(PathBuf::from("src"));
    /// assert!(options.unique_paths);
    /// assert_eq!(options.output_path, PathBuf::from("mockFileStructure.ts"));
    /// ```
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        let format = OutputFormat::default();
        Self {
            root,
            output_path: PathBuf::from(format.default_file_name(DEFAULT_COLLECTION_NAME)),
            filter: ExclusionFilter::default(),
            follow_links: false,
            sort_entries: false,
            unique_paths: true,
            format,
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            uri_prefix: DEFAULT_URI_PREFIX.to_string(),
        }
    }

    /// Creates options for scanning `root` as described by `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mockfs::config::Config;
    /// use mockfs::operations::GenerateOptions;
    /// use std::path::PathBuf;
    ///
    /// let config = Config {
    ///     exclude: Some(vec!["fixtures".to_string()]),
    ///     use_default_excludes: Some(false),
    ///     ..Default::default()
    /// };
    /// let options = GenerateOptions::from_config(PathBuf::from("."), &config);
    /// assert!(options.filter.is_excluded("fixtures"));
    /// assert!(!options.filter.is_excluded("node_modules"));
    /// ```
    #[must_use]
    pub fn from_config(root: PathBuf, config: &Config) -> Self {
        let base = if config.use_default_excludes() {
            ExclusionFilter::default()
        } else {
            ExclusionFilter::empty()
        };

        Self {
            root,
            output_path: config.output_path(),
            filter: base
                .with_names(config.exclude().iter().cloned())
                .with_include_hidden(config.include_hidden()),
            follow_links: config.follow_links(),
            sort_entries: config.sort_entries(),
            unique_paths: config.unique_paths(),
            format: config.output_format(),
            collection_name: config.collection_name().to_string(),
            uri_prefix: config.uri_prefix().to_string(),
        }
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }

    /// Sets the exclusion filter.
    #[must_use]
    pub fn with_filter(mut self, filter: ExclusionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets whether entries are visited in sorted order.
    #[must_use]
    pub const fn with_sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Sets whether unique paths are resolved.
    #[must_use]
    pub const fn with_unique_paths(mut self, unique: bool) -> Self {
        self.unique_paths = unique;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// A fully rendered artifact, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Destination of the artifact.
    pub output_path: PathBuf,

    /// Records in walk order.
    pub records: Vec<PathRecord>,

    /// Rendered artifact text.
    pub content: String,

    /// Format of `content`.
    pub format: OutputFormat,
}

impl GenerationPlan {
    /// Number of records in the artifact.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Plans a generate operation.
///
/// # Examples
///
/// ```no_run
/// use mockfs::operations::{GenerateOptions, GeneratePlan, PlanExecutor};
/// use std::path::PathBuf;
///
/// let options = GenerateOptions::new(PathBuf::from("./project"));
/// let plan = GeneratePlan::new(options)
///     .build_plan(&mut |done: usize, total: usize| eprint!("\r{done}/{total}"))
///     .unwrap();
/// let result = PlanExecutor::new().execute(&plan).unwrap();
/// println!("wrote {} records", result.records_written);
/// ```
pub struct GeneratePlan {
    options: GenerateOptions,
}

impl GeneratePlan {
    /// Creates a planner for the given options.
    #[must_use]
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// The options being planned.
    #[must_use]
    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Walks, resolves, emits and renders.
    ///
    /// `observer` receives progress events during unique path resolution.
    /// It is never called when unique paths are disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the walk fails or the records cannot be rendered.
    pub fn build_plan(&self, observer: &mut dyn ProgressObserver) -> Result<GenerationPlan> {
        let options = &self.options;

        let walker = DirectoryWalker::new(options.filter.clone())
            .with_follow_links(options.follow_links)
            .with_sort_entries(options.sort_entries);
        let paths = walker.walk(&options.root)?;

        let map = if options.unique_paths {
            UniqueSuffixResolver::new().resolve_with_progress(&paths, observer)
        } else {
            SuffixMap::identity(&paths)
        };

        for (unique, fulls) in map.collisions() {
            log::debug!("{} paths share the unique path {unique}", fulls.len());
        }

        let records = RecordEmitter::emit(&paths, &map);
        let content = options
            .format
            .create_formatter(&options.collection_name, &options.uri_prefix)
            .format(&records)?;

        Ok(GenerationPlan {
            output_path: options.output_path.clone(),
            records,
            content,
            format: options.format,
        })
    }
}
