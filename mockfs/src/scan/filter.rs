//! Name-based exclusion of directory entries.

use std::collections::BTreeSet;

/// Prefix marking hidden entries.
pub const HIDDEN_PREFIX: char = '.';

/// Build output, dependency and VCS directory names excluded by default.
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "bower_components",
    "target",
    "dist",
    "build",
    "out",
    "coverage",
    "__pycache__",
    ".next",
    ".venv",
];

/// Decides whether an entry name is skipped during a walk.
///
/// The filter only looks at the entry's own name, never at its location.
/// Matching is exact and case-sensitive. A directory rejected by the filter
/// is pruned along with everything beneath it.
///
/// # Examples
///
/// ```
/// use mockfs::scan::ExclusionFilter;
///
/// let filter = ExclusionFilter::default();
/// assert!(filter.is_excluded(".env"));
/// assert!(filter.is_excluded("node_modules"));
/// assert!(!filter.is_excluded("Node_Modules"));
/// assert!(!filter.is_excluded("src"));
///
/// let custom = ExclusionFilter::empty().with_names(["fixtures"]);
/// assert!(custom.is_excluded("fixtures"));
/// assert!(!custom.is_excluded("node_modules"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionFilter {
    names: BTreeSet<String>,
    include_hidden: bool,
}

impl ExclusionFilter {
    /// A filter that only rejects hidden entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
            include_hidden: false,
        }
    }

    /// Adds names to the exclusion set.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets whether hidden entries are kept.
    #[must_use]
    pub const fn with_include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Returns true if an entry with this name must be skipped.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        (!self.include_hidden && name.starts_with(HIDDEN_PREFIX)) || self.names.contains(name)
    }

    /// The explicit exclusion set.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether hidden entries are kept.
    #[must_use]
    pub const fn includes_hidden(&self) -> bool {
        self.include_hidden
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::empty().with_names(DEFAULT_EXCLUDED_NAMES.iter().copied())
    }
}
