//! Recursive directory walking.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::path::RelativePath;

use super::ExclusionFilter;

/// Recursively lists files beneath a root directory.
///
/// The walk is depth-first. Entries of a directory are visited in the order
/// the filesystem returns them unless [`with_sort_entries`] is enabled.
/// Every entry below the root is checked against the [`ExclusionFilter`];
/// excluded directories are not descended into. The root itself is never
/// filtered, so scanning a hidden directory by name works.
///
/// [`with_sort_entries`]: DirectoryWalker::with_sort_entries
///
/// # Examples
///
/// ```no_run
/// use mockfs::scan::{DirectoryWalker, ExclusionFilter};
/// use std::path::Path;
///
/// let walker = DirectoryWalker::new(ExclusionFilter::default()).with_sort_entries(true);
/// for path in walker.walk(Path::new("./project")).unwrap() {
///     println!("{path}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryWalker {
    filter: ExclusionFilter,
    follow_links: bool,
    sort_entries: bool,
}

impl DirectoryWalker {
    /// Creates a walker using the given exclusion filter.
    #[must_use]
    pub fn new(filter: ExclusionFilter) -> Self {
        Self {
            filter,
            follow_links: false,
            sort_entries: false,
        }
    }

    /// Follow symbolic links. Without this, symlinks are skipped.
    #[must_use]
    pub const fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Visit directory entries sorted by file name.
    #[must_use]
    pub const fn with_sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// The exclusion filter applied during the walk.
    #[must_use]
    pub fn filter(&self) -> &ExclusionFilter {
        &self.filter
    }

    /// Walks `root` and returns the relative path of every regular file found.
    ///
    /// # Errors
    ///
    /// Fails on the first problem: a missing root, a root that is not a
    /// directory, an unreadable directory anywhere in the tree, or a symlink
    /// loop. File names that are not valid UTF-8 are kept in lossy form.
    pub fn walk(&self, root: &Path) -> Result<Vec<RelativePath>> {
        let metadata = std::fs::metadata(root).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::PathNotFound {
                path: root.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: root.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut walker = WalkDir::new(root).follow_links(self.follow_links);
        if self.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let mut files = Vec::new();
        for entry in walker.into_iter().filter_entry(|e| self.keep(e)) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|_| Error::InvalidPath {
                    path: entry.path().to_path_buf(),
                    reason: format!("not beneath scan root {}", root.display()),
                })?;
            files.push(RelativePath::from_relative(relative)?);
        }

        log::debug!("walked {}: {} file(s)", root.display(), files.len());
        Ok(files)
    }

    fn keep(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }

        let excluded = self.filter.is_excluded(&entry.file_name().to_string_lossy());
        if excluded {
            log::debug!("skipping excluded entry {}", entry.path().display());
        }
        !excluded
    }
}

impl Default for DirectoryWalker {
    fn default() -> Self {
        Self::new(ExclusionFilter::default())
    }
}
