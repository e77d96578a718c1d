//! Path records and their emission from scan results.

use serde::Serialize;

use crate::path::RelativePath;
use crate::resolve::SuffixMap;

/// A scanned file together with its resolved unique path.
///
/// `unique_path` is always a suffix of `full_path`.
///
/// # Examples
///
/// ```
/// use mockfs::PathRecord;
///
/// let record = PathRecord::new("a/b/x.txt".parse().unwrap(), "b/x.txt".parse().unwrap());
/// assert_eq!(record.full_path.to_string(), "a/b/x.txt");
/// assert_eq!(record.unique_path.to_string(), "b/x.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRecord {
    /// Path relative to the scan root.
    pub full_path: RelativePath,
    /// Shortest suffix of `full_path` that identifies the file.
    pub unique_path: RelativePath,
}

impl PathRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(full_path: RelativePath, unique_path: RelativePath) -> Self {
        Self {
            full_path,
            unique_path,
        }
    }
}

/// Turns a walk's path list and its suffix mapping into records.
pub struct RecordEmitter;

impl RecordEmitter {
    /// Produces one record per input path, in input order.
    ///
    /// Nothing is filtered, deduplicated or reordered. A path missing from
    /// the mapping falls back to its full path.
    ///
    /// # Examples
    ///
    /// ```
    /// use mockfs::{RecordEmitter, RelativePath};
    /// use mockfs::resolve::UniqueSuffixResolver;
    ///
    /// let paths: Vec<RelativePath> = vec!["b/x.txt".parse().unwrap(), "a/x.txt".parse().unwrap()];
    /// let map = UniqueSuffixResolver::new().resolve(&paths);
    /// let records = RecordEmitter::emit(&paths, &map);
    ///
    /// assert_eq!(records[0].full_path, paths[0]);
    /// assert_eq!(records[1].full_path, paths[1]);
    /// ```
    #[must_use]
    pub fn emit(paths: &[RelativePath], map: &SuffixMap) -> Vec<PathRecord> {
        paths
            .iter()
            .map(|path| {
                let unique = map.get(path).cloned().unwrap_or_else(|| {
                    log::debug!("no unique path resolved for {path}, using the full path");
                    path.clone()
                });
                PathRecord::new(path.clone(), unique)
            })
            .collect()
    }
}
