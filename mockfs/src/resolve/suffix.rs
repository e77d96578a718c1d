//! Shortest unique suffix resolution.

use std::collections::{BTreeMap, HashMap};

use crate::path::RelativePath;

use super::ProgressObserver;

/// Computes, for every path, the shortest trailing run of segments that
/// tells it apart from all other paths with the same file name.
///
/// For a path whose file name is unique the suffix is the file name alone.
/// Otherwise the suffix grows one segment at a time from the end, narrowing
/// the set of same-named paths to those that end with the current suffix,
/// until a single path remains or the path has no more segments.
///
/// Paths are grouped by file name in one pass, so each path is only compared
/// against the paths it actually conflicts with.
///
/// # Examples
///
/// ```
/// use mockfs::resolve::UniqueSuffixResolver;
/// use mockfs::RelativePath;
///
/// let paths: Vec<RelativePath> = ["a/x.txt", "b/x.txt", "c/y.txt"]
///     .iter()
///     .map(|p| p.parse().unwrap())
///     .collect();
///
/// let map = UniqueSuffixResolver::new().resolve(&paths);
/// assert_eq!(map.get(&paths[0]).unwrap().to_string(), "a/x.txt");
/// assert_eq!(map.get(&paths[1]).unwrap().to_string(), "b/x.txt");
/// assert_eq!(map.get(&paths[2]).unwrap().to_string(), "y.txt");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueSuffixResolver;

impl UniqueSuffixResolver {
    /// Creates a resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves unique suffixes for every path.
    #[must_use]
    pub fn resolve(&self, paths: &[RelativePath]) -> SuffixMap {
        self.resolve_with_progress(paths, &mut |_: usize, _: usize| {})
    }

    /// Resolves unique suffixes, reporting progress after each path.
    pub fn resolve_with_progress(
        &self,
        paths: &[RelativePath],
        observer: &mut dyn ProgressObserver,
    ) -> SuffixMap {
        let total = paths.len();

        let mut groups: HashMap<&str, Vec<&RelativePath>> = HashMap::new();
        for path in paths {
            groups.entry(path.file_name()).or_default().push(path);
        }

        let mut entries = HashMap::with_capacity(total);
        for (index, path) in paths.iter().enumerate() {
            let conflicts = groups
                .get(path.file_name())
                .map_or(&[][..], Vec::as_slice);
            entries.insert(path.clone(), shortest_unique_suffix(path, conflicts));
            observer.on_progress(index + 1, total);
        }
        observer.on_finish();

        SuffixMap { entries }
    }
}

/// Grows the suffix of `path` until it matches a single member of
/// `conflicts` (all paths sharing its file name, `path` included).
fn shortest_unique_suffix(path: &RelativePath, conflicts: &[&RelativePath]) -> RelativePath {
    if conflicts.len() <= 1 {
        return path.suffix(1);
    }

    let mut remaining = conflicts.to_vec();
    let mut depth = 1;
    while remaining.len() > 1 && depth < path.depth() {
        depth += 1;
        let tail = path.tail(depth);
        remaining.retain(|candidate| candidate.ends_with_segments(tail));
    }

    if remaining.len() > 1 {
        // Only identical full paths end up here.
        log::debug!("unresolved collision for {path}, using the full path");
    }

    path.suffix(depth)
}

/// Mapping from full relative paths to their resolved unique paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixMap {
    entries: HashMap<RelativePath, RelativePath>,
}

impl SuffixMap {
    /// A mapping where every path is its own unique path.
    ///
    /// This is what the tool produces when suffix resolution is disabled.
    #[must_use]
    pub fn identity(paths: &[RelativePath]) -> Self {
        Self {
            entries: paths.iter().map(|p| (p.clone(), p.clone())).collect(),
        }
    }

    /// Looks up the unique path for a full path.
    #[must_use]
    pub fn get(&self, path: &RelativePath) -> Option<&RelativePath> {
        self.entries.get(path)
    }

    /// Number of distinct full paths in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(full path, unique path)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&RelativePath, &RelativePath)> {
        self.entries.iter()
    }

    /// Unique paths shared by more than one full path, with the sorted full
    /// paths that share each of them.
    #[must_use]
    pub fn collisions(&self) -> Vec<(RelativePath, Vec<RelativePath>)> {
        let mut by_unique: BTreeMap<&RelativePath, Vec<RelativePath>> = BTreeMap::new();
        for (full, unique) in &self.entries {
            by_unique.entry(unique).or_default().push(full.clone());
        }

        by_unique
            .into_iter()
            .filter(|(_, fulls)| fulls.len() > 1)
            .map(|(unique, mut fulls)| {
                fulls.sort();
                (unique.clone(), fulls)
            })
            .collect()
    }
}
