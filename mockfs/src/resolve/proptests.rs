//! Property-based tests for suffix resolution.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;

use super::UniqueSuffixResolver;
use crate::path::RelativePath;

// Small alphabets make shared file and directory names likely.
fn segment_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "src", "lib"]).prop_map(str::to_string)
}

fn file_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["x.txt", "y.txt", "mod.rs", "index.ts"]).prop_map(str::to_string)
}

fn path_strategy() -> impl Strategy<Value = RelativePath> {
    (prop::collection::vec(segment_strategy(), 0..5), file_name_strategy()).prop_map(
        |(mut dirs, file)| {
            dirs.push(file);
            RelativePath::from_segments(dirs).unwrap()
        },
    )
}

// Distinct paths, as a real scan would produce.
fn path_set_strategy() -> impl Strategy<Value = Vec<RelativePath>> {
    prop::collection::btree_set(path_strategy(), 0..40)
        .prop_map(|set: BTreeSet<RelativePath>| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Every unique path is a suffix of its full path ending in the file name.
    #[test]
    fn unique_path_is_suffix(paths in path_set_strategy()) {
        let map = UniqueSuffixResolver::new().resolve(&paths);
        for path in &paths {
            let unique = map.get(path).unwrap();
            prop_assert!(path.ends_with(unique));
            prop_assert_eq!(unique.file_name(), path.file_name());
        }
    }

    // A file name nobody else uses resolves to the bare file name.
    #[test]
    fn unique_file_names_resolve_to_file_name(paths in path_set_strategy()) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for path in &paths {
            *counts.entry(path.file_name()).or_default() += 1;
        }

        let map = UniqueSuffixResolver::new().resolve(&paths);
        for path in &paths {
            if counts[path.file_name()] == 1 {
                prop_assert_eq!(map.get(path).unwrap().depth(), 1);
            }
        }
    }

    // Distinct full paths never share a unique path.
    #[test]
    fn distinct_paths_do_not_collide(paths in path_set_strategy()) {
        let map = UniqueSuffixResolver::new().resolve(&paths);
        prop_assert!(map.collisions().is_empty());
    }

    // No shorter suffix would have been unique among same-named paths.
    #[test]
    fn unique_path_is_minimal(paths in path_set_strategy()) {
        let map = UniqueSuffixResolver::new().resolve(&paths);
        for path in &paths {
            let depth = map.get(path).unwrap().depth();
            if depth > 1 {
                let shorter = path.tail(depth - 1);
                let sharing = paths
                    .iter()
                    .filter(|other| other.ends_with_segments(shorter))
                    .count();
                prop_assert!(sharing > 1);
            }
        }
    }

    // Resolution is deterministic and independent of input order.
    #[test]
    fn resolution_is_pure(paths in path_set_strategy()) {
        let resolver = UniqueSuffixResolver::new();
        let first = resolver.resolve(&paths);
        let again = resolver.resolve(&paths);
        prop_assert_eq!(&first, &again);

        let mut reversed = paths.clone();
        reversed.reverse();
        prop_assert_eq!(&first, &resolver.resolve(&reversed));
    }
}
