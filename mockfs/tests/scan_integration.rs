//! Integration tests for directory walking and exclusion.

mod common;

use common::{sorted_strings, TreeFixture};
use mockfs::scan::{DirectoryWalker, ExclusionFilter, DEFAULT_EXCLUDED_NAMES};

#[test]
fn test_walk_lists_every_file_once() {
    let tree = TreeFixture::with_files(&["a.txt", "src/lib.rs", "src/deep/nested/mod.rs"]);
    tree.mkdir("empty/dir");

    let paths = DirectoryWalker::default().walk(tree.root()).unwrap();

    assert_eq!(
        sorted_strings(&paths),
        ["a.txt", "src/deep/nested/mod.rs", "src/lib.rs"]
    );
}

#[test]
fn test_every_default_exclusion_prunes_its_subtree() {
    let tree = TreeFixture::with_files(&["keep/file.txt"]);
    for name in DEFAULT_EXCLUDED_NAMES {
        tree.touch(&format!("{name}/inner/file.txt"));
        tree.touch(&format!("keep/{name}/file.txt"));
    }

    let paths = DirectoryWalker::default().walk(tree.root()).unwrap();

    assert_eq!(sorted_strings(&paths), ["keep/file.txt"]);
}

#[test]
fn test_excluded_name_matches_files_too() {
    let tree = TreeFixture::with_files(&["build", "src/out", "src/main.ts"]);

    let paths = DirectoryWalker::default().walk(tree.root()).unwrap();

    assert_eq!(sorted_strings(&paths), ["src/main.ts"]);
}

#[test]
fn test_exclusion_is_by_exact_name() {
    let tree = TreeFixture::with_files(&["builder/a.ts", "my_node_modules/b.ts", "targets/c.ts"]);

    let paths = DirectoryWalker::default().walk(tree.root()).unwrap();

    assert_eq!(
        sorted_strings(&paths),
        ["builder/a.ts", "my_node_modules/b.ts", "targets/c.ts"]
    );
}

#[test]
fn test_hidden_entries() {
    let tree = TreeFixture::with_files(&[".env", ".config/app.yaml", "visible.txt"]);

    let default = DirectoryWalker::default().walk(tree.root()).unwrap();
    assert_eq!(sorted_strings(&default), ["visible.txt"]);

    let walker = DirectoryWalker::new(ExclusionFilter::default().with_include_hidden(true));
    let with_hidden = walker.walk(tree.root()).unwrap();
    assert_eq!(
        sorted_strings(&with_hidden),
        [".config/app.yaml", ".env", "visible.txt"]
    );
}

#[test]
fn test_hidden_root_is_scanned() {
    let tree = TreeFixture::with_files(&[".hidden/a.txt"]);

    let paths = DirectoryWalker::default()
        .walk(&tree.root().join(".hidden"))
        .unwrap();

    assert_eq!(sorted_strings(&paths), ["a.txt"]);
}

#[test]
fn test_sorted_walk_is_depth_first_by_name() {
    let tree = TreeFixture::with_files(&["b.txt", "a/z.txt", "a/b/c.txt", "c/a.txt"]);

    let paths = DirectoryWalker::default()
        .with_sort_entries(true)
        .walk(tree.root())
        .unwrap();

    let rendered: Vec<String> = paths.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["a/b/c.txt", "a/z.txt", "b.txt", "c/a.txt"]);
}

#[test]
fn test_custom_filter_without_defaults() {
    let tree = TreeFixture::with_files(&["node_modules/x.js", "fixtures/y.json", "z.ts"]);

    let filter = ExclusionFilter::empty().with_names(["fixtures"]);
    let paths = DirectoryWalker::new(filter).walk(tree.root()).unwrap();

    assert_eq!(sorted_strings(&paths), ["node_modules/x.js", "z.ts"]);
}

#[test]
fn test_missing_root() {
    let tree = TreeFixture::new();
    let err = DirectoryWalker::default()
        .walk(&tree.root().join("nope"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_file_root() {
    let tree = TreeFixture::with_files(&["file.txt"]);
    let err = DirectoryWalker::default()
        .walk(&tree.root().join("file.txt"))
        .unwrap_err();
    assert!(matches!(err, mockfs::Error::NotADirectory { .. }));
}
