//! Unique suffix resolution.
//!
//! Files in different directories often share a name (`index.ts`,
//! `mod.rs`, `README.md`). For display, each file gets the shortest suffix
//! of its path that no other file with the same name shares:
//!
//! | full path        | unique path  |
//! |------------------|--------------|
//! | `a/b/x.txt`      | `b/x.txt`    |
//! | `a/c/x.txt`      | `c/x.txt`    |
//! | `docs/y.txt`     | `y.txt`      |
//!
//! Resolution is a pure function of the input paths. Progress can be
//! observed through a [`ProgressObserver`], which never affects the result.

mod progress;
mod suffix;

#[cfg(test)]
mod proptests;

pub use progress::{percent, ProgressObserver};
pub use suffix::{SuffixMap, UniqueSuffixResolver};
