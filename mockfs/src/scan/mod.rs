//! Directory scanning.
//!
//! A scan walks a root directory depth-first and collects the relative path
//! of every regular file, skipping entries whose names are rejected by an
//! [`ExclusionFilter`]. Directories that are rejected are pruned, so nothing
//! beneath them is ever visited.
//!
//! # Examples
//!
//! ```no_run
//! use mockfs::scan::{DirectoryWalker, ExclusionFilter};
//! use std::path::Path;
//!
//! let filter = ExclusionFilter::default().with_names(["fixtures"]);
//! let files = DirectoryWalker::new(filter).walk(Path::new(".")).unwrap();
//! println!("found {} files", files.len());
//! ```

mod filter;
mod walker;

pub use filter::{ExclusionFilter, DEFAULT_EXCLUDED_NAMES, HIDDEN_PREFIX};
pub use walker::DirectoryWalker;
