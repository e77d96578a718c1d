//! Path handling for scans.
//!
//! Two kinds of paths flow through mockfs:
//!
//! - **Filesystem paths** supplied by the user (scan root, output file).
//!   These are tilde-expanded and made absolute by [`normalize`].
//! - **Relative paths** ([`RelativePath`]) discovered by a scan. These are
//!   sequences of UTF-8 segments rendered with `/` regardless of platform,
//!   and are what the suffix resolver and the output formats work with.
//!
//! # Examples
//!
//! ```
//! use mockfs::path::RelativePath;
//!
//! let a: RelativePath = "app/models/user.ts".parse().unwrap();
//! let b: RelativePath = "models/user.ts".parse().unwrap();
//! assert!(a.ends_with(&b));
//! ```

pub mod normalize;
mod relative;

pub use relative::{RelativePath, SEPARATOR};
