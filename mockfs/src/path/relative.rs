//! Scan-relative paths made of `/`-separated segments.

use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Canonical separator used when rendering relative paths.
pub const SEPARATOR: char = '/';

/// A non-empty, ordered sequence of path segments relative to a scan root.
///
/// The final segment is the file name. Segments are never empty, never `.`
/// or `..`, and never contain the separator.
///
/// # Examples
///
/// ```
/// use mockfs::RelativePath;
///
/// let path: RelativePath = "src/lib/index.ts".parse().unwrap();
/// assert_eq!(path.depth(), 3);
/// assert_eq!(path.file_name(), "index.ts");
/// assert_eq!(path.suffix(2).to_string(), "lib/index.ts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath {
    segments: Vec<String>,
}

impl RelativePath {
    /// Builds a path from individual segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if there are no segments or any segment
    /// is empty, `.`, `..`, or contains the separator.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();

        if segments.is_empty() {
            return Err(invalid(&segments, "path has no segments"));
        }

        for segment in &segments {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(invalid(&segments, &format!("invalid segment '{segment}'")));
            }
            if segment.contains(SEPARATOR) {
                return Err(invalid(
                    &segments,
                    &format!("segment '{segment}' contains '{SEPARATOR}'"),
                ));
            }
        }

        Ok(Self { segments })
    }

    /// Converts a filesystem path relative to a scan root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is absolute, contains `.`
    /// or `..` components, or is empty.
    ///
    /// Names that are not valid UTF-8 are kept, with invalid bytes replaced
    /// by U+FFFD.
    pub fn from_relative(path: &Path) -> Result<Self> {
        let mut segments = Vec::new();

        for component in path.components() {
            match component {
                Component::Normal(name) => {
                    let segment = name.to_string_lossy().into_owned();
                    if name.to_str().is_none() {
                        log::debug!(
                            "replacing invalid UTF-8 in {} with U+FFFD",
                            path.display()
                        );
                    }
                    segments.push(segment);
                }
                _ => {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "expected a plain relative path".to_string(),
                    })
                }
            }
        }

        Self::from_segments(segments)
    }

    /// Returns the segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments (always at least one).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns the final segment.
    #[must_use]
    pub fn file_name(&self) -> &str {
        // Construction guarantees at least one segment.
        self.segments.last().map_or("", String::as_str)
    }

    /// Returns the trailing `count` segments as a slice, clamped to
    /// `1..=depth`.
    #[must_use]
    pub fn tail(&self, count: usize) -> &[String] {
        let count = count.clamp(1, self.depth());
        &self.segments[self.depth() - count..]
    }

    /// Returns the suffix made of the trailing `count` segments, clamped to
    /// `1..=depth`.
    #[must_use]
    pub fn suffix(&self, count: usize) -> Self {
        Self {
            segments: self.tail(count).to_vec(),
        }
    }

    /// Returns true if this path ends with the given segments.
    ///
    /// Comparison is segment-wise, so `ba/x.txt` does not end with `a/x.txt`.
    #[must_use]
    pub fn ends_with_segments(&self, tail: &[String]) -> bool {
        self.segments.ends_with(tail)
    }

    /// Returns true if `other` is a contiguous suffix of this path.
    #[must_use]
    pub fn ends_with(&self, other: &Self) -> bool {
        self.ends_with_segments(&other.segments)
    }
}

fn invalid(segments: &[String], reason: &str) -> Error {
    Error::InvalidPath {
        path: segments.join("/").into(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for RelativePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_segments(s.split(SEPARATOR))
    }
}

impl Serialize for RelativePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
