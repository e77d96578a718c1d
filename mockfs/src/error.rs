//! Error types for the mockfs library.
//!
//! This module provides the error hierarchy for scanning, resolving,
//! rendering and writing mock file structures, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a mockfs error.
///
/// # Examples
///
/// ```
/// use mockfs::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the mockfs library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem or relative path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The scan root exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A symlink loop was detected while following links.
    #[error("symlink loop detected: {}", path.display())]
    SymlinkLoop {
        /// The path where the loop was detected.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Records could not be rendered into the requested output format.
    #[error("failed to render {format} output: {message}")]
    Serialization {
        /// The output format being rendered.
        format: String,
        /// Details about the failure.
        message: String,
    },

    /// The generated artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();

        if err.loop_ancestor().is_some() {
            return Self::SymlinkLoop { path };
        }

        match err.into_io_error() {
            Some(io) => match io.kind() {
                std::io::ErrorKind::NotFound => Self::PathNotFound { path },
                std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
                _ => Self::Io(io),
            },
            None => Self::InvalidPath {
                path,
                reason: "directory walk failed".to_string(),
            },
        }
    }
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use mockfs::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PathNotFound { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use mockfs::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::PermissionDenied { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Check if error originates from filesystem access (reading the tree
    /// or writing the artifact) rather than from configuration or rendering.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::PathNotFound { .. }
                | Self::NotADirectory { .. }
                | Self::PermissionDenied { .. }
                | Self::SymlinkLoop { .. }
                | Self::Io(_)
                | Self::OutputWrite { .. }
        )
    }

    /// Check if error comes from configuration loading or validation.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Validation { .. })
    }
}
