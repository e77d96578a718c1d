//! Normalization of user-supplied filesystem paths.
//!
//! The scan root and the output path arrive from the command line, config
//! files or environment variables. Before use they are:
//! - tilde-expanded (`~` and `~/path`)
//! - made absolute against a base directory (normally the current directory)
//! - stripped of `.` components
//!
//! `..` components are kept as-is; resolving them lexically would change the
//! meaning of paths that traverse symlinks.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// Handles `~` and `~/path`; `~user` syntax is rejected.
///
/// # Errors
///
/// Returns an error if the path is not valid UTF-8, the home directory
/// cannot be determined, or `~user` syntax is used.
///
/// # Examples
///
/// ```
/// use mockfs::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// assert_eq!(expand_tilde(Path::new("relative/dir")).unwrap(), Path::new("relative/dir"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        Ok(home.join(rest))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Make `path` absolute against `base`, expanding `~` and dropping `.`.
///
/// # Errors
///
/// Returns an error if tilde expansion fails.
///
/// # Examples
///
/// ```
/// use mockfs::path::normalize::absolutize;
/// use std::path::Path;
///
/// let abs = absolutize(Path::new("./out/mock.ts"), Path::new("/work")).unwrap();
/// assert_eq!(abs, Path::new("/work/out/mock.ts"));
/// ```
pub fn absolutize(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    let joined = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };

    Ok(joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}

/// Make `path` absolute against the current working directory.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory
/// cannot be determined.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    absolutize(path, &cwd)
}

/// Normalize a scan root and check that it is an existing directory.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] if nothing exists at the path and
/// [`Error::NotADirectory`] if it is not a directory.
pub fn resolve_scan_root(path: &Path) -> Result<PathBuf> {
    let root = normalize(path)?;

    let metadata = std::fs::metadata(&root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::PathNotFound { path: root.clone() },
        std::io::ErrorKind::PermissionDenied => Error::PermissionDenied { path: root.clone() },
        _ => Error::Io(e),
    })?;

    if !metadata.is_dir() {
        return Err(Error::NotADirectory { path: root });
    }

    Ok(root)
}
