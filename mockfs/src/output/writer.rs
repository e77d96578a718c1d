//! All-or-nothing artifact writes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Write `contents` to `path`, replacing any existing file.
///
/// The data goes to a temporary sibling first and is then renamed over the
/// destination, so readers see either the old file or the complete new one.
/// The temporary file is removed if anything fails.
///
/// # Errors
///
/// Returns [`Error::OutputWrite`] if the temporary file cannot be written or
/// renamed into place, and [`Error::InvalidPath`] if `path` has no file name.
///
/// # Examples
///
/// ```no_run
/// use mockfs::output::write_atomic;
/// use std::path::Path;
///
/// write_atomic(Path::new("mockFileStructure.ts"), "export const files = [\n\n];\n").unwrap();
/// ```
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = temp_sibling(path)?;

    if let Err(source) = fs::write(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        });
    }

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        });
    }

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "output path has no file name".to_string(),
    })?;

    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
