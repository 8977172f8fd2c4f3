//! Directory validation helpers used when an OperationConfig is constructed.
//! Verifies existence, directory type, readability and writability with clear errors.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::errors::{FalconError, Result};
use crate::fs_ops::unique_temp_path;

/// Ensure `path` exists and is a directory, then return its canonical form.
pub(crate) fn existing_dir(
    path: &Path,
    label: &'static str,
    missing: fn(PathBuf) -> FalconError,
) -> Result<PathBuf> {
    if !path.exists() {
        error!("{label} does not exist: {}", path.display());
        return Err(missing(path.to_path_buf()));
    }
    if !path.is_dir() {
        error!("{label} is not a directory: {}", path.display());
        return Err(FalconError::NotADirectory {
            label,
            path: path.to_path_buf(),
        });
    }
    Ok(dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
}

/// Ensure directory is readable by attempting to open its entries.
pub(crate) fn ensure_readable(path: &Path, label: &'static str) -> Result<()> {
    fs::read_dir(path).map_err(|source| FalconError::Unreadable {
        label,
        path: path.to_path_buf(),
        source,
    })?;
    debug!("{label} readable: {}", path.display());
    Ok(())
}

/// Ensure directory is writable by creating and removing a uniquely named hidden
/// file. Existing entries are never touched.
pub(crate) fn ensure_writable(path: &Path, label: &'static str) -> Result<()> {
    let probe = unique_temp_path(path);
    match fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&probe)
    {
        Ok(_) => {
            let _ = fs::remove_file(&probe);
            debug!("{label} writable: {}", path.display());
            Ok(())
        }
        Err(source) => Err(FalconError::Unwritable {
            label,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// A category doubles as a folder name under the destination.
pub(crate) fn ensure_category_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    let bad = trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(&['/', '\\'][..])
        || trimmed.contains('\0');
    if bad {
        return Err(FalconError::InvalidCategoryName(name.to_string()));
    }
    Ok(())
}
