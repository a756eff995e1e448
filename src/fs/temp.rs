//! Temporary file and directory factories with RAII cleanup.
//!
//! Thin wrappers over the `tempfile` crate: the returned handles remove
//! their backing file or directory when dropped, even on panic. The
//! atomic writer uses the same machinery internally for its staging
//! files.

use crate::error::{FsError, Result};
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

/// Creates a named temporary file in the OS temp directory.
///
/// # Errors
///
/// [`FsError::PermissionDenied`] or [`FsError::Io`] if the file cannot
/// be created.
pub fn temp_file() -> Result<NamedTempFile> {
    NamedTempFile::new().map_err(|err| FsError::from_io(err, std::env::temp_dir()))
}

/// Creates a named temporary file inside `dir`.
///
/// # Errors
///
/// [`FsError::NotFound`] if `dir` does not exist.
pub fn temp_file_in(dir: &Path) -> Result<NamedTempFile> {
    NamedTempFile::new_in(dir).map_err(|err| FsError::from_io(err, dir))
}

/// Creates a temporary directory in the OS temp directory.
///
/// # Errors
///
/// [`FsError::PermissionDenied`] or [`FsError::Io`] if the directory
/// cannot be created.
pub fn temp_dir() -> Result<TempDir> {
    tempfile::tempdir().map_err(|err| FsError::from_io(err, std::env::temp_dir()))
}

/// Creates a temporary directory inside `dir`.
///
/// # Errors
///
/// [`FsError::NotFound`] if `dir` does not exist.
pub fn temp_dir_in(dir: &Path) -> Result<TempDir> {
    tempfile::tempdir_in(dir).map_err(|err| FsError::from_io(err, dir))
}
