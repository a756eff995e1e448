//! Directory operations: creation, copy, move, removal, and disk usage.

use crate::error::{FsError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Returns `true` if the path exists and is a directory.
#[must_use]
pub fn is_dir(path: &Path) -> bool {
    path.is_dir()
}

/// Creates a directory, including any missing parents.
///
/// Creating an already-existing directory is a no-op, not an error.
///
/// # Errors
///
/// Returns [`FsError::AlreadyExists`] if the path exists but is not a
/// directory, or [`FsError::PermissionDenied`] on OS refusal.
pub fn create(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(FsError::AlreadyExists { path: path.to_path_buf() });
    }
    fs::create_dir_all(path).map_err(|err| FsError::from_io(err, path))
}

/// Recursively copies a directory tree.
///
/// The destination must not already exist; this mirrors an exclusive
/// "materialize a fresh tree" copy rather than a merge.
///
/// # Errors
///
/// [`FsError::AlreadyExists`] if `dst` exists, [`FsError::NotFound`] if
/// `src` is absent.
pub fn copy(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        return Err(FsError::AlreadyExists { path: dst.to_path_buf() });
    }
    if !src.is_dir() {
        return Err(FsError::NotFound { path: src.to_path_buf() });
    }
    debug!(src = %src.display(), dst = %dst.display(), "copying directory tree");
    copy_tree(src, dst)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|err| FsError::from_io(err, dst))?;

    let entries = fs::read_dir(src).map_err(|err| FsError::from_io(err, src))?;
    for entry in entries {
        let entry = entry.map_err(|err| FsError::from_io(err, src))?;
        let file_type = entry.file_type().map_err(|err| FsError::from_io(err, entry.path()))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_tree(&src_path, &dst_path)?;
        } else if file_type.is_file() {
            fs::copy(&src_path, &dst_path).map_err(|err| FsError::from_io(err, &src_path))?;
        }
        // Symlinks and special files are skipped.
    }
    Ok(())
}

/// Recursively removes a directory and all its contents.
///
/// # Errors
///
/// [`FsError::NotFound`] if the directory is absent.
pub fn delete(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|err| FsError::from_io(err, path))
}

/// Moves (renames) a directory, falling back to copy-and-delete when the
/// destination is on a different filesystem.
///
/// # Errors
///
/// [`FsError::NotFound`] if `src` is absent, [`FsError::AlreadyExists`]
/// if the cross-device fallback finds `dst` present.
pub fn rename(src: &Path, dst: &Path) -> Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            debug!(src = %src.display(), dst = %dst.display(), "cross-device move, copying tree");
            copy(src, dst)?;
            delete(src)
        }
        Err(err) => Err(FsError::from_io(err, src)),
    }
}

/// Computes the total size in bytes of all regular files under `path`.
///
/// # Errors
///
/// [`FsError::NotFound`] if the directory is absent.
pub fn dir_size(path: &Path) -> Result<u64> {
    let mut size = 0;

    let entries = fs::read_dir(path).map_err(|err| FsError::from_io(err, path))?;
    for entry in entries {
        let entry = entry.map_err(|err| FsError::from_io(err, path))?;
        let metadata = entry.metadata().map_err(|err| FsError::from_io(err, entry.path()))?;

        if metadata.is_dir() {
            size += dir_size(&entry.path())?;
        } else {
            size += metadata.len();
        }
    }

    Ok(size)
}

/// Disk usage statistics for the filesystem holding a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    /// Total capacity in bytes.
    pub total: u64,
    /// Bytes in use.
    pub used: u64,
    /// Bytes free.
    pub free: u64,
}

/// Queries disk usage for the filesystem containing `path`.
///
/// # Errors
///
/// [`FsError::NotFound`] if the path is absent.
pub fn disk_usage(path: &Path) -> Result<DiskUsage> {
    let total = fs4::total_space(path).map_err(|err| FsError::from_io(err, path))?;
    let free = fs4::free_space(path).map_err(|err| FsError::from_io(err, path))?;
    Ok(DiskUsage { total, used: total.saturating_sub(free), free })
}
