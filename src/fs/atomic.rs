//! Atomic file write operations using temp-and-rename strategy.
//!
//! The payload is materialized into a temporary file in the same directory
//! as the target (same filesystem, so finalizing is a single `rename(2)`),
//! permission bits are applied to the temporary file, and the temporary
//! file is renamed onto the target. A reader opening the target at any
//! point sees either the fully-old or the fully-new content, never a
//! partial write.

use crate::error::{FsError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

/// How the payload combines with any existing target content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the target content with the payload.
    #[default]
    Write,
    /// Concatenate the payload after the existing content.
    ///
    /// Append is still a full write-and-swap, never an `O_APPEND` write:
    /// the existing content (if any) is read, the payload is concatenated,
    /// and the combined bytes go through the same temp-and-rename path.
    Append,
}

/// Options controlling an atomic write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Write or append. Defaults to [`WriteMode::Write`].
    pub mode: WriteMode,
    /// When `false`, an existing target fails the operation with
    /// [`FsError::AlreadyExists`] and is left untouched. Defaults to `true`.
    pub overwrite: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { mode: WriteMode::Write, overwrite: true }
    }
}

/// Atomically writes bytes to a file, replacing any existing content.
///
/// Equivalent to [`atomic_write_with`] with default [`WriteOptions`].
///
/// # Errors
///
/// - [`FsError::NotFound`] if the target's directory does not exist
/// - [`FsError::PermissionDenied`] if the temp file cannot be created or
///   the rename is refused
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    atomic_write_with(path, content, WriteOptions::default())
}

/// Convenience wrapper around [`atomic_write`] for string content.
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file with explicit mode and overwrite policy.
///
/// The algorithm:
/// 1. Materialize the final payload (for append, existing content plus the
///    new bytes) into a temporary sibling file.
/// 2. Sync the temporary file to disk.
/// 3. Apply the permission bits the target should carry: an existing
///    target's current mode, otherwise what a fresh file creation would
///    receive under the process umask.
/// 4. Rename the temporary file onto the target.
///
/// The temporary file is an implementation detail: it is removed on every
/// failure path, including the `overwrite: false` refusal.
///
/// # Errors
///
/// - [`FsError::NotFound`] if the target's directory does not exist
/// - [`FsError::AlreadyExists`] if the target exists and
///   `options.overwrite` is `false`
/// - [`FsError::PermissionDenied`] on OS-level access refusal
pub fn atomic_write_with(path: &Path, content: &[u8], options: WriteOptions) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(FsError::NotFound { path: parent.to_path_buf() });
    }

    let existing = match fs::metadata(path) {
        Ok(meta) => {
            if !options.overwrite {
                return Err(FsError::AlreadyExists { path: path.to_path_buf() });
            }
            Some(meta)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(FsError::from_io(err, path)),
    };

    let payload: Vec<u8> = match options.mode {
        WriteMode::Write => content.to_vec(),
        WriteMode::Append => {
            let mut combined = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
                Err(err) => return Err(FsError::from_io(err, path)),
            };
            combined.extend_from_slice(content);
            combined
        }
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|err| FsError::from_io(err, parent))?;
    temp.write_all(&payload).map_err(|err| FsError::from_io(err, temp.path()))?;
    temp.as_file().sync_all().map_err(|err| FsError::from_io(err, temp.path()))?;

    apply_target_mode(&temp, existing.as_ref())?;

    trace!(target = %path.display(), bytes = payload.len(), "finalizing atomic write");
    let persisted = if options.overwrite {
        temp.persist(path)
    } else {
        // No-replace rename: loses the race cleanly if another writer
        // created the target after the existence check above.
        temp.persist_noclobber(path)
    };
    persisted.map_err(|err| FsError::from_io(err.error, path))?;

    debug!(target = %path.display(), mode = ?options.mode, "atomic write complete");
    Ok(())
}

/// Applies the permission bits the finalized file should carry.
///
/// An existing target keeps its current mode across the swap. A fresh
/// target gets `0o666 & !umask`, matching what a plain file creation
/// would receive. The umask is queried per write, never cached.
#[cfg(unix)]
fn apply_target_mode(temp: &NamedTempFile, existing: Option<&fs::Metadata>) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = match existing {
        Some(meta) => meta.permissions().mode() & 0o7777,
        None => 0o666 & !current_umask(),
    };
    fs::set_permissions(temp.path(), fs::Permissions::from_mode(mode))
        .map_err(|err| FsError::from_io(err, temp.path()))
}

#[cfg(not(unix))]
fn apply_target_mode(temp: &NamedTempFile, existing: Option<&fs::Metadata>) -> Result<()> {
    if let Some(meta) = existing {
        fs::set_permissions(temp.path(), meta.permissions())
            .map_err(|err| FsError::from_io(err, temp.path()))?;
    }
    Ok(())
}

/// Queries the process file-creation mask.
///
/// `umask(2)` has no read-only form, so the mask is set to zero and
/// immediately restored. Concurrent writers racing on this window is an
/// accepted edge case.
#[cfg(unix)]
fn current_umask() -> u32 {
    let mask = unsafe { libc::umask(0) };
    unsafe {
        libc::umask(mask);
    }
    u32::from(mask)
}
