//! Single-file operations: read, write, append, search, and the
//! content-addressed details snapshot.
//!
//! All write paths go through the atomic writer, so concurrent readers
//! never observe a partially written file. Write content is the typed
//! [`Content`] sum type; callers holding other types convert explicitly
//! (usually via `to_string()`), there is no implicit coercion.

use crate::error::{FsError, Result};
use crate::fs::atomic::{self, WriteMode, WriteOptions};
use crate::hash;
use crate::pattern::{self, NameMatcher};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Payload for a file write: text under an encoding, or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Content {
    /// Consumes the content, yielding the bytes that land on disk.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Content {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Content {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Content {
    fn from(bytes: &[u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

/// Point-in-time content snapshot of one file: digests plus size.
///
/// The snapshot is built from exactly one read of the file's bytes (the
/// buffer is reused across all digest computations) and one separate size
/// stat. It is not cached and is stale the moment any write touches the
/// file. The size may in principle disagree with the hashed byte count if
/// the file changes between the content read and the stat; that race is
/// accepted, not corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDetails {
    /// MD5 digest, lowercase hex.
    pub md5: String,
    /// SHA-1 digest, lowercase hex.
    pub sha1: String,
    /// SHA-256 digest, lowercase hex.
    pub sha256: String,
    /// ssdeep-style fuzzy digest.
    pub ssdeep: String,
    /// Size in bytes from the metadata stat.
    pub size: u64,
}

/// Returns `true` if the path exists and is a regular file.
#[must_use]
pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

/// Reads the full file as UTF-8 text.
///
/// # Errors
///
/// [`FsError::NotFound`] if the file is absent; [`FsError::Io`] if the
/// content is not valid UTF-8.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| FsError::from_io(err, path))
}

/// Reads the full file as raw bytes.
///
/// # Errors
///
/// [`FsError::NotFound`] if the file is absent.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|err| FsError::from_io(err, path))
}

/// Atomically replaces the file's content.
///
/// # Errors
///
/// See [`atomic::atomic_write_with`].
pub fn write(path: &Path, content: impl Into<Content>) -> Result<()> {
    atomic::atomic_write_with(path, &content.into().into_bytes(), WriteOptions::default())
}

/// Atomically replaces the file's content with an explicit overwrite policy.
///
/// # Errors
///
/// [`FsError::AlreadyExists`] if the target exists and `overwrite` is
/// `false`; otherwise see [`atomic::atomic_write_with`].
pub fn write_with(path: &Path, content: impl Into<Content>, overwrite: bool) -> Result<()> {
    let options = WriteOptions { mode: WriteMode::Write, overwrite };
    atomic::atomic_write_with(path, &content.into().into_bytes(), options)
}

/// Atomically appends content after the file's existing bytes, creating
/// the file if absent.
///
/// # Errors
///
/// See [`atomic::atomic_write_with`].
pub fn append(path: &Path, content: impl Into<Content>) -> Result<()> {
    let options = WriteOptions { mode: WriteMode::Append, overwrite: true };
    atomic::atomic_write_with(path, &content.into().into_bytes(), options)
}

/// Searches the file's text for a pattern.
///
/// Literal mode returns the pattern itself repeated once per
/// non-overlapping occurrence (a count-as-list shape; [`contains`]
/// reduces it via non-emptiness). Regex mode returns findall-style
/// captures and may have a different length per occurrence — the two
/// shapes are intentionally asymmetric.
///
/// # Errors
///
/// [`FsError::NotFound`] if the file is absent, [`FsError::InvalidRegex`]
/// for a malformed regex pattern.
pub fn search(path: &Path, pattern: &str, pattern_is_regex: bool) -> Result<Vec<String>> {
    let text = read(path)?;
    if pattern_is_regex {
        pattern::regex_find_all(pattern, &text)
    } else {
        let count = text.matches(pattern).count();
        Ok(vec![pattern.to_string(); count])
    }
}

/// Returns `true` if [`search`] finds at least one match.
///
/// # Errors
///
/// Same as [`search`].
pub fn contains(path: &Path, pattern: &str, pattern_is_regex: bool) -> Result<bool> {
    Ok(!search(path, pattern, pattern_is_regex)?.is_empty())
}

/// Builds the [`FileDetails`] snapshot for one file.
///
/// The content is read once and the buffer is shared across the four
/// digest computations; the size comes from a separate stat.
///
/// # Errors
///
/// [`FsError::NotFound`] if the file disappears between the content read
/// and the stat.
pub fn details(path: &Path) -> Result<FileDetails> {
    let content = read_bytes(path)?;
    let size = fs::metadata(path).map_err(|err| FsError::from_io(err, path))?.len();

    Ok(FileDetails {
        md5: hash::md5_hex(&content),
        sha1: hash::sha1_hex(&content),
        sha256: hash::sha256_hex(&content),
        ssdeep: hash::fuzzy(&content),
        size,
    })
}

/// Copies a single file, replacing any existing destination content.
///
/// # Errors
///
/// [`FsError::NotFound`] if the source is absent.
pub fn copy(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).map_err(|err| FsError::from_io(err, src))?;
    Ok(())
}

/// Moves (renames) a single file, falling back to copy-and-delete when
/// the destination is on a different filesystem.
///
/// # Errors
///
/// [`FsError::NotFound`] if the source is absent.
pub fn rename(src: &Path, dst: &Path) -> Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::CrossesDevices => {
            debug!(src = %src.display(), dst = %dst.display(), "cross-device move, copying");
            copy(src, dst)?;
            delete(src)
        }
        Err(err) => Err(FsError::from_io(err, src)),
    }
}

/// Deletes a single file.
///
/// # Errors
///
/// [`FsError::NotFound`] if the file is absent.
pub fn delete(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|err| FsError::from_io(err, path))
}

/// Returns `true` if the file's name (final path component) glob-matches
/// the pattern.
///
/// # Errors
///
/// [`FsError::InvalidPattern`] for malformed glob syntax.
pub fn name_matches(path: &Path, pattern: &str) -> Result<bool> {
    let matcher = NameMatcher::new(pattern)?;
    let name = path.file_name().map(|n| n.to_string_lossy());
    Ok(name.is_some_and(|n| matcher.matches(&n)))
}
