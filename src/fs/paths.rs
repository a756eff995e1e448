//! Pure path-string helpers: base-name extraction and home directory
//! resolution.
//!
//! The unix/windows variants operate on the string form regardless of the
//! host platform, so a unix process can take the base name of a windows
//! path it received over the wire. No normalization is performed; what
//! comes in goes through unchanged apart from the split.

use std::path::{Path, PathBuf};

/// Returns the final component of a path in the host platform's
/// convention, or an empty string for paths ending in a separator.
#[must_use]
pub fn base_name(path: &str) -> &str {
    if cfg!(windows) { windows_base_name(path) } else { unix_base_name(path) }
}

/// Returns the final component of a unix-style path.
///
/// Everything after the last `/` is the base name, so a trailing slash
/// yields an empty string.
#[must_use]
pub fn unix_base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Returns the final component of a windows-style path.
///
/// Both separators are honored and a drive prefix (`C:`) counts as a
/// separator, so `C:report.txt` yields `report.txt`.
#[must_use]
pub fn windows_base_name(path: &str) -> &str {
    match path.rfind(['/', '\\', ':']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Returns the directory portion of a file path (everything up to the
/// final component).
#[must_use]
pub fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent()
}

/// Returns the current user's home directory, if the OS knows one.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Joins a relative path onto the current user's home directory.
#[must_use]
pub fn home_dir_join(path: &str) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(path))
}
