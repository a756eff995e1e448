//! Directory traversal and per-file aggregation.
//!
//! Walks are a pure function of filesystem state at call time: nothing is
//! cached across calls, and traversal order is whatever the OS yields.
//! A nonexistent root is treated as empty, never as an error, so callers
//! can aggregate over "whatever is there". The `recursive` flag bounds
//! the walk to the root's immediate children when `false`.
//!
//! The `read_all` / `read_matching` variants are lazy: each element's
//! content read happens at the point the iterator is pulled, so a caller
//! may stop after N results without touching the rest of the tree. A file
//! deleted between enumeration and its read yields an `Err` element for
//! that path and iteration continues.

use crate::error::Result;
use crate::fs::file::{self, FileDetails};
use crate::pattern::NameMatcher;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// Walk entries under `root`, skipping unreadable entries. A nonexistent
/// root yields nothing.
fn entries(root: &Path, recursive: bool) -> impl Iterator<Item = DirEntry> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    WalkDir::new(root).max_depth(max_depth).into_iter().filter_map(std::result::Result::ok)
}

fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}

/// Lists the names of all files under `root`.
#[must_use]
pub fn file_names(root: &Path, recursive: bool) -> Vec<String> {
    entries(root, recursive)
        .filter(|e| e.file_type().is_file())
        .map(|e| entry_name(&e))
        .collect()
}

/// Lists the full paths of all files under `root`.
#[must_use]
pub fn file_paths(root: &Path, recursive: bool) -> Vec<PathBuf> {
    entries(root, recursive)
        .filter(|e| e.file_type().is_file())
        .map(DirEntry::into_path)
        .collect()
}

/// Lists the names of all subdirectories under `root`.
///
/// The result is a flat list in walk order: a name appears once per
/// directory encountered, and duplicate names under different parents are
/// not deduplicated. The root itself is not included.
#[must_use]
pub fn subdirectory_names(root: &Path, recursive: bool) -> Vec<String> {
    entries(root, recursive)
        .filter(|e| e.depth() > 0 && e.file_type().is_dir())
        .map(|e| entry_name(&e))
        .collect()
}

/// Builds a [`FileDetails`] snapshot for every file under `root`.
///
/// A nonexistent root yields an empty map.
///
/// # Errors
///
/// Propagates the first failure from [`file::details`], e.g. a file
/// deleted between enumeration and hashing.
pub fn details_for_all(root: &Path, recursive: bool) -> Result<HashMap<PathBuf, FileDetails>> {
    let paths = file_paths(root, recursive);
    trace!(root = %root.display(), files = paths.len(), "aggregating file details");

    let mut all = HashMap::with_capacity(paths.len());
    for path in paths {
        let details = file::details(&path)?;
        all.insert(path, details);
    }
    Ok(all)
}

/// Lazily reads every file under `root`, yielding `(path, content)` pairs.
///
/// Enumeration happens up front; each content read happens when the
/// element is pulled. A file that vanished since enumeration yields an
/// `Err` for that element without aborting the rest of the sequence.
pub fn read_all(root: &Path, recursive: bool) -> impl Iterator<Item = Result<(PathBuf, String)>> {
    file_paths(root, recursive)
        .into_iter()
        .map(|path| file::read(&path).map(|content| (path, content)))
}

/// Searches every file under `root` for a pattern, keeping only files
/// with at least one match.
///
/// Match lists follow the [`file::search`] shapes (literal count-as-list
/// vs regex findall). A nonexistent root yields an empty map.
///
/// # Errors
///
/// Propagates read failures (including non-UTF-8 content) and
/// [`crate::FsError::InvalidRegex`] for a malformed regex pattern.
pub fn search_containing(
    root: &Path,
    pattern: &str,
    pattern_is_regex: bool,
    recursive: bool,
) -> Result<HashMap<PathBuf, Vec<String>>> {
    let mut matching = HashMap::new();
    for path in file_paths(root, recursive) {
        let matches = file::search(&path, pattern, pattern_is_regex)?;
        if !matches.is_empty() {
            matching.insert(path, matches);
        }
    }
    Ok(matching)
}

/// Lists the paths of files under `root` whose name glob-matches the
/// pattern or whose full path contains the pattern as a substring.
///
/// # Errors
///
/// [`crate::FsError::InvalidPattern`] for malformed glob syntax.
pub fn paths_matching(root: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let matcher = NameMatcher::new(pattern)?;
    Ok(file_paths(root, recursive)
        .into_iter()
        .filter(|path| {
            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            matcher.matches(&name) || path.to_string_lossy().contains(pattern)
        })
        .collect())
}

/// Lists the names of files under `root` matching the pattern, with the
/// same glob-or-substring union as [`paths_matching`] applied to the name.
///
/// # Errors
///
/// [`crate::FsError::InvalidPattern`] for malformed glob syntax.
pub fn names_matching(root: &Path, pattern: &str, recursive: bool) -> Result<Vec<String>> {
    let matcher = NameMatcher::new(pattern)?;
    Ok(file_names(root, recursive)
        .into_iter()
        .filter(|name| matcher.matches_loosely(name))
        .collect())
}

/// Lazily reads the files under `root` whose path matches the pattern,
/// with [`paths_matching`] semantics.
///
/// # Errors
///
/// [`crate::FsError::InvalidPattern`] for malformed glob syntax; element
/// reads follow the [`read_all`] error policy.
pub fn read_matching(
    root: &Path,
    pattern: &str,
    recursive: bool,
) -> Result<impl Iterator<Item = Result<(PathBuf, String)>>> {
    let paths = paths_matching(root, pattern, recursive)?;
    Ok(paths.into_iter().map(|path| file::read(&path).map(|content| (path, content))))
}
