//! Error handling for fskit.
//!
//! All public operations return [`Result<T>`](Result), which carries an
//! [`FsError`]. OS-level failures are classified into a small taxonomy
//! (`NotFound`, `AlreadyExists`, `PermissionDenied`) so callers can match
//! on the failure mode instead of inspecting raw [`std::io::Error`] kinds;
//! anything outside the taxonomy is passed through as [`FsError::Io`] with
//! the offending path attached.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FsError>;

/// The error type for all fskit operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FsError {
    /// The target or source path does not exist.
    #[error("path not found: {}", .path.display())]
    NotFound {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// The destination already exists and the operation requires exclusivity.
    #[error("path already exists: {}", .path.display())]
    AlreadyExists {
        /// Path that was expected to be absent.
        path: PathBuf,
    },

    /// The operating system refused access.
    #[error("permission denied: {}", .path.display())]
    PermissionDenied {
        /// Path the OS refused access to.
        path: PathBuf,
    },

    /// A glob pattern failed to compile.
    #[error("invalid glob pattern '{pattern}'")]
    InvalidPattern {
        /// The offending pattern string.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: glob::PatternError,
    },

    /// A regular expression failed to compile.
    #[error("invalid regex '{pattern}'")]
    InvalidRegex {
        /// The offending pattern string.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// Any other I/O failure, surfaced unmodified.
    #[error("io error at {}", .path.display())]
    Io {
        /// Path the operation was acting on.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classifies an [`io::Error`] into the fskit taxonomy, attaching the
    /// path the operation was acting on.
    pub(crate) fn from_io(source: io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Returns `true` if this error is [`FsError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this error is [`FsError::AlreadyExists`].
    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_classification() {
        let err = FsError::from_io(io::Error::from(io::ErrorKind::NotFound), "/missing");
        assert!(err.is_not_found());

        let err = FsError::from_io(io::Error::from(io::ErrorKind::AlreadyExists), "/present");
        assert!(err.is_already_exists());

        let err = FsError::from_io(io::Error::from(io::ErrorKind::PermissionDenied), "/locked");
        assert!(matches!(err, FsError::PermissionDenied { .. }));

        let err = FsError::from_io(io::Error::from(io::ErrorKind::UnexpectedEof), "/odd");
        assert!(matches!(err, FsError::Io { .. }));
    }

    #[test]
    fn test_display_includes_path() {
        let err = FsError::NotFound { path: PathBuf::from("/some/file.txt") };
        assert!(err.to_string().contains("/some/file.txt"));
    }
}
