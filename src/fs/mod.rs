//! Filesystem operations: atomic writes, file access, directory walking,
//! metadata, and temporary resources.
//!
//! The modules compose top-down: [`walk`] enumerates paths and delegates
//! each one to [`file`], which delegates hashing to [`crate::hash`] and
//! every write to [`atomic`]. Nothing here caches filesystem state;
//! every call answers from the filesystem as it is at call time.

pub mod atomic;
pub mod dirs;
pub mod file;
pub mod metadata;
pub mod paths;
pub mod temp;
pub mod walk;

// Atomic write operations
pub use atomic::{WriteMode, WriteOptions, atomic_write, atomic_write_with, safe_write};

// Single-file operations
pub use file::{Content, FileDetails, details};

// Directory aggregation
pub use walk::{details_for_all, file_names, file_paths, read_all, search_containing};

// Directory operations
pub use dirs::{DiskUsage, disk_usage};

// Temporary resources
pub use temp::{temp_dir, temp_file};
