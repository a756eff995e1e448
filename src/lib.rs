//! fskit — filesystem convenience toolkit.
//!
//! A function library over filesystem primitives: existence checks,
//! reads and writes with atomic-replace semantics, copying, moving and
//! deleting, metadata extraction (size, owner, content hashes),
//! pattern-based search within files and directory trees, and temporary
//! file/directory creation. There is no CLI or service surface; link it
//! and call it.
//!
//! # Key guarantees
//!
//! - **Atomic writes**: every write path stages the payload into a
//!   temporary sibling and renames it into place, so a reader opening
//!   the target sees either the fully-old or the fully-new content,
//!   never a partial write. Existing permission bits survive an
//!   overwrite; fresh files get the mode the process umask dictates.
//! - **Snapshot aggregation**: [`fs::details`] reads a file's bytes once
//!   and derives md5/sha1/sha256/ssdeep plus size from that single pass;
//!   [`fs::details_for_all`] extends this over a directory walk.
//! - **Empty over error**: listing or aggregating over a nonexistent
//!   root yields empty collections rather than failing, so "whatever is
//!   there" aggregation composes without existence pre-checks.
//!
//! # Modules
//!
//! - [`error`] — [`FsError`] taxonomy (`NotFound`, `AlreadyExists`,
//!   `PermissionDenied`, pattern errors, raw I/O passthrough)
//! - [`hash`] — digests over byte buffers (MD5, SHA-1, SHA-256,
//!   SHA-512, ssdeep-style fuzzy hash)
//! - [`pattern`] — glob name matching and regex findall
//! - [`fs`] — the filesystem operations themselves, split into
//!   [`fs::atomic`], [`fs::file`], [`fs::walk`], [`fs::dirs`],
//!   [`fs::metadata`], [`fs::paths`], and [`fs::temp`]
//!
//! # Example
//!
//! ```rust,no_run
//! use fskit::fs;
//! use std::path::Path;
//!
//! # fn example() -> fskit::Result<()> {
//! fs::safe_write(Path::new("out/report.txt"), "all clear")?;
//!
//! let details = fs::details(Path::new("out/report.txt"))?;
//! println!("sha256 {} ({} bytes)", details.sha256, details.size);
//!
//! for (path, _snapshot) in fs::details_for_all(Path::new("out"), true)? {
//!     println!("hashed {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Every operation is synchronous and blocking, safe to call from any
//! number of threads. Concurrent writers to the same path race on
//! whoever renames last, but no writer can produce a torn file and no
//! reader can observe one.

pub mod error;
pub mod fs;
pub mod hash;
pub mod pattern;

pub use error::{FsError, Result};
pub use fs::{Content, FileDetails, WriteMode, WriteOptions};
