//! Integration test suite.
//!
//! Exercises the crate through its public API only, with real
//! directories under `tempfile::tempdir`.

mod atomicity;
mod walker;
