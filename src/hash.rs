//! Content hashing over byte buffers.
//!
//! Pure functions producing lowercase hex digests (MD5, SHA-1, SHA-256,
//! SHA-512) and an ssdeep-style fuzzy digest for similarity detection.
//! All functions take a single byte slice so a caller hashing the same
//! content with several algorithms reads it only once.

use fuzzyhash::FuzzyHash;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// Computes the MD5 digest of `data` as a 32-character lowercase hex string.
#[must_use]
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// Computes the SHA-1 digest of `data` as a 40-character lowercase hex string.
#[must_use]
pub fn sha1_hex(data: &[u8]) -> String {
    hex::encode(Sha1::digest(data))
}

/// Computes the SHA-256 digest of `data` as a 64-character lowercase hex string.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Computes the SHA-512 digest of `data` as a 128-character lowercase hex string.
#[must_use]
pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(Sha512::digest(data))
}

/// Computes an ssdeep-style fuzzy hash of `data`.
///
/// The output has the conventional `blocksize:hash:hash` shape and is
/// suitable for detecting near-duplicate content. The exact token is
/// implementation-defined and should only be compared with other fuzzy
/// hashes, never parsed.
#[must_use]
pub fn fuzzy(data: &[u8]) -> String {
    FuzzyHash::new(data).to_string()
}
