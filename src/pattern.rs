//! Pattern matching for file names and file content.
//!
//! Two matching modes live here:
//!
//! - Glob matching of names via [`glob::Pattern`] (`*`, `?`, `[set]`),
//!   used by the directory walker's `*_matching` operations.
//! - Regex find-all over text via [`regex::Regex`], used by file search.
//!
//! The regex mode follows findall semantics: when the pattern has no
//! capture groups, each whole match is returned; when it has groups, the
//! text of each group is returned in order for every occurrence.

use crate::error::{FsError, Result};
use glob::Pattern;
use regex::Regex;

/// Compiled glob matcher for file and directory names.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    pattern: Pattern,
    original: String,
}

impl NameMatcher {
    /// Compiles a glob pattern (e.g. `*.md`, `report-??.txt`).
    ///
    /// # Errors
    ///
    /// Returns [`FsError::InvalidPattern`] if the glob syntax is malformed.
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = Pattern::new(pattern).map_err(|source| FsError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern: compiled, original: pattern.to_string() })
    }

    /// Returns `true` if `name` matches the glob pattern.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.matches(name)
    }

    /// Returns `true` if `name` glob-matches the pattern or contains the
    /// raw pattern string as a literal substring.
    ///
    /// The union criterion means a caller passing a plain substring with
    /// no glob metacharacters still gets matches.
    #[must_use]
    pub fn matches_loosely(&self, name: &str) -> bool {
        self.pattern.matches(name) || name.contains(&self.original)
    }

    /// The original pattern string this matcher was built from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }
}

/// Compiles `pattern` and returns every findall-style match in `text`.
///
/// # Errors
///
/// Returns [`FsError::InvalidRegex`] if the pattern does not compile.
pub fn regex_find_all(pattern: &str, text: &str) -> Result<Vec<String>> {
    let re = Regex::new(pattern).map_err(|source| FsError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(find_all(&re, text))
}

/// Findall over an already-compiled regex.
#[must_use]
pub fn find_all(re: &Regex, text: &str) -> Vec<String> {
    let mut matches = Vec::new();
    for caps in re.captures_iter(text) {
        if caps.len() == 1 {
            matches.push(caps[0].to_string());
        } else {
            // Unmatched optional groups contribute an empty string so the
            // per-occurrence group count stays stable.
            for i in 1..caps.len() {
                matches.push(caps.get(i).map_or_else(String::new, |m| m.as_str().to_string()));
            }
        }
    }
    matches
}
