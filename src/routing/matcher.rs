//! Path prefix matching.
//!
//! # Responsibilities
//! - Decide whether a registered prefix structurally matches a lookup path
//!
//! # Design Decisions
//! - Byte-wise comparison, case-sensitive
//! - No normalization: `/api` and `/api/` are different prefixes
//! - Empty prefix never matches
//! - No regex to guarantee O(n) matching

/// Matches a lookup path against a registered prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Length of the prefix in bytes. Drives scan ordering.
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Returns true if `path` begins with this prefix.
    pub fn matches(&self, path: &str) -> bool {
        !self.prefix.is_empty() && path.as_bytes().starts_with(self.prefix.as_bytes())
    }
}
