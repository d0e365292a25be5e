//! Ordered prefix route index.
//!
//! # Responsibilities
//! - Keep prefix routes sorted by descending prefix length
//! - Insert new prefixes, update destinations of existing ones in place
//! - Find the longest registered prefix of a path
//!
//! # Design Decisions
//! - Linear scan; first structural match wins, so longest-prefix semantics
//!   come from the ordering alone
//! - Equal-length prefixes keep registration order (first registered wins)
//! - No deletion

use crate::routing::matcher::PathPrefixMatcher;

/// A registered prefix route.
#[derive(Debug, Clone)]
pub struct PrefixRoute {
    pub matcher: PathPrefixMatcher,
    pub destination: String,
}

/// Outcome of [`PrefixIndex::upsert`]. Both variants mutate the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new prefix was added.
    Inserted,
    /// An existing prefix had its destination replaced.
    Modified,
}

impl Upsert {
    pub fn is_modification(&self) -> bool {
        matches!(self, Upsert::Modified)
    }
}

/// Prefix routes, longest first.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    routes: Vec<PrefixRoute>,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path`, or update its destination if already registered.
    pub fn upsert(&mut self, path: &str, destination: &str) -> Upsert {
        if let Some(existing) = self.routes.iter_mut().find(|r| r.matcher.prefix() == path) {
            existing.destination = destination.to_string();
            return Upsert::Modified;
        }

        // End of the band of equal-length entries: same result as append
        // followed by a stable sort on descending length.
        let idx = self
            .routes
            .partition_point(|r| r.matcher.len() >= path.len());
        self.routes.insert(
            idx,
            PrefixRoute {
                matcher: PathPrefixMatcher::new(path),
                destination: destination.to_string(),
            },
        );
        Upsert::Inserted
    }

    /// Longest registered prefix of `path`, if any.
    pub fn find_match(&self, path: &str) -> Option<&PrefixRoute> {
        self.routes.iter().find(|r| r.matcher.matches(path))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &PrefixRoute> {
        self.routes.iter()
    }
}
