//! Route records and lookup results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routing::error::RouteError;

/// Destination returned when neither an exact nor a prefix route matches.
pub const DEFAULT_SERVICE: &str = "default-service";

/// How a registered path is matched against lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Matched only by a byte-for-byte identical path.
    Exact,
    /// Matched by any path starting with the registered path.
    Prefix,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Prefix => "prefix",
        }
    }
}

impl FromStr for MatchKind {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(MatchKind::Exact),
            "prefix" => Ok(MatchKind::Prefix),
            other => Err(RouteError::InvalidMatchType(other.to_string())),
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single routing record.
///
/// Records with `generated = true` are memoized lookup results. They only
/// ever live in the exact store and are dropped whenever the prefix index
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Registered path, or the looked-up path for generated records.
    pub path: String,
    pub kind: MatchKind,
    /// Opaque service identifier.
    pub destination: String,
    /// True if created by the lookup engine rather than a caller.
    pub generated: bool,
}

impl Route {
    /// A caller-registered record.
    pub fn authoritative(path: impl Into<String>, kind: MatchKind, destination: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            destination: destination.into(),
            generated: false,
        }
    }

    /// An engine-generated exact record caching a lookup result.
    pub fn generated(path: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: MatchKind::Exact,
            destination: destination.into(),
            generated: true,
        }
    }
}

/// Which stage of the lookup produced the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupSource {
    /// A caller-registered exact route.
    Exact,
    /// A generated entry left by an earlier lookup of the same path.
    Cached,
    /// A prefix scan hit.
    Prefix,
    /// Nothing matched.
    Default,
}

impl LookupSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupSource::Exact => "exact",
            LookupSource::Cached => "cached",
            LookupSource::Prefix => "prefix",
            LookupSource::Default => "default",
        }
    }
}

/// Result of a route lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub destination: String,
    pub source: LookupSource,
}

impl Lookup {
    /// True if no registered route matched the path.
    pub fn is_default(&self) -> bool {
        self.destination == DEFAULT_SERVICE
    }
}
