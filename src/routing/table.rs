//! Route table: registration and lookup.
//!
//! # Responsibilities
//! - Register exact and prefix routes (add or modify)
//! - Resolve a path to the best matching destination
//! - Memoize prefix and default results as generated exact entries
//! - Flush generated entries whenever the prefix index changes
//!
//! # Design Decisions
//! - One `RwLock` guards the exact store, prefix index and ledger together
//! - Lookups hit the read lock first; only misses take the write lock, since
//!   populating the cache mutates the exact store and ledger
//! - A miss re-checks the exact store under the write lock before scanning
//! - The flush completes before a prefix registration returns, so no lookup
//!   observes a destination derived from the old prefix state

use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::observability::metrics;
use crate::routing::error::RouteResult;
use crate::routing::exact::ExactStore;
use crate::routing::ledger::CacheLedger;
use crate::routing::prefix::PrefixIndex;
use crate::routing::types::{Lookup, LookupSource, MatchKind, Route, DEFAULT_SERVICE};

#[derive(Debug, Default)]
struct Tables {
    exact: ExactStore,
    prefix: PrefixIndex,
    ledger: CacheLedger,
}

impl Tables {
    /// Delete every ledgered entry that is still generated, then clear the ledger.
    fn flush_generated(&mut self) -> usize {
        let Tables { exact, ledger, .. } = self;
        let removed = ledger
            .drain()
            .filter(|path| exact.remove_generated(path))
            .count();
        metrics::record_flush(removed);
        metrics::record_cached_entries(0);
        removed
    }
}

/// Route counts for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Caller-registered exact routes.
    pub exact_routes: usize,
    pub prefix_routes: usize,
    /// Generated entries currently held by the exact store.
    pub cached_entries: usize,
    /// Paths recorded in the ledger since the last flush.
    pub ledger_len: usize,
}

/// Point-in-time copy of the table contents.
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    /// Caller-registered exact routes, sorted by path.
    pub exact: Vec<Route>,
    /// Prefix routes in scan order.
    pub prefix: Vec<Route>,
    /// Generated entries, sorted by path.
    pub cached: Vec<Route>,
}

/// The routing engine. Construct once and share via `Arc`.
#[derive(Debug, Default)]
pub struct RouteTable {
    inner: RwLock<Tables>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or modify a route, with the match type given as a literal.
    ///
    /// Fails only if `match_type` is not `"exact"` or `"prefix"`, in which
    /// case the table is left untouched.
    pub fn add_route(&self, path: &str, match_type: &str, destination: &str) -> RouteResult<()> {
        let kind = match_type.parse::<MatchKind>().inspect_err(|e| {
            tracing::warn!(path = %path, error = %e, "Rejected route registration");
        })?;
        self.insert(path, kind, destination);
        Ok(())
    }

    /// Register or modify a route.
    ///
    /// Exact routes overwrite any record at the same path, including a
    /// generated one. Prefix routes are upserted and always flush the cache.
    pub fn insert(&self, path: &str, kind: MatchKind, destination: &str) {
        let mut tables = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        match kind {
            MatchKind::Exact => {
                tables.exact.put(path, destination, false);
                tracing::info!(path = %path, destination = %destination, "Exact route registered");
            }
            MatchKind::Prefix => {
                let outcome = tables.prefix.upsert(path, destination);
                let flushed = tables.flush_generated();
                tracing::info!(
                    path = %path,
                    destination = %destination,
                    modified = outcome.is_modification(),
                    flushed,
                    "Prefix route registered"
                );
            }
        }
        metrics::record_route_added(kind);
    }

    /// Resolve `path` to a destination.
    ///
    /// Order: exact store (authoritative or cached), then the longest matching
    /// prefix, then [`DEFAULT_SERVICE`]. Prefix and default results are cached
    /// at `path` until the next prefix change.
    pub fn lookup(&self, path: &str) -> Lookup {
        {
            let tables = self.inner.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(route) = tables.exact.get(path) {
                return Self::exact_hit(path, route);
            }
        }

        let mut tables = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(route) = tables.exact.get(path) {
            return Self::exact_hit(path, route);
        }

        let (destination, source) = match tables.prefix.find_match(path) {
            Some(route) => (route.destination.clone(), LookupSource::Prefix),
            None => (DEFAULT_SERVICE.to_string(), LookupSource::Default),
        };

        tables.exact.put(path, &destination, true);
        tables.ledger.record(path);
        metrics::record_cached_entries(tables.ledger.len());
        metrics::record_lookup(source);

        tracing::debug!(path = %path, destination = %destination, source = source.as_str(), "Lookup resolved");
        Lookup { destination, source }
    }

    /// Contract-shaped lookup returning only the destination.
    ///
    /// Never returns an error; an unmatched path yields [`DEFAULT_SERVICE`].
    pub fn route_lookup(&self, path: &str) -> RouteResult<String> {
        Ok(self.lookup(path).destination)
    }

    /// Drop all generated entries. Returns how many were removed.
    pub fn flush_generated(&self) -> usize {
        let mut tables = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        tables.flush_generated()
    }

    pub fn stats(&self) -> TableStats {
        let tables = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let cached_entries = tables.exact.iter().filter(|r| r.generated).count();
        TableStats {
            exact_routes: tables.exact.len() - cached_entries,
            prefix_routes: tables.prefix.len(),
            cached_entries,
            ledger_len: tables.ledger.len(),
        }
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let tables = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        let (mut cached, mut exact): (Vec<Route>, Vec<Route>) =
            tables.exact.iter().cloned().partition(|r| r.generated);
        exact.sort_by(|a, b| a.path.cmp(&b.path));
        cached.sort_by(|a, b| a.path.cmp(&b.path));

        let prefix = tables
            .prefix
            .iter()
            .map(|r| Route::authoritative(r.matcher.prefix(), MatchKind::Prefix, r.destination.as_str()))
            .collect();

        TableSnapshot { exact, prefix, cached }
    }

    fn exact_hit(path: &str, route: &Route) -> Lookup {
        let source = if route.generated {
            LookupSource::Cached
        } else {
            LookupSource::Exact
        };
        metrics::record_lookup(source);
        tracing::debug!(path = %path, destination = %route.destination, source = source.as_str(), "Lookup resolved");
        Lookup {
            destination: route.destination.clone(),
            source,
        }
    }
}
