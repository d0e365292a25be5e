//! Exact-match route store.
//!
//! Holds caller-registered exact routes alongside generated entries that
//! memoize prefix and default lookups. One record per path.

use std::collections::HashMap;

use crate::routing::types::{MatchKind, Route};

/// Path -> route map with O(1) expected lookup.
#[derive(Debug, Default)]
pub struct ExactStore {
    routes: HashMap<String, Route>,
}

impl ExactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record at `path`.
    ///
    /// Authoritative writes replace whatever is there, generated or not.
    pub fn put(&mut self, path: &str, destination: &str, generated: bool) {
        let route = if generated {
            Route::generated(path, destination)
        } else {
            Route::authoritative(path, MatchKind::Exact, destination)
        };
        self.routes.insert(path.to_string(), route);
    }

    pub fn get(&self, path: &str) -> Option<&Route> {
        self.routes.get(path)
    }

    pub fn remove(&mut self, path: &str) -> Option<Route> {
        self.routes.remove(path)
    }

    /// Remove the record at `path` only if it is still a generated entry.
    ///
    /// Returns true if a record was removed.
    pub fn remove_generated(&mut self, path: &str) -> bool {
        match self.routes.get(path) {
            Some(route) if route.generated => {
                self.routes.remove(path);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut store = ExactStore::new();
        assert!(store.get("/api/1").is_none());

        store.put("/api/1", "service-1", false);
        let route = store.get("/api/1").unwrap();
        assert_eq!(route.destination, "service-1");
        assert!(!route.generated);

        store.put("/api/1", "service-9", false);
        assert_eq!(store.get("/api/1").unwrap().destination, "service-9");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_authoritative_overwrites_generated() {
        let mut store = ExactStore::new();
        store.put("/api/x", "default-service", true);
        store.put("/api/x", "service-1", false);

        let route = store.get("/api/x").unwrap();
        assert_eq!(route.destination, "service-1");
        assert!(!route.generated);
    }

    #[test]
    fn test_remove_generated_skips_authoritative() {
        let mut store = ExactStore::new();
        store.put("/real", "service-1", false);
        store.put("/cached", "service-2", true);

        assert!(!store.remove_generated("/real"));
        assert!(store.remove_generated("/cached"));
        assert!(!store.remove_generated("/missing"));

        assert!(store.get("/real").is_some());
        assert!(store.get("/cached").is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = ExactStore::new();
        store.put("/real", "service-1", false);
        assert!(store.remove("/real").is_some());
        assert!(store.is_empty());
    }
}
