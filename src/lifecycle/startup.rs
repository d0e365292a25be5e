//! Startup: build the route table from configuration.

use crate::config::RouteConfig;
use crate::routing::{RouteResult, RouteTable};

/// Register configured routes in order. Stops at the first invalid match type.
pub fn seed_routes(table: &RouteTable, routes: &[RouteConfig]) -> RouteResult<usize> {
    for route in routes {
        table.add_route(&route.path, &route.match_type, &route.destination)?;
    }
    tracing::info!(count = routes.len(), "Routes seeded from configuration");
    Ok(routes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteError;

    fn route(path: &str, match_type: &str, destination: &str) -> RouteConfig {
        RouteConfig {
            path: path.into(),
            match_type: match_type.into(),
            destination: destination.into(),
        }
    }

    #[test]
    fn test_seed_routes() {
        let table = RouteTable::new();
        let routes = vec![
            route("/api/1", "exact", "service-1"),
            route("/api/", "prefix", "service-2"),
        ];

        assert_eq!(seed_routes(&table, &routes).unwrap(), 2);
        assert_eq!(table.lookup("/api/1").destination, "service-1");
        assert_eq!(table.lookup("/api/9").destination, "service-2");
    }

    #[test]
    fn test_seed_routes_rejects_bad_match_type() {
        let table = RouteTable::new();
        let routes = vec![route("/api", "wildcard", "svc")];

        let err = seed_routes(&table, &routes).unwrap_err();
        assert_eq!(err, RouteError::InvalidMatchType("wildcard".into()));
    }
}
