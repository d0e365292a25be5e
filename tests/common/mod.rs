//! Shared fixtures for integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use route_table::http::{build_router, AppState};
use route_table::RouteTable;

/// Registrations from the worked example, in order.
pub const WORKED_EXAMPLE: &[(&str, &str, &str)] = &[
    ("/api/1", "exact", "service-1"),
    ("/api/1/1", "exact", "service-2"),
    ("/api/2/1", "prefix", "service-3"),
    ("/api/2/", "prefix", "service-4"),
    ("/api/1", "prefix", "service-5"),
    ("/api/2/1/1", "prefix", "service-6"),
];

/// A table seeded with the worked example.
#[allow(dead_code)]
pub fn seeded_table() -> RouteTable {
    let table = RouteTable::new();
    for (path, match_type, destination) in WORKED_EXAMPLE {
        table.add_route(path, match_type, destination).unwrap();
    }
    table
}

/// The API router over `table`, ready for `oneshot` calls.
#[allow(dead_code)]
pub fn test_router(table: Arc<RouteTable>) -> Router {
    build_router(AppState { table }, Duration::from_secs(5))
}
