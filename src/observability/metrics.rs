//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define route table metrics (lookups, registrations, flushes)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `route_table_lookups_total` (counter): lookups by source (exact, cached, prefix, default)
//! - `route_table_routes_added_total` (counter): registrations by kind
//! - `route_table_flushes_total` (counter): cache flushes triggered by prefix changes
//! - `route_table_flushed_entries_total` (counter): generated entries removed by flushes
//! - `route_table_cached_entries` (gauge): generated entries tracked by the ledger
//! - `route_table_http_requests_total` (counter): API requests by endpoint, status
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op, so the engine can record unconditionally

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::{LookupSource, MatchKind};

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_lookup(source: LookupSource) {
    metrics::counter!("route_table_lookups_total", "source" => source.as_str()).increment(1);
}

pub fn record_route_added(kind: MatchKind) {
    metrics::counter!("route_table_routes_added_total", "kind" => kind.as_str()).increment(1);
}

pub fn record_flush(removed: usize) {
    metrics::counter!("route_table_flushes_total").increment(1);
    metrics::counter!("route_table_flushed_entries_total").increment(removed as u64);
}

pub fn record_cached_entries(count: usize) {
    metrics::gauge!("route_table_cached_entries").set(count as f64);
}

pub fn record_http_request(endpoint: &'static str, status: u16) {
    metrics::counter!(
        "route_table_http_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
}
