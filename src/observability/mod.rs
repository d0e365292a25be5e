//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing engine + HTTP API produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging for machine parsing
//! - Request ID attached to every API request span
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
