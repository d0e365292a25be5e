//! Path Routing Table Library
//!
//! Resolves a path to a destination service. Exact routes outrank prefix
//! routes, the longest prefix wins, and unmatched paths resolve to
//! `"default-service"`. Prefix and default results are cached as exact
//! entries until the prefix routes change.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::TableConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Lookup, LookupSource, MatchKind, RouteError, RouteTable, DEFAULT_SERVICE};
