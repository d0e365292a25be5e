//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (add_route):
//!     exact  → exact.rs (put, overwrites any record at the path)
//!     prefix → prefix.rs (upsert, kept longest-first)
//!            → flush: ledger.rs paths → drop generated entries from exact.rs
//!
//! Lookup (lookup):
//!     exact.rs hit (authoritative or cached) → destination
//!     miss → prefix.rs scan (matcher.rs) → destination or "default-service"
//!          → cache result in exact.rs as generated entry, record in ledger.rs
//! ```
//!
//! # Design Decisions
//! - Exact routes always outrank prefix routes
//! - Longest prefix wins; equal lengths resolve to the first registered
//! - Generated entries are tagged and never overwrite authoritative ones
//! - Paths are matched as-is: case-sensitive, trailing `/` significant
//! - No route deletion

pub mod error;
pub mod exact;
pub mod ledger;
pub mod matcher;
pub mod prefix;
pub mod table;
pub mod types;

pub use error::{RouteError, RouteResult};
pub use table::{RouteTable, TableSnapshot, TableStats};
pub use types::{Lookup, LookupSource, MatchKind, Route, DEFAULT_SERVICE};
