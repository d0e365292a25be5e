//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → TableConfig (validated, immutable)
//!     → routes seeded into the RouteTable at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; runtime changes go through the HTTP API
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, RouteConfig, TableConfig, TimeoutConfig};
pub use validation::ValidationError;
