//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, timeouts and log levels
//! - Reject routes with an unrecognized match type
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TableConfig → Result<(), Vec<ValidationError>>
//! - Route paths and destinations are taken as-is

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::TableConfig;
use crate::routing::MatchKind;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} '{value}': not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("route #{index} ({path}): invalid match type '{match_type}'")]
    InvalidMatchType {
        index: usize,
        path: String,
        match_type: String,
    },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &TableConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.match_type.parse::<MatchKind>().is_err() {
            errors.push(ValidationError::InvalidMatchType {
                index,
                path: route.path.clone(),
                match_type: route.match_type.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TableConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = TableConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();
        config.routes.push(RouteConfig {
            path: "/api".into(),
            match_type: "glob".into(),
            destination: "svc".into(),
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::InvalidMatchType {
            index: 0,
            path: "/api".into(),
            match_type: "glob".into(),
        }));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = TableConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(validate_config(&config).unwrap_err().len(), 1);
    }
}
