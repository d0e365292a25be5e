//! Routing error definitions.

use thiserror::Error;

/// Errors returned by route registration.
///
/// Lookups never fail: an unmatched path resolves to the default service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Match type was neither `exact` nor `prefix`.
    #[error("invalid match type '{0}': expected 'exact' or 'prefix'")]
    InvalidMatchType(String),
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouteError::InvalidMatchType("glob".into());
        assert_eq!(
            err.to_string(),
            "invalid match type 'glob': expected 'exact' or 'prefix'"
        );
    }
}
