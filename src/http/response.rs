//! API response bodies and error mapping.
//!
//! # Responsibilities
//! - Shape JSON bodies returned by the API
//! - Map routing errors to HTTP status codes
//!
//! # Design Decisions
//! - An unmatched lookup is a 200 carrying "default-service", never an error
//! - Registration errors are client errors (400)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::routing::{LookupSource, MatchKind, RouteError};

/// Body of `GET /lookup`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResponse {
    pub path: String,
    pub destination: String,
    pub source: String,
}

impl LookupResponse {
    pub fn new(path: String, destination: String, source: LookupSource) -> Self {
        Self {
            path,
            destination,
            source: source.as_str().to_string(),
        }
    }
}

/// Body of `POST /routes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRouteRequest {
    pub path: String,
    pub match_type: String,
    pub destination: String,
}

/// Echo of an accepted registration.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    pub path: String,
    pub match_type: MatchKind,
    pub destination: String,
}

/// JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned from API handlers.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        let status = match err {
            RouteError::InvalidMatchType(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_error_maps_to_bad_request() {
        let err = ApiError::from(RouteError::InvalidMatchType("glob".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("glob"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
