//! API handlers.
//!
//! Thin adapters: each handler calls one `RouteTable` operation and shapes
//! the result as JSON.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;

use crate::http::request::request_id;
use crate::http::response::{AddRouteRequest, ApiError, LookupResponse, RouteResponse};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::{MatchKind, TableSnapshot, TableStats};

/// Query string of `GET /lookup`.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub path: String,
}

pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Json<LookupResponse> {
    let result = state.table.lookup(&params.path);
    metrics::record_http_request("lookup", StatusCode::OK.as_u16());
    Json(LookupResponse::new(params.path, result.destination, result.source))
}

pub async fn add_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AddRouteRequest>,
) -> Result<(StatusCode, Json<RouteResponse>), ApiError> {
    let kind = match body.match_type.parse::<MatchKind>() {
        Ok(kind) => kind,
        Err(e) => {
            tracing::warn!(
                request_id = %request_id(&headers),
                path = %body.path,
                error = %e,
                "Rejected route registration"
            );
            metrics::record_http_request("add_route", StatusCode::BAD_REQUEST.as_u16());
            return Err(e.into());
        }
    };

    state.table.insert(&body.path, kind, &body.destination);
    metrics::record_http_request("add_route", StatusCode::CREATED.as_u16());

    Ok((
        StatusCode::CREATED,
        Json(RouteResponse {
            path: body.path,
            match_type: kind,
            destination: body.destination,
        }),
    ))
}

pub async fn list_routes(State(state): State<AppState>) -> Json<TableSnapshot> {
    metrics::record_http_request("list_routes", StatusCode::OK.as_u16());
    Json(state.table.snapshot())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<TableStats> {
    metrics::record_http_request("stats", StatusCode::OK.as_u16());
    Json(state.table.stats())
}

pub async fn health() -> &'static str {
    "ok"
}
