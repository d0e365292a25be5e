//! HTTP API exercised in-process.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use route_table::http::response::{ErrorBody, LookupResponse, RouteResponse};
use route_table::http::X_REQUEST_ID;
use route_table::{MatchKind, RouteTable};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

fn lookup_request(path: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/lookup?path={path}"))
        .body(Body::empty())
        .unwrap()
}

fn add_request(path: &str, match_type: &str, destination: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/routes")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "path": path,
                "match_type": match_type,
                "destination": destination,
            })
            .to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_lookup_worked_example() {
    let router = common::test_router(Arc::new(common::seeded_table()));

    let (status, body) = send(&router, lookup_request("/api/1/2")).await;
    assert_eq!(status, StatusCode::OK);
    let res: LookupResponse = parse(&body);
    assert_eq!(res.path, "/api/1/2");
    assert_eq!(res.destination, "service-5");
    assert_eq!(res.source, "prefix");

    let (_, body) = send(&router, lookup_request("/api/1/2")).await;
    let res: LookupResponse = parse(&body);
    assert_eq!(res.source, "cached");

    let (status, body) = send(&router, lookup_request("/api/3")).await;
    assert_eq!(status, StatusCode::OK);
    let res: LookupResponse = parse(&body);
    assert_eq!(res.destination, "default-service");
}

#[tokio::test]
async fn test_add_route_then_lookup() {
    let table = Arc::new(RouteTable::new());
    let router = common::test_router(table.clone());

    let (status, body) = send(&router, add_request("/api/", "prefix", "svc")).await;
    assert_eq!(status, StatusCode::CREATED);
    let res: RouteResponse = parse(&body);
    assert_eq!(res.match_type, MatchKind::Prefix);
    assert_eq!(res.destination, "svc");

    assert_eq!(table.lookup("/api/users").destination, "svc");

    let (_, body) = send(&router, add_request("/api/", "prefix", "svc-2")).await;
    let res: RouteResponse = parse(&body);
    assert_eq!(res.destination, "svc-2");
    assert_eq!(table.lookup("/api/users").destination, "svc-2");
}

#[tokio::test]
async fn test_add_route_invalid_match_type() {
    let table = Arc::new(RouteTable::new());
    let router = common::test_router(table.clone());

    let (status, body) = send(&router, add_request("/api", "fuzzy", "svc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: ErrorBody = parse(&body);
    assert!(err.error.contains("fuzzy"));
    assert_eq!(table.stats().prefix_routes, 0);
    assert_eq!(table.stats().exact_routes, 0);
}

#[tokio::test]
async fn test_routes_and_stats() {
    let table = Arc::new(common::seeded_table());
    table.lookup("/api/3");
    let router = common::test_router(table);

    let (status, body) = send(
        &router,
        Request::builder().uri("/routes").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let snapshot: Value = parse(&body);
    assert_eq!(snapshot["exact"].as_array().unwrap().len(), 2);
    assert_eq!(snapshot["prefix"][0]["path"], "/api/2/1/1");
    assert_eq!(snapshot["cached"][0]["path"], "/api/3");
    assert_eq!(snapshot["cached"][0]["generated"], true);

    let (status, body) = send(
        &router,
        Request::builder().uri("/stats").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stats: Value = parse(&body);
    assert_eq!(stats["exact_routes"], 2);
    assert_eq!(stats["prefix_routes"], 4);
    assert_eq!(stats["cached_entries"], 1);
}

#[tokio::test]
async fn test_request_id_echoed() {
    let router = common::test_router(Arc::new(RouteTable::new()));

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(X_REQUEST_ID, "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[X_REQUEST_ID], "req-42");

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key(X_REQUEST_ID));
}
