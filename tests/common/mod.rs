//! Shared utilities for integration testing.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Dispatch one request against a built router, in process.
pub async fn dispatch(router: Router, method: Method, path: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// Dispatch and parse the body as a JSON envelope.
#[allow(dead_code)]
pub async fn dispatch_json(
    router: Router,
    method: Method,
    path: &str,
) -> (StatusCode, serde_json::Value) {
    let (status, body) = dispatch(router, method, path).await;
    let json = serde_json::from_slice(&body).expect("body is not JSON");
    (status, json)
}
