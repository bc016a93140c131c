//! End-to-end mounting tests: controllers in, routed envelopes out.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use restmount::{
    compose_key, handler, AppBuilder, Controller, Envelope, HandlerFuture, RouteMap,
};

mod common;

struct UserController;

impl Controller for UserController {
    fn get(&self, _req: Request) -> HandlerFuture {
        Box::pin(async { Envelope::success("list users").into_response() })
    }

    fn post(&self, _req: Request) -> HandlerFuture {
        Box::pin(async { Envelope::success("created").into_response() })
    }

    fn mapping(&self) -> RouteMap {
        let mut map = RouteMap::new();
        map.insert(
            compose_key("GET", "customTest"),
            handler(|_req| async { Envelope::success("custom route").into_response() }),
        );
        map.insert(
            compose_key("POST", "Bulk"),
            handler(|_req| async { Envelope::success("bulk").into_response() }),
        );
        map
    }
}

struct AuditController;
impl Controller for AuditController {}

fn app() -> axum::Router {
    AppBuilder::new()
        .group(
            "test",
            vec![Arc::new(UserController) as Arc<dyn Controller>],
        )
        .group(
            "/admin",
            vec![Arc::new(AuditController) as Arc<dyn Controller>],
        )
        .build()
}

#[tokio::test]
async fn test_group_without_leading_separator_is_normalized() {
    let (status, json) = common::dispatch_json(app(), Method::GET, "/test/user").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 200);
    assert_eq!(json["data"], "list users");
}

#[tokio::test]
async fn test_overridden_verbs_and_defaults_coexist() {
    let (status, json) = common::dispatch_json(app(), Method::POST, "/test/user").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], "created");

    // DELETE was not overridden: base behavior answers 404.
    let (status, _) = common::dispatch(app(), Method::DELETE, "/test/user").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_custom_routes_mount_lowercased_under_controller() {
    let (status, json) = common::dispatch_json(app(), Method::GET, "/test/user/customtest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], "custom route");

    let (status, json) = common::dispatch_json(app(), Method::POST, "/test/user/bulk").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], "bulk");

    // The original casing is not served.
    let (status, _) = common::dispatch(app(), Method::GET, "/test/user/customTest").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_second_group_is_independent() {
    let (status, _) = common::dispatch(app(), Method::GET, "/admin/audit").await;
    assert_eq!(status, StatusCode::NOT_FOUND); // default verb answers

    let (status, _) = common::dispatch(app(), Method::GET, "/admin/user").await;
    assert_eq!(status, StatusCode::NOT_FOUND); // user lives under /test only
}

#[tokio::test]
async fn test_envelope_shape_on_the_wire() {
    let (_, json) = common::dispatch_json(app(), Method::GET, "/test/user").await;
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert!(object.contains_key("code"));
    assert!(object.contains_key("msg"));
    assert!(object.contains_key("data"));
}
