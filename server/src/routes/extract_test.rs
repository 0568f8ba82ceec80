use axum::Router;
use axum::body::Body;
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use models::{ApprovalStatus, UpdateRoleRequest};
use serde::Deserialize;
use serde_json::Value;
use tower::ServiceExt;

use super::*;

#[derive(Debug, Deserialize)]
struct StatusQuery {
    status: ApprovalStatus,
}

async fn by_status(ApiQuery(query): ApiQuery<StatusQuery>) -> String {
    query.status.to_string()
}

async fn set_role(ApiPath(id): ApiPath<String>, ApiJson(body): ApiJson<UpdateRoleRequest>) -> String {
    format!("{id}:{}", body.role)
}

fn router() -> Router {
    Router::new().route("/by-status", get(by_status)).route("/users/{id}/role", post(set_role))
}

async fn send(method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = axum::http::Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder.body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned()))).expect("request");
    let response = router().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, bytes.to_vec())
}

fn failure(bytes: &[u8]) -> Value {
    let body: Value = serde_json::from_slice(bytes).expect("failure envelope is JSON");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "E_BAD_REQUEST");
    body
}

#[tokio::test]
async fn valid_requests_pass_through() {
    let (status, bytes) = send(Method::GET, "/by-status?status=approved", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"approved");

    let (status, bytes) = send(Method::POST, "/users/user-1/role", Some(r#"{"role":"ciso"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"user-1:ciso");
}

#[tokio::test]
async fn unknown_query_value_is_a_bad_request_envelope() {
    let (status, bytes) = send(Method::GET, "/by-status?status=archived", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body = failure(&bytes);
    assert!(body["error"]["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn body_rejections_are_bad_request_envelopes() {
    // unknown enum variant (axum answers 422 on its own)
    let (status, bytes) = send(Method::POST, "/users/user-1/role", Some(r#"{"role":"overlord"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    failure(&bytes);

    // syntax error
    let (status, bytes) = send(Method::POST, "/users/user-1/role", Some("{")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    failure(&bytes);

    // missing content type (axum answers 415 on its own)
    let (status, bytes) = send(Method::POST, "/users/user-1/role", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    failure(&bytes);
}
