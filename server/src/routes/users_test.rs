use axum::http::{Method, StatusCode};
use models::{AdminUser, UserRole, decode};
use serde_json::json;

use crate::routes::test_client::call;
use crate::state::test_helpers;

#[tokio::test]
async fn list_returns_every_user() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, Method::GET, "/v1/admin/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let users: Vec<AdminUser> = decode(body).expect("users");
    assert_eq!(users.len(), 8);
}

#[tokio::test]
async fn set_role_persists() {
    let state = test_helpers::test_app_state();
    let (status, body) =
        call(&state, Method::PUT, "/v1/admin/users/user-viewer/role", Some(json!({ "role": "soc_level_3" }))).await;
    assert_eq!(status, StatusCode::OK);
    let user: AdminUser = decode(body).expect("user");
    assert_eq!(user.role, UserRole::SocLevel3);

    let (_, body) = call(&state, Method::GET, "/v1/admin/users", None).await;
    let users: Vec<AdminUser> = decode(body).expect("users");
    assert_eq!(users.iter().find(|u| u.id == "user-viewer").map(|u| u.role), Some(UserRole::SocLevel3));
}

#[tokio::test]
async fn unknown_role_or_user_is_rejected() {
    let state = test_helpers::test_app_state();
    let (status, body) =
        call(&state, Method::PUT, "/v1/admin/users/user-viewer/role", Some(json!({ "role": "overlord" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "E_BAD_REQUEST");

    let (status, _) = call(&state, Method::PUT, "/v1/admin/users/ghost/role", Some(json!({ "role": "admin" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
