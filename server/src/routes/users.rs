//! Admin user routes (`/v1/admin/users`).

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use axum::Json;
use axum::extract::State;
use models::UpdateRoleRequest;
use serde_json::Value;

use super::extract::{ApiJson, ApiPath};
use super::success;
use crate::error::ApiError;
use crate::services::users;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Value> {
    success(users::list(&*state.store.read().await))
}

/// `PUT /v1/admin/users/{id}/role`
pub async fn set_role(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<UpdateRoleRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(users::set_role(&mut store, &id, body.role)?))
}
