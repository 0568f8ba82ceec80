//! Channel routes (`/api/v1/channels`).

#[cfg(test)]
#[path = "channels_test.rs"]
mod channels_test;

use axum::Json;
use axum::extract::State;
use models::{CreateChannelRequest, DisconnectRequest, OAuthCallbackRequest, OAuthInitiateRequest};
use serde_json::Value;

use super::extract::{ApiJson, ApiPath};
use super::success;
use crate::error::ApiError;
use crate::services::{self, channels};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Value> {
    success(channels::list(&*state.store.read().await))
}

/// `POST /api/v1/channels`: add an email channel by address.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateChannelRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(channels::create(&mut store, &body, services::new_id("channel"))?))
}

/// `POST /api/v1/channels/oauth/initiate`
pub async fn initiate(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<OAuthInitiateRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(channels::initiate(&mut store, body.channel_type, services::generate_token())?))
}

/// `POST /api/v1/channels/oauth/callback`
pub async fn callback(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<OAuthCallbackRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(channels::complete(&mut store, &body, services::new_id("channel"))?))
}

/// `POST /api/v1/channels/{id}/disconnect`
pub async fn disconnect(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<DisconnectRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(channels::disconnect(&mut store, &id, &body)?))
}
