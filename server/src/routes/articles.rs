//! Article review routes (`/v1/articles`).

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use axum::Json;
use axum::extract::State;
use models::{ApprovalStatus, ApproveRequest, RejectRequest};
use serde::Deserialize;
use serde_json::Value;

use super::actor::Actor;
use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::{PageParams, paged_camel, success};
use crate::error::ApiError;
use crate::services::{self, articles};
use crate::state::AppState;

/// `status` narrows to one status; `pending=true` keeps only articles
/// waiting on a gate. Both may be given.
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilter {
    pub status: Option<ApprovalStatus>,
    #[serde(default)]
    pub pending: bool,
}

/// `GET /v1/articles?page&pageSize&status&pending`
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(paging): ApiQuery<PageParams>,
    ApiQuery(filter): ApiQuery<StatusFilter>,
) -> Json<Value> {
    let all = articles::list(&*state.store.read().await, filter.status, filter.pending);
    let (items, info) = paging.clamp(&state).apply(&all);
    paged_camel(items, &info)
}

pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Result<Json<Value>, ApiError> {
    Ok(success(articles::get(&*state.store.read().await, &id)?))
}

/// `POST /v1/articles/{id}/approve`
pub async fn approve(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<ApproveRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(articles::approve(&mut store, &id, &body, &actor, &services::now())?))
}

/// `POST /v1/articles/{id}/reject`
pub async fn reject(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<RejectRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(articles::reject(&mut store, &id, &body, &actor, &services::now())?))
}

/// `POST /v1/articles/{id}/release`
pub async fn release(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(articles::release(&mut store, &id, &actor, &services::now())?))
}

/// `POST /v1/articles/{id}/reset`
pub async fn reset(
    State(state): State<AppState>,
    Actor(actor): Actor,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(articles::reset(&mut store, &id, &actor)?))
}

/// `GET /v1/articles/{id}/approval-history`
pub async fn history(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Result<Json<Value>, ApiError> {
    Ok(success(articles::history(&*state.store.read().await, &id)?))
}
