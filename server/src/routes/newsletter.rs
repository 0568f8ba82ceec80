//! Newsletter routes: configurations (`/v1/newsletter-configs`) and the
//! content/issue endpoints under `/v1/newsletter`.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use models::{BulkAddBlocksRequest, IssueStatus, NewsletterConfigInput};
use serde::Deserialize;
use serde_json::Value;

use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::{PageParams, paged, success, with_meta};
use crate::error::ApiError;
use crate::services::newsletter::{self, ContentFilter};
use crate::services;
use crate::state::AppState;

// =============================================================================
// CONFIGURATIONS
// =============================================================================

pub async fn list_configs(State(state): State<AppState>, ApiQuery(paging): ApiQuery<PageParams>) -> Json<Value> {
    let all = newsletter::list_configs(&*state.store.read().await);
    let (items, info) = paging.clamp(&state).apply(&all);
    paged(items, &info)
}

pub async fn get_config(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Result<Json<Value>, ApiError> {
    Ok(success(newsletter::get_config(&*state.store.read().await, &id)?))
}

pub async fn create_config(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewsletterConfigInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut store = state.store.write().await;
    let config = newsletter::create_config(&mut store, &body, services::new_id("config"), &services::now())?;
    Ok((StatusCode::CREATED, success(config)))
}

pub async fn update_config(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<NewsletterConfigInput>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(newsletter::update_config(&mut store, &id, &body, &services::now())?))
}

pub async fn delete_config(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Result<StatusCode, ApiError> {
    newsletter::delete_config(&mut *state.store.write().await, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// CONTENT AND ISSUES
// =============================================================================

/// `GET /v1/newsletter/content-items`, enveloped with `meta`.
pub async fn list_content(
    State(state): State<AppState>,
    ApiQuery(paging): ApiQuery<PageParams>,
    ApiQuery(filter): ApiQuery<ContentFilter>,
) -> Json<Value> {
    let all = newsletter::list_content(&*state.store.read().await, &filter);
    let (items, info) = paging.clamp(&state).apply(&all);
    with_meta(items, &info)
}

/// `GET /v1/newsletter/content-sources`, a bare array.
pub async fn list_sources(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::to_value(newsletter::list_sources(&*state.store.read().await)).unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
pub struct IssueFilter {
    pub status: Option<IssueStatus>,
}

pub async fn list_issues(
    State(state): State<AppState>,
    ApiQuery(paging): ApiQuery<PageParams>,
    ApiQuery(filter): ApiQuery<IssueFilter>,
) -> Json<Value> {
    let all = newsletter::list_issues(&*state.store.read().await, filter.status);
    let (items, info) = paging.clamp(&state).apply(&all);
    paged(items, &info)
}

/// `GET /v1/newsletter/issues/{id}/blocks`
pub async fn list_blocks(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> Result<Json<Value>, ApiError> {
    Ok(success(newsletter::list_blocks(&*state.store.read().await, &id)?))
}

/// `POST /v1/newsletter/issues/{id}/blocks`
pub async fn add_blocks(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<BulkAddBlocksRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    Ok(success(newsletter::add_blocks(&mut store, &id, &body)?))
}
