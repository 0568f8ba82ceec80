//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router carries the stub REST API, the Leptos SSR shell, and the
//! `/pkg` bundle. API paths mirror the production backend exactly, including
//! its mix of `/api/v1` (channels) and `/v1` (everything else) prefixes and
//! its three list envelope shapes, so the client's envelope boundary is
//! exercised against all of them.

pub mod actor;
pub mod articles;
pub mod channels;
pub mod extract;
pub mod newsletter;
pub mod users;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use models::PageInfo;
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Stub REST API plus `/healthz`.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/channels", get(channels::list).post(channels::create))
        .route("/api/v1/channels/oauth/initiate", post(channels::initiate))
        .route("/api/v1/channels/oauth/callback", post(channels::callback))
        .route("/api/v1/channels/{id}/disconnect", post(channels::disconnect))
        .route("/v1/articles", get(articles::list))
        .route("/v1/articles/{id}", get(articles::get))
        .route("/v1/articles/{id}/approve", post(articles::approve))
        .route("/v1/articles/{id}/reject", post(articles::reject))
        .route("/v1/articles/{id}/release", post(articles::release))
        .route("/v1/articles/{id}/reset", post(articles::reset))
        .route("/v1/articles/{id}/approval-history", get(articles::history))
        .route(
            "/v1/newsletter-configs",
            get(newsletter::list_configs).post(newsletter::create_config),
        )
        .route(
            "/v1/newsletter-configs/{id}",
            get(newsletter::get_config)
                .put(newsletter::update_config)
                .delete(newsletter::delete_config),
        )
        .route("/v1/newsletter/content-items", get(newsletter::list_content))
        .route("/v1/newsletter/content-sources", get(newsletter::list_sources))
        .route("/v1/newsletter/issues", get(newsletter::list_issues))
        .route(
            "/v1/newsletter/issues/{id}/blocks",
            get(newsletter::list_blocks).post(newsletter::add_blocks),
        )
        .route("/v1/admin/users", get(users::list))
        .route("/v1/admin/users/{id}/role", put(users::set_role))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR pages + the `/pkg` bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// ENVELOPES
// =============================================================================

/// `{"success": true, "data": ...}`
pub(crate) fn success<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

/// `{"data": [...], "pagination": {...}}` with snake_case page fields.
pub(crate) fn paged<T: Serialize>(items: Vec<T>, info: &PageInfo) -> Json<Value> {
    Json(json!({ "data": items, "pagination": info }))
}

/// `{"data": [...], "pagination": {...}}` with the camelCase page fields the
/// articles endpoint uses.
pub(crate) fn paged_camel<T: Serialize>(items: Vec<T>, info: &PageInfo) -> Json<Value> {
    Json(json!({
        "data": items,
        "pagination": {
            "page": info.page,
            "pageSize": info.page_size,
            "totalPages": info.total_pages,
            "totalItems": info.total,
            "hasNextPage": info.has_next(),
            "hasPreviousPage": info.has_previous(),
        },
    }))
}

/// `{"data": [...], "meta": {...}}`
pub(crate) fn with_meta<T: Serialize>(items: Vec<T>, info: &PageInfo) -> Json<Value> {
    Json(json!({ "data": items, "meta": info }))
}

/// `page` plus `page_size` (or the camelCase `pageSize`).
#[derive(Clone, Copy, Debug, Default, serde::Deserialize)]
pub(crate) struct PageParams {
    pub page: Option<u32>,
    #[serde(alias = "pageSize")]
    pub page_size: Option<u32>,
}

impl PageParams {
    pub(crate) fn clamp(self, state: &AppState) -> crate::services::PageRequest {
        crate::services::PageRequest::new(self.page, self.page_size, state.config.page_size_max)
    }
}

#[cfg(test)]
pub(crate) mod test_client {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    use super::*;

    /// Send one request through a fresh API router over `state`.
    pub async fn call(state: &AppState, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        call_as(state, method, uri, body, None).await
    }

    /// Like `call`, with `Authorization: Bearer {token}`.
    pub async fn call_as(
        state: &AppState,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");
        let response = api_routes(state.clone()).oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).expect("json body") };
        (status, value)
    }
}
