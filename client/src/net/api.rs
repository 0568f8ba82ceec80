//! REST API helpers for the ACI backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable`, since
//! data is only fetched in the browser.
//!
//! DESIGN
//! ======
//! One function per endpoint. Each goes through `request`, which attaches the
//! bearer token from local storage, and then through `models::decode` or
//! `models::decode_page`, so no caller ever sees an envelope. Mutations list
//! the cache scopes they invalidate in `state::query_cache::Mutation`; the
//! caller applies that after a successful return.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `ApiError` whose `Display` text is suitable for the
//! inline error panel or a toast. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::paths::{self, ArticleFilter};
use models::{
    AdminUser, ApprovalActionResult, ApprovalHistory, ApproveRequest, Article, BulkAddBlocksRequest,
    BulkAddBlocksResponse, Channel, ChannelType, ContentItem, ContentSource, CreateChannelRequest, DisconnectRequest,
    EnvelopeError, IssueBlock, IssueStatus, NewsletterConfigInput, NewsletterConfiguration, NewsletterIssue,
    OAuthCallbackRequest, OAuthInitiateRequest, OAuthInitiateResponse, Page, RejectRequest, UpdateRoleRequest,
    UserRole, decode, decode_page,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Envelope(String),
    #[error("not available on server")]
    Unavailable,
}

impl From<EnvelopeError> for ApiError {
    fn from(err: EnvelopeError) -> Self {
        Self::Envelope(err.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(any(test, feature = "hydrate"))]
/// Error for a non-2xx response, preferring the server's own message.
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| match models::Envelope::classify(value) {
            models::Envelope::Failure { message } => Some(message),
            _ => None,
        })
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Status { status, message }
}

#[cfg(any(test, feature = "hydrate"))]
/// A body that cannot be read is a network failure, never an empty body.
pub(crate) fn body_text<E: std::fmt::Display>(read: Result<String, E>) -> Result<String, ApiError> {
    read.map_err(|e| ApiError::Network(format!("response body unreadable: {e}")))
}

#[cfg(any(test, feature = "hydrate"))]
/// Parse a 2xx body; an empty body (e.g. 204) is `null`.
pub(crate) fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Envelope(format!("invalid JSON response: {e}")))
}

async fn request(verb: Verb, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = crate::config::config().url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        let builder = match crate::util::storage::access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        };
        let sent = match body {
            Some(body) => builder.json(&body).map_err(|e| ApiError::Network(e.to_string()))?.send().await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| {
            log::warn!("{verb:?} {path} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        let text = body_text(resp.text().await).inspect_err(|e| log::warn!("{verb:?} {path}: {e}"))?;
        if !resp.ok() {
            log::warn!("{verb:?} {path} returned {status}");
            return Err(status_error(status, &text));
        }
        parse_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<Option<Value>, ApiError> {
    serde_json::to_value(value)
        .map(Some)
        .map_err(|e| ApiError::Envelope(e.to_string()))
}

// ---- channels ------------------------------------------------------------

/// `GET /api/v1/channels`.
pub async fn fetch_channels() -> Result<Vec<Channel>, ApiError> {
    Ok(decode(request(Verb::Get, "/api/v1/channels", None).await?)?)
}

pub async fn create_channel(body: &CreateChannelRequest) -> Result<Channel, ApiError> {
    Ok(decode(request(Verb::Post, "/api/v1/channels", to_body(body)?).await?)?)
}

/// `POST /api/v1/channels/oauth/initiate`; returns the state token.
pub async fn initiate_oauth(channel_type: ChannelType) -> Result<OAuthInitiateResponse, ApiError> {
    let body = to_body(&OAuthInitiateRequest { channel_type })?;
    Ok(decode(request(Verb::Post, "/api/v1/channels/oauth/initiate", body).await?)?)
}

pub async fn complete_oauth(body: &OAuthCallbackRequest) -> Result<Channel, ApiError> {
    Ok(decode(request(Verb::Post, "/api/v1/channels/oauth/callback", to_body(body)?).await?)?)
}

/// Disconnect with the fixed user-initiated reason.
pub async fn disconnect_channel(id: &str) -> Result<Channel, ApiError> {
    let body = to_body(&DisconnectRequest::user_initiated())?;
    Ok(decode(request(Verb::Post, &paths::channel_disconnect_path(id), body).await?)?)
}

// ---- articles --------------------------------------------------------------

pub async fn fetch_articles(page: u32, page_size: u32, filter: ArticleFilter) -> Result<Page<Article>, ApiError> {
    let path = paths::articles_path(page, page_size, filter);
    Ok(decode_page(request(Verb::Get, &path, None).await?)?)
}

pub async fn fetch_article(id: &str) -> Result<Article, ApiError> {
    Ok(decode(request(Verb::Get, &paths::article_path(id, ""), None).await?)?)
}

pub async fn approve_article(id: &str, body: &ApproveRequest) -> Result<ApprovalActionResult, ApiError> {
    Ok(decode(request(Verb::Post, &paths::article_path(id, "/approve"), to_body(body)?).await?)?)
}

pub async fn reject_article(id: &str, body: &RejectRequest) -> Result<ApprovalActionResult, ApiError> {
    Ok(decode(request(Verb::Post, &paths::article_path(id, "/reject"), to_body(body)?).await?)?)
}

/// `POST /v1/articles/{id}/release`: approved → released.
pub async fn release_article(id: &str) -> Result<ApprovalActionResult, ApiError> {
    Ok(decode(request(Verb::Post, &paths::article_path(id, "/release"), None).await?)?)
}

/// `POST /v1/articles/{id}/reset`: rejected → pending marketing.
pub async fn reset_article(id: &str) -> Result<ApprovalActionResult, ApiError> {
    Ok(decode(request(Verb::Post, &paths::article_path(id, "/reset"), None).await?)?)
}

pub async fn fetch_approval_history(id: &str) -> Result<ApprovalHistory, ApiError> {
    Ok(decode(request(Verb::Get, &paths::article_path(id, "/approval-history"), None).await?)?)
}

// ---- newsletter configurations ---------------------------------------------

pub async fn fetch_newsletter_configs(page: u32, page_size: u32) -> Result<Page<NewsletterConfiguration>, ApiError> {
    let path = paths::newsletter_configs_path(page, page_size);
    Ok(decode_page(request(Verb::Get, &path, None).await?)?)
}

pub async fn create_newsletter_config(body: &NewsletterConfigInput) -> Result<NewsletterConfiguration, ApiError> {
    Ok(decode(request(Verb::Post, "/v1/newsletter-configs", to_body(body)?).await?)?)
}

pub async fn update_newsletter_config(
    id: &str,
    body: &NewsletterConfigInput,
) -> Result<NewsletterConfiguration, ApiError> {
    Ok(decode(request(Verb::Put, &paths::newsletter_config_path(id), to_body(body)?).await?)?)
}

pub async fn delete_newsletter_config(id: &str) -> Result<(), ApiError> {
    request(Verb::Delete, &paths::newsletter_config_path(id), None).await.map(|_| ())
}

// ---- newsletter content ------------------------------------------------------

/// `GET /v1/newsletter/content-items` with already-rendered filter parameters.
pub async fn fetch_content_items(params: &[(&str, String)]) -> Result<Page<ContentItem>, ApiError> {
    let path = paths::content_items_path(params);
    Ok(decode_page(request(Verb::Get, &path, None).await?)?)
}

pub async fn fetch_content_sources() -> Result<Vec<ContentSource>, ApiError> {
    let page: Page<ContentSource> = decode_page(request(Verb::Get, "/v1/newsletter/content-sources", None).await?)?;
    Ok(page.items)
}

/// Draft issues available as assignment targets.
pub async fn fetch_draft_issues() -> Result<Vec<NewsletterIssue>, ApiError> {
    let path = paths::issues_path(Some(IssueStatus::Draft), None);
    let page: Page<NewsletterIssue> = decode_page(request(Verb::Get, &path, None).await?)?;
    Ok(page.items)
}

/// Content already placed in an issue.
pub async fn fetch_issue_blocks(issue_id: &str) -> Result<Vec<IssueBlock>, ApiError> {
    Ok(decode(request(Verb::Get, &paths::issue_blocks_path(issue_id), None).await?)?)
}

pub async fn add_blocks(issue_id: &str, body: &BulkAddBlocksRequest) -> Result<BulkAddBlocksResponse, ApiError> {
    Ok(decode(request(Verb::Post, &paths::issue_blocks_path(issue_id), to_body(body)?).await?)?)
}

// ---- users -------------------------------------------------------------------

pub async fn fetch_users() -> Result<Vec<AdminUser>, ApiError> {
    Ok(decode(request(Verb::Get, "/v1/admin/users", None).await?)?)
}

pub async fn update_user_role(id: &str, role: UserRole) -> Result<AdminUser, ApiError> {
    let body = to_body(&UpdateRoleRequest { role })?;
    Ok(decode(request(Verb::Put, &paths::user_role_path(id), body).await?)?)
}
