//! Request paths for the REST endpoints, shared by the client and the CLI.
//!
//! Ids are percent-encoded as a single path segment. Page-size parameter
//! names differ by endpoint (`pageSize` for articles, `page_size` elsewhere)
//! and are kept exactly as the backend expects them.

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;

use crate::{ApprovalStatus, IssueStatus};

/// Which articles a list request asks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArticleFilter {
    #[default]
    All,
    /// Articles waiting on any gate; the review queue.
    Pending,
    Status(ApprovalStatus),
}

/// Render `name=value` pairs as a query string suffix (with leading `?`).
#[must_use]
pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_owned();
    }
    let query = params
        .iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

#[must_use]
pub fn articles_path(page: u32, page_size: u32, filter: ArticleFilter) -> String {
    let mut params = vec![("page", page.to_string()), ("pageSize", page_size.to_string())];
    match filter {
        ArticleFilter::All => {}
        ArticleFilter::Pending => params.push(("pending", "true".to_owned())),
        ArticleFilter::Status(status) => params.push(("status", status.as_str().to_owned())),
    }
    with_query("/v1/articles", &params)
}

/// `/v1/articles/{id}` followed by `suffix` (e.g. `"/approve"`).
#[must_use]
pub fn article_path(id: &str, suffix: &str) -> String {
    format!("/v1/articles/{}{suffix}", urlencoding::encode(id))
}

#[must_use]
pub fn newsletter_configs_path(page: u32, page_size: u32) -> String {
    with_query("/v1/newsletter-configs", &[("page", page.to_string()), ("page_size", page_size.to_string())])
}

#[must_use]
pub fn newsletter_config_path(id: &str) -> String {
    format!("/v1/newsletter-configs/{}", urlencoding::encode(id))
}

#[must_use]
pub fn content_items_path(params: &[(&str, String)]) -> String {
    with_query("/v1/newsletter/content-items", params)
}

#[must_use]
pub fn issues_path(status: Option<IssueStatus>, page: Option<(u32, u32)>) -> String {
    let mut params = Vec::new();
    if let Some(status) = status {
        params.push(("status", status.as_str().to_owned()));
    }
    if let Some((page, page_size)) = page {
        params.push(("page", page.to_string()));
        params.push(("page_size", page_size.to_string()));
    }
    with_query("/v1/newsletter/issues", &params)
}

#[must_use]
pub fn issue_blocks_path(issue_id: &str) -> String {
    format!("/v1/newsletter/issues/{}/blocks", urlencoding::encode(issue_id))
}

#[must_use]
pub fn channel_disconnect_path(id: &str) -> String {
    format!("/api/v1/channels/{}/disconnect", urlencoding::encode(id))
}

#[must_use]
pub fn user_role_path(id: &str) -> String {
    format!("/v1/admin/users/{}/role", urlencoding::encode(id))
}
