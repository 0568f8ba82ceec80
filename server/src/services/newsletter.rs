//! Newsletter configurations, the content pool, and block assignment.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use std::collections::HashSet;

use models::{
    BulkAddBlocksRequest, BulkAddBlocksResponse, ContentItem, ContentSource, ContentType, IssueBlock, IssueStatus,
    NewsletterConfigInput, NewsletterConfiguration, NewsletterIssue,
};
use serde::Deserialize;

use crate::error::{ApiError, check};
use crate::state::Store;

// =============================================================================
// CONFIGURATIONS
// =============================================================================

#[must_use]
pub fn list_configs(store: &Store) -> Vec<NewsletterConfiguration> {
    store.configs.clone()
}

pub fn get_config(store: &Store, id: &str) -> Result<NewsletterConfiguration, ApiError> {
    store
        .configs
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("newsletter configuration", id))
}

/// # Errors
///
/// `Validation` with every failing field.
pub fn create_config(
    store: &mut Store,
    input: &NewsletterConfigInput,
    id: String,
    at: &str,
) -> Result<NewsletterConfiguration, ApiError> {
    check(input.validate())?;
    let mut config = NewsletterConfiguration {
        id,
        name: String::new(),
        description: None,
        segment_id: None,
        cadence: input.cadence,
        send_day_of_week: None,
        timezone: String::new(),
        max_blocks: 0,
        content_freshness_days: 0,
        is_active: true,
        created_at: at.to_owned(),
        updated_at: at.to_owned(),
    };
    apply_input(&mut config, input);
    store.configs.push(config.clone());
    tracing::info!(config_id = %config.id, "newsletter configuration created");
    Ok(config)
}

/// # Errors
///
/// `Validation` before `NotFound`, so a bad body never reveals whether the id exists.
pub fn update_config(
    store: &mut Store,
    id: &str,
    input: &NewsletterConfigInput,
    at: &str,
) -> Result<NewsletterConfiguration, ApiError> {
    check(input.validate())?;
    let config = store
        .configs
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| ApiError::not_found("newsletter configuration", id))?;
    apply_input(config, input);
    config.updated_at = at.to_owned();
    tracing::info!(config_id = %id, "newsletter configuration updated");
    Ok(config.clone())
}

pub fn delete_config(store: &mut Store, id: &str) -> Result<(), ApiError> {
    let before = store.configs.len();
    store.configs.retain(|c| c.id != id);
    if store.configs.len() == before {
        return Err(ApiError::not_found("newsletter configuration", id));
    }
    tracing::info!(config_id = %id, "newsletter configuration deleted");
    Ok(())
}

fn apply_input(config: &mut NewsletterConfiguration, input: &NewsletterConfigInput) {
    config.name = input.name.trim().to_owned();
    config.description = input.description.clone().filter(|d| !d.trim().is_empty());
    config.segment_id = input.segment_id.clone().filter(|s| !s.trim().is_empty());
    config.cadence = input.cadence;
    config.send_day_of_week = input.send_day_of_week;
    config.timezone = input.timezone.trim().to_owned();
    config.max_blocks = input.max_blocks;
    config.content_freshness_days = input.content_freshness_days;
    config.is_active = input.is_active;
}

// =============================================================================
// CONTENT POOL
// =============================================================================

/// Filters accepted by `GET /v1/newsletter/content-items`.
///
/// Dates compare against the `YYYY-MM-DD` prefix of `publish_date`, both
/// bounds inclusive. Retired items never match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContentFilter {
    pub search: Option<String>,
    pub content_type: Option<ContentType>,
    pub topic_tag: Option<String>,
    pub framework_tag: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl ContentFilter {
    #[must_use]
    pub fn matches(&self, item: &ContentItem) -> bool {
        if !item.is_active {
            return false;
        }
        if let Some(search) = non_blank(self.search.as_deref()) {
            let needle = search.to_lowercase();
            let in_summary = item.summary.as_deref().is_some_and(|s| s.to_lowercase().contains(&needle));
            if !item.title.to_lowercase().contains(&needle) && !in_summary {
                return false;
            }
        }
        if self.content_type.is_some_and(|ty| ty != item.content_type) {
            return false;
        }
        if let Some(tag) = non_blank(self.topic_tag.as_deref()) {
            if !has_tag(&item.topic_tags, tag) {
                return false;
            }
        }
        if let Some(tag) = non_blank(self.framework_tag.as_deref()) {
            if !has_tag(&item.framework_tags, tag) {
                return false;
            }
        }
        let day = item.publish_date.get(..10).unwrap_or(&item.publish_date);
        if non_blank(self.date_from.as_deref()).is_some_and(|from| day < from) {
            return false;
        }
        if non_blank(self.date_to.as_deref()).is_some_and(|to| day > to) {
            return false;
        }
        true
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn has_tag(tags: &[String], wanted: &str) -> bool {
    tags.iter().any(|t| t.eq_ignore_ascii_case(wanted))
}

#[must_use]
pub fn list_content(store: &Store, filter: &ContentFilter) -> Vec<ContentItem> {
    store.content_items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

#[must_use]
pub fn list_sources(store: &Store) -> Vec<ContentSource> {
    store.content_sources.clone()
}

// =============================================================================
// ISSUES
// =============================================================================

#[must_use]
pub fn list_issues(store: &Store, status: Option<IssueStatus>) -> Vec<NewsletterIssue> {
    store
        .issues
        .iter()
        .filter(|issue| status.is_none_or(|s| issue.status == s))
        .cloned()
        .collect()
}

/// Blocks already placed in an issue, in placement order.
pub fn list_blocks(store: &Store, issue_id: &str) -> Result<Vec<IssueBlock>, ApiError> {
    if !store.issues.iter().any(|i| i.id == issue_id) {
        return Err(ApiError::not_found("newsletter issue", issue_id));
    }
    Ok(store.blocks.get(issue_id).cloned().unwrap_or_default())
}

/// Place content items in a draft issue.
///
/// Ids that are unknown, retired, repeated in the request, or already in the
/// issue are skipped and reported rather than failing the request, unless
/// every requested id is already in the issue.
///
/// # Errors
///
/// `Validation` for an empty or oversized id list, `NotFound` for an unknown
/// issue, `Conflict` when the issue is no longer a draft or already holds
/// every requested item.
pub fn add_blocks(
    store: &mut Store,
    issue_id: &str,
    request: &BulkAddBlocksRequest,
) -> Result<BulkAddBlocksResponse, ApiError> {
    check(request.validate())?;
    let Store { issues, blocks, content_items, .. } = store;
    let issue = issues
        .iter_mut()
        .find(|i| i.id == issue_id)
        .ok_or_else(|| ApiError::not_found("newsletter issue", issue_id))?;
    if issue.status != IssueStatus::Draft {
        return Err(ApiError::Conflict(format!("Issue is {}, not a draft", issue.status.label().to_lowercase())));
    }

    let placed = blocks.entry(issue_id.to_owned()).or_default();
    let mut seen: HashSet<String> = placed.iter().map(|b| b.content_item_id.clone()).collect();
    if request.content_item_ids.iter().all(|id| seen.contains(id)) {
        return Err(ApiError::Conflict("All content items already exist in this newsletter issue".to_owned()));
    }
    let mut response = BulkAddBlocksResponse::default();
    for id in &request.content_item_ids {
        let usable = content_items.iter().any(|item| &item.id == id && item.is_active);
        if usable && seen.insert(id.clone()) {
            placed.push(IssueBlock { content_item_id: id.clone(), block_type: request.block_type });
            response.created_count += 1;
        } else {
            response.skipped_count += 1;
            response.skipped_ids.push(id.clone());
        }
    }
    issue.block_count = u32::try_from(placed.len()).unwrap_or(u32::MAX);
    tracing::info!(
        issue_id = %issue_id,
        block_type = %request.block_type,
        created = response.created_count,
        skipped = response.skipped_count,
        "blocks added"
    );
    Ok(response)
}
