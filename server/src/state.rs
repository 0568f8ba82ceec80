//! Shared server state.
//!
//! DESIGN
//! ======
//! The stub backend keeps every entity in one `Store` behind an async
//! `RwLock`. Handlers hold the lock for exactly one read or one write, so a
//! request never observes a half-applied mutation. Collections are `Vec`s to
//! keep list endpoints in a stable, fixture-defined order.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use models::{
    AdminUser, ApprovalHistoryEntry, Article, Channel, ChannelType, ContentItem, ContentSource, IssueBlock,
    NewsletterConfiguration, NewsletterIssue, RejectionDetails,
};
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// An article plus the audit trail the history endpoint reports.
#[derive(Clone, Debug)]
pub struct StoredArticle {
    pub article: Article,
    pub approvals: Vec<ApprovalHistoryEntry>,
    pub rejection: Option<RejectionDetails>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub articles: Vec<StoredArticle>,
    pub channels: Vec<Channel>,
    /// Outstanding OAuth state tokens, consumed by the callback.
    pub oauth_states: HashMap<String, ChannelType>,
    pub configs: Vec<NewsletterConfiguration>,
    pub issues: Vec<NewsletterIssue>,
    /// Blocks per issue id.
    pub blocks: HashMap<String, Vec<IssueBlock>>,
    pub content_items: Vec<ContentItem>,
    pub content_sources: Vec<ContentSource>,
    pub users: Vec<AdminUser>,
}

impl Store {
    pub fn article_mut(&mut self, id: &str) -> Option<&mut StoredArticle> {
        self.articles.iter_mut().find(|a| a.article.id == id)
    }

    pub fn article(&self, id: &str) -> Option<&StoredArticle> {
        self.articles.iter().find(|a| a.article.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&AdminUser> {
        self.users.iter().find(|u| u.id == id)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub config: ServerConfig,
}

impl AppState {
    #[must_use]
    pub fn new(store: Store, config: ServerConfig) -> Self {
        Self { store: Arc::new(RwLock::new(store)), config }
    }

    /// State for `config`, seeded with demo data when enabled.
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let store = if config.seed_fixtures { crate::fixtures::seed() } else { Store::default() };
        Self::new(store, config)
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// State over the standard fixtures and default configuration.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(crate::fixtures::seed(), ServerConfig::default())
    }

    /// State over an empty store.
    #[must_use]
    pub fn empty_app_state() -> AppState {
        AppState::new(Store::default(), ServerConfig::default())
    }

    /// Id of the first fixture article in `status`.
    pub async fn article_in(state: &AppState, status: models::ApprovalStatus) -> String {
        let store = state.store.read().await;
        store
            .articles
            .iter()
            .find(|a| a.article.approval_status == status)
            .map(|a| a.article.id.clone())
            .expect("fixture article with status")
    }
}
