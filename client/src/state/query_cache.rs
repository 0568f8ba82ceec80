//! Keyed cache of confirmed server responses.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages fetch through `LocalResource`s whose fetchers read the generation of
//! one `QueryScope`. A mutation that succeeds calls `QueryCache::apply`, which
//! marks the scope's entries stale and bumps its generation; every resource
//! keyed on that scope re-runs. When the component that registered a scope
//! unmounts, the scope's entries are expired, so the next mount fetches again
//! instead of serving what it saw last time. The cache is provided through
//! Leptos context as an `RwSignal<QueryCache>`, never as a global.
//!
//! DESIGN
//! ======
//! Entries are stored as `serde_json::Value` so one map can hold every
//! response type; `get` decodes on read. Only confirmed server responses are
//! written. There is no optimistic update path. Content queries are keyed on
//! the filter string, which changes per keystroke, so only the latest one is
//! kept.
//!
//! TRADE-OFFS
//! ==========
//! Generations are exposed through `Memo`s (see `use_generation`) so writing an
//! entry does not retrigger the resource that wrote it.

#[cfg(test)]
#[path = "query_cache_test.rs"]
mod query_cache_test;

use std::collections::HashMap;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A family of keys invalidated together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryScope {
    Articles,
    Channels,
    NewsletterConfigs,
    ContentItems,
    Issues,
    ContentSources,
    Users,
}

/// Identity of one cached response.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Articles { page: u32, page_size: u32 },
    Article(String),
    ApprovalHistory(String),
    Channels,
    NewsletterConfigs { page: u32, page_size: u32 },
    /// Keyed on the rendered filter query string.
    ContentItems(String),
    DraftIssues,
    /// Blocks already placed in one issue.
    IssueBlocks(String),
    ContentSources,
    Users,
}

impl QueryKey {
    #[must_use]
    pub fn scope(&self) -> QueryScope {
        match self {
            Self::Articles { .. } | Self::Article(_) | Self::ApprovalHistory(_) => QueryScope::Articles,
            Self::Channels => QueryScope::Channels,
            Self::NewsletterConfigs { .. } => QueryScope::NewsletterConfigs,
            Self::ContentItems(_) => QueryScope::ContentItems,
            Self::DraftIssues | Self::IssueBlocks(_) => QueryScope::Issues,
            Self::ContentSources => QueryScope::ContentSources,
            Self::Users => QueryScope::Users,
        }
    }
}

/// Every write the dashboard performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    ApproveArticle,
    RejectArticle,
    ReleaseArticle,
    ResetArticle,
    CreateChannel,
    CompleteOAuth,
    DisconnectChannel,
    CreateNewsletterConfig,
    UpdateNewsletterConfig,
    DeleteNewsletterConfig,
    AddBlocks,
    UpdateUserRole,
}

impl Mutation {
    /// Scopes to invalidate once the server confirms the write.
    #[must_use]
    pub fn invalidates(self) -> &'static [QueryScope] {
        match self {
            Self::ApproveArticle | Self::RejectArticle | Self::ReleaseArticle | Self::ResetArticle => {
                &[QueryScope::Articles]
            }
            Self::CreateChannel | Self::CompleteOAuth | Self::DisconnectChannel => &[QueryScope::Channels],
            Self::CreateNewsletterConfig | Self::UpdateNewsletterConfig | Self::DeleteNewsletterConfig => {
                &[QueryScope::NewsletterConfigs]
            }
            Self::AddBlocks => &[QueryScope::Issues, QueryScope::ContentItems],
            Self::UpdateUserRole => &[QueryScope::Users],
        }
    }
}

#[derive(Clone, Debug)]
struct CacheEntry {
    value: serde_json::Value,
    stale: bool,
}

#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    generations: HashMap<QueryScope, u64>,
}

impl QueryCache {
    /// Last confirmed value for `key`, stale or not.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entry = self.entries.get(key)?;
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// Cached value for `key` only while it has not been invalidated.
    #[must_use]
    pub fn fresh<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        if self.is_stale(key) {
            return None;
        }
        self.get(key)
    }

    /// Store a confirmed response. Returns `false` if it could not be encoded.
    ///
    /// Writing a content query drops every other content query.
    pub fn set<T: Serialize>(&mut self, key: QueryKey, value: &T) -> bool {
        match serde_json::to_value(value) {
            Ok(value) => {
                if matches!(key, QueryKey::ContentItems(_)) {
                    self.entries.retain(|k, _| !matches!(k, QueryKey::ContentItems(_)));
                }
                self.entries.insert(key, CacheEntry { value, stale: false });
                true
            }
            Err(_) => false,
        }
    }

    pub fn remove(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    /// Missing entries count as stale.
    #[must_use]
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.get(key).map_or(true, |entry| entry.stale)
    }

    /// Mark every entry of `scope` stale and bump its generation.
    pub fn invalidate(&mut self, scope: QueryScope) {
        self.expire(scope);
        *self.generations.entry(scope).or_default() += 1;
    }

    /// Mark every entry of `scope` stale without bumping its generation.
    ///
    /// Nothing mounted refetches; the next resource that asks for one of these
    /// keys fetches instead of reading the cache.
    pub fn expire(&mut self, scope: QueryScope) {
        for (key, entry) in &mut self.entries {
            if key.scope() == scope {
                entry.stale = true;
            }
        }
    }

    /// Invalidate everything `mutation` touches.
    pub fn apply(&mut self, mutation: Mutation) {
        for scope in mutation.invalidates() {
            self.invalidate(*scope);
        }
    }

    #[must_use]
    pub fn generation(&self, scope: QueryScope) -> u64 {
        self.generations.get(&scope).copied().unwrap_or(0)
    }
}

/// Reactive generation of `scope` from the context cache.
///
/// Read it inside a resource fetcher to refetch on invalidation. The calling
/// component's scope entries expire when it unmounts.
pub fn use_generation(scope: QueryScope) -> Memo<u64> {
    let cache = expect_context::<RwSignal<QueryCache>>();
    on_cleanup(move || {
        cache.try_update(|c| c.expire(scope));
    });
    Memo::new(move |_| cache.with(|c| c.generation(scope)))
}
