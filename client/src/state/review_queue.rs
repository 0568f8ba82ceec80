//! Review queue paging and the shared list view-state classifier.
//!
//! DESIGN
//! ======
//! Pages are always re-fetched from the server; nothing here slices a list.
//! `list_view` is shared by every paginated list in the dashboard so loading,
//! error and empty handling is identical across pages.

#[cfg(test)]
#[path = "review_queue_test.rs"]
mod review_queue_test;

use models::PageInfo;
use models::paths::ArticleFilter;

use super::query_cache::QueryKey;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// The queue only lists articles still waiting on a gate.
pub const QUEUE_FILTER: ArticleFilter = ArticleFilter::Pending;

/// Which of the four list states to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Error(String),
    Empty,
    Populated,
}

/// Classify a list fetch. Priority: loading, then error, then empty.
pub fn list_view<T>(loading: bool, error: Option<&str>, items: &[T]) -> ListView {
    if loading {
        ListView::Loading
    } else if let Some(message) = error {
        ListView::Error(message.to_owned())
    } else if items.is_empty() {
        ListView::Empty
    } else {
        ListView::Populated
    }
}

/// `list_view` over a resource result: `None` is still loading.
pub fn fetched_view<T, E: std::fmt::Display>(fetched: Option<Result<&[T], &E>>) -> ListView {
    match fetched {
        None => list_view::<T>(true, None, &[]),
        Some(Err(err)) => list_view::<T>(false, Some(&err.to_string()), &[]),
        Some(Ok(items)) => list_view(false, None, items),
    }
}

/// Enablement of the previous/next controls for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageControls {
    pub can_previous: bool,
    pub can_next: bool,
    pub label: String,
}

impl PageControls {
    pub fn from_info(info: &PageInfo) -> Self {
        Self {
            can_previous: info.has_previous(),
            can_next: info.has_next(),
            label: format!("Page {} of {}", info.page, info.total_pages.max(1)),
        }
    }
}

/// Requested page of the review queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReviewQueueState {
    pub page: u32,
    pub page_size: u32,
}

impl Default for ReviewQueueState {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl ReviewQueueState {
    /// Both values are clamped to at least 1.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page: page.max(1), page_size: page_size.max(1) }
    }

    /// Advance if the server reports a following page.
    pub fn next_page(&mut self, info: &PageInfo) -> bool {
        if !info.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Step back, never below page 1.
    pub fn previous_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Change the page size and return to page 1.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn query_key(&self) -> QueryKey {
        QueryKey::Articles { page: self.page, page_size: self.page_size }
    }
}
