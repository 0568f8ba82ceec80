//! Filter and selection state for newsletter content assembly.
//!
//! DESIGN
//! ======
//! Filters are request parameters, not client-side predicates: every change
//! resets to page 1 and the grid re-fetches. Selection is an ordered id list
//! capped at `max_selections`; selecting past the cap is a silent no-op and
//! the count never exceeds it. Items already placed in the chosen issue are
//! excluded and can never be selected.

#[cfg(test)]
#[path = "content_selector_test.rs"]
mod content_selector_test;

use models::ContentType;

use super::query_cache::QueryKey;

pub const DEFAULT_CONTENT_PAGE_SIZE: u32 = 12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentTypeFilter {
    #[default]
    All,
    Only(ContentType),
}

impl ContentTypeFilter {
    /// Parse a `<select>` value; unknown values mean "all".
    pub fn from_value(value: &str) -> Self {
        value.parse().map_or(Self::All, Self::Only)
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(ty) => ty.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentSelectorState {
    pub query: String,
    pub content_type: ContentTypeFilter,
    pub topic_tag: String,
    pub framework_tag: String,
    pub date_from: String,
    pub date_to: String,
    pub page: u32,
    pub page_size: u32,
    pub selected: Vec<String>,
    /// Ids that may not be selected, e.g. items already in the target issue.
    pub excluded: Vec<String>,
    pub max_selections: Option<usize>,
}

impl Default for ContentSelectorState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ContentSelectorState {
    pub fn new(max_selections: Option<usize>) -> Self {
        Self {
            query: String::new(),
            content_type: ContentTypeFilter::All,
            topic_tag: String::new(),
            framework_tag: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            page: 1,
            page_size: DEFAULT_CONTENT_PAGE_SIZE,
            selected: Vec::new(),
            excluded: Vec::new(),
            max_selections,
        }
    }

    // ---- filters ---------------------------------------------------------

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 1;
    }

    pub fn set_content_type(&mut self, content_type: ContentTypeFilter) {
        self.content_type = content_type;
        self.page = 1;
    }

    pub fn set_topic_tag(&mut self, tag: String) {
        self.topic_tag = tag;
        self.page = 1;
    }

    pub fn set_framework_tag(&mut self, tag: String) {
        self.framework_tag = tag;
        self.page = 1;
    }

    pub fn set_date_range(&mut self, from: String, to: String) {
        self.date_from = from;
        self.date_to = to;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Request parameters for the current filters and page. Empty filters and
    /// the "all" type are omitted.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let text = [
            ("search", &self.query),
            ("topic_tag", &self.topic_tag),
            ("framework_tag", &self.framework_tag),
            ("date_from", &self.date_from),
            ("date_to", &self.date_to),
        ];
        for (name, value) in text {
            let value = value.trim();
            if !value.is_empty() {
                params.push((name, value.to_owned()));
            }
        }
        if let ContentTypeFilter::Only(ty) = self.content_type {
            params.push(("content_type", ty.as_str().to_owned()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("page_size", self.page_size.to_string()));
        params
    }

    /// Rendered query string, also used as the cache key.
    pub fn query_string(&self) -> String {
        self.query_params()
            .into_iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn query_key(&self) -> QueryKey {
        QueryKey::ContentItems(self.query_string())
    }

    // ---- selection -------------------------------------------------------

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn is_full(&self) -> bool {
        self.max_selections.is_some_and(|max| self.selected.len() >= max)
    }

    /// Add or remove `id`. Adding is a no-op at the cap or for excluded ids.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            return;
        }
        if self.is_full() || self.excluded.iter().any(|e| e == id) {
            return;
        }
        self.selected.push(id.to_owned());
    }

    /// Add visible ids in order, skipping selected and excluded ones, until
    /// the cap is reached.
    pub fn select_all_visible<'a>(&mut self, visible: impl IntoIterator<Item = &'a str>) {
        for id in visible {
            if self.is_full() {
                break;
            }
            if self.is_selected(id) || self.excluded.iter().any(|e| e == id) {
                continue;
            }
            self.selected.push(id.to_owned());
        }
    }

    /// Replace the excluded ids and drop any of them from the selection.
    pub fn set_excluded(&mut self, excluded: Vec<String>) {
        self.selected.retain(|id| !excluded.contains(id));
        self.excluded = excluded;
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// e.g. `"3 of 20 selected"`, or `"3 selected"` without a cap.
    pub fn selection_label(&self) -> String {
        match self.max_selections {
            Some(max) => format!("{} of {max} selected", self.selected.len()),
            None => format!("{} selected", self.selected.len()),
        }
    }
}
