//! Response envelope normalization.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend wraps payloads in several shapes depending on the endpoint:
//! `{success, data}`, `{data, pagination}`, `{data, meta}` or a bare value.
//! `decode` and `decode_page` are the single boundary where those shapes are
//! reconciled; call sites receive typed values and never inspect the wrapper.
//!
//! TRADE-OFFS
//! ==========
//! Pagination metadata is accepted in both snake_case and camelCase spellings
//! through serde aliases rather than per-endpoint structs. A payload carrying
//! both spellings of one field is rejected as a duplicate.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure to turn a response body into the expected type.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// The server answered `success: false`.
    #[error("{0}")]
    Unsuccessful(String),
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response is not a paginated list")]
    MissingPagination,
}

const PAGE_KEYS: [&str; 4] = ["page", "total_pages", "totalPages", "current_page"];

fn first_page() -> u32 {
    1
}

/// Pagination metadata for one page of a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default = "first_page", alias = "current_page")]
    pub page: u32,
    #[serde(default, alias = "pageSize", alias = "per_page", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default = "first_page", alias = "totalPages")]
    pub total_pages: u32,
    #[serde(default, alias = "totalItems", alias = "total_items")]
    pub total: u64,
    #[serde(default, alias = "hasNextPage", skip_serializing_if = "Option::is_none")]
    pub has_next_page: Option<bool>,
    #[serde(default, alias = "hasPreviousPage", skip_serializing_if = "Option::is_none")]
    pub has_previous_page: Option<bool>,
}

impl PageInfo {
    /// Metadata for a list that fits on one page.
    #[must_use]
    pub fn single(total: usize) -> Self {
        Self {
            page: 1,
            page_size: None,
            total_pages: 1,
            total: u64::try_from(total).unwrap_or(u64::MAX),
            has_next_page: None,
            has_previous_page: None,
        }
    }

    /// Metadata for `page` of a list of `total` items split into pages of `page_size`.
    #[must_use]
    pub fn for_page(page: u32, page_size: u32, total: u64) -> Self {
        let size = u64::from(page_size.max(1));
        let total_pages = u32::try_from(total.div_ceil(size).max(1)).unwrap_or(u32::MAX);
        Self {
            page,
            page_size: Some(page_size),
            total_pages,
            total,
            has_next_page: Some(page < total_pages),
            has_previous_page: Some(page > 1),
        }
    }

    /// Whether a following page exists. The server flag wins when present.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.has_next_page.unwrap_or(self.page < self.total_pages)
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.has_previous_page.unwrap_or(self.page > 1)
    }
}

/// One page of items with its metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

impl<T> Page<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Shape of a raw response body.
#[derive(Clone, Debug, PartialEq)]
pub enum Envelope {
    Success { data: Value },
    Failure { message: String },
    Paged { data: Value, page: Value },
    Bare(Value),
}

impl Envelope {
    /// Classify a decoded JSON body by its wrapper.
    #[must_use]
    pub fn classify(body: Value) -> Self {
        let Value::Object(mut map) = body else {
            return Self::Bare(body);
        };
        if map.get("success") == Some(&Value::Bool(false)) {
            return Self::Failure { message: failure_message(&map) };
        }
        if map.contains_key("data") {
            let page = map.remove("pagination").or_else(|| map.remove("meta"));
            let data = map.remove("data").unwrap_or(Value::Null);
            return match page {
                Some(page) => Self::Paged { data, page },
                None if map.get("success") == Some(&Value::Bool(true)) => Self::Success { data },
                None => {
                    map.insert("data".to_owned(), data);
                    Self::Bare(Value::Object(map))
                }
            };
        }
        Self::Bare(Value::Object(map))
    }
}

fn failure_message(map: &serde_json::Map<String, Value>) -> String {
    let from_error = match map.get("error") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Object(err)) => err.get("message").and_then(Value::as_str).map(str::to_owned),
        _ => None,
    };
    from_error
        .or_else(|| map.get("message").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| "Request failed".to_owned())
}

/// Decode a single payload from any envelope shape.
///
/// # Errors
///
/// `Unsuccessful` for `success: false` bodies, `Decode` when the payload does
/// not match `T`.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, EnvelopeError> {
    match Envelope::classify(body) {
        Envelope::Success { data } | Envelope::Paged { data, .. } | Envelope::Bare(data) => {
            Ok(serde_json::from_value(data)?)
        }
        Envelope::Failure { message } => Err(EnvelopeError::Unsuccessful(message)),
    }
}

/// Decode one page of a list from any envelope shape.
///
/// A bare array is a single page. A metadata block without page fields also
/// yields single-page metadata.
///
/// # Errors
///
/// `Unsuccessful` for `success: false`, `Decode` for mismatched items or
/// metadata, `MissingPagination` when the body holds no list at all.
pub fn decode_page<T: DeserializeOwned>(body: Value) -> Result<Page<T>, EnvelopeError> {
    match Envelope::classify(body) {
        Envelope::Paged { data, page } => {
            let items: Vec<T> = serde_json::from_value(data)?;
            let info = page_info(page, items.len())?;
            Ok(Page { items, info })
        }
        Envelope::Success { data } => decode_page(data),
        Envelope::Bare(Value::Array(values)) => {
            let items: Vec<T> = serde_json::from_value(Value::Array(values))?;
            let info = PageInfo::single(items.len());
            Ok(Page { items, info })
        }
        Envelope::Bare(_) => Err(EnvelopeError::MissingPagination),
        Envelope::Failure { message } => Err(EnvelopeError::Unsuccessful(message)),
    }
}

fn page_info(meta: Value, len: usize) -> Result<PageInfo, EnvelopeError> {
    let has_page_fields = meta
        .as_object()
        .is_some_and(|map| PAGE_KEYS.iter().any(|key| map.contains_key(*key)));
    if has_page_fields {
        Ok(serde_json::from_value(meta)?)
    } else {
        Ok(PageInfo::single(len))
    }
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
