//! Domain services behind the stub API.
//!
//! ARCHITECTURE
//! ============
//! Service functions operate on a borrowed `Store` and return `ApiError`, so
//! route handlers stay focused on extraction, locking and envelope shape.
//! Nothing in here awaits.

pub mod articles;
pub mod channels;
pub mod newsletter;
pub mod users;


use std::fmt::Write;

use models::PageInfo;
use rand::Rng;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Default page size when a list request omits it.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Clamped pagination parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// `page` is at least 1; `page_size` is within `1..=max`.
    #[must_use]
    pub fn new(page: Option<u32>, page_size: Option<u32>, max: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, max.max(1)),
        }
    }

    /// Slice out the requested page. A page past the end is empty.
    #[must_use]
    pub fn apply<T: Clone>(self, items: &[T]) -> (Vec<T>, PageInfo) {
        let size = self.page_size as usize;
        let start = (self.page as usize).saturating_sub(1).saturating_mul(size);
        let slice = items.iter().skip(start).take(size).cloned().collect();
        let total = u64::try_from(items.len()).unwrap_or(u64::MAX);
        (slice, PageInfo::for_page(self.page, self.page_size, total))
    }
}

/// Current UTC time as RFC 3339.
#[must_use]
pub fn now() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Random 32-byte hex token, used as the OAuth `state`.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Fresh id with a readable prefix, e.g. `config-4f1c...`.
#[must_use]
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}
