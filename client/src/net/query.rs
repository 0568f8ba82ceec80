//! Cache-aware fetching for page resources.
//!
//! A resource calls `cached` with its key and the endpoint future. A fresh
//! cache entry short-circuits the request; otherwise the request runs and a
//! successful response is written back. Failures are never cached. Entries
//! expire when the page that read them unmounts, so a remount fetches.

use leptos::prelude::*;
use serde::{Serialize, de::DeserializeOwned};

use crate::state::query_cache::{QueryCache, QueryKey};

pub async fn cached<T, E, F, Fut>(cache: RwSignal<QueryCache>, key: QueryKey, fetch: F) -> Result<T, E>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(hit) = cache.with_untracked(|c| c.fresh::<T>(&key)) {
        return Ok(hit);
    }
    let value = fetch().await?;
    cache.update(|c| {
        c.set(key, &value);
    });
    Ok(value)
}
