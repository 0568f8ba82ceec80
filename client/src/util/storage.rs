//! Browser storage access.
//!
//! All reads and writes are best-effort: a missing window, a disabled storage
//! area or a quota error is treated as "no value". Non-hydrate builds always
//! read `None` and ignore writes.

/// Bearer token used for API requests, in `localStorage`.
pub const ACCESS_TOKEN_KEY: &str = "aci_access_token";
/// Pending OAuth round trip, in `sessionStorage`.
pub const OAUTH_STATE_KEY: &str = "aci_oauth_state";
/// Dark mode preference, in `localStorage`.
pub const DARK_MODE_KEY: &str = "aci_dark_mode";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    Local,
    Session,
}

#[cfg(feature = "hydrate")]
fn storage(area: Area) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    let storage = match area {
        Area::Local => window.local_storage(),
        Area::Session => window.session_storage(),
    };
    storage.ok().flatten()
}

pub fn get(area: Area, key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage(area)?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
        None
    }
}

pub fn set(area: Area, key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage(area) {
            if storage.set_item(key, value).is_err() {
                log::warn!("storage write failed for {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key, value);
    }
}

pub fn remove(area: Area, key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage(area) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
    }
}

/// Stored access token, if any.
pub fn access_token() -> Option<String> {
    get(Area::Local, ACCESS_TOKEN_KEY).filter(|t| !t.trim().is_empty())
}
