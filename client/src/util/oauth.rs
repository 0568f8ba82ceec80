//! OAuth authorize-URL assembly and callback verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! Connecting a channel is a browser round trip:
//! 1. the backend issues a state token (`POST /api/v1/channels/oauth/initiate`),
//! 2. the client stores `{state, channel_type}` in session storage and sends
//!    the browser to the provider's authorize URL,
//! 3. the provider redirects to `/channels/callback?code&state`, where the
//!    stored record is checked and the code is forwarded to the backend.
//!
//! ERROR HANDLING
//! ==============
//! Every way the callback can go wrong maps to one `CallbackError` variant
//! whose `Display` text is shown on the callback page.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use models::ChannelType;
use serde::{Deserialize, Serialize};

use super::storage::{self, Area, OAUTH_STATE_KEY};

/// Static authorize endpoint and scopes for one provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OAuthProvider {
    pub authorize_url: &'static str,
    pub scopes: &'static [&'static str],
}

/// Provider table. Email channels are not connected through OAuth.
pub fn provider(channel_type: ChannelType) -> Option<OAuthProvider> {
    match channel_type {
        ChannelType::Linkedin => Some(OAuthProvider {
            authorize_url: "https://www.linkedin.com/oauth/v2/authorization",
            scopes: &["r_liteprofile", "r_emailaddress", "w_member_social"],
        }),
        ChannelType::Twitter => Some(OAuthProvider {
            authorize_url: "https://twitter.com/i/oauth2/authorize",
            scopes: &["tweet.read", "tweet.write", "users.read"],
        }),
        ChannelType::Facebook => Some(OAuthProvider {
            authorize_url: "https://www.facebook.com/v18.0/dialog/oauth",
            scopes: &["pages_manage_posts", "pages_read_engagement"],
        }),
        ChannelType::Instagram => Some(OAuthProvider {
            authorize_url: "https://api.instagram.com/oauth/authorize",
            scopes: &["instagram_basic", "instagram_content_publish"],
        }),
        ChannelType::Email => None,
    }
}

/// Provider authorize URL carrying the server-issued `state`.
pub fn authorize_url(channel_type: ChannelType, client_id: &str, redirect_uri: &str, state: &str) -> Option<String> {
    let provider = provider(channel_type)?;
    let scope = provider.scopes.join(" ");
    Some(format!(
        "{}?response_type=code&client_id={}&redirect_uri={}&state={}&scope={}",
        provider.authorize_url,
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode(state),
        urlencoding::encode(&scope),
    ))
}

/// Record kept in session storage across the provider redirect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredOAuthState {
    pub state: String,
    pub channel_type: ChannelType,
}

/// Query parameters of the provider redirect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError {
    #[error("The provider declined the connection: {0}")]
    Provider(String),
    #[error("No connection attempt is in progress. Start again from the channels page.")]
    MissingRecord,
    #[error("The connection response did not match this session. Start again from the channels page.")]
    StateMismatch,
    #[error("The provider did not return an authorization code.")]
    MissingCode,
}

/// A callback that passed verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedCallback {
    pub channel_type: ChannelType,
    pub code: String,
    pub state: String,
}

/// Check a provider redirect against the stored record.
///
/// # Errors
///
/// Provider errors are reported first, then a missing record, a state
/// mismatch, and finally a missing code.
pub fn verify_callback(
    stored: Option<&StoredOAuthState>,
    params: &CallbackParams,
) -> Result<VerifiedCallback, CallbackError> {
    if let Some(error) = &params.error {
        let detail = params.error_description.clone().unwrap_or_else(|| error.clone());
        return Err(CallbackError::Provider(detail));
    }
    let stored = stored.ok_or(CallbackError::MissingRecord)?;
    if params.state.as_deref() != Some(stored.state.as_str()) {
        return Err(CallbackError::StateMismatch);
    }
    let code = params.code.clone().filter(|c| !c.is_empty()).ok_or(CallbackError::MissingCode)?;
    Ok(VerifiedCallback { channel_type: stored.channel_type, code, state: stored.state.clone() })
}

pub fn save_pending(record: &StoredOAuthState) {
    if let Ok(json) = serde_json::to_string(record) {
        storage::set(Area::Session, OAUTH_STATE_KEY, &json);
    }
}

pub fn load_pending() -> Option<StoredOAuthState> {
    storage::get(Area::Session, OAUTH_STATE_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
}

pub fn clear_pending() {
    storage::remove(Area::Session, OAUTH_STATE_KEY);
}
