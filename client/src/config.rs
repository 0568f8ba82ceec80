//! Build-time client configuration.
//!
//! Values are baked in at compile time with `option_env!`, since the WASM
//! bundle has no process environment at runtime:
//! - `ACI_API_BASE`: API origin prefix (empty = same origin)
//! - `ACI_OAUTH_REDIRECT_URI`: OAuth callback URL (default `{origin}/channels/callback`)
//! - `ACI_{LINKEDIN,TWITTER,FACEBOOK,INSTAGRAM,EMAIL}_CLIENT_ID`: provider client ids

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::LazyLock;

use models::ChannelType;

/// Path of the OAuth callback route.
pub const OAUTH_CALLBACK_PATH: &str = "/channels/callback";

static CONFIG: LazyLock<ClientConfig> = LazyLock::new(ClientConfig::from_build_env);

/// Process-wide configuration.
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub oauth_redirect_uri: Option<String>,
    pub linkedin_client_id: Option<String>,
    pub twitter_client_id: Option<String>,
    pub facebook_client_id: Option<String>,
    pub instagram_client_id: Option<String>,
}

impl ClientConfig {
    fn from_build_env() -> Self {
        Self {
            api_base: normalize_base(option_env!("ACI_API_BASE").unwrap_or_default()),
            oauth_redirect_uri: non_empty(option_env!("ACI_OAUTH_REDIRECT_URI")),
            linkedin_client_id: non_empty(option_env!("ACI_LINKEDIN_CLIENT_ID")),
            twitter_client_id: non_empty(option_env!("ACI_TWITTER_CLIENT_ID")),
            facebook_client_id: non_empty(option_env!("ACI_FACEBOOK_CLIENT_ID")),
            instagram_client_id: non_empty(option_env!("ACI_INSTAGRAM_CLIENT_ID")),
        }
    }

    /// OAuth client id configured for `channel_type`. Email has none; it is
    /// connected out of band.
    pub fn client_id(&self, channel_type: ChannelType) -> Option<&str> {
        match channel_type {
            ChannelType::Linkedin => self.linkedin_client_id.as_deref(),
            ChannelType::Twitter => self.twitter_client_id.as_deref(),
            ChannelType::Facebook => self.facebook_client_id.as_deref(),
            ChannelType::Instagram => self.instagram_client_id.as_deref(),
            ChannelType::Email => None,
        }
    }

    /// Absolute or origin-relative URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    /// Redirect URI sent to OAuth providers, given the page origin.
    pub fn redirect_uri(&self, origin: &str) -> String {
        self.oauth_redirect_uri
            .clone()
            .unwrap_or_else(|| format!("{}{OAUTH_CALLBACK_PATH}", origin.trim_end_matches('/')))
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
