//! Marketing channels and their OAuth connection payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// Reason sent with every user-initiated disconnect.
pub const USER_DISCONNECT_REASON: &str = "User initiated disconnect";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Linkedin,
    Twitter,
    Email,
    Facebook,
    Instagram,
}

impl ChannelType {
    pub const ALL: [ChannelType; 5] = [Self::Linkedin, Self::Twitter, Self::Email, Self::Facebook, Self::Instagram];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Email => "email",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Email => "Email",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("channel type", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Error,
    Pending,
}

impl ConnectionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Error => "error",
            Self::Pending => "pending",
        }
    }

    #[must_use]
    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelHealth {
    #[default]
    Healthy,
    Degraded,
    Failing,
}

impl ChannelHealth {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Failing => "failing",
        }
    }
}

/// Publishing statistics, displayed verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    #[serde(default)]
    pub posts_published: u64,
    #[serde(default)]
    pub total_engagement: u64,
    #[serde(default)]
    pub total_impressions: u64,
    #[serde(default)]
    pub avg_engagement_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_post_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub account_name: String,
    pub status: ConnectionStatus,
    #[serde(default)]
    pub health: ChannelHealth,
    #[serde(default)]
    pub stats: ChannelStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChannelRequest {
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub account_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthInitiateRequest {
    pub channel_type: ChannelType,
}

/// Server-issued CSRF state token for an OAuth round trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthInitiateResponse {
    pub state: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthCallbackRequest {
    pub channel_type: ChannelType,
    pub code: String,
    pub state: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisconnectRequest {
    pub reason: String,
}

impl DisconnectRequest {
    /// The only disconnect body the dashboard sends.
    #[must_use]
    pub fn user_initiated() -> Self {
        Self { reason: USER_DISCONNECT_REASON.to_owned() }
    }
}

#[cfg(test)]
#[path = "channel_test.rs"]
mod tests;
