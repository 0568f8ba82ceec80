//! Channel connections.
//!
//! OAuth is simulated: `initiate` issues and remembers a random state token,
//! `complete` consumes it and marks the channel connected without exchanging
//! the code anywhere. Email accounts are added directly by address.

#[cfg(test)]
#[path = "channels_test.rs"]
mod channels_test;

use models::{
    Channel, ChannelHealth, ChannelStats, ChannelType, ConnectionStatus, CreateChannelRequest, DisconnectRequest,
    OAuthCallbackRequest, OAuthInitiateResponse,
};

use crate::error::ApiError;
use crate::state::Store;

#[must_use]
pub fn list(store: &Store) -> Vec<Channel> {
    store.channels.clone()
}

/// Add an email channel by address.
///
/// # Errors
///
/// `BadRequest` for OAuth channel types and for addresses without an `@`.
pub fn create(store: &mut Store, request: &CreateChannelRequest, id: String) -> Result<Channel, ApiError> {
    if request.channel_type != ChannelType::Email {
        return Err(ApiError::BadRequest(format!(
            "{} channels are connected through OAuth",
            request.channel_type.label()
        )));
    }
    let address = request.account_name.trim();
    if !address.contains('@') {
        return Err(ApiError::BadRequest("account_name must be an email address".to_owned()));
    }
    let channel = fresh_channel(id, ChannelType::Email, address.to_owned());
    store.channels.push(channel.clone());
    tracing::info!(channel_id = %channel.id, channel_type = %ChannelType::Email, "channel created");
    Ok(channel)
}

/// Issue a state token for an OAuth round trip.
///
/// # Errors
///
/// `BadRequest` for email, which has no OAuth flow.
pub fn initiate(store: &mut Store, channel_type: ChannelType, state: String) -> Result<OAuthInitiateResponse, ApiError> {
    if channel_type == ChannelType::Email {
        return Err(ApiError::BadRequest("Email channels are added by address".to_owned()));
    }
    store.oauth_states.insert(state.clone(), channel_type);
    tracing::info!(channel_type = %channel_type, "oauth initiated");
    Ok(OAuthInitiateResponse { state })
}

/// Finish an OAuth round trip, connecting (or reconnecting) the channel.
///
/// The state token is single-use; it is consumed even when the request is
/// otherwise rejected.
///
/// # Errors
///
/// `BadRequest` for an unknown state, a state issued for another channel
/// type, or an empty code.
pub fn complete(store: &mut Store, request: &OAuthCallbackRequest, id: String) -> Result<Channel, ApiError> {
    let issued = store.oauth_states.remove(&request.state);
    if issued != Some(request.channel_type) {
        return Err(ApiError::BadRequest("Unknown or expired OAuth state".to_owned()));
    }
    if request.code.trim().is_empty() {
        return Err(ApiError::BadRequest("Authorization code is required".to_owned()));
    }

    let channel_type = request.channel_type;
    if let Some(existing) = store.channels.iter_mut().find(|c| c.channel_type == channel_type) {
        existing.status = ConnectionStatus::Connected;
        existing.health = ChannelHealth::Healthy;
        existing.last_error = None;
        tracing::info!(channel_id = %existing.id, channel_type = %channel_type, "channel reconnected");
        return Ok(existing.clone());
    }
    let channel = fresh_channel(id, channel_type, format!("{} account", channel_type.label()));
    store.channels.push(channel.clone());
    tracing::info!(channel_id = %channel.id, channel_type = %channel_type, "channel connected");
    Ok(channel)
}

/// # Errors
///
/// `NotFound` for an unknown id, `BadRequest` for a blank reason.
pub fn disconnect(store: &mut Store, id: &str, request: &DisconnectRequest) -> Result<Channel, ApiError> {
    if request.reason.trim().is_empty() {
        return Err(ApiError::BadRequest("reason is required".to_owned()));
    }
    let channel = store
        .channels
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| ApiError::not_found("channel", id))?;
    channel.status = ConnectionStatus::Disconnected;
    tracing::info!(channel_id = %id, channel_type = %channel.channel_type, reason = %request.reason, "channel disconnected");
    Ok(channel.clone())
}

fn fresh_channel(id: String, channel_type: ChannelType, account_name: String) -> Channel {
    Channel {
        id,
        channel_type,
        account_name,
        status: ConnectionStatus::Connected,
        health: ChannelHealth::Healthy,
        stats: ChannelStats::default(),
        last_error: None,
    }
}
