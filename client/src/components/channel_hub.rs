//! Channel connection management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists the channels the backend knows about and offers one connect tile per
//! channel type. OAuth types start the provider round trip
//! (`util::oauth`); email accounts are registered directly with
//! `POST /api/v1/channels`. Disconnect sends the fixed user-initiated reason
//! without a confirmation step.
//!
//! ERROR HANDLING
//! ==============
//! The list shows the inline error panel with Retry. Connect, create and
//! disconnect failures are toasts.

#[cfg(test)]
#[path = "channel_hub_test.rs"]
mod channel_hub_test;

use leptos::prelude::*;
use models::{Channel, ChannelType};

use super::channel_card::ChannelCard;
use super::list_status::ListStatus;
use crate::config::ClientConfig;
use crate::net::{api, query};
use crate::state::query_cache::{QueryCache, QueryKey, QueryScope, use_generation};
use crate::state::review_queue::fetched_view;
use crate::state::toast::ToastState;
use crate::util::oauth;

/// Why a connect tile is disabled, if it is.
pub(crate) fn connect_hint(config: &ClientConfig, channel_type: ChannelType) -> Option<String> {
    if oauth::provider(channel_type).is_none() {
        return Some(format!("{} accounts are added by address, not OAuth.", channel_type.label()));
    }
    if config.client_id(channel_type).is_none() {
        return Some(format!("No {} client id is configured.", channel_type.label()));
    }
    None
}

#[component]
pub fn ChannelHub() -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let generation = use_generation(QueryScope::Channels);
    let connecting = RwSignal::new(None::<ChannelType>);
    let disconnecting = RwSignal::new(None::<String>);

    let channels = LocalResource::new(move || {
        generation.track();
        query::cached(cache, QueryKey::Channels, api::fetch_channels)
    });

    let state = Signal::derive(move || {
        let fetched = channels.get();
        fetched_view(fetched.as_ref().map(|r| r.as_ref().map(Vec::as_slice)))
    });
    let on_retry = Callback::new(move |()| cache.update(|c| c.invalidate(QueryScope::Channels)));

    let on_connect = Callback::new(move |channel_type: ChannelType| {
        if connecting.get_untracked().is_some() {
            return;
        }
        connecting.set(Some(channel_type));
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(message) = start_oauth(channel_type).await {
                    log::warn!("connect {} failed: {message}", channel_type.as_str());
                    super::toast_stack::notify(toasts, crate::state::toast::ToastKind::Error, message);
                }
                connecting.set(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
        }
    });

    let on_disconnect = Callback::new(move |channel_id: String| {
        if disconnecting.get_untracked().is_some() {
            return;
        }
        disconnecting.set(Some(channel_id.clone()));
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use super::toast_stack::notify;
                use crate::state::query_cache::Mutation;
                use crate::state::toast::ToastKind;

                match api::disconnect_channel(&channel_id).await {
                    Ok(channel) => {
                        cache.update(|c| c.apply(Mutation::DisconnectChannel));
                        notify(toasts, ToastKind::Success, format!("{} disconnected", channel.account_name));
                    }
                    Err(e) => {
                        log::warn!("disconnect {channel_id} failed: {e}");
                        notify(toasts, ToastKind::Error, format!("Disconnect failed: {e}"));
                    }
                }
                disconnecting.set(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = channel_id;
        }
    });

    view! {
        <section class="channel-hub">
            <div class="channel-hub__connect">
                {ChannelType::ALL
                    .into_iter()
                    .map(|channel_type| {
                        if channel_type == ChannelType::Email {
                            view! { <EmailChannelTile /> }.into_any()
                        } else {
                            view! { <ConnectTile channel_type=channel_type connecting=connecting on_connect=on_connect /> }
                                .into_any()
                        }
                    })
                    .collect_view()}
            </div>
            <ListStatus state=state noun="channels" empty="No channels connected yet." on_retry=on_retry>
                <div class="channel-hub__list">
                    {move || {
                        channels
                            .get()
                            .and_then(Result::ok)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|channel: Channel| {
                                let id = channel.id.clone();
                                let busy = Signal::derive(move || {
                                    disconnecting.with(|d| d.as_deref() == Some(id.as_str()))
                                });
                                view! { <ChannelCard channel=channel on_disconnect=on_disconnect disconnecting=busy /> }
                            })
                            .collect_view()
                    }}
                </div>
            </ListStatus>
        </section>
    }
}

#[component]
fn ConnectTile(
    channel_type: ChannelType,
    connecting: RwSignal<Option<ChannelType>>,
    on_connect: Callback<ChannelType>,
) -> impl IntoView {
    let hint = connect_hint(crate::config::config(), channel_type);
    let unavailable = hint.is_some();

    view! {
        <div class="connect-tile">
            <span class="connect-tile__label">{channel_type.label()}</span>
            <button
                class="btn btn--primary"
                disabled=move || unavailable || connecting.get().is_some()
                on:click=move |_| on_connect.run(channel_type)
            >
                {move || if connecting.get() == Some(channel_type) { "Connecting..." } else { "Connect" }}
            </button>
            {hint.map(|hint| view! { <p class="connect-tile__hint">{hint}</p> })}
        </div>
    }
}

/// Email accounts skip OAuth and are registered by address.
#[component]
fn EmailChannelTile() -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let account = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let submit = move || {
        let account_name = account.get_untracked().trim().to_owned();
        if account_name.is_empty() || saving.get_untracked() {
            return;
        }
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use super::toast_stack::notify;
                use crate::state::query_cache::Mutation;
                use crate::state::toast::ToastKind;

                let body = models::CreateChannelRequest { channel_type: ChannelType::Email, account_name };
                match api::create_channel(&body).await {
                    Ok(channel) => {
                        account.set(String::new());
                        cache.update(|c| c.apply(Mutation::CreateChannel));
                        notify(toasts, ToastKind::Success, format!("{} added", channel.account_name));
                    }
                    Err(e) => {
                        log::warn!("create email channel failed: {e}");
                        notify(toasts, ToastKind::Error, format!("Could not add channel: {e}"));
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (account_name, cache, toasts);
        }
    };

    view! {
        <div class="connect-tile connect-tile--email">
            <span class="connect-tile__label">{ChannelType::Email.label()}</span>
            <input
                class="input"
                type="email"
                placeholder="newsletter@example.com"
                prop:value=move || account.get()
                on:input=move |ev| account.set(event_target_value(&ev))
            />
            <button
                class="btn btn--primary"
                disabled=move || saving.get() || account.get().trim().is_empty()
                on:click=move |_| submit()
            >
                {move || if saving.get() { "Adding..." } else { "Add" }}
            </button>
        </div>
    }
}

/// Ask the backend for a state token, remember it, and leave for the provider.
#[cfg(feature = "hydrate")]
async fn start_oauth(channel_type: ChannelType) -> Result<(), String> {
    let config = crate::config::config();
    let client_id = config
        .client_id(channel_type)
        .ok_or_else(|| format!("No {} client id is configured", channel_type.label()))?;
    let initiated = api::initiate_oauth(channel_type).await.map_err(|e| format!("Could not start connection: {e}"))?;
    let window = web_sys::window().ok_or("No browser window")?;
    let origin = window.location().origin().map_err(|_| "Could not read page origin".to_owned())?;
    let url = oauth::authorize_url(channel_type, client_id, &config.redirect_uri(&origin), &initiated.state)
        .ok_or_else(|| format!("{} does not support OAuth", channel_type.label()))?;
    oauth::save_pending(&oauth::StoredOAuthState { state: initiated.state, channel_type });
    window.location().set_href(&url).map_err(|_| "Could not open the provider page".to_owned())
}
