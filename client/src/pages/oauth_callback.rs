//! OAuth provider redirect target (`/channels/callback`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider sends the browser back with `code` and `state` (or `error`).
//! The stored record from the channels page is checked and removed, the code
//! is forwarded to the backend, and the user lands on `/channels` with the
//! `Channels` scope invalidated.
//!
//! ERROR HANDLING
//! ==============
//! Verification and exchange failures stay on this page with a link back.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::oauth::CallbackParams;

#[derive(Clone, Debug, PartialEq, Eq)]
enum CallbackStatus {
    Working,
    Failed(String),
}

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let query = use_query_map();
    let status = RwSignal::new(CallbackStatus::Working);

    let params = query.with_untracked(|q| CallbackParams {
        code: q.get("code"),
        state: q.get("state"),
        error: q.get("error"),
        error_description: q.get("error_description"),
    });

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;
        use models::OAuthCallbackRequest;

        use crate::state::query_cache::{Mutation, QueryCache};
        use crate::util::oauth;

        let cache = expect_context::<RwSignal<QueryCache>>();
        let navigate = use_navigate();
        Effect::new(move |ran: Option<()>| {
            if ran.is_some() {
                return;
            }
            let stored = oauth::load_pending();
            oauth::clear_pending();
            let verified = match oauth::verify_callback(stored.as_ref(), &params) {
                Ok(verified) => verified,
                Err(e) => {
                    log::warn!("oauth callback rejected: {e}");
                    status.set(CallbackStatus::Failed(e.to_string()));
                    return;
                }
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let body = OAuthCallbackRequest {
                    channel_type: verified.channel_type,
                    code: verified.code,
                    state: verified.state,
                };
                match crate::net::api::complete_oauth(&body).await {
                    Ok(channel) => {
                        log::info!("connected {} channel {}", channel.channel_type.as_str(), channel.id);
                        cache.update(|c| c.apply(Mutation::CompleteOAuth));
                        navigate("/channels", NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("oauth exchange failed: {e}");
                        status.set(CallbackStatus::Failed(format!("Could not finish connecting: {e}")));
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
    }

    view! {
        <div class="oauth-callback-page">
            {move || match status.get() {
                CallbackStatus::Working => view! { <p class="oauth-callback-page__working">"Connecting channel..."</p> }
                    .into_any(),
                CallbackStatus::Failed(message) => view! {
                    <div class="list-status list-status--error" role="alert">
                        <p class="list-status__title">"Channel connection failed"</p>
                        <p class="list-status__detail">{message}</p>
                        <a class="btn" href="/channels">
                            "Back to channels"
                        </a>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
