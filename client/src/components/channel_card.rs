//! Card for one connected (or failed) publishing channel.

use leptos::prelude::*;
use models::Channel;

use crate::util::format::{format_count, format_date, format_rate};

/// Status, health and stats as reported by the backend, plus Disconnect.
#[component]
pub fn ChannelCard(
    channel: Channel,
    on_disconnect: Callback<String>,
    #[prop(into)] disconnecting: Signal<bool>,
) -> impl IntoView {
    let id = channel.id.clone();
    let connected = channel.status.is_connected();
    let stats = channel.stats;
    let last_post = stats.last_post_date.as_deref().map_or_else(|| "Never".to_owned(), |d| format_date(d).to_owned());

    view! {
        <article class=format!("channel-card channel-card--{}", channel.channel_type.as_str())>
            <header class="channel-card__header">
                <span class="channel-card__type">{channel.channel_type.label()}</span>
                <span class="channel-card__account">{channel.account_name}</span>
                <span class=format!("badge badge--{}", channel.status.as_str())>{channel.status.as_str()}</span>
                <span class=format!("badge badge--health-{}", channel.health.as_str())>{channel.health.as_str()}</span>
            </header>
            <dl class="channel-card__stats">
                <dt>"Posts"</dt>
                <dd>{format_count(stats.posts_published)}</dd>
                <dt>"Engagement"</dt>
                <dd>{format_count(stats.total_engagement)}</dd>
                <dt>"Impressions"</dt>
                <dd>{format_count(stats.total_impressions)}</dd>
                <dt>"Engagement rate"</dt>
                <dd>{format_rate(stats.avg_engagement_rate)}</dd>
                <dt>"Last post"</dt>
                <dd>{last_post}</dd>
            </dl>
            {channel.last_error.map(|err| view! { <p class="channel-card__error" role="alert">{err}</p> })}
            <Show when=move || connected>
                <button
                    class="btn channel-card__disconnect"
                    disabled=move || disconnecting.get()
                    on:click={
                        let id = id.clone();
                        move |_| on_disconnect.run(id.clone())
                    }
                >
                    {move || if disconnecting.get() { "Disconnecting..." } else { "Disconnect" }}
                </button>
            </Show>
        </article>
    }
}
