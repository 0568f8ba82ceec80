//! Publishing channels page.

use leptos::prelude::*;

use crate::components::channel_hub::ChannelHub;

#[component]
pub fn ChannelsPage() -> impl IntoView {
    view! {
        <div class="channels-page">
            <header class="page-header">
                <h1>"Channels"</h1>
            </header>
            <ChannelHub />
        </div>
    }
}
