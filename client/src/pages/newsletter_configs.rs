//! Newsletter configuration management page.

use leptos::prelude::*;

use crate::components::configuration_list::ConfigurationList;

#[component]
pub fn NewsletterConfigsPage() -> impl IntoView {
    view! {
        <div class="newsletter-configs-page">
            <ConfigurationList />
        </div>
    }
}
