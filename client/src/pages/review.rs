//! Review queue page.

use leptos::prelude::*;

use crate::components::review_queue::ReviewQueue;

#[component]
pub fn ReviewPage() -> impl IntoView {
    view! {
        <div class="review-page">
            <header class="page-header">
                <h1>"Content review"</h1>
                <p class="page-header__subtitle">"Articles move through marketing, branding, SOC L1, SOC L3 and CISO."</p>
            </header>
            <ReviewQueue />
        </div>
    }
}
