//! Loading, error and empty panels shared by every list.

use leptos::prelude::*;

use crate::state::review_queue::ListView;

/// Renders the non-populated list states, or `children` when populated.
///
/// The error panel reads "Failed to load {noun}" and offers Retry, which
/// re-runs the same fetch.
#[component]
pub fn ListStatus(
    #[prop(into)] state: Signal<ListView>,
    noun: &'static str,
    empty: &'static str,
    on_retry: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    move || match state.get() {
        ListView::Loading => view! { <p class="list-status list-status--loading">{format!("Loading {noun}...")}</p> }
            .into_any(),
        ListView::Error(message) => view! {
            <div class="list-status list-status--error" role="alert">
                <p class="list-status__title">{format!("Failed to load {noun}")}</p>
                <p class="list-status__detail">{message}</p>
                <button class="btn" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </div>
        }
        .into_any(),
        ListView::Empty => view! { <p class="list-status list-status--empty">{empty}</p> }.into_any(),
        ListView::Populated => children().into_any(),
    }
}
