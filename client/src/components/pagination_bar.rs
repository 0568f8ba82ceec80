//! Previous/next controls driven by server page metadata.

use leptos::prelude::*;
use models::PageInfo;

use crate::state::review_queue::PageControls;
use crate::util::format::format_count;

/// Hidden until the first page has loaded.
#[component]
pub fn PaginationBar(
    #[prop(into)] info: Signal<Option<PageInfo>>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    move || {
        info.get().map(|info| {
            let controls = PageControls::from_info(&info);
            view! {
                <nav class="pagination" aria-label="Pagination">
                    <button class="btn" disabled=!controls.can_previous on:click=move |_| on_previous.run(())>
                        "Previous"
                    </button>
                    <span class="pagination__label">{controls.label}</span>
                    <span class="pagination__total">{format!("{} total", format_count(info.total))}</span>
                    <button class="btn" disabled=!controls.can_next on:click=move |_| on_next.run(())>
                        "Next"
                    </button>
                </nav>
            }
        })
    }
}
