//! Newsletter content selection page.
//!
//! Pairs the content selector with the add-to-newsletter sheet and lists the
//! configured content sources with their health.

use leptos::prelude::*;
use models::newsletter::MAX_BULK_ITEMS;

use crate::components::add_to_newsletter_sheet::AddToNewsletterSheet;
use crate::components::content_selector::ContentSelector;
use crate::net::{api, query};
use crate::state::content_selector::ContentSelectorState;
use crate::state::newsletter_sheet::AddToNewsletterSheet as SheetState;
use crate::state::query_cache::{QueryCache, QueryKey, QueryScope, use_generation};

#[component]
pub fn NewsletterContentPage() -> impl IntoView {
    let selector = RwSignal::new(ContentSelectorState::new(Some(MAX_BULK_ITEMS)));
    let sheet = RwSignal::new(SheetState::default());

    view! {
        <div class="newsletter-content-page">
            <header class="page-header">
                <h1>"Newsletter content"</h1>
                <button
                    class="btn btn--primary"
                    disabled=move || selector.with(|s| s.selected.is_empty())
                    on:click=move |_| sheet.update(SheetState::open)
                >
                    "Add to newsletter"
                </button>
            </header>
            <div class="newsletter-content-page__body">
                <ContentSelector selector=selector />
                <ContentSources />
            </div>
            <AddToNewsletterSheet selector=selector sheet=sheet />
        </div>
    }
}

#[component]
fn ContentSources() -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let generation = use_generation(QueryScope::ContentSources);
    let sources = LocalResource::new(move || {
        generation.track();
        query::cached(cache, QueryKey::ContentSources, api::fetch_content_sources)
    });
    let on_retry = move |_| cache.update(|c| c.invalidate(QueryScope::ContentSources));

    view! {
        <aside class="content-sources">
            <h2>"Sources"</h2>
            {move || match sources.get() {
                None => view! { <p class="list-status list-status--loading">"Loading sources..."</p> }.into_any(),
                Some(Err(e)) => view! {
                    <div class="list-status list-status--error" role="alert">
                        <p class="list-status__title">"Failed to load sources"</p>
                        <p class="list-status__detail">{e.to_string()}</p>
                        <button class="btn" on:click=on_retry>
                            "Retry"
                        </button>
                    </div>
                }
                .into_any(),
                Some(Ok(list)) => view! {
                    <ul class="content-sources__list">
                        {list
                            .into_iter()
                            .map(|source| {
                                let failing = source.error_count > 0;
                                view! {
                                    <li class="content-sources__item" class:content-sources__item--failing=failing>
                                        <span class="content-sources__name">{source.name}</span>
                                        <span class="badge">{source.source_type.label()}</span>
                                        <span class="content-sources__trust">
                                            {format!("Trust {:.0}%", source.trust_score * 100.0)}
                                        </span>
                                        {source.last_error.map(|err| view! { <span class="content-sources__error">{err}</span> })}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </aside>
    }
}
