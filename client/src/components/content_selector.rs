//! Filterable, paginated content picker for newsletter assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filters and the page are rendered into a query string that doubles as the
//! `ContentItems` cache key. The resource tracks only that string, so ticking
//! a checkbox never refetches. Selection lives in the same
//! `ContentSelectorState` and is handed to `AddToNewsletterSheet`.

use leptos::prelude::*;
use models::{ContentItem, ContentType};

use super::list_status::ListStatus;
use super::pagination_bar::PaginationBar;
use crate::net::{api, query};
use crate::state::content_selector::{ContentSelectorState, ContentTypeFilter};
use crate::state::query_cache::{QueryCache, QueryScope, use_generation};
use crate::state::review_queue::fetched_view;

#[component]
pub fn ContentSelector(selector: RwSignal<ContentSelectorState>) -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let generation = use_generation(QueryScope::ContentItems);
    let query_string = Memo::new(move |_| selector.with(ContentSelectorState::query_string));

    let items = LocalResource::new(move || {
        query_string.track();
        generation.track();
        let (key, params) = selector.with_untracked(|s| (s.query_key(), s.query_params()));
        query::cached(cache, key, move || async move { api::fetch_content_items(&params).await })
    });

    let state = Signal::derive(move || {
        let fetched = items.get();
        fetched_view(fetched.as_ref().map(|r| r.as_ref().map(|p| p.items.as_slice())))
    });
    let info = Signal::derive(move || items.get().and_then(Result::ok).map(|p| p.info));
    let visible = move || items.get().and_then(Result::ok).map(|p| p.items).unwrap_or_default();

    let on_retry = Callback::new(move |()| cache.update(|c| c.invalidate(QueryScope::ContentItems)));
    let on_previous = Callback::new(move |()| selector.update(|s| s.set_page(s.page.saturating_sub(1))));
    let on_next = Callback::new(move |()| {
        if info.get_untracked().is_some_and(|i| i.has_next()) {
            selector.update(|s| s.set_page(s.page + 1));
        }
    });
    let on_select_all = move |_| {
        let ids: Vec<String> = visible().into_iter().map(|item| item.id).collect();
        selector.update(|s| s.select_all_visible(ids.iter().map(String::as_str)));
    };

    view! {
        <section class="content-selector">
            <div class="content-selector__filters">
                <input
                    class="input"
                    type="search"
                    placeholder="Search content"
                    prop:value=move || selector.with(|s| s.query.clone())
                    on:input=move |ev| selector.update(|s| s.set_query(event_target_value(&ev)))
                />
                <select
                    class="input"
                    prop:value=move || selector.with(|s| s.content_type.value())
                    on:change=move |ev| {
                        selector.update(|s| s.set_content_type(ContentTypeFilter::from_value(&event_target_value(&ev))));
                    }
                >
                    <option value="all">"All types"</option>
                    {ContentType::ALL
                        .iter()
                        .map(|ty| view! { <option value=ty.as_str()>{ty.label()}</option> })
                        .collect_view()}
                </select>
                <input
                    class="input"
                    placeholder="Topic tag"
                    prop:value=move || selector.with(|s| s.topic_tag.clone())
                    on:input=move |ev| selector.update(|s| s.set_topic_tag(event_target_value(&ev)))
                />
                <input
                    class="input"
                    placeholder="Framework tag"
                    prop:value=move || selector.with(|s| s.framework_tag.clone())
                    on:input=move |ev| selector.update(|s| s.set_framework_tag(event_target_value(&ev)))
                />
                <input
                    class="input"
                    type="date"
                    aria-label="Published from"
                    prop:value=move || selector.with(|s| s.date_from.clone())
                    on:change=move |ev| {
                        let from = event_target_value(&ev);
                        selector.update(|s| s.set_date_range(from, s.date_to.clone()));
                    }
                />
                <input
                    class="input"
                    type="date"
                    aria-label="Published to"
                    prop:value=move || selector.with(|s| s.date_to.clone())
                    on:change=move |ev| {
                        let to = event_target_value(&ev);
                        selector.update(|s| s.set_date_range(s.date_from.clone(), to));
                    }
                />
            </div>
            <div class="content-selector__selection">
                <span class="content-selector__count">{move || selector.with(ContentSelectorState::selection_label)}</span>
                <button class="btn" disabled=move || selector.with(ContentSelectorState::is_full) on:click=on_select_all>
                    "Select all visible"
                </button>
                <button
                    class="btn"
                    disabled=move || selector.with(|s| s.selected.is_empty())
                    on:click=move |_| selector.update(ContentSelectorState::clear_selection)
                >
                    "Clear"
                </button>
            </div>
            <ListStatus state=state noun="content" empty="No content matches these filters." on_retry=on_retry>
                <ul class="content-selector__items">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|item| view! { <ContentRow item=item selector=selector /> })
                            .collect_view()
                    }}
                </ul>
            </ListStatus>
            <PaginationBar info=info on_previous=on_previous on_next=on_next />
        </section>
    }
}

#[component]
fn ContentRow(item: ContentItem, selector: RwSignal<ContentSelectorState>) -> impl IntoView {
    let id = item.id.clone();
    let checked = {
        let id = id.clone();
        move || selector.with(|s| s.is_selected(&id))
    };
    let blocked = {
        let id = id.clone();
        move || selector.with(|s| (s.is_full() && !s.is_selected(&id)) || s.excluded.contains(&id))
    };
    let tags = item.topic_tags.iter().chain(&item.framework_tags).cloned().collect::<Vec<_>>().join(", ");

    view! {
        <li class="content-row" class:content-row--selected=checked.clone()>
            <label class="content-row__pick">
                <input
                    type="checkbox"
                    prop:checked=checked.clone()
                    disabled=blocked
                    on:change=move |_| selector.update(|s| s.toggle(&id))
                />
                <span class="content-row__title">{item.title}</span>
            </label>
            <a class="content-row__link" href=item.url target="_blank" rel="noopener noreferrer">
                "Open"
            </a>
            <span class="badge">{item.content_type.label()}</span>
            <span class="content-row__date">{crate::util::format::format_date(&item.publish_date).to_owned()}</span>
            <span class="content-row__trust">{format!("Trust {:.0}%", item.trust_score * 100.0)}</span>
            {item.summary.map(|summary| view! { <p class="content-row__summary">{summary}</p> })}
            <span class="content-row__tags">{tags}</span>
        </li>
    }
}
