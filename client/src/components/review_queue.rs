//! Paginated queue of articles awaiting review. Approved, rejected and
//! released articles are filtered out by the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The queue resource is keyed on the requested page and on the `Articles`
//! scope generation, so an approve or reject anywhere in the app refetches
//! the current page. Paging changes the request; lists are never sliced
//! locally.

use leptos::prelude::*;
use models::Article;

use super::approve_reject_buttons::use_approval_actions;
use super::content_review_card::ContentReviewCard;
use super::list_status::ListStatus;
use super::pagination_bar::PaginationBar;
use super::reject_dialog::RejectDialog;
use crate::net::{api, query};
use crate::state::approval::PendingActions;
use crate::state::query_cache::{QueryCache, QueryScope, use_generation};
use crate::state::review_queue::{DEFAULT_PAGE_SIZE, QUEUE_FILTER, ReviewQueueState, fetched_view};

#[component]
pub fn ReviewQueue(#[prop(optional)] page_size: Option<u32>) -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let pending = expect_context::<RwSignal<PendingActions>>();
    let queue = RwSignal::new(ReviewQueueState::new(1, page_size.unwrap_or(DEFAULT_PAGE_SIZE)));
    let generation = use_generation(QueryScope::Articles);
    let actions = use_approval_actions();

    let articles = LocalResource::new(move || {
        let request = queue.get();
        generation.track();
        query::cached(cache, request.query_key(), move || {
            api::fetch_articles(request.page, request.page_size, QUEUE_FILTER)
        })
    });

    let state = Signal::derive(move || {
        let fetched = articles.get();
        fetched_view(fetched.as_ref().map(|r| r.as_ref().map(|page| page.items.as_slice())))
    });
    let info = Signal::derive(move || articles.get().and_then(Result::ok).map(|page| page.info));
    let items = move || articles.get().and_then(Result::ok).map(|page| page.items).unwrap_or_default();

    let on_retry = Callback::new(move |()| cache.update(|c| c.invalidate(QueryScope::Articles)));
    let on_previous = Callback::new(move |()| {
        queue.update(|q| {
            q.previous_page();
        });
    });
    let on_next = Callback::new(move |()| {
        let Some(current) = info.get_untracked() else {
            return;
        };
        queue.update(|q| {
            q.next_page(&current);
        });
    });
    let reject_pending = Signal::derive(move || {
        let open = actions.reject_dialog.with(|d| d.article_id.clone());
        open.is_some_and(|id| pending.with(|p| p.is_rejecting(&id)))
    });

    view! {
        <section class="review-queue">
            <ListStatus state=state noun="articles" empty="No articles awaiting review." on_retry=on_retry>
                <div class="review-queue__list">
                    {move || {
                        items()
                            .into_iter()
                            .map(|article: Article| {
                                view! {
                                    <ContentReviewCard
                                        article=article
                                        on_approve=actions.approve
                                        on_reject=actions.open_reject
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </ListStatus>
            <PaginationBar info=info on_previous=on_previous on_next=on_next />
            <RejectDialog state=actions.reject_dialog on_submit=actions.submit_reject pending=reject_pending />
        </section>
    }
}
