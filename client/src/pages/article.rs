//! Article detail page with gate progress, actions and approval history.
//!
//! Both resources are keyed on the `Articles` generation, so an approve or
//! reject, release or reset from this page refetches the article and its
//! history together. Retry on either panel invalidates the same scope.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::ApprovalStatus;

use crate::components::approval_history_list::ApprovalHistoryList;
use crate::components::approve_reject_buttons::{ApproveRejectButtons, FollowUpButton, use_approval_actions};
use crate::components::gate_progress::GateProgress;
use crate::components::reject_dialog::RejectDialog;
use crate::net::{api, query};
use crate::state::approval::{FollowUp, PendingActions};
use crate::state::query_cache::{QueryCache, QueryKey, QueryScope, use_generation};

#[component]
pub fn ArticlePage() -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let pending = expect_context::<RwSignal<PendingActions>>();
    let params = use_params_map();
    let article_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let generation = use_generation(QueryScope::Articles);
    let actions = use_approval_actions();

    let article = LocalResource::new(move || {
        let id = article_id.get();
        generation.track();
        query::cached(cache, QueryKey::Article(id.clone()), move || async move { api::fetch_article(&id).await })
    });
    let history = LocalResource::new(move || {
        let id = article_id.get();
        generation.track();
        query::cached(cache, QueryKey::ApprovalHistory(id.clone()), move || async move {
            api::fetch_approval_history(&id).await
        })
    });

    let is_approving = Signal::derive(move || pending.with(|p| p.is_approving(&article_id.get())));
    let is_rejecting = Signal::derive(move || pending.with(|p| p.is_rejecting(&article_id.get())));
    let is_settling = Signal::derive(move || pending.with(|p| p.is_settling(&article_id.get())));
    let on_retry = move |_| cache.update(|c| c.invalidate(QueryScope::Articles));

    view! {
        <div class="article-page">
            <a class="article-page__back" href="/">
                "← Back to queue"
            </a>
            {move || match article.get() {
                None => view! { <p class="list-status list-status--loading">"Loading article..."</p> }.into_any(),
                Some(Err(e)) => view! {
                    <div class="list-status list-status--error" role="alert">
                        <p class="list-status__title">"Failed to load article"</p>
                        <p class="list-status__detail">{e.to_string()}</p>
                        <button class="btn" on:click=on_retry>
                            "Retry"
                        </button>
                    </div>
                }
                .into_any(),
                Some(Ok(article)) => {
                    let terminal = !article.approval_status.is_pending();
                    let status = article.approval_status;
                    view! {
                        <article class="article-detail">
                            <header class="article-detail__header">
                                <h1>{article.title}</h1>
                                <span class="article-detail__status">{status.label()}</span>
                                {article
                                    .ai_severity
                                    .map(|s| view! { <span class=format!("badge badge--{}", s.as_str())>{s.label()}</span> })}
                            </header>
                            {article.approval_progress.map(|progress| view! { <GateProgress progress=progress /> })}
                            <Show when=move || status == ApprovalStatus::Rejected>
                                <p class="article-detail__rejected">"This article was rejected."</p>
                            </Show>
                            {FollowUp::for_status(status)
                                .map(|follow_up| {
                                    view! {
                                        <FollowUpButton
                                            article_id=article.id.clone()
                                            follow_up=follow_up
                                            on_click=actions.settle
                                            in_flight=is_settling
                                        />
                                    }
                                })}
                            <ApproveRejectButtons
                                article_id=article.id
                                on_approve=actions.approve
                                on_reject=actions.open_reject
                                is_approving=is_approving
                                is_rejecting=is_rejecting
                                disabled=terminal
                            />
                            {article.summary.map(|s| view! { <p class="article-detail__summary">{s}</p> })}
                            <div class="article-detail__content">{article.content}</div>
                        </article>
                    }
                    .into_any()
                }
            }}
            {move || match history.get() {
                Some(Ok(history)) => view! { <ApprovalHistoryList history=history /> }.into_any(),
                Some(Err(e)) => view! {
                    <div class="list-status list-status--error" role="alert">
                        <p class="list-status__title">"Failed to load approval history"</p>
                        <p class="list-status__detail">{e.to_string()}</p>
                        <button class="btn" on:click=on_retry>
                            "Retry"
                        </button>
                    </div>
                }
                .into_any(),
                None => ().into_any(),
            }}
            <RejectDialog state=actions.reject_dialog on_submit=actions.submit_reject pending=is_rejecting />
        </div>
    }
}
