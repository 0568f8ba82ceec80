//! Approve/reject controls, release/reset, and the mutations behind them.
//!
//! SYSTEM CONTEXT
//! ==============
//! The queue and the article page share `use_approval_actions`, which owns
//! the reject dialog signal and fires one request per click. Gate sequencing
//! is left to the backend: the client never checks which gate an approval
//! lands on, and success only invalidates the `Articles` scope so every
//! article view refetches the server's new status.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as error toasts; the buttons re-enable once the response
//! (success or failure) arrives.

use leptos::prelude::*;
use models::RejectRequest;

use crate::state::approval::{FollowUp, PendingActions, RejectDialogState, buttons_disabled};
use crate::state::query_cache::QueryCache;
use crate::state::toast::ToastState;

/// Handlers returned by `use_approval_actions`.
#[derive(Clone, Copy)]
pub struct ApprovalActions {
    pub approve: Callback<String>,
    pub open_reject: Callback<String>,
    pub submit_reject: Callback<(String, RejectRequest)>,
    pub settle: Callback<(String, FollowUp)>,
    pub reject_dialog: RwSignal<RejectDialogState>,
}

/// Wire approve/reject to the API, the pending set, the cache and toasts.
pub fn use_approval_actions() -> ApprovalActions {
    let pending = expect_context::<RwSignal<PendingActions>>();
    let cache = expect_context::<RwSignal<QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let reject_dialog = RwSignal::new(RejectDialogState::default());

    let approve = Callback::new(move |article_id: String| {
        if !pending.try_update(|p| p.begin_approve(&article_id)).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast_stack::notify;
            use crate::state::query_cache::Mutation;
            use crate::state::toast::ToastKind;

            leptos::task::spawn_local(async move {
                let result = crate::net::api::approve_article(&article_id, &models::ApproveRequest::default()).await;
                pending.update(|p| p.finish(&article_id));
                match result {
                    Ok(outcome) => {
                        log::info!("article {} now {}", outcome.id, outcome.approval_status.as_str());
                        cache.update(|c| c.apply(Mutation::ApproveArticle));
                        notify(toasts, ToastKind::Success, format!("Approved. Status: {}", outcome.approval_status.label()));
                    }
                    Err(e) => {
                        log::warn!("approve {article_id} failed: {e}");
                        notify(toasts, ToastKind::Error, format!("Approval failed: {e}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (cache, toasts);
        }
    });

    let open_reject = Callback::new(move |article_id: String| {
        reject_dialog.update(|d| d.open(&article_id));
    });

    let submit_reject = Callback::new(move |(article_id, request): (String, RejectRequest)| {
        if !pending.try_update(|p| p.begin_reject(&article_id)).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast_stack::notify;
            use crate::state::query_cache::Mutation;
            use crate::state::toast::ToastKind;

            leptos::task::spawn_local(async move {
                let result = crate::net::api::reject_article(&article_id, &request).await;
                pending.update(|p| p.finish(&article_id));
                match result {
                    Ok(_) => {
                        reject_dialog.update(RejectDialogState::close);
                        cache.update(|c| c.apply(Mutation::RejectArticle));
                        notify(toasts, ToastKind::Success, "Article rejected");
                    }
                    Err(e) => {
                        log::warn!("reject {article_id} failed: {e}");
                        notify(toasts, ToastKind::Error, format!("Rejection failed: {e}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    let settle = Callback::new(move |(article_id, follow_up): (String, FollowUp)| {
        if !pending.try_update(|p| p.begin_settle(&article_id)).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast_stack::notify;
            use crate::state::query_cache::Mutation;
            use crate::state::toast::ToastKind;

            leptos::task::spawn_local(async move {
                let (result, mutation) = match follow_up {
                    FollowUp::Release => (crate::net::api::release_article(&article_id).await, Mutation::ReleaseArticle),
                    FollowUp::Reset => (crate::net::api::reset_article(&article_id).await, Mutation::ResetArticle),
                };
                pending.update(|p| p.finish(&article_id));
                match result {
                    Ok(outcome) => {
                        log::info!("article {} now {}", outcome.id, outcome.approval_status.as_str());
                        cache.update(|c| c.apply(mutation));
                        notify(toasts, ToastKind::Success, follow_up.done_message());
                    }
                    Err(e) => {
                        log::warn!("{follow_up:?} {article_id} failed: {e}");
                        notify(toasts, ToastKind::Error, format!("{} failed: {e}", follow_up.label(false)));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = follow_up;
        }
    });

    ApprovalActions { approve, open_reject, submit_reject, settle, reject_dialog }
}

/// Release or reset button for an article that has left the gates.
#[component]
pub fn FollowUpButton(
    article_id: String,
    follow_up: FollowUp,
    on_click: Callback<(String, FollowUp)>,
    #[prop(into)] in_flight: Signal<bool>,
) -> impl IntoView {
    let class = match follow_up {
        FollowUp::Release => "btn btn--primary approval-actions__release",
        FollowUp::Reset => "btn approval-actions__reset",
    };
    view! {
        <div class="approval-actions">
            <button
                class=class
                disabled=move || in_flight.get()
                on:click=move |_| on_click.run((article_id.clone(), follow_up))
            >
                {move || follow_up.label(in_flight.get())}
            </button>
        </div>
    }
}

#[component]
pub fn ApproveRejectButtons(
    article_id: String,
    on_approve: Callback<String>,
    on_reject: Callback<String>,
    #[prop(into)] is_approving: Signal<bool>,
    #[prop(into)] is_rejecting: Signal<bool>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let locked = Signal::derive(move || {
        buttons_disabled(is_approving.get(), is_rejecting.get(), disabled.get().unwrap_or(false))
    });
    let approve_id = article_id.clone();
    let reject_id = article_id;

    view! {
        <div class="approval-actions">
            <button
                class="btn btn--primary approval-actions__approve"
                disabled=move || locked.get()
                on:click=move |_| on_approve.run(approve_id.clone())
            >
                {move || if is_approving.get() { "Approving..." } else { "Approve" }}
            </button>
            <button
                class="btn btn--danger approval-actions__reject"
                disabled=move || locked.get()
                on:click=move |_| on_reject.run(reject_id.clone())
            >
                {move || if is_rejecting.get() { "Rejecting..." } else { "Reject" }}
            </button>
        </div>
    }
}
