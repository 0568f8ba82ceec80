//! Side sheet assigning the current selection to a draft issue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Draft issues are fetched when the sheet opens. Submitting requires one
//! issue and one block type; with no draft issues the form is replaced by a
//! blocking message. Success clears the selection, closes the sheet and
//! invalidates `Issues` and `ContentItems`. Failure leaves the sheet open.
//!
//! Choosing an issue fetches the blocks it already holds; those content items
//! become excluded in the selector and drop out of the selection.

use leptos::prelude::*;
use models::BlockType;

use crate::net::{api, query};
use crate::state::content_selector::ContentSelectorState;
use crate::state::newsletter_sheet::AddToNewsletterSheet as SheetState;
use crate::state::query_cache::{QueryCache, QueryKey, QueryScope, use_generation};
use crate::state::toast::ToastState;

#[component]
pub fn AddToNewsletterSheet(selector: RwSignal<ContentSelectorState>, sheet: RwSignal<SheetState>) -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let generation = use_generation(QueryScope::Issues);
    let is_open = Memo::new(move |_| sheet.with(|s| s.open));

    let drafts = LocalResource::new(move || {
        let open = is_open.get();
        generation.track();
        async move {
            if !open {
                return None;
            }
            Some(query::cached(cache, QueryKey::DraftIssues, api::fetch_draft_issues).await)
        }
    });
    let drafts_loaded = Signal::derive(move || drafts.get().flatten().is_some());
    let drafts_error = move || drafts.get().flatten().and_then(Result::err).map(|e| e.to_string());

    Effect::new(move || {
        if let Some(Some(Ok(issues))) = drafts.get() {
            sheet.update(|s| s.set_draft_issues(issues));
        }
    });

    let chosen_issue = Memo::new(move |_| sheet.with(|s| s.issue_id.clone()));
    let placed = LocalResource::new(move || {
        let issue_id = chosen_issue.get();
        generation.track();
        async move {
            let issue_id = issue_id?;
            let key = QueryKey::IssueBlocks(issue_id.clone());
            Some(query::cached(cache, key, move || async move { api::fetch_issue_blocks(&issue_id).await }).await)
        }
    });

    Effect::new(move || match placed.get() {
        Some(Some(Ok(blocks))) => {
            let ids = blocks.into_iter().map(|b| b.content_item_id).collect();
            selector.update(|s| s.set_excluded(ids));
        }
        Some(Some(Err(e))) => log::warn!("loading placed blocks failed: {e}"),
        Some(None) => selector.update(|s| s.set_excluded(Vec::new())),
        None => {}
    });

    let on_submit = Callback::new(move |()| {
        let selected = selector.with_untracked(|s| s.selected.clone());
        let Some((issue_id, request)) = sheet.try_update(|s| s.begin_submit(&selected)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use super::toast_stack::notify;
            use crate::state::query_cache::Mutation;
            use crate::state::toast::ToastKind;

            leptos::task::spawn_local(async move {
                match api::add_blocks(&issue_id, &request).await {
                    Ok(outcome) => {
                        sheet.update(SheetState::finish_success);
                        selector.update(ContentSelectorState::clear_selection);
                        cache.update(|c| c.apply(Mutation::AddBlocks));
                        let message = if outcome.skipped_count == 0 {
                            format!("Added {} items", outcome.created_count)
                        } else {
                            format!("Added {} items, skipped {}", outcome.created_count, outcome.skipped_count)
                        };
                        notify(toasts, ToastKind::Success, message);
                    }
                    Err(e) => {
                        log::warn!("adding blocks to issue {issue_id} failed: {e}");
                        sheet.update(SheetState::finish_failure);
                        notify(toasts, ToastKind::Error, format!("Could not add content: {e}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (issue_id, request, toasts);
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <aside class="sheet" role="dialog" aria-label="Add to newsletter">
                <header class="sheet__header">
                    <h2>"Add to newsletter"</h2>
                    <button class="sheet__close" aria-label="Close" on:click=move |_| sheet.update(SheetState::close)>
                        "✕"
                    </button>
                </header>
                <p class="sheet__summary">{move || selector.with(ContentSelectorState::selection_label)}</p>
                {move || {
                    if let Some(message) = drafts_error() {
                        return view! { <p class="sheet__error" role="alert">{format!("Failed to load draft issues: {message}")}</p> }
                            .into_any();
                    }
                    if !drafts_loaded.get() {
                        return view! { <p class="sheet__loading">"Loading draft issues..."</p> }.into_any();
                    }
                    match sheet.with(SheetState::blocking_message) {
                        Some(message) => view! { <p class="sheet__blocked">{message}</p> }.into_any(),
                        None => view! { <SheetForm selector=selector sheet=sheet on_submit=on_submit /> }.into_any(),
                    }
                }}
            </aside>
        </Show>
    }
}

#[component]
fn SheetForm(
    selector: RwSignal<ContentSelectorState>,
    sheet: RwSignal<SheetState>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let can_submit = move || {
        let count = selector.with(|s| s.selected.len());
        sheet.with(|s| s.can_submit(count))
    };

    view! {
        <label class="sheet__label">
            "Draft issue"
            <select
                class="input"
                prop:value=move || sheet.with(|s| s.issue_id.clone().unwrap_or_default())
                on:change=move |ev| sheet.update(|s| s.choose_issue(&event_target_value(&ev)))
            >
                <option value="">"Choose an issue"</option>
                {move || {
                    sheet
                        .with(|s| s.draft_issues.clone())
                        .into_iter()
                        .map(|issue| view! { <option value=issue.id.clone()>{issue.display_name()}</option> })
                        .collect_view()
                }}
            </select>
        </label>
        <label class="sheet__label">
            "Block type"
            <select
                class="input"
                prop:value=move || sheet.with(|s| s.block_type.map(BlockType::as_str).unwrap_or_default())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    sheet.update(|s| s.choose_block_type(value.parse().ok()));
                }
            >
                <option value="">"Choose a block type"</option>
                {BlockType::ALL
                    .iter()
                    .map(|ty| view! { <option value=ty.as_str()>{ty.label()}</option> })
                    .collect_view()}
            </select>
        </label>
        <button class="btn btn--primary" disabled=move || !can_submit() on:click=move |_| on_submit.run(())>
            {move || if sheet.with(|s| s.pending) { "Adding..." } else { "Add to issue" }}
        </button>
    }
}
