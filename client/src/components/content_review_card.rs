//! One article in the review queue.

use leptos::prelude::*;
use models::Article;

use super::approve_reject_buttons::ApproveRejectButtons;
use super::gate_progress::GateProgress;
use crate::state::approval::PendingActions;
use crate::util::format::format_date;

/// Article summary with its AI triage fields, gate progress and actions.
///
/// Buttons stay disabled once the article has left the pending gates.
#[component]
pub fn ContentReviewCard(article: Article, on_approve: Callback<String>, on_reject: Callback<String>) -> impl IntoView {
    let pending = expect_context::<RwSignal<PendingActions>>();

    let is_approving = {
        let id = article.id.clone();
        Signal::derive(move || pending.with(|p| p.is_approving(&id)))
    };
    let is_rejecting = {
        let id = article.id.clone();
        Signal::derive(move || pending.with(|p| p.is_rejecting(&id)))
    };
    let href = format!("/articles/{}", article.id);
    let confidence = article.confidence_label();
    let terminal = !article.approval_status.is_pending();
    let cves = article.cves.join(", ");
    let has_cves = !article.cves.is_empty();

    view! {
        <article class="review-card" class:review-card--rejected=article.rejected>
            <header class="review-card__header">
                <a class="review-card__title" href=href>
                    {article.title}
                </a>
                {article
                    .ai_severity
                    .map(|severity| {
                        view! {
                            <span class=format!("badge badge--{}", severity.as_str())>{severity.label()}</span>
                        }
                    })}
            </header>
            {article.summary.map(|summary| view! { <p class="review-card__summary">{summary}</p> })}
            <dl class="review-card__meta">
                {article
                    .ai_category
                    .map(|category| {
                        view! {
                            <dt>"Category"</dt>
                            <dd>{category}</dd>
                        }
                    })}
                {confidence
                    .map(|label| {
                        view! {
                            <dt>"Confidence"</dt>
                            <dd>{label}</dd>
                        }
                    })}
                <Show when=move || has_cves>
                    <dt>"CVEs"</dt>
                    <dd class="review-card__cves">{cves.clone()}</dd>
                </Show>
                <dt>"Created"</dt>
                <dd>{format_date(&article.created_at).to_owned()}</dd>
            </dl>
            <div class="review-card__status">
                <span class="review-card__status-label">{article.approval_status.label()}</span>
                {article.approval_progress.map(|progress| view! { <GateProgress progress=progress compact=true /> })}
            </div>
            <ApproveRejectButtons
                article_id=article.id
                on_approve=on_approve
                on_reject=on_reject
                is_approving=is_approving
                is_rejecting=is_rejecting
                disabled=terminal
            />
        </article>
    }
}
