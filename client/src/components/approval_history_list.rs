//! Audit trail of cleared gates, plus rejection details when present.

use leptos::prelude::*;
use models::ApprovalHistory;

use crate::util::format::format_datetime;

#[component]
pub fn ApprovalHistoryList(history: ApprovalHistory) -> impl IntoView {
    let has_approvals = !history.approvals.is_empty();
    let entries = history
        .approvals
        .into_iter()
        .map(|entry| {
            view! {
                <li class="approval-history__entry">
                    <span class="approval-history__gate">{entry.gate.label()}</span>
                    <span class="approval-history__who">{entry.approved_by.name}</span>
                    <time class="approval-history__when" datetime=entry.approved_at.clone()>
                        {format_datetime(&entry.approved_at)}
                    </time>
                    {entry.notes.map(|notes| view! { <p class="approval-history__notes">{notes}</p> })}
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="approval-history">
            <h2 class="approval-history__title">"Approval history"</h2>
            {history
                .rejection_details
                .map(|details| {
                    view! {
                        <div class="approval-history__rejection" role="note">
                            <strong>{format!("Rejected by {}", details.rejected_by.name)}</strong>
                            <time datetime=details.rejected_at.clone()>{format_datetime(&details.rejected_at)}</time>
                            <p>{details.reason}</p>
                        </div>
                    }
                })}
            {if has_approvals {
                view! { <ol class="approval-history__entries">{entries}</ol> }.into_any()
            } else {
                view! { <p class="approval-history__empty">"No gates cleared yet."</p> }.into_any()
            }}
        </section>
    }
}
