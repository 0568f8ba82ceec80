//! Modal dialog collecting a rejection reason.

use leptos::prelude::*;
use models::RejectRequest;
use models::article::MAX_REJECT_REASON;

use crate::state::approval::RejectDialogState;

/// Dialog shown while `state` has an article open.
///
/// The reason is validated on submit; an invalid reason keeps the dialog open
/// with the message inline and sends nothing.
#[component]
pub fn RejectDialog(
    state: RwSignal<RejectDialogState>,
    on_submit: Callback<(String, RejectRequest)>,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    let on_cancel = move || state.update(RejectDialogState::close);
    let submit = move || {
        if let Some(request) = state.try_update(RejectDialogState::submit).flatten() {
            on_submit.run(request);
        }
    };

    view! {
        <Show when=move || state.with(RejectDialogState::is_open)>
            <div class="dialog-backdrop" on:click=move |_| on_cancel()>
                <div class="dialog dialog--reject" on:click=move |ev| ev.stop_propagation()>
                    <h2 class="dialog__title">"Reject article"</h2>
                    <label class="dialog__label">
                        "Reason"
                        <textarea
                            class="dialog__textarea"
                            prop:value=move || state.get().reason
                            on:input=move |ev| state.update(|s| s.set_reason(event_target_value(&ev)))
                            autofocus=true
                        ></textarea>
                    </label>
                    <div class="dialog__hint">
                        {move || format!("{}/{MAX_REJECT_REASON}", state.with(|s| s.reason.trim().chars().count()))}
                    </div>
                    {move || state.get().error.map(|err| view! { <p class="dialog__error">{err}</p> })}
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel()>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" disabled=move || pending.get() on:click=move |_| submit()>
                            {move || if pending.get() { "Rejecting..." } else { "Reject" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
