//! Toast notifications for mutation outcomes.
//!
//! DESIGN
//! ======
//! `notify` is the only writer. In the browser each toast dismisses itself
//! after `TOAST_TIMEOUT_MS`; the close button dismisses early.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const TOAST_TIMEOUT_MS: u32 = 5_000;

/// Queue a toast on the context `ToastState`.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast toast--{}", toast.kind.modifier())>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
