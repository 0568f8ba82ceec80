//! Role dropdown per user and the confirmation dialog behind it.
//!
//! Choosing the user's current role does nothing. Any other role opens a
//! dialog naming both roles with their permission levels; only a confirmed
//! change is sent. Success invalidates `Users`.

use leptos::prelude::*;
use models::{AdminUser, UserRole};

use crate::state::query_cache::QueryCache;
use crate::state::role_selector::RoleSelectorState;
use crate::state::toast::ToastState;

#[component]
pub fn RoleSelector(user: AdminUser, roles: RwSignal<RoleSelectorState>) -> impl IntoView {
    let current = user.role;
    let user_id = user.id;
    let saving = {
        let user_id = user_id.clone();
        move || roles.with(|r| r.saving.as_deref() == Some(user_id.as_str()))
    };

    view! {
        <select
            class="input role-selector"
            class:role-selector--saving=saving
            aria-label="Role"
            disabled=move || roles.with(RoleSelectorState::is_locked)
            prop:value=move || {
                roles.track();
                current.as_str()
            }
            on:change=move |ev| {
                let Ok(target) = event_target_value(&ev).parse::<UserRole>() else {
                    return;
                };
                roles.update(|r| {
                    r.choose(&user_id, current, target);
                });
            }
        >
            {UserRole::ALL
                .into_iter()
                .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                .collect_view()}
        </select>
    }
}

/// Confirmation dialog for the pending change in `roles`.
#[component]
pub fn RoleChangeDialog(roles: RwSignal<RoleSelectorState>) -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_confirm = move || {
        let Some(change) = roles.try_update(RoleSelectorState::confirm).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use super::toast_stack::notify;
            use crate::state::query_cache::Mutation;
            use crate::state::toast::ToastKind;

            leptos::task::spawn_local(async move {
                match crate::net::api::update_user_role(&change.user_id, change.target).await {
                    Ok(user) => {
                        cache.update(|c| c.apply(Mutation::UpdateUserRole));
                        notify(toasts, ToastKind::Success, format!("{} is now {}", user.name, user.role.label()));
                    }
                    Err(e) => {
                        log::warn!("role change for {} failed: {e}", change.user_id);
                        notify(toasts, ToastKind::Error, format!("Role change failed: {e}"));
                    }
                }
                roles.update(RoleSelectorState::finish);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (change, cache, toasts);
        }
    };

    view! {
        {move || {
            roles
                .with(|r| r.pending_change.clone())
                .map(|change| {
                    view! {
                        <div class="dialog-backdrop" on:click=move |_| roles.update(RoleSelectorState::cancel)>
                            <div class="dialog dialog--confirm" on:click=move |ev| ev.stop_propagation()>
                                <h2 class="dialog__title">"Confirm role change"</h2>
                                <p>{change.summary()}</p>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=move |_| roles.update(RoleSelectorState::cancel)>
                                        "Cancel"
                                    </button>
                                    <button class="btn btn--primary" on:click=move |_| on_confirm()>
                                        "Change role"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
