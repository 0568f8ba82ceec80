//! Paginated newsletter configurations with create, edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is keyed on its page and the `NewsletterConfigs` generation.
//! Create and edit go through `ConfigurationForm`; delete asks for
//! confirmation first. All three invalidate the scope on success.

use leptos::prelude::*;
use models::NewsletterConfiguration;

use super::configuration_form::ConfigurationForm;
use super::list_status::ListStatus;
use super::pagination_bar::PaginationBar;
use crate::net::{api, query};
use crate::state::config_form::ConfigFormState;
use crate::state::query_cache::{QueryCache, QueryKey, QueryScope, use_generation};
use crate::state::review_queue::fetched_view;
use crate::state::toast::ToastState;

pub const CONFIG_PAGE_SIZE: u32 = 10;

#[component]
pub fn ConfigurationList() -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let generation = use_generation(QueryScope::NewsletterConfigs);
    let page = RwSignal::new(1_u32);
    let form = RwSignal::new(ConfigFormState::default());
    let confirm_delete = RwSignal::new(None::<NewsletterConfiguration>);
    let deleting = RwSignal::new(false);

    let configs = LocalResource::new(move || {
        let page = page.get();
        generation.track();
        let key = QueryKey::NewsletterConfigs { page, page_size: CONFIG_PAGE_SIZE };
        query::cached(cache, key, move || api::fetch_newsletter_configs(page, CONFIG_PAGE_SIZE))
    });

    let state = Signal::derive(move || {
        let fetched = configs.get();
        fetched_view(fetched.as_ref().map(|r| r.as_ref().map(|p| p.items.as_slice())))
    });
    let info = Signal::derive(move || configs.get().and_then(Result::ok).map(|p| p.info));
    let on_retry = Callback::new(move |()| cache.update(|c| c.invalidate(QueryScope::NewsletterConfigs)));
    let on_previous = Callback::new(move |()| page.update(|p| *p = p.saturating_sub(1).max(1)));
    let on_next = Callback::new(move |()| {
        if info.get_untracked().is_some_and(|i| i.has_next()) {
            page.update(|p| *p += 1);
        }
    });

    let on_delete = move || {
        let Some(target) = confirm_delete.get_untracked() else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        #[cfg(feature = "hydrate")]
        {
            use super::toast_stack::notify;
            use crate::state::query_cache::Mutation;
            use crate::state::toast::ToastKind;

            leptos::task::spawn_local(async move {
                match api::delete_newsletter_config(&target.id).await {
                    Ok(()) => {
                        confirm_delete.set(None);
                        cache.update(|c| c.apply(Mutation::DeleteNewsletterConfig));
                        notify(toasts, ToastKind::Success, format!("Deleted \"{}\"", target.name));
                    }
                    Err(e) => {
                        log::warn!("delete configuration {} failed: {e}", target.id);
                        notify(toasts, ToastKind::Error, format!("Delete failed: {e}"));
                    }
                }
                deleting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, toasts);
        }
    };

    view! {
        <section class="config-list">
            <header class="config-list__header">
                <h1>"Newsletter configurations"</h1>
                <button class="btn btn--primary" on:click=move |_| form.update(ConfigFormState::open_create)>
                    "+ New configuration"
                </button>
            </header>
            <ListStatus
                state=state
                noun="newsletter configurations"
                empty="No newsletter configurations yet."
                on_retry=on_retry
            >
                <table class="config-list__table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Schedule"</th>
                            <th>"Timezone"</th>
                            <th>"Blocks"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            configs
                                .get()
                                .and_then(Result::ok)
                                .map(|p| p.items)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|config| view! { <ConfigRow config=config form=form confirm_delete=confirm_delete /> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </ListStatus>
            <PaginationBar info=info on_previous=on_previous on_next=on_next />
            <ConfigurationForm form=form />
            {move || {
                confirm_delete
                    .get()
                    .map(|target| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| confirm_delete.set(None)>
                                <div class="dialog dialog--confirm" on:click=move |ev| ev.stop_propagation()>
                                    <p>{format!("Delete \"{}\"? This cannot be undone.", target.name)}</p>
                                    <div class="dialog__actions">
                                        <button class="btn" on:click=move |_| confirm_delete.set(None)>
                                            "Cancel"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            disabled=move || deleting.get()
                                            on:click=move |_| on_delete()
                                        >
                                            {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ConfigRow(
    config: NewsletterConfiguration,
    form: RwSignal<ConfigFormState>,
    confirm_delete: RwSignal<Option<NewsletterConfiguration>>,
) -> impl IntoView {
    let schedule = config.schedule_label();
    let active = config.is_active;
    let edit_target = config.clone();
    let delete_target = config.clone();

    view! {
        <tr class="config-list__row">
            <td>
                <span class="config-list__name">{config.name}</span>
                {config.description.map(|d| view! { <span class="config-list__description">{d}</span> })}
            </td>
            <td>{schedule}</td>
            <td>{config.timezone}</td>
            <td>{config.max_blocks}</td>
            <td>
                <span class="badge" class:badge--active=active class:badge--inactive=!active>
                    {if active { "Active" } else { "Inactive" }}
                </span>
            </td>
            <td class="config-list__actions">
                <button class="btn" on:click=move |_| form.update(|f| f.open_edit(&edit_target))>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| confirm_delete.set(Some(delete_target.clone()))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
