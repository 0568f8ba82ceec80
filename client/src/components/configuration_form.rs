//! Create/edit dialog for newsletter configurations.
//!
//! Every field is validated inline on submit and nothing is sent while any
//! field has an error. Saving invalidates `NewsletterConfigs`.

use leptos::prelude::*;
use models::newsletter::{Cadence, WEEKDAYS};

use crate::state::config_form::ConfigFormState;
use crate::state::query_cache::QueryCache;
use crate::state::toast::ToastState;

fn field_error(form: RwSignal<ConfigFormState>, field: &'static str) -> impl IntoView {
    move || form.with(|f| f.error_for(field)).map(|message| view! { <p class="form__error">{message}</p> })
}

#[component]
pub fn ConfigurationForm(form: RwSignal<ConfigFormState>) -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_cancel = move || form.update(ConfigFormState::close);
    let on_save = move || {
        let Some((id, body)) = form.try_update(ConfigFormState::submit).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            use super::toast_stack::notify;
            use crate::net::api;
            use crate::state::query_cache::Mutation;
            use crate::state::toast::ToastKind;

            leptos::task::spawn_local(async move {
                let (result, mutation) = match &id {
                    Some(id) => (api::update_newsletter_config(id, &body).await, Mutation::UpdateNewsletterConfig),
                    None => (api::create_newsletter_config(&body).await, Mutation::CreateNewsletterConfig),
                };
                match result {
                    Ok(saved) => {
                        form.update(ConfigFormState::close);
                        cache.update(|c| c.apply(mutation));
                        notify(toasts, ToastKind::Success, format!("Saved \"{}\"", saved.name));
                    }
                    Err(e) => {
                        log::warn!("saving newsletter configuration failed: {e}");
                        form.update(ConfigFormState::finish_failure);
                        notify(toasts, ToastKind::Error, format!("Save failed: {e}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, body, cache, toasts);
        }
    };

    view! {
        <Show when=move || form.with(ConfigFormState::is_open)>
            <div class="dialog-backdrop" on:click=move |_| on_cancel()>
                <div class="dialog dialog--config" on:click=move |ev| ev.stop_propagation()>
                    <h2 class="dialog__title">{move || form.with(ConfigFormState::title)}</h2>
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="input"
                            prop:value=move || form.with(|f| f.input.name.clone())
                            on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                        />
                    </label>
                    {field_error(form, "name")}
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__textarea"
                            prop:value=move || form.with(|f| f.input.description.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.set_description(event_target_value(&ev)))
                        ></textarea>
                    </label>
                    {field_error(form, "description")}
                    <label class="dialog__label">
                        "Cadence"
                        <select
                            class="input"
                            prop:value=move || form.with(|f| f.input.cadence.as_str())
                            on:change=move |ev| form.update(|f| f.set_cadence(&event_target_value(&ev)))
                        >
                            {Cadence::ALL
                                .iter()
                                .map(|cadence| view! { <option value=cadence.as_str()>{cadence.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Send day"
                        <select
                            class="input"
                            prop:value=move || {
                                form.with(|f| f.input.send_day_of_week.map(|d| d.to_string()).unwrap_or_default())
                            }
                            on:change=move |ev| form.update(|f| f.set_send_day(&event_target_value(&ev)))
                        >
                            <option value="">"No fixed day"</option>
                            {WEEKDAYS
                                .iter()
                                .enumerate()
                                .map(|(index, day)| view! { <option value=index.to_string()>{*day}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    {field_error(form, "send_day_of_week")}
                    <label class="dialog__label">
                        "Timezone"
                        <input
                            class="input"
                            prop:value=move || form.with(|f| f.input.timezone.clone())
                            on:input=move |ev| form.update(|f| f.set_timezone(event_target_value(&ev)))
                        />
                    </label>
                    {field_error(form, "timezone")}
                    <label class="dialog__label">
                        "Max blocks"
                        <input
                            class="input"
                            type="number"
                            min="1"
                            max="10"
                            prop:value=move || form.with(|f| f.input.max_blocks.to_string())
                            on:input=move |ev| form.update(|f| f.set_max_blocks(&event_target_value(&ev)))
                        />
                    </label>
                    {field_error(form, "max_blocks")}
                    <label class="dialog__label">
                        "Content freshness (days)"
                        <input
                            class="input"
                            type="number"
                            min="1"
                            prop:value=move || form.with(|f| f.input.content_freshness_days.to_string())
                            on:input=move |ev| form.update(|f| f.set_freshness_days(&event_target_value(&ev)))
                        />
                    </label>
                    {field_error(form, "content_freshness_days")}
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.input.is_active)
                            on:change=move |ev| form.update(|f| f.set_active(event_target_checked(&ev)))
                        />
                        "Active"
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel()>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || form.with(|f| f.pending)
                            on:click=move |_| on_save()
                        >
                            {move || if form.with(|f| f.pending) { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
