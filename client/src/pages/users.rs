//! User administration: roles and permission levels.

use leptos::prelude::*;
use models::AdminUser;

use crate::components::list_status::ListStatus;
use crate::components::role_selector::{RoleChangeDialog, RoleSelector};
use crate::net::{api, query};
use crate::state::query_cache::{QueryCache, QueryKey, QueryScope, use_generation};
use crate::state::review_queue::fetched_view;
use crate::state::role_selector::RoleSelectorState;

#[component]
pub fn UsersPage() -> impl IntoView {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let generation = use_generation(QueryScope::Users);
    let roles = RwSignal::new(RoleSelectorState::default());

    let users = LocalResource::new(move || {
        generation.track();
        query::cached(cache, QueryKey::Users, api::fetch_users)
    });
    let state = Signal::derive(move || {
        let fetched = users.get();
        fetched_view(fetched.as_ref().map(|r| r.as_ref().map(Vec::as_slice)))
    });
    let on_retry = Callback::new(move |()| cache.update(|c| c.invalidate(QueryScope::Users)));

    view! {
        <div class="users-page">
            <header class="page-header">
                <h1>"Users"</h1>
            </header>
            <ListStatus state=state noun="users" empty="No users found." on_retry=on_retry>
                <table class="users-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Level"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .and_then(Result::ok)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|user: AdminUser| {
                                    let level = user.role.permission_level();
                                    view! {
                                        <tr>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>
                                                <RoleSelector user=user roles=roles />
                                            </td>
                                            <td>{level}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </ListStatus>
            <RoleChangeDialog roles=roles />
        </div>
    }
}
