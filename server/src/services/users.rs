//! Admin user directory and role assignment.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use models::{AdminUser, Approver, UserRole};

use crate::error::ApiError;
use crate::state::Store;

#[must_use]
pub fn list(store: &Store) -> Vec<AdminUser> {
    store.users.clone()
}

/// Assign `role`. Setting the current role again is accepted and changes nothing.
pub fn set_role(store: &mut Store, id: &str, role: UserRole) -> Result<AdminUser, ApiError> {
    let user = store
        .users
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(|| ApiError::not_found("user", id))?;
    if user.role != role {
        tracing::info!(user_id = %id, from = %user.role, to = %role, "role changed");
        user.role = role;
    }
    Ok(user.clone())
}

/// Approver identity for a bearer token naming a known user id.
#[must_use]
pub fn approver_for(store: &Store, token: &str) -> Option<Approver> {
    store.user(token).map(|u| Approver { id: u.id.clone(), name: u.name.clone() })
}
