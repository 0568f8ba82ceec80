//! Confirmed role changes for the user administration page.

#[cfg(test)]
#[path = "role_selector_test.rs"]
mod role_selector_test;

use models::UserRole;

/// A role change awaiting confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleChange {
    pub user_id: String,
    pub current: UserRole,
    pub target: UserRole,
}

impl RoleChange {
    /// Dialog text naming both roles and their levels.
    pub fn summary(&self) -> String {
        format!(
            "Change role from {} (level {}) to {} (level {})?",
            self.current.label(),
            self.current.permission_level(),
            self.target.label(),
            self.target.permission_level()
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleSelectorState {
    pub pending_change: Option<RoleChange>,
    /// User whose change request is in flight.
    pub saving: Option<String>,
}

impl RoleSelectorState {
    /// Start a change. Choosing the current role opens nothing and returns `false`.
    pub fn choose(&mut self, user_id: &str, current: UserRole, target: UserRole) -> bool {
        if target == current {
            return false;
        }
        self.pending_change = Some(RoleChange { user_id: user_id.to_owned(), current, target });
        true
    }

    pub fn dialog_open(&self) -> bool {
        self.pending_change.is_some()
    }

    /// Take the change for the mutation and mark the user as saving.
    pub fn confirm(&mut self) -> Option<RoleChange> {
        let change = self.pending_change.take()?;
        self.saving = Some(change.user_id.clone());
        Some(change)
    }

    pub fn cancel(&mut self) {
        self.pending_change = None;
    }

    pub fn finish(&mut self) {
        self.saving = None;
    }

    /// Selectors are disabled while any change is pending or saving.
    pub fn is_locked(&self) -> bool {
        self.pending_change.is_some() || self.saving.is_some()
    }
}
