//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of server-derived state so a refetch never
//! resets them.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Dark mode and navigation drawer state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_open: bool,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Navigating closes the drawer.
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}
