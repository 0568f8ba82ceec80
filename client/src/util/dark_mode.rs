//! Dark mode initialization and toggle.
//!
//! Reads the preference from `localStorage` (`aci_dark_mode`) and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back through
//! `util::storage`.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::{self, Area, DARK_MODE_KEY};

/// Stored preference, or the system preference when nothing is stored.
pub fn read_preference() -> bool {
    if let Some(val) = storage::get(Area::Local, DARK_MODE_KEY) {
        return val == "true";
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::set(Area::Local, DARK_MODE_KEY, if next { "true" } else { "false" });
    next
}

#[cfg(any(test, feature = "hydrate"))]
fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}
