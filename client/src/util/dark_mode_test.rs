#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn without_browser_storage_the_theme_is_light() {
    assert!(!read_preference());
    assert_eq!(theme_name(read_preference()), "light");
}

#[test]
fn toggle_reports_the_new_preference() {
    let enabled = toggle(false);
    assert!(enabled);
    assert_eq!(theme_name(enabled), "dark");
    assert!(!toggle(enabled));
}

#[test]
fn stored_preference_is_not_persisted_during_ssr() {
    toggle(false);
    assert_eq!(storage::get(Area::Local, DARK_MODE_KEY), None);
}
