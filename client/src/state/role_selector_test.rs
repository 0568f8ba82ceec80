use super::*;

#[test]
fn choosing_current_role_opens_no_dialog() {
    let mut state = RoleSelectorState::default();
    assert!(!state.choose("u-1", UserRole::Marketing, UserRole::Marketing));
    assert!(!state.dialog_open());
    assert!(!state.is_locked());
}

#[test]
fn choosing_other_role_opens_dialog_with_both_levels() {
    let mut state = RoleSelectorState::default();
    assert!(state.choose("u-1", UserRole::Marketing, UserRole::Ciso));
    assert!(state.dialog_open());
    let change = state.pending_change.clone().expect("pending");
    assert_eq!(change.summary(), "Change role from Marketing (level 2) to CISO (level 6)?");
}

#[test]
fn confirm_takes_change_and_locks_until_finish() {
    let mut state = RoleSelectorState::default();
    state.choose("u-7", UserRole::Viewer, UserRole::Admin);
    let change = state.confirm().expect("change");
    assert_eq!(change.target, UserRole::Admin);
    assert!(!state.dialog_open());
    assert!(state.is_locked());
    assert_eq!(state.confirm(), None);
    state.finish();
    assert!(!state.is_locked());
}

#[test]
fn cancel_discards_change() {
    let mut state = RoleSelectorState::default();
    state.choose("u-1", UserRole::SocLevel1, UserRole::SocLevel3);
    state.cancel();
    assert_eq!(state.pending_change, None);
    assert_eq!(state.saving, None);
}
