use super::*;

use crate::fixtures;

#[test]
fn set_role_updates_user() {
    let mut store = fixtures::seed();
    let user = set_role(&mut store, "user-viewer", UserRole::Branding).expect("update");
    assert_eq!(user.role, UserRole::Branding);
    assert_eq!(store.user("user-viewer").map(|u| u.role), Some(UserRole::Branding));
}

#[test]
fn set_same_role_is_a_no_op() {
    let mut store = fixtures::seed();
    let before = list(&store);
    set_role(&mut store, "user-ciso", UserRole::Ciso).expect("update");
    assert_eq!(list(&store), before);
}

#[test]
fn set_role_unknown_user_is_not_found() {
    let mut store = fixtures::seed();
    assert!(matches!(set_role(&mut store, "ghost", UserRole::Admin), Err(ApiError::NotFound { kind: "user", .. })));
}

#[test]
fn approver_for_known_token() {
    let store = fixtures::seed();
    let approver = approver_for(&store, "user-soc3").expect("known");
    assert_eq!(approver.name, "Ines Duarte");
    assert!(approver_for(&store, "unknown").is_none());
}
