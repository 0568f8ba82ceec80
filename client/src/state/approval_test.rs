use super::*;

#[test]
fn buttons_disabled_truth_table() {
    let cases = [
        (false, false, false, false),
        (false, false, true, true),
        (false, true, false, true),
        (false, true, true, true),
        (true, false, false, true),
        (true, false, true, true),
        (true, true, false, true),
        (true, true, true, true),
    ];
    for (approving, rejecting, disabled, expected) in cases {
        assert_eq!(
            buttons_disabled(approving, rejecting, disabled),
            expected,
            "approving={approving} rejecting={rejecting} disabled={disabled}"
        );
    }
}

#[test]
fn begin_approve_blocks_second_action_on_same_article() {
    let mut pending = PendingActions::default();
    assert!(pending.begin_approve("a-1"));
    assert!(pending.is_approving("a-1"));
    assert!(!pending.begin_approve("a-1"));
    assert!(!pending.begin_reject("a-1"));
    assert!(pending.begin_reject("a-2"), "other articles are independent");
}

#[test]
fn finish_clears_both_flags() {
    let mut pending = PendingActions::default();
    pending.begin_reject("a-1");
    assert!(pending.is_rejecting("a-1"));
    pending.finish("a-1");
    assert!(!pending.is_rejecting("a-1"));
    assert!(!pending.is_approving("a-1"));
    assert!(pending.begin_approve("a-1"));
}

#[test]
fn reject_dialog_requires_open_article() {
    let mut dialog = RejectDialogState::default();
    dialog.set_reason("Long enough reason text".to_owned());
    assert_eq!(dialog.submit(), None);
    assert_eq!(dialog.error, None);
}

#[test]
fn reject_dialog_validates_inline() {
    let mut dialog = RejectDialogState::default();
    dialog.open("a-9");
    assert!(dialog.is_open());
    dialog.set_reason("short".to_owned());
    assert_eq!(dialog.submit(), None);
    assert_eq!(dialog.error.as_deref(), Some("Reason must be at least 10 characters"));

    dialog.set_reason("  Misattributed CVE identifier  ".to_owned());
    assert_eq!(dialog.error, None);
    let (id, request) = dialog.submit().expect("valid");
    assert_eq!(id, "a-9");
    assert_eq!(request.reason, "Misattributed CVE identifier");
}

#[test]
fn reopening_resets_previous_input() {
    let mut dialog = RejectDialogState::default();
    dialog.open("a-1");
    dialog.set_reason("draft".to_owned());
    dialog.open("a-2");
    assert_eq!(dialog.reason, "");
    dialog.close();
    assert!(!dialog.is_open());
}

#[test]
fn settle_shares_the_in_flight_lock() {
    let mut pending = PendingActions::default();
    assert!(pending.begin_settle("a-1"));
    assert!(pending.is_settling("a-1"));
    assert!(!pending.begin_approve("a-1"));
    assert!(!pending.begin_settle("a-1"));
    pending.finish("a-1");
    assert!(!pending.is_settling("a-1"));
    assert!(pending.begin_reject("a-1"));
}

#[test]
fn follow_up_only_for_approved_or_rejected() {
    assert_eq!(FollowUp::for_status(ApprovalStatus::Approved), Some(FollowUp::Release));
    assert_eq!(FollowUp::for_status(ApprovalStatus::Rejected), Some(FollowUp::Reset));
    for status in [ApprovalStatus::PendingMarketing, ApprovalStatus::PendingCiso, ApprovalStatus::Released] {
        assert_eq!(FollowUp::for_status(status), None, "{status}");
    }
    assert_eq!(FollowUp::Release.label(true), "Releasing...");
    assert_eq!(FollowUp::Reset.label(false), "Reset to review");
}
