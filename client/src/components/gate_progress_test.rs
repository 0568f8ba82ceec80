use super::*;
use models::ApprovalStatus;

#[test]
fn step_class_carries_state_modifier() {
    assert_eq!(step_class(GateState::Completed), "gate-progress__step gate-progress__step--completed");
    assert_eq!(step_class(GateState::Current), "gate-progress__step gate-progress__step--current");
    assert_eq!(step_class(GateState::Pending), "gate-progress__step gate-progress__step--pending");
}

#[test]
fn three_completed_gates_show_three_of_five() {
    let progress = ApprovalProgress::for_status(ApprovalStatus::PendingSocL3, &[]);
    assert_eq!(progress.fraction_label(), "3/5 gates");
    let classes: Vec<String> = Gate::ALL.into_iter().map(|g| step_class(progress.gate_state(g))).collect();
    assert!(classes[2].ends_with("--completed"));
    assert!(classes[3].ends_with("--current"));
    assert!(classes[4].ends_with("--pending"));
}

#[test]
fn server_counts_are_shown_verbatim() {
    let progress = ApprovalProgress {
        completed_gates: vec![Gate::Marketing],
        current_gate: Some(Gate::Branding),
        pending_gates: vec![],
        total_gates: 5,
        completed_count: 2,
    };
    assert_eq!(progress.fraction_label(), "2/5 gates");
}
