//! Five-step approval gate indicator.
//!
//! Renders the server's `ApprovalProgress` as-is. Counts are never derived
//! from the gate lists, so an inconsistent payload still shows the numbers
//! the backend sent.

#[cfg(test)]
#[path = "gate_progress_test.rs"]
mod gate_progress_test;

use leptos::prelude::*;
use models::{ApprovalProgress, Gate, GateState};

pub(crate) fn step_class(state: GateState) -> String {
    format!("gate-progress__step gate-progress__step--{}", state.modifier())
}

#[component]
pub fn GateProgress(progress: ApprovalProgress, #[prop(optional)] compact: bool) -> impl IntoView {
    let fraction = progress.fraction_label();
    let steps = Gate::ALL
        .into_iter()
        .map(|gate| {
            let class = step_class(progress.gate_state(gate));
            view! {
                <li class=class title=gate.label()>
                    <span class="gate-progress__marker" aria-hidden="true"></span>
                    <span class="gate-progress__label">{gate.label()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="gate-progress" class:gate-progress--compact=compact>
            <ol class="gate-progress__steps">{steps}</ol>
            <span class="gate-progress__fraction">{fraction}</span>
        </div>
    }
}
