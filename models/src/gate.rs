//! Approval gates and the server-computed progress through them.
//!
//! DESIGN
//! ======
//! Articles pass five gates in a fixed order (marketing, branding, SOC L1,
//! SOC L3, CISO). The backend owns the state machine; consumers only classify
//! the progress object it returns. `ApprovalStatus::next_on_approve` exists for
//! the stub server, which needs to mimic the backend's forward transitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// One stage of the approval pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    Marketing,
    Branding,
    SocL1,
    SocL3,
    Ciso,
}

impl Gate {
    /// Number of gates an article must clear.
    pub const COUNT: usize = 5;

    /// Every gate in pipeline order.
    pub const ALL: [Gate; Self::COUNT] = [Self::Marketing, Self::Branding, Self::SocL1, Self::SocL3, Self::Ciso];

    /// Wire name of the gate.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Marketing => "marketing",
            Self::Branding => "branding",
            Self::SocL1 => "soc_l1",
            Self::SocL3 => "soc_l3",
            Self::Ciso => "ciso",
        }
    }

    /// Display name of the gate.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Marketing => "Marketing",
            Self::Branding => "Branding",
            Self::SocL1 => "SOC L1",
            Self::SocL3 => "SOC L3",
            Self::Ciso => "CISO",
        }
    }

    /// Zero-based position in the pipeline.
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::Marketing => 0,
            Self::Branding => 1,
            Self::SocL1 => 2,
            Self::SocL3 => 3,
            Self::Ciso => 4,
        }
    }

    /// The gate after this one, or `None` after CISO.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.position() + 1).copied()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gate {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gate| gate.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("gate", s))
    }
}

/// Server-computed approval state of an article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    PendingMarketing,
    PendingBranding,
    PendingSocL1,
    PendingSocL3,
    PendingCiso,
    Approved,
    Rejected,
    Released,
}

impl ApprovalStatus {
    const ALL: [ApprovalStatus; 8] = [
        Self::PendingMarketing,
        Self::PendingBranding,
        Self::PendingSocL1,
        Self::PendingSocL3,
        Self::PendingCiso,
        Self::Approved,
        Self::Rejected,
        Self::Released,
    ];

    /// Wire name of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingMarketing => "pending_marketing",
            Self::PendingBranding => "pending_branding",
            Self::PendingSocL1 => "pending_soc_l1",
            Self::PendingSocL3 => "pending_soc_l3",
            Self::PendingCiso => "pending_ciso",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Released => "released",
        }
    }

    /// Display label, e.g. `"Pending SOC L1"`.
    #[must_use]
    pub fn label(self) -> String {
        match self.pending_gate() {
            Some(gate) => format!("Pending {}", gate.label()),
            None => match self {
                Self::Approved => "Approved".to_owned(),
                Self::Rejected => "Rejected".to_owned(),
                _ => "Released".to_owned(),
            },
        }
    }

    /// The pending status that waits on `gate`.
    #[must_use]
    pub fn for_gate(gate: Gate) -> Self {
        match gate {
            Gate::Marketing => Self::PendingMarketing,
            Gate::Branding => Self::PendingBranding,
            Gate::SocL1 => Self::PendingSocL1,
            Gate::SocL3 => Self::PendingSocL3,
            Gate::Ciso => Self::PendingCiso,
        }
    }

    /// Gate this status is waiting on, if it is a pending status.
    #[must_use]
    pub fn pending_gate(self) -> Option<Gate> {
        match self {
            Self::PendingMarketing => Some(Gate::Marketing),
            Self::PendingBranding => Some(Gate::Branding),
            Self::PendingSocL1 => Some(Gate::SocL1),
            Self::PendingSocL3 => Some(Gate::SocL3),
            Self::PendingCiso => Some(Gate::Ciso),
            Self::Approved | Self::Rejected | Self::Released => None,
        }
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending_gate().is_some()
    }

    /// Status reached by approving the current gate. `None` when not pending.
    #[must_use]
    pub fn next_on_approve(self) -> Option<Self> {
        let gate = self.pending_gate()?;
        Some(gate.next().map_or(Self::Approved, Self::for_gate))
    }

    /// Status reached by releasing a fully approved article.
    #[must_use]
    pub fn next_on_release(self) -> Option<Self> {
        (self == Self::Approved).then_some(Self::Released)
    }

    /// Status reached by resetting a rejected article: back to the first gate.
    #[must_use]
    pub fn next_on_reset(self) -> Option<Self> {
        (self == Self::Rejected).then_some(Self::PendingMarketing)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("approval status", s))
    }
}

/// Visual classification of a single gate in a progress indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Completed,
    Current,
    Pending,
}

impl GateState {
    /// BEM modifier used by the progress indicator.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Current => "current",
            Self::Pending => "pending",
        }
    }
}

/// Progress through the gates, exactly as the backend reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalProgress {
    #[serde(default)]
    pub completed_gates: Vec<Gate>,
    #[serde(default)]
    pub current_gate: Option<Gate>,
    #[serde(default)]
    pub pending_gates: Vec<Gate>,
    pub total_gates: usize,
    pub completed_count: usize,
}

impl ApprovalProgress {
    /// Canonical progress for `status`.
    ///
    /// `Approved` and `Released` report every gate completed. `Rejected`
    /// keeps the gates in `cleared` as completed and lists the rest as pending.
    #[must_use]
    pub fn for_status(status: ApprovalStatus, cleared: &[Gate]) -> Self {
        let (completed_gates, current_gate): (Vec<Gate>, Option<Gate>) = match status {
            ApprovalStatus::Approved | ApprovalStatus::Released => (Gate::ALL.to_vec(), None),
            ApprovalStatus::Rejected => (Gate::ALL.into_iter().filter(|g| cleared.contains(g)).collect(), None),
            _ => {
                let current = status.pending_gate();
                let position = current.map_or(0, Gate::position);
                (Gate::ALL[..position].to_vec(), current)
            }
        };
        let pending_gates = Gate::ALL
            .into_iter()
            .filter(|g| !completed_gates.contains(g) && Some(*g) != current_gate)
            .collect();
        Self {
            completed_count: completed_gates.len(),
            completed_gates,
            current_gate,
            pending_gates,
            total_gates: Gate::COUNT,
        }
    }

    /// Classify `gate` for display.
    #[must_use]
    pub fn gate_state(&self, gate: Gate) -> GateState {
        if self.completed_gates.contains(&gate) {
            GateState::Completed
        } else if self.current_gate == Some(gate) {
            GateState::Current
        } else {
            GateState::Pending
        }
    }

    /// Text such as `"3/5 gates"`, built from the server-supplied counts.
    #[must_use]
    pub fn fraction_label(&self) -> String {
        format!("{}/{} gates", self.completed_count, self.total_gates)
    }

    /// Whether the counts agree with the gate lists.
    ///
    /// Informational only; payloads are rendered as received either way.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let listed = self.completed_gates.len() + usize::from(self.current_gate.is_some()) + self.pending_gates.len();
        self.completed_count == self.completed_gates.len() && listed == self.total_gates
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
