//! Articles under review and their append-only approval history.

use serde::{Deserialize, Serialize};

use crate::FieldError;
use crate::gate::{ApprovalProgress, ApprovalStatus, Gate};

/// Maximum length of optional approval notes.
pub const MAX_APPROVE_NOTES: usize = 1000;
/// Minimum length of a rejection reason.
pub const MIN_REJECT_REASON: usize = 10;
/// Maximum length of a rejection reason.
pub const MAX_REJECT_REASON: usize = 2000;

/// AI-assigned severity of an article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Informational,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Informational => "informational",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Informational => "Info",
        }
    }
}

/// An article awaiting (or past) approval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_severity: Option<Severity>,
    /// Classifier confidence in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_confidence: Option<f64>,
    #[serde(default)]
    pub cves: Vec<String>,
    pub approval_status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_progress: Option<ApprovalProgress>,
    #[serde(default)]
    pub rejected: bool,
    #[serde(default)]
    pub created_at: String,
}

impl Article {
    /// Confidence rendered as a whole percentage, e.g. `"87%"`.
    #[must_use]
    pub fn confidence_label(&self) -> Option<String> {
        #[allow(clippy::cast_possible_truncation)]
        self.ai_confidence
            .map(|c| format!("{}%", (c.clamp(0.0, 1.0) * 100.0).round() as i64))
    }
}

/// The user who cleared a gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approver {
    pub id: String,
    pub name: String,
}

/// One cleared gate in an article's audit trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalHistoryEntry {
    pub gate: Gate,
    pub approved_by: Approver,
    pub approved_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionDetails {
    pub reason: String,
    pub rejected_by: Approver,
    pub rejected_at: String,
}

/// Full approval history of an article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalHistory {
    pub article_id: String,
    pub current_status: ApprovalStatus,
    #[serde(default)]
    pub rejected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_details: Option<RejectionDetails>,
    #[serde(default)]
    pub approvals: Vec<ApprovalHistoryEntry>,
    pub progress: ApprovalProgress,
}

/// Body of `POST /v1/articles/{id}/approve`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ApproveRequest {
    /// Validate before sending.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        match &self.notes {
            Some(notes) if notes.chars().count() > MAX_APPROVE_NOTES => vec![FieldError::new(
                "notes",
                format!("Notes must be at most {MAX_APPROVE_NOTES} characters"),
            )],
            _ => Vec::new(),
        }
    }
}

/// Body of `POST /v1/articles/{id}/reject`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

impl RejectRequest {
    /// Validate before sending. The reason is measured after trimming.
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let len = self.reason.trim().chars().count();
        if len < MIN_REJECT_REASON {
            vec![FieldError::new(
                "reason",
                format!("Reason must be at least {MIN_REJECT_REASON} characters"),
            )]
        } else if len > MAX_REJECT_REASON {
            vec![FieldError::new(
                "reason",
                format!("Reason must be at most {MAX_REJECT_REASON} characters"),
            )]
        } else {
            Vec::new()
        }
    }
}

/// Minimal article state returned after an approve/reject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalActionResult {
    pub id: String,
    pub approval_status: ApprovalStatus,
    #[serde(default)]
    pub rejected: bool,
}

#[cfg(test)]
#[path = "article_test.rs"]
mod tests;
