//! In-flight approval actions and the reject dialog.
//!
//! The gate order itself is server-owned. This module only tracks which
//! article has a request in flight so its buttons stay disabled until the
//! response lands.

#[cfg(test)]
#[path = "approval_test.rs"]
mod approval_test;

use std::collections::HashSet;

use models::{ApprovalStatus, RejectRequest};

/// Approve and reject are both disabled while either request is in flight,
/// or when the caller disables them outright.
pub fn buttons_disabled(is_approving: bool, is_rejecting: bool, disabled: bool) -> bool {
    is_approving || is_rejecting || disabled
}

/// Per-article in-flight mutations.
#[derive(Clone, Debug, Default)]
pub struct PendingActions {
    approving: HashSet<String>,
    rejecting: HashSet<String>,
    settling: HashSet<String>,
}

impl PendingActions {
    /// Record an approve. Returns `false` when the article already has a
    /// request in flight.
    pub fn begin_approve(&mut self, article_id: &str) -> bool {
        if self.is_busy(article_id) {
            return false;
        }
        self.approving.insert(article_id.to_owned())
    }

    pub fn begin_reject(&mut self, article_id: &str) -> bool {
        if self.is_busy(article_id) {
            return false;
        }
        self.rejecting.insert(article_id.to_owned())
    }

    /// Record a release or reset.
    pub fn begin_settle(&mut self, article_id: &str) -> bool {
        if self.is_busy(article_id) {
            return false;
        }
        self.settling.insert(article_id.to_owned())
    }

    /// Clear whatever was in flight for the article.
    pub fn finish(&mut self, article_id: &str) {
        self.approving.remove(article_id);
        self.rejecting.remove(article_id);
        self.settling.remove(article_id);
    }

    pub fn is_approving(&self, article_id: &str) -> bool {
        self.approving.contains(article_id)
    }

    pub fn is_rejecting(&self, article_id: &str) -> bool {
        self.rejecting.contains(article_id)
    }

    pub fn is_settling(&self, article_id: &str) -> bool {
        self.settling.contains(article_id)
    }

    fn is_busy(&self, article_id: &str) -> bool {
        self.is_approving(article_id) || self.is_rejecting(article_id) || self.is_settling(article_id)
    }
}

/// What can be done with an article once it has left the gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    /// Publish a fully approved article.
    Release,
    /// Send a rejected article back to the first gate.
    Reset,
}

impl FollowUp {
    pub fn for_status(status: ApprovalStatus) -> Option<Self> {
        match status {
            ApprovalStatus::Approved => Some(Self::Release),
            ApprovalStatus::Rejected => Some(Self::Reset),
            _ => None,
        }
    }

    pub fn label(self, in_flight: bool) -> &'static str {
        match (self, in_flight) {
            (Self::Release, false) => "Release",
            (Self::Release, true) => "Releasing...",
            (Self::Reset, false) => "Reset to review",
            (Self::Reset, true) => "Resetting...",
        }
    }

    /// Toast text after a successful request.
    pub fn done_message(self) -> &'static str {
        match self {
            Self::Release => "Article released",
            Self::Reset => "Article returned to review",
        }
    }
}

/// Reason entry for a rejection, validated before any request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RejectDialogState {
    pub article_id: Option<String>,
    pub reason: String,
    pub error: Option<String>,
}

impl RejectDialogState {
    pub fn is_open(&self) -> bool {
        self.article_id.is_some()
    }

    pub fn open(&mut self, article_id: &str) {
        *self = Self { article_id: Some(article_id.to_owned()), ..Self::default() };
    }

    pub fn set_reason(&mut self, reason: String) {
        self.reason = reason;
        self.error = None;
    }

    /// Validated request for the open article. On failure the message is kept
    /// for inline display and nothing is returned.
    pub fn submit(&mut self) -> Option<(String, RejectRequest)> {
        let article_id = self.article_id.clone()?;
        let request = RejectRequest { reason: self.reason.trim().to_owned() };
        if let Some(err) = request.validate().into_iter().next() {
            self.error = Some(err.message);
            return None;
        }
        Some((article_id, request))
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}
