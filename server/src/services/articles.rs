//! Article review: listing, gate approval, rejection, release, reset, history.
//!
//! The stub advances gates in the fixed pipeline order and nothing else. It
//! does not check that the actor's role matches the gate being cleared, nor
//! that the actor may release or reset.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use models::{
    ApprovalActionResult, ApprovalHistory, ApprovalHistoryEntry, ApprovalProgress, ApprovalStatus, ApproveRequest,
    Approver, Article, RejectRequest, RejectionDetails,
};

use crate::error::{ApiError, check};
use crate::state::{Store, StoredArticle};

/// Articles in fixture order, optionally restricted to one status and/or to
/// those still waiting on a gate.
#[must_use]
pub fn list(store: &Store, status: Option<ApprovalStatus>, pending_only: bool) -> Vec<Article> {
    store
        .articles
        .iter()
        .filter(|a| status.is_none_or(|s| a.article.approval_status == s))
        .filter(|a| !pending_only || a.article.approval_status.is_pending())
        .map(|a| a.article.clone())
        .collect()
}

pub fn get(store: &Store, id: &str) -> Result<Article, ApiError> {
    find(store, id).map(|a| a.article.clone())
}

fn find<'a>(store: &'a Store, id: &str) -> Result<&'a StoredArticle, ApiError> {
    store.article(id).ok_or_else(|| ApiError::not_found("article", id))
}

fn find_mut<'a>(store: &'a mut Store, id: &str) -> Result<&'a mut StoredArticle, ApiError> {
    store.article_mut(id).ok_or_else(|| ApiError::not_found("article", id))
}

fn action_result(article: &Article) -> ApprovalActionResult {
    ApprovalActionResult { id: article.id.clone(), approval_status: article.approval_status, rejected: article.rejected }
}

/// Clear the article's current gate on behalf of `actor`.
///
/// # Errors
///
/// `NotFound` for an unknown id, `Validation` for oversized notes, and
/// `Conflict` when the article is not waiting on any gate.
pub fn approve(
    store: &mut Store,
    id: &str,
    request: &ApproveRequest,
    actor: &Approver,
    at: &str,
) -> Result<ApprovalActionResult, ApiError> {
    check(request.validate())?;
    let stored = find_mut(store, id)?;
    let status = stored.article.approval_status;
    let (Some(gate), Some(next)) = (status.pending_gate(), status.next_on_approve()) else {
        return Err(ApiError::Conflict(format!("Article is not pending approval ({status})")));
    };

    stored.approvals.push(ApprovalHistoryEntry {
        gate,
        approved_by: actor.clone(),
        approved_at: at.to_owned(),
        notes: request.notes.clone().filter(|n| !n.trim().is_empty()),
    });
    stored.article.approval_status = next;
    stored.article.approval_progress = Some(ApprovalProgress::for_status(next, &[]));
    tracing::info!(article_id = %id, gate = %gate, next = %next, "gate approved");
    Ok(action_result(&stored.article))
}

/// Reject the article at its current gate.
///
/// # Errors
///
/// `NotFound`, `Validation` for a reason outside 10..=2000 characters, and
/// `Conflict` when the article is not pending.
pub fn reject(
    store: &mut Store,
    id: &str,
    request: &RejectRequest,
    actor: &Approver,
    at: &str,
) -> Result<ApprovalActionResult, ApiError> {
    check(request.validate())?;
    let stored = find_mut(store, id)?;
    let status = stored.article.approval_status;
    let Some(gate) = status.pending_gate() else {
        return Err(ApiError::Conflict(format!("Article is not pending approval ({status})")));
    };

    let cleared: Vec<_> = stored.approvals.iter().map(|entry| entry.gate).collect();
    stored.article.approval_status = ApprovalStatus::Rejected;
    stored.article.rejected = true;
    stored.article.approval_progress = Some(ApprovalProgress::for_status(ApprovalStatus::Rejected, &cleared));
    stored.rejection = Some(RejectionDetails {
        reason: request.reason.trim().to_owned(),
        rejected_by: actor.clone(),
        rejected_at: at.to_owned(),
    });
    tracing::info!(article_id = %id, gate = %gate, "article rejected");
    Ok(action_result(&stored.article))
}

/// Publish a fully approved article.
///
/// # Errors
///
/// `NotFound`, or `BadRequest` when the article has not cleared every gate.
pub fn release(store: &mut Store, id: &str, actor: &Approver, at: &str) -> Result<ApprovalActionResult, ApiError> {
    let stored = find_mut(store, id)?;
    let Some(next) = stored.article.approval_status.next_on_release() else {
        return Err(ApiError::BadRequest("Article must pass all approval gates before release".to_owned()));
    };
    stored.article.approval_status = next;
    stored.article.approval_progress = Some(ApprovalProgress::for_status(next, &[]));
    tracing::info!(article_id = %id, released_by = %actor.id, released_at = %at, "article released");
    Ok(action_result(&stored.article))
}

/// Send a rejected article back to the first gate.
///
/// The rejection and every recorded approval are discarded, so the article
/// starts the pipeline again from marketing.
///
/// # Errors
///
/// `NotFound`, or `BadRequest` when the article is not rejected.
pub fn reset(store: &mut Store, id: &str, actor: &Approver) -> Result<ApprovalActionResult, ApiError> {
    let stored = find_mut(store, id)?;
    let Some(next) = stored.article.approval_status.next_on_reset() else {
        return Err(ApiError::BadRequest("Article is not rejected".to_owned()));
    };
    stored.article.approval_status = next;
    stored.article.rejected = false;
    stored.article.approval_progress = Some(ApprovalProgress::for_status(next, &[]));
    stored.approvals.clear();
    stored.rejection = None;
    tracing::info!(article_id = %id, reset_by = %actor.id, "article reset");
    Ok(action_result(&stored.article))
}

pub fn history(store: &Store, id: &str) -> Result<ApprovalHistory, ApiError> {
    let stored = find(store, id)?;
    let article = &stored.article;
    let cleared: Vec<_> = stored.approvals.iter().map(|entry| entry.gate).collect();
    Ok(ApprovalHistory {
        article_id: article.id.clone(),
        current_status: article.approval_status,
        rejected: article.rejected,
        rejection_details: stored.rejection.clone(),
        approvals: stored.approvals.clone(),
        progress: article
            .approval_progress
            .clone()
            .unwrap_or_else(|| ApprovalProgress::for_status(article.approval_status, &cleared)),
    })
}
