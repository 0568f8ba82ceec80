//! Hand-off sheet assigning selected content to a draft issue block.

#[cfg(test)]
#[path = "newsletter_sheet_test.rs"]
mod newsletter_sheet_test;

use models::{BlockType, BulkAddBlocksRequest, NewsletterIssue};

/// Shown instead of the form when no draft issue exists.
pub const NO_DRAFT_ISSUES_MESSAGE: &str =
    "No draft issues are available. Create a draft issue before adding content.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddToNewsletterSheet {
    pub open: bool,
    pub draft_issues: Vec<NewsletterIssue>,
    pub issue_id: Option<String>,
    pub block_type: Option<BlockType>,
    pub pending: bool,
}

impl AddToNewsletterSheet {
    pub fn open(&mut self) {
        self.open = true;
        self.issue_id = None;
        self.block_type = None;
        self.pending = false;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.pending = false;
    }

    pub fn set_draft_issues(&mut self, issues: Vec<NewsletterIssue>) {
        if self.issue_id.as_ref().is_some_and(|id| !issues.iter().any(|i| &i.id == id)) {
            self.issue_id = None;
        }
        self.draft_issues = issues;
    }

    /// Select an issue by id; an empty value clears the choice.
    pub fn choose_issue(&mut self, issue_id: &str) {
        self.issue_id = (!issue_id.is_empty()).then(|| issue_id.to_owned());
    }

    pub fn choose_block_type(&mut self, block_type: Option<BlockType>) {
        self.block_type = block_type;
    }

    pub fn blocking_message(&self) -> Option<&'static str> {
        self.draft_issues.is_empty().then_some(NO_DRAFT_ISSUES_MESSAGE)
    }

    pub fn can_submit(&self, selected_count: usize) -> bool {
        self.issue_id.is_some()
            && self.block_type.is_some()
            && selected_count > 0
            && !self.pending
            && !self.draft_issues.is_empty()
    }

    /// Build the request and mark the sheet pending. `None` when submission is
    /// not allowed.
    pub fn begin_submit(&mut self, selected: &[String]) -> Option<(String, BulkAddBlocksRequest)> {
        if !self.can_submit(selected.len()) {
            return None;
        }
        let issue_id = self.issue_id.clone()?;
        let block_type = self.block_type?;
        let request = BulkAddBlocksRequest { content_item_ids: selected.to_vec(), block_type };
        if !request.validate().is_empty() {
            return None;
        }
        self.pending = true;
        Some((issue_id, request))
    }

    /// Success closes the sheet; the caller clears the selection.
    pub fn finish_success(&mut self) {
        self.close();
        self.issue_id = None;
        self.block_type = None;
    }

    /// Failure keeps the sheet open for another attempt.
    pub fn finish_failure(&mut self) {
        self.pending = false;
    }
}
