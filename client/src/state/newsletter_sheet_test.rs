use models::IssueStatus;

use super::*;

fn draft(id: &str, number: u32) -> NewsletterIssue {
    NewsletterIssue {
        id: id.to_owned(),
        configuration_id: "cfg-1".to_owned(),
        issue_number: number,
        subject_line: None,
        status: IssueStatus::Draft,
        block_count: 0,
        created_at: String::new(),
    }
}

fn sheet_with_drafts() -> AddToNewsletterSheet {
    let mut sheet = AddToNewsletterSheet::default();
    sheet.open();
    sheet.set_draft_issues(vec![draft("iss-1", 1), draft("iss-2", 2)]);
    sheet
}

#[test]
fn submit_enabled_only_after_issue_and_block_type() {
    let mut sheet = sheet_with_drafts();
    let selected = vec!["item_1".to_owned()];
    assert!(!sheet.can_submit(selected.len()));

    sheet.choose_issue("iss-1");
    assert!(!sheet.can_submit(selected.len()));

    sheet.choose_block_type(Some(BlockType::News));
    assert!(sheet.can_submit(selected.len()));
}

#[test]
fn submit_disabled_without_selection() {
    let mut sheet = sheet_with_drafts();
    sheet.choose_issue("iss-1");
    sheet.choose_block_type(Some(BlockType::Hero));
    assert!(!sheet.can_submit(0));
}

#[test]
fn zero_drafts_blocks_submission() {
    let mut sheet = AddToNewsletterSheet::default();
    sheet.open();
    sheet.choose_issue("iss-1");
    sheet.choose_block_type(Some(BlockType::Hero));
    assert_eq!(sheet.blocking_message(), Some(NO_DRAFT_ISSUES_MESSAGE));
    assert!(!sheet.can_submit(3));
}

#[test]
fn pending_disables_submit_and_failure_reenables() {
    let mut sheet = sheet_with_drafts();
    sheet.choose_issue("iss-2");
    sheet.choose_block_type(Some(BlockType::Spotlight));
    let selected = vec!["item_1".to_owned(), "item_2".to_owned()];

    let (issue_id, request) = sheet.begin_submit(&selected).expect("submittable");
    assert_eq!(issue_id, "iss-2");
    assert_eq!(request.content_item_ids, selected);
    assert!(sheet.pending);
    assert!(!sheet.can_submit(selected.len()));
    assert_eq!(sheet.begin_submit(&selected), None, "one request at a time");

    sheet.finish_failure();
    assert!(sheet.open);
    assert!(sheet.can_submit(selected.len()));
}

#[test]
fn success_closes_sheet() {
    let mut sheet = sheet_with_drafts();
    sheet.choose_issue("iss-1");
    sheet.choose_block_type(Some(BlockType::Content));
    sheet.begin_submit(&["item_1".to_owned()]).expect("submittable");
    sheet.finish_success();
    assert!(!sheet.open);
    assert!(!sheet.pending);
    assert_eq!(sheet.issue_id, None);
}

#[test]
fn empty_issue_value_clears_choice() {
    let mut sheet = sheet_with_drafts();
    sheet.choose_issue("iss-1");
    sheet.choose_issue("");
    assert_eq!(sheet.issue_id, None);
}

#[test]
fn refreshed_drafts_drop_vanished_choice() {
    let mut sheet = sheet_with_drafts();
    sheet.choose_issue("iss-2");
    sheet.set_draft_issues(vec![draft("iss-1", 1)]);
    assert_eq!(sheet.issue_id, None);
}
