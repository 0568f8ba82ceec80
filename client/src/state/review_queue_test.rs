use super::*;

fn info(page: u32, total_pages: u32, has_next: Option<bool>) -> PageInfo {
    PageInfo {
        page,
        page_size: Some(20),
        total_pages,
        total: u64::from(total_pages) * 20,
        has_next_page: has_next,
        has_previous_page: None,
    }
}

// =============================================================
// list_view
// =============================================================

#[test]
fn loading_wins_over_everything() {
    assert_eq!(list_view(true, Some("boom"), &[1]), ListView::Loading);
}

#[test]
fn error_wins_over_items() {
    assert_eq!(list_view(false, Some("Failed to load articles"), &[1]), ListView::Error("Failed to load articles".to_owned()));
}

#[test]
fn empty_list_is_empty_view() {
    let items: [u8; 0] = [];
    assert_eq!(list_view(false, None, &items), ListView::Empty);
}

#[test]
fn items_are_populated_view() {
    assert_eq!(list_view(false, None, &["a"]), ListView::Populated);
}

#[test]
fn fetched_view_maps_resource_states() {
    let items = ["a".to_owned()];
    let err = "HTTP 500".to_owned();
    assert_eq!(fetched_view::<String, String>(None), ListView::Loading);
    assert_eq!(fetched_view::<String, String>(Some(Err(&err))), ListView::Error("HTTP 500".to_owned()));
    assert_eq!(fetched_view::<String, String>(Some(Ok(&[]))), ListView::Empty);
    assert_eq!(fetched_view::<String, String>(Some(Ok(&items))), ListView::Populated);
}

// =============================================================
// PageControls
// =============================================================

#[test]
fn next_disabled_when_server_says_no_next_page() {
    let controls = PageControls::from_info(&info(1, 5, Some(false)));
    assert!(!controls.can_next);
    assert!(!controls.can_previous);
}

#[test]
fn controls_fall_back_to_page_arithmetic() {
    let controls = PageControls::from_info(&info(2, 3, None));
    assert!(controls.can_next);
    assert!(controls.can_previous);
    assert_eq!(controls.label, "Page 2 of 3");
}

// =============================================================
// ReviewQueueState
// =============================================================

#[test]
fn defaults_to_first_page_of_twenty() {
    let state = ReviewQueueState::default();
    assert_eq!(state.page, 1);
    assert_eq!(state.page_size, 20);
}

#[test]
fn new_clamps_to_positive_values() {
    assert_eq!(ReviewQueueState::new(0, 0), ReviewQueueState { page: 1, page_size: 1 });
}

#[test]
fn next_page_requires_has_next() {
    let mut state = ReviewQueueState::default();
    assert!(!state.next_page(&info(1, 1, None)));
    assert_eq!(state.page, 1);
    assert!(state.next_page(&info(1, 2, None)));
    assert_eq!(state.page, 2);
}

#[test]
fn previous_page_stops_at_one() {
    let mut state = ReviewQueueState::new(2, 20);
    assert!(state.previous_page());
    assert!(!state.previous_page());
    assert_eq!(state.page, 1);
}

#[test]
fn set_page_size_resets_page() {
    let mut state = ReviewQueueState::new(4, 20);
    state.set_page_size(50);
    assert_eq!(state, ReviewQueueState { page: 1, page_size: 50 });
}

#[test]
fn query_key_tracks_page() {
    let state = ReviewQueueState::new(3, 10);
    assert_eq!(state.query_key(), QueryKey::Articles { page: 3, page_size: 10 });
}

#[test]
fn queue_requests_only_pending_articles() {
    let state = ReviewQueueState::new(1, DEFAULT_PAGE_SIZE);
    assert_eq!(
        models::paths::articles_path(state.page, state.page_size, QUEUE_FILTER),
        "/v1/articles?page=1&pageSize=20&pending=true"
    );
}
