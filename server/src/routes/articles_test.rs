use axum::http::{Method, StatusCode};
use models::{ApprovalHistory, Article, Gate, decode, decode_page};
use serde_json::json;

use super::*;
use crate::routes::test_client::{call, call_as};
use crate::state::test_helpers;

#[tokio::test]
async fn list_is_paged_with_camel_case_metadata() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, Method::GET, "/v1/articles?page=2&pageSize=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["totalItems"], 25);
    assert_eq!(body["pagination"]["hasNextPage"], true);

    let page = decode_page::<Article>(body).expect("page");
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].id, "article-11");
    assert_eq!(page.info.total_pages, 3);
}

#[tokio::test]
async fn last_page_has_no_next() {
    let state = test_helpers::test_app_state();
    let (_, body) = call(&state, Method::GET, "/v1/articles?page=3&pageSize=10", None).await;
    let page = decode_page::<Article>(body).expect("page");
    assert_eq!(page.items.len(), 5);
    assert!(!page.info.has_next());
}

#[tokio::test]
async fn page_size_is_capped_by_config() {
    let mut state = test_helpers::test_app_state();
    state.config.page_size_max = 4;
    let (_, body) = call(&state, Method::GET, "/v1/articles?pageSize=50", None).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["pagination"]["pageSize"], 4);
}

#[tokio::test]
async fn list_filters_by_status() {
    let state = test_helpers::test_app_state();
    let (_, body) = call(&state, Method::GET, "/v1/articles?status=approved", None).await;
    let page = decode_page::<Article>(body).expect("page");
    assert!(!page.items.is_empty());
    assert!(page.items.iter().all(|a| a.approval_status == ApprovalStatus::Approved));
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, Method::GET, "/v1/articles?status=bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn malformed_body_is_bad_request_envelope() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::article_in(&state, ApprovalStatus::PendingBranding).await;
    let (status, body) =
        call(&state, Method::POST, &format!("/v1/articles/{id}/reject"), Some(json!({ "reason": 7 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn review_queue_request_lists_only_pending_articles() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, Method::GET, "/v1/articles?page=1&pageSize=20&pending=true", None).await;
    assert_eq!(status, StatusCode::OK);
    let page = decode_page::<Article>(body).expect("page");
    assert!(!page.items.is_empty());
    let terminal: Vec<_> = page.items.iter().filter(|a| !a.approval_status.is_pending()).map(|a| &a.id).collect();
    assert!(terminal.is_empty(), "terminal articles in queue: {terminal:?}");
    assert!(page.info.total < 25);
}

#[tokio::test]
async fn get_unknown_article_is_404_failure_envelope() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, Method::GET, "/v1/articles/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "E_NOT_FOUND");
    assert!(decode::<Article>(body).is_err());
}

#[tokio::test]
async fn approve_advances_gate_and_attributes_actor() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::article_in(&state, ApprovalStatus::PendingSocL1).await;

    let uri = format!("/v1/articles/{id}/approve");
    let (status, body) =
        call_as(&state, Method::POST, &uri, Some(json!({ "notes": "verified" })), Some("user-soc1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["approvalStatus"], "pending_soc_l3");

    let (_, body) = call(&state, Method::GET, &format!("/v1/articles/{id}/approval-history"), None).await;
    let history: ApprovalHistory = decode(body).expect("history");
    let last = history.approvals.last().expect("entry");
    assert_eq!(last.gate, Gate::SocL1);
    assert_eq!(last.approved_by.name, "Sam Okafor");
    assert_eq!(history.progress.fraction_label(), "3/5 gates");
}

#[tokio::test]
async fn approve_without_token_uses_fallback_reviewer() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::article_in(&state, ApprovalStatus::PendingMarketing).await;
    call(&state, Method::POST, &format!("/v1/articles/{id}/approve"), Some(json!({}))).await;
    let (_, body) = call(&state, Method::GET, &format!("/v1/articles/{id}/approval-history"), None).await;
    assert_eq!(body["data"]["approvals"][0]["approvedBy"]["id"], "reviewer");
}

#[tokio::test]
async fn approve_released_article_conflicts() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::article_in(&state, ApprovalStatus::Released).await;
    let (status, body) = call(&state, Method::POST, &format!("/v1/articles/{id}/approve"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "E_CONFLICT");
}

#[tokio::test]
async fn reject_with_short_reason_is_validation_error() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::article_in(&state, ApprovalStatus::PendingBranding).await;
    let (status, body) =
        call(&state, Method::POST, &format!("/v1/articles/{id}/reject"), Some(json!({ "reason": "no" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "E_VALIDATION");
    assert_eq!(body["error"]["fields"][0]["field"], "reason");
}

#[tokio::test]
async fn reject_sets_rejected_flag() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::article_in(&state, ApprovalStatus::PendingCiso).await;
    let body = json!({ "reason": "Attribution claims need a second source." });
    let (status, body) = call(&state, Method::POST, &format!("/v1/articles/{id}/reject"), Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["rejected"], true);

    let (_, body) = call(&state, Method::GET, &format!("/v1/articles/{id}"), None).await;
    let article: Article = decode(body).expect("article");
    assert_eq!(article.approval_status, ApprovalStatus::Rejected);
    assert_eq!(article.approval_progress.expect("progress").completed_count, 4);
}

#[tokio::test]
async fn release_moves_approved_article_to_released() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::article_in(&state, ApprovalStatus::Approved).await;
    let (status, body) =
        call_as(&state, Method::POST, &format!("/v1/articles/{id}/release"), None, Some("user-ciso")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["approvalStatus"], "released");

    let (status, body) = call(&state, Method::POST, &format!("/v1/articles/{id}/release"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn reset_returns_rejected_article_to_the_queue() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::article_in(&state, ApprovalStatus::Rejected).await;
    let (status, body) =
        call_as(&state, Method::POST, &format!("/v1/articles/{id}/reset"), None, Some("user-admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["approvalStatus"], "pending_marketing");
    assert_eq!(body["data"]["rejected"], false);

    let (_, body) = call(&state, Method::GET, "/v1/articles?pageSize=100&pending=true", None).await;
    let page = decode_page::<Article>(body).expect("page");
    assert!(page.items.iter().any(|a| a.id == id));

    let (status, _) = call(&state, Method::POST, "/v1/articles/nope/reset", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
