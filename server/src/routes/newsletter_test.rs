use axum::http::{Method, StatusCode};
use models::{
    BulkAddBlocksResponse, ContentItem, ContentSource, IssueBlock, NewsletterConfigInput, NewsletterConfiguration,
    NewsletterIssue, decode, decode_page,
};
use serde_json::json;

use crate::routes::test_client::call;
use crate::state::test_helpers;

fn config_body(name: &str) -> serde_json::Value {
    serde_json::to_value(NewsletterConfigInput { name: name.into(), ..NewsletterConfigInput::default() }).expect("body")
}

// =============================================================
// configurations
// =============================================================

#[tokio::test]
async fn configs_are_paged_in_snake_case() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, Method::GET, "/v1/newsletter-configs?page=1&page_size=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total_pages"], 2);
    let page = decode_page::<NewsletterConfiguration>(body).expect("page");
    assert_eq!(page.items.len(), 2);
    assert!(page.info.has_next());
}

#[tokio::test]
async fn config_crud_round_trip() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, Method::POST, "/v1/newsletter-configs", Some(config_body("Board Digest"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: NewsletterConfiguration = decode(body).expect("created");
    let uri = format!("/v1/newsletter-configs/{}", created.id);

    let (status, body) = call(&state, Method::PUT, &uri, Some(config_body("Board Digest v2"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Board Digest v2");

    let (status, body) = call(&state, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _) = call(&state, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_config_lists_fields() {
    let state = test_helpers::test_app_state();
    let mut body = config_body("");
    body["max_blocks"] = json!(11);
    let (status, body) = call(&state, Method::POST, "/v1/newsletter-configs", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<_> = body["error"]["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .map(|f| f["field"].as_str().unwrap_or_default().to_owned())
        .collect();
    assert_eq!(fields, vec!["name", "max_blocks"]);
}

// =============================================================
// content, sources, issues
// =============================================================

#[tokio::test]
async fn content_items_use_meta_envelope_and_filters() {
    let state = test_helpers::test_app_state();
    let (status, body) =
        call(&state, Method::GET, "/v1/newsletter/content-items?content_type=webinar&page=1&page_size=3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("meta").is_some());
    let page = decode_page::<ContentItem>(body).expect("page");
    assert!(!page.items.is_empty());
    assert!(page.items.len() <= 3);
    assert!(page.items.iter().all(|i| i.content_type == models::ContentType::Webinar));
}

#[tokio::test]
async fn content_sources_are_a_bare_array() {
    let state = test_helpers::test_app_state();
    let (_, body) = call(&state, Method::GET, "/v1/newsletter/content-sources", None).await;
    assert!(body.is_array());
    let page = decode_page::<ContentSource>(body).expect("page");
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.info.total_pages, 1);
}

#[tokio::test]
async fn draft_issue_filter() {
    let state = test_helpers::test_app_state();
    let (_, body) = call(&state, Method::GET, "/v1/newsletter/issues?status=draft", None).await;
    let page = decode_page::<NewsletterIssue>(body).expect("page");
    assert_eq!(page.items.len(), 2);
}

#[tokio::test]
async fn add_blocks_reports_created_and_skipped() {
    let state = test_helpers::test_app_state();
    let body = json!({ "content_item_ids": ["content-2", "content-3", "ghost"], "block_type": "spotlight" });
    let (status, body) = call(&state, Method::POST, "/v1/newsletter/issues/issue-2/blocks", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    let response: BulkAddBlocksResponse = decode(body).expect("response");
    assert_eq!(response.created_count, 2);
    assert_eq!(response.skipped_ids, vec!["ghost"]);

    let (_, body) = call(&state, Method::GET, "/v1/newsletter/issues?status=draft", None).await;
    let page = decode_page::<NewsletterIssue>(body).expect("page");
    let issue = page.items.iter().find(|i| i.id == "issue-2").expect("issue");
    assert_eq!(issue.block_count, 2);
}

#[tokio::test]
async fn add_blocks_to_sent_issue_conflicts() {
    let state = test_helpers::test_app_state();
    let body = json!({ "content_item_ids": ["content-2"], "block_type": "news" });
    let (status, _) = call(&state, Method::POST, "/v1/newsletter/issues/issue-1/blocks", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn blocks_are_listed_and_duplicates_conflict() {
    let state = test_helpers::test_app_state();
    let (status, body) = call(&state, Method::GET, "/v1/newsletter/issues/issue-3/blocks", None).await;
    assert_eq!(status, StatusCode::OK);
    let placed: Vec<IssueBlock> = decode(body).expect("blocks");
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].content_item_id, "content-1");

    let body = json!({ "content_item_ids": ["content-1"], "block_type": "news" });
    let (status, body) = call(&state, Method::POST, "/v1/newsletter/issues/issue-3/blocks", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "E_CONFLICT");

    let (status, _) = call(&state, Method::GET, "/v1/newsletter/issues/ghost/blocks", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
