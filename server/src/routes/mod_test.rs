use axum::http::Method;
use models::{Envelope, PageInfo, decode_page};
use serde_json::json;

use super::test_client::call;
use super::*;
use crate::state::test_helpers;

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, body) = call(&test_helpers::empty_app_state(), Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = call(&test_helpers::empty_app_state(), Method::GET, "/v1/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn success_envelope_classifies_as_success() {
    let Json(body) = success(json!({ "id": "a" }));
    assert_eq!(Envelope::classify(body), Envelope::Success { data: json!({ "id": "a" }) });
}

#[test]
fn every_list_envelope_decodes_to_the_same_page() {
    let info = PageInfo::for_page(2, 10, 25);
    let items = vec![json!(1), json!(2)];
    for Json(body) in [
        paged(items.clone(), &info),
        paged_camel(items.clone(), &info),
        with_meta(items.clone(), &info),
    ] {
        let page = decode_page::<u8>(body.clone()).expect("decode");
        assert_eq!(page.items, vec![1, 2], "{body}");
        assert_eq!(page.info.page, 2);
        assert_eq!(page.info.total, 25);
        assert_eq!(page.info.total_pages, 3);
        assert!(page.info.has_next());
        assert!(page.info.has_previous());
    }
}

#[test]
fn camel_pagination_uses_backend_field_names() {
    let Json(body) = paged_camel(Vec::<u8>::new(), &PageInfo::for_page(1, 20, 0));
    let pagination = &body["pagination"];
    for key in ["page", "pageSize", "totalPages", "totalItems", "hasNextPage", "hasPreviousPage"] {
        assert!(pagination.get(key).is_some(), "missing {key}");
    }
}
