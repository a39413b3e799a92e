use axum::http::StatusCode;
use serde_json::Value;
use tower::util::ServiceExt;

use firstline_core::KnowledgeBase;
use firstline_core::config::SearchConfig;

use super::harness::{TestHarness, decode_json, get_request};

fn result_ids(payload: &Value) -> Vec<&str> {
    payload
        .as_array()
        .expect("json array")
        .iter()
        .map(|entry| entry["id"].as_str().expect("id field"))
        .collect()
}

#[tokio::test]
async fn search_without_query_returns_full_knowledge_base_in_order() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .oneshot(get_request("/api/first-aid/search"))
        .await
        .expect("search response");
    assert_eq!(response.status(), StatusCode::OK);

    let payload: Value = decode_json(response).await;
    let declared = KnowledgeBase::builtin()
        .expect("kb")
        .topics()
        .iter()
        .map(|topic| topic.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(result_ids(&payload), declared);
}

#[tokio::test]
async fn search_response_omits_internal_keywords_field() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .oneshot(get_request("/api/first-aid/search?q=cpr"))
        .await
        .expect("search response");

    let payload: Value = decode_json(response).await;
    let first = &payload.as_array().expect("json array")[0];
    assert!(first.get("keywords").is_none());
    assert!(first["steps"].is_array());
    assert!(first["source"].is_string());
}

#[tokio::test]
async fn exact_title_match_ranks_first() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .oneshot(get_request("/api/first-aid/search?q=CPR"))
        .await
        .expect("search response");

    let payload: Value = decode_json(response).await;
    assert_eq!(result_ids(&payload).first(), Some(&"cpr"));
}

#[tokio::test]
async fn snake_query_ranks_snakebite_first() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .oneshot(get_request("/api/first-aid/search?q=snake"))
        .await
        .expect("search response");

    let payload: Value = decode_json(response).await;
    assert_eq!(result_ids(&payload).first(), Some(&"snakebite"));
}

#[tokio::test]
async fn unmatched_query_returns_empty_array_not_error() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .oneshot(get_request("/api/first-aid/search?q=xyznotarealword"))
        .await
        .expect("search response");
    assert_eq!(response.status(), StatusCode::OK);

    let payload: Value = decode_json(response).await;
    assert!(payload.as_array().expect("json array").is_empty());
}

#[tokio::test]
async fn zero_limit_is_a_validation_error() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .oneshot(get_request("/api/first-aid/search?q=burn&limit=0"))
        .await
        .expect("search response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload: Value = decode_json(response).await;
    assert_eq!(payload["code"], "VALIDATION_FAILED");
    assert_eq!(payload["operation"], "first_aid.search");
    assert!(payload["trace_id"].as_str().is_some_and(|x| !x.is_empty()));
}

#[tokio::test]
async fn request_limit_truncates_after_ranking() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .oneshot(get_request("/api/first-aid/search?q=cpr&limit=1"))
        .await
        .expect("search response");

    let payload: Value = decode_json(response).await;
    assert_eq!(result_ids(&payload), vec!["cpr"]);
}

#[tokio::test]
async fn server_cap_bounds_uncapped_requests() {
    let harness = TestHarness::setup_with_search(SearchConfig {
        max_results: Some(2),
    });
    let response = harness
        .router
        .oneshot(get_request("/api/first-aid/search"))
        .await
        .expect("search response");

    let payload: Value = decode_json(response).await;
    assert_eq!(payload.as_array().expect("json array").len(), 2);
}

#[tokio::test]
async fn detailed_search_reports_tier_and_exactness() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .oneshot(get_request(
            "/api/first-aid/search?q=choking%20food&detailed=true",
        ))
        .await
        .expect("search response");

    let payload: Value = decode_json(response).await;
    let choking = payload
        .as_array()
        .expect("json array")
        .iter()
        .find(|hit| hit["id"] == "choking")
        .expect("choking hit");
    assert_eq!(choking["tier"], "token_overlap");
    assert_eq!(choking["exact"], false);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .oneshot(get_request("/api/first-aid/search?q=burn"))
        .await
        .expect("search response");

    let headers = response.headers();
    assert_eq!(
        headers.get("x-content-type-options").map(|v| v.as_bytes()),
        Some(b"nosniff".as_slice())
    );
    assert_eq!(
        headers.get("x-frame-options").map(|v| v.as_bytes()),
        Some(b"DENY".as_slice())
    );
    assert!(headers.contains_key("content-security-policy"));
}
