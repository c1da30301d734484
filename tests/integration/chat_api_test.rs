//! HTTP-level tests for the chat API
//!
//! Drives the composed router in-process, asserting the end-to-end reply
//! contract at the transport boundary.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use coachbot_engine::{blockers, keywords, WELCOME};

/// Send a JSON body to POST /v1/chat and return (status, parsed body)
async fn post_chat(body: Value) -> (StatusCode, Value) {
    let app = coachbot_api::create_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, parsed)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = coachbot_api::create_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_empty_messages_returns_fixed_invitation() {
    let (status, body) = post_chat(json!({"messages": []})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], WELCOME);
}

#[tokio::test]
async fn test_missing_messages_field_treated_as_empty() {
    let (status, body) = post_chat(json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], WELCOME);
}

#[tokio::test]
async fn test_malformed_messages_treated_as_empty() {
    let (status, body) = post_chat(json!({"messages": {"nested": "object"}})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], WELCOME);
}

#[tokio::test]
async fn test_hello_returns_greeting_rule_response() {
    let (status, body) =
        post_chat(json!({"messages": [{"role": "user", "content": "hello"}]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], keywords::GREETING_REPLY);
}

#[tokio::test]
async fn test_multi_blocker_reply_contains_all_advisories_once() {
    let (status, body) = post_chat(json!({
        "messages": [{"role": "user", "content": "I'm worried about my budget and time"}]
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let reply = body["reply"].as_str().unwrap();

    assert_eq!(reply.matches(blockers::TIME_ADVISORY).count(), 1);
    assert_eq!(reply.matches(blockers::BUDGET_ADVISORY).count(), 1);
    assert_eq!(reply.matches(blockers::CONFIDENCE_ADVISORY).count(), 1);

    // Advisories appear in fixed rule order
    let time = reply.find(blockers::TIME_ADVISORY).unwrap();
    let budget = reply.find(blockers::BUDGET_ADVISORY).unwrap();
    let confidence = reply.find(blockers::CONFIDENCE_ADVISORY).unwrap();
    assert!(time < budget && budget < confidence);

    // Next-steps block carries at most two idea bullets
    let steps_block = reply
        .split("\n\n")
        .find(|block| block.starts_with("Next steps:"))
        .unwrap();
    let bullets = steps_block
        .lines()
        .filter(|line| line.starts_with("- "))
        .count();
    assert!(bullets <= 2);
}

#[tokio::test]
async fn test_conversation_without_user_turn_returns_invitation() {
    let (status, body) = post_chat(json!({
        "messages": [
            {"role": "assistant", "content": "still here"},
            {"role": "system", "content": "be brief"}
        ]
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], WELCOME);
}

#[tokio::test]
async fn test_unparseable_body_is_rejected_with_validation_error() {
    let app = coachbot_api::create_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
