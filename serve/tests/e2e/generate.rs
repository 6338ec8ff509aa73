use axum::http::StatusCode;
use serde_json::json;
use serve::CredentialSource;

use super::common::{self, UpstreamReply};

#[tokio::test]
async fn e2e_missing_prompt_is_400() {
    let (url, seen) = common::spawn_upstream(UpstreamReply::Json(
        StatusCode::OK,
        common::text_reply("unused"),
    ))
    .await;
    let base = common::spawn_proxy(common::settings_for(&url, common::fixed_key())).await;

    let (status, body) = common::post_generate(&base, r#"{"max_tokens": 300}"#).await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Prompt is required"}));

    let (status, body) = common::post_generate(&base, r#"{"prompt": ""}"#).await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Prompt is required"}));

    assert!(seen.lock().unwrap().is_empty(), "upstream must not be called");
}

#[tokio::test]
async fn e2e_invalid_json_is_400() {
    let base = common::spawn_proxy(common::settings_for(
        "http://127.0.0.1:1/v1/messages",
        common::fixed_key(),
    ))
    .await;

    let (status, body) = common::post_generate(&base, "not valid json").await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Invalid JSON body"}));
}

#[tokio::test]
async fn e2e_missing_credential_is_500() {
    let (url, seen) = common::spawn_upstream(UpstreamReply::Json(
        StatusCode::OK,
        common::text_reply("unused"),
    ))
    .await;
    let base = common::spawn_proxy(common::settings_for(&url, CredentialSource::Missing)).await;

    let (status, body) = common::post_generate(&base, r#"{"prompt": "hello"}"#).await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "API key not configured"}));
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn e2e_prompt_checked_before_credential() {
    let base = common::spawn_proxy(common::settings_for(
        "http://127.0.0.1:1/v1/messages",
        CredentialSource::Missing,
    ))
    .await;

    let (status, body) = common::post_generate(&base, "{}").await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Prompt is required"}));
}

#[tokio::test]
async fn e2e_success_relays_body_and_headers() {
    let upstream_body = common::text_reply("Acme ends double-booked shoots.");
    let (url, seen) =
        common::spawn_upstream(UpstreamReply::Json(StatusCode::OK, upstream_body.clone())).await;
    let base = common::spawn_proxy(common::settings_for(&url, common::fixed_key())).await;

    let (status, body) =
        common::post_generate(&base, r#"{"prompt": "Write a pitch", "max_tokens": 600}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body, upstream_body);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let call = &seen[0];
    assert_eq!(call.api_key.as_deref(), Some(common::TEST_KEY));
    assert_eq!(call.version.as_deref(), Some("2023-06-01"));
    assert_eq!(
        call.body,
        json!({
            "model": "claude-sonnet-4-20250514",
            "max_tokens": 600,
            "messages": [{"role": "user", "content": "Write a pitch"}]
        })
    );
}

#[tokio::test]
async fn e2e_default_max_tokens_is_300() {
    let (url, seen) = common::spawn_upstream(UpstreamReply::Json(
        StatusCode::OK,
        common::text_reply("ok"),
    ))
    .await;
    let base = common::spawn_proxy(common::settings_for(&url, common::fixed_key())).await;

    let (status, _) = common::post_generate(&base, r#"{"prompt": "hi"}"#).await;
    assert_eq!(status, 200);
    assert_eq!(seen.lock().unwrap()[0].body["max_tokens"], 300);
}

#[tokio::test]
async fn e2e_upstream_error_status_is_relayed() {
    let (url, _) = common::spawn_upstream(UpstreamReply::Json(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"type": "error", "error": {"type": "rate_limit_error", "message": "slow down"}}),
    ))
    .await;
    let base = common::spawn_proxy(common::settings_for(&url, common::fixed_key())).await;

    let (status, body) = common::post_generate(&base, r#"{"prompt": "hi"}"#).await;
    assert_eq!(status, 429);
    assert_eq!(body, json!({"error": "Failed to generate pitch"}));
}

#[tokio::test]
async fn e2e_upstream_non_json_body_is_500() {
    let (url, _) = common::spawn_upstream(UpstreamReply::Raw(StatusCode::OK, "<html>oops</html>")).await;
    let base = common::spawn_proxy(common::settings_for(&url, common::fixed_key())).await;

    let (status, body) = common::post_generate(&base, r#"{"prompt": "hi"}"#).await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn e2e_unreachable_upstream_is_500() {
    let base = common::spawn_proxy(common::settings_for(
        "http://127.0.0.1:1/v1/messages",
        common::fixed_key(),
    ))
    .await;

    let (status, body) = common::post_generate(&base, r#"{"prompt": "hi"}"#).await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn e2e_credential_never_appears_in_responses() {
    let (url, _) = common::spawn_upstream(UpstreamReply::Json(
        StatusCode::UNAUTHORIZED,
        json!({"error": {"message": "invalid x-api-key"}}),
    ))
    .await;
    let base = common::spawn_proxy(common::settings_for(&url, common::fixed_key())).await;

    let (status, body) = common::post_generate(&base, r#"{"prompt": "hi"}"#).await;
    assert_eq!(status, 401);
    assert!(!body.to_string().contains(common::TEST_KEY));
}
