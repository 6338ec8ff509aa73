use serde_json::{json, Value};
use serve::CredentialSource;

use super::common;

#[tokio::test]
async fn e2e_health_reports_ok_without_credential() {
    let base = common::spawn_proxy(common::settings_for(
        "http://127.0.0.1:1/v1/messages",
        CredentialSource::Missing,
    ))
    .await;

    let res = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn e2e_generate_rejects_get() {
    let base = common::spawn_proxy(common::settings_for(
        "http://127.0.0.1:1/v1/messages",
        common::fixed_key(),
    ))
    .await;

    let res = reqwest::get(format!("{}/api/generate", base)).await.unwrap();
    assert_eq!(res.status().as_u16(), 405);
}
