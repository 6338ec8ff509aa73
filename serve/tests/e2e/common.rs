//! Shared helpers for e2e tests: a fake Messages API and the proxy wired to it.
//! Received responses are logged with `[e2e] received: ...`; run with `--nocapture` to see them.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use serve::{ApiKey, CredentialSource, GatewaySettings};
use tokio::net::TcpListener;

pub const TEST_KEY: &str = "sk-test-e2e-secret";

/// One request as seen by the fake upstream.
#[derive(Clone, Debug)]
pub struct Captured {
    pub api_key: Option<String>,
    pub version: Option<String>,
    pub body: Value,
}

/// What the fake upstream answers with.
#[derive(Clone)]
pub enum UpstreamReply {
    Json(StatusCode, Value),
    Raw(StatusCode, &'static str),
}

#[derive(Clone)]
struct UpstreamState {
    reply: UpstreamReply,
    seen: Arc<Mutex<Vec<Captured>>>,
}

async fn fake_messages(
    State(state): State<UpstreamState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> axum::response::Response {
    use axum::response::IntoResponse;
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.seen.lock().unwrap().push(Captured {
        api_key: header("x-api-key"),
        version: header("anthropic-version"),
        body,
    });
    match state.reply {
        UpstreamReply::Json(status, value) => (status, Json(value)).into_response(),
        UpstreamReply::Raw(status, text) => (status, text).into_response(),
    }
}

/// Text reply in the Messages API shape.
pub fn text_reply(text: &str) -> Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn"
    })
}

/// Spawns the fake upstream. Returns its messages URL and the captured-request log.
pub async fn spawn_upstream(reply: UpstreamReply) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = UpstreamState {
        reply,
        seen: Arc::clone(&seen),
    };
    let app = Router::new()
        .route("/v1/messages", post(fake_messages))
        .with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{}/v1/messages", addr), seen)
}

pub fn settings_for(upstream_url: &str, credential: CredentialSource) -> GatewaySettings {
    GatewaySettings {
        upstream_url: upstream_url.to_string(),
        credential,
        ..GatewaySettings::default()
    }
}

pub fn fixed_key() -> CredentialSource {
    CredentialSource::Fixed(ApiKey::new(TEST_KEY).unwrap())
}

/// Bind to a random port and spawn the proxy. Returns its base URL (`http://127.0.0.1:PORT`).
pub async fn spawn_proxy(settings: GatewaySettings) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve::run_serve_on_listener(listener, settings));
    format!("http://{}", addr)
}

/// Posts a raw body to `/api/generate`; returns status and parsed JSON.
pub async fn post_generate(base: &str, body: &str) -> (u16, Value) {
    let res = reqwest::Client::new()
        .post(format!("{}/api/generate", base))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = res.status().as_u16();
    let text = res.text().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, text);
    (status, serde_json::from_str(&text).unwrap())
}
