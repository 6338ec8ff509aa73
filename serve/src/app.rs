//! Axum app: settings, shared state, router and the two handlers.
//!
//! Routes: `POST /api/generate` relays a prompt upstream; `GET /health` answers `{"status":"ok"}`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use pitch::protocol::{
    GenerateRequest, MessagesRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_UPSTREAM_URL,
    GENERATE_PATH,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::credential::{CredentialSource, DEFAULT_API_KEY_VAR};
use crate::error::ProxyError;
use crate::upstream::send_messages;

/// Proxy configuration: where to relay, with which model, and where the key lives.
#[derive(Clone, Debug)]
pub struct GatewaySettings {
    pub upstream_url: String,
    pub model: String,
    /// Used when a request omits `max_tokens`.
    pub default_max_tokens: u32,
    pub credential: CredentialSource,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            default_max_tokens: DEFAULT_MAX_TOKENS,
            credential: CredentialSource::default(),
        }
    }
}

impl GatewaySettings {
    /// Builds settings from environment variables, falling back to [`Default`] for unset or
    /// invalid values.
    ///
    /// - `PITCH_UPSTREAM_URL` (default Messages API endpoint)
    /// - `PITCH_MODEL` (default `claude-sonnet-4-20250514`)
    /// - `PITCH_API_KEY_VAR`: name of the env var holding the key (default `ANTHROPIC_API_KEY`)
    /// - `PITCH_DEFAULT_MAX_TOKENS` (default 300)
    pub fn from_env() -> Self {
        let default = Self::default();
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            upstream_url: non_empty("PITCH_UPSTREAM_URL").unwrap_or(default.upstream_url),
            model: non_empty("PITCH_MODEL").unwrap_or(default.model),
            default_max_tokens: non_empty("PITCH_DEFAULT_MAX_TOKENS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default.default_max_tokens),
            credential: CredentialSource::Env(
                non_empty("PITCH_API_KEY_VAR").unwrap_or_else(|| DEFAULT_API_KEY_VAR.to_string()),
            ),
        }
    }
}

/// Shared state for the proxy: settings plus one pooled HTTP client.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) settings: GatewaySettings,
    pub(crate) http: reqwest::Client,
}

impl AppState {
    pub(crate) fn new(settings: GatewaySettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
        }
    }
}

pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(GENERATE_PATH, post(generate_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Decodes the body by hand so any non-JSON body, with or without a content type, gets the
/// same 400 answer.
fn parse_request(body: &[u8]) -> Result<(String, Option<u32>), ProxyError> {
    let req: GenerateRequest = serde_json::from_slice(body).map_err(|_| ProxyError::InvalidBody)?;
    match req.prompt {
        Some(p) if !p.is_empty() => Ok((p, req.max_tokens)),
        _ => Err(ProxyError::MissingPrompt),
    }
}

/// Handles `POST /api/generate`: validate, attach credential, relay, pass the JSON back.
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    let (prompt, max_tokens) = parse_request(&body)?;
    let key = state
        .settings
        .credential
        .resolve()
        .ok_or(ProxyError::MissingCredential)?;
    let max_tokens = max_tokens.unwrap_or(state.settings.default_max_tokens);
    debug!(prompt_len = prompt.len(), max_tokens, "relaying prompt");

    let request = MessagesRequest::single_turn(&state.settings.model, max_tokens, prompt);
    let reply = send_messages(&state.http, &state.settings.upstream_url, &key, &request).await?;
    info!(max_tokens, "relayed generate request");
    Ok(Json(reply))
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
