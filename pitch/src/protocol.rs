//! Wire types shared by the proxy gateway (`serve`) and the gateway client.
//!
//! - **Proxy endpoint**: [`GenerateRequest`] in, the upstream JSON or [`ErrorBody`] out.
//! - **Upstream Messages API**: [`MessagesRequest`] with a single user-role [`ChatMessage`].

use serde::{Deserialize, Serialize};

/// Path of the proxy endpoint.
pub const GENERATE_PATH: &str = "/api/generate";
/// Token budget used when the request does not carry `max_tokens`.
pub const DEFAULT_MAX_TOKENS: u32 = 300;
/// Model identifier sent upstream.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
/// Value of the `anthropic-version` header.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Upstream Messages API endpoint.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.anthropic.com/v1/messages";

/// Body of `POST /api/generate`. `prompt` is optional on the wire so a missing prompt can
/// be answered with 400 rather than a decode error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: Some(prompt.into()),
            max_tokens: Some(max_tokens),
        }
    }
}

/// Error body returned by the proxy for every non-200 response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One chat message sent upstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the upstream Messages API: single-turn, user role only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

impl MessagesRequest {
    pub fn single_turn(model: impl Into<String>, max_tokens: u32, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}
