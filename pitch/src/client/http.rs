//! HTTP implementation of [`PitchGateway`] that posts to the `serve` proxy.

use async_trait::async_trait;
use serde_json::Value;

use super::{GatewayError, PitchGateway};
use crate::protocol::{ErrorBody, GenerateRequest, GENERATE_PATH};

/// Proxy endpoint used when neither an explicit URL nor `PITCH_GATEWAY_URL` is given.
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:8787/api/generate";

/// Posts `{prompt, max_tokens}` to the proxy endpoint.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpGateway {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Builds a gateway for a server base URL such as `http://127.0.0.1:8787`.
    pub fn for_base_url(base: &str) -> Self {
        Self::new(format!("{}{}", base.trim_end_matches('/'), GENERATE_PATH))
    }

    /// Uses `PITCH_GATEWAY_URL`, falling back to [`DEFAULT_GATEWAY_URL`].
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("PITCH_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PitchGateway for HttpGateway {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<Value, GatewayError> {
        tracing::debug!(url = %self.url, prompt_len = prompt.len(), max_tokens, "gateway request");
        let res = self
            .client
            .post(&self.url)
            .json(&GenerateRequest::new(prompt, max_tokens))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let message = res
                .json::<ErrorBody>()
                .await
                .map(|b| b.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("error").to_string());
            tracing::warn!(status = status.as_u16(), %message, "gateway request failed");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message,
            });
        }

        res.json::<Value>()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }
}
