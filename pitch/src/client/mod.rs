//! Gateway client: sends a built prompt to the proxy endpoint and returns the relayed
//! Messages API JSON.
//!
//! [`Session`](crate::session::Session) depends only on [`PitchGateway`]; implementations are
//! [`HttpGateway`] (the `serve` proxy over HTTP) and [`MockGateway`] (queued canned results).

mod http;
mod mock;

pub use http::{HttpGateway, DEFAULT_GATEWAY_URL};
pub use mock::MockGateway;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure of one gateway call. None of these are retried automatically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The proxy answered with a non-success status; `message` is its `{error}` body.
    #[error("gateway returned {status}: {message}")]
    Status { status: u16, message: String },
    /// Connection failure or undecodable response body.
    #[error("gateway transport error: {0}")]
    Transport(String),
}

/// Relays one single-turn prompt to the model.
#[async_trait]
pub trait PitchGateway: Send + Sync {
    /// Sends `prompt` with a `max_tokens` budget; returns the upstream JSON body unmodified.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<Value, GatewayError>;
}
