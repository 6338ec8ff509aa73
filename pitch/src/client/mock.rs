//! Mock gateway for tests and offline demos.
//!
//! Returns queued results in order and records every prompt it receives. When the queue
//! is empty it answers with a transport error.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{GatewayError, PitchGateway};

#[derive(Default)]
pub struct MockGateway {
    replies: Mutex<VecDeque<Result<Value, GatewayError>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a Messages API body whose single text block is `text`.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_reply(Ok(Self::text_reply(text)))
    }

    /// Queues an error result.
    pub fn with_error(self, err: GatewayError) -> Self {
        self.with_reply(Err(err))
    }

    pub fn with_reply(self, reply: Result<Value, GatewayError>) -> Self {
        if let Ok(mut q) = self.replies.lock() {
            q.push_back(reply);
        }
        self
    }

    /// Messages API response shape with one text block.
    pub fn text_reply(text: impl Into<String>) -> Value {
        json!({
            "id": "msg_mock",
            "type": "message",
            "role": "assistant",
            "model": crate::protocol::DEFAULT_MODEL,
            "content": [{"type": "text", "text": text.into()}],
            "stop_reason": "end_turn"
        })
    }

    /// `(prompt, max_tokens)` of every call so far.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PitchGateway for MockGateway {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<Value, GatewayError> {
        if let Ok(mut c) = self.calls.lock() {
            c.push((prompt.to_string(), max_tokens));
        }
        self.replies
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or_else(|| Err(GatewayError::Transport("mock gateway has no reply queued".into())))
    }
}
