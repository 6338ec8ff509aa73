//! Single-turn call to the Messages API.

use axum::http::StatusCode;
use pitch::protocol::{MessagesRequest, ANTHROPIC_VERSION};
use serde_json::Value;
use tracing::warn;

use crate::credential::ApiKey;
use crate::error::ProxyError;

/// Posts one user-role message to `url` and returns the decoded JSON body on success.
///
/// Non-success statuses become [`ProxyError::Upstream`] carrying the same status; the
/// upstream body is logged, never returned to the caller.
pub(crate) async fn send_messages(
    client: &reqwest::Client,
    url: &str,
    key: &ApiKey,
    request: &MessagesRequest,
) -> Result<Value, ProxyError> {
    let res = client
        .post(url)
        .header("x-api-key", key.expose())
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(request)
        .send()
        .await
        .map_err(|e| {
            warn!(error = %e, "upstream request failed");
            ProxyError::Internal(e.to_string())
        })?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "upstream returned error");
        let status =
            StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return Err(ProxyError::Upstream(status));
    }

    res.json::<Value>().await.map_err(|e| {
        warn!(error = %e, "upstream body is not JSON");
        ProxyError::Internal(e.to_string())
    })
}
