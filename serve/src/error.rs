//! Proxy failures and their HTTP mapping. Every error answers with `{"error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pitch::protocol::ErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Invalid JSON body")]
    InvalidBody,
    #[error("Prompt is required")]
    MissingPrompt,
    #[error("API key not configured")]
    MissingCredential,
    /// Upstream answered with a non-success status; the status is relayed as-is.
    #[error("Failed to generate pitch")]
    Upstream(StatusCode),
    /// Transport failure or an upstream body that is not JSON.
    #[error("Internal server error")]
    Internal(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody | Self::MissingPrompt => StatusCode::BAD_REQUEST,
            Self::MissingCredential | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(status) => *status,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ProxyError::InvalidBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ProxyError::MissingPrompt.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ProxyError::MissingCredential.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ProxyError::Upstream(StatusCode::TOO_MANY_REQUESTS).status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ProxyError::Internal("connection refused".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_in_the_message() {
        let err = ProxyError::Internal("dns error: api.example".into());
        assert_eq!(err.to_string(), "Internal server error");
    }
}
