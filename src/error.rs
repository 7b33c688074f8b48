//! Error types for contact-relay.
//!
//! Each concern gets its own enum; `ApiError` is the only one that knows
//! about HTTP and is what the route handlers return.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    /// A variable is set but cannot be used.
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors from delivering a notification to the alert webhook.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The webhook answered with a non-2xx status.
    #[error("webhook rejected notification with HTTP {status}")]
    Rejected { status: u16 },

    /// No response within the configured timeout.
    #[error("webhook did not respond within {secs}s")]
    Timeout { secs: u64 },

    /// Connection, TLS, or other transport failure.
    #[error("webhook transport error: {0}")]
    Transport(String),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// A single failed field in an inbound payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    fn to_detail(&self) -> Value {
        json!({
            "loc": ["body", self.field],
            "msg": self.reason,
        })
    }
}

/// Errors returned by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be decoded as a contact form.
    #[error("malformed request body: {0}")]
    Malformed(String),

    /// The body decoded but one or more fields failed validation.
    #[error("invalid contact submission ({} field(s))", .0.len())]
    InvalidPayload(Vec<FieldError>),

    /// The alert webhook could not be reached or refused the notification.
    #[error("upstream delivery failed: {0}")]
    Upstream(#[from] NotifyError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Malformed(_) | ApiError::InvalidPayload(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Malformed(msg) => json!({
                "detail": [{ "loc": ["body"], "msg": msg }],
            }),
            ApiError::InvalidPayload(errors) => json!({
                "detail": errors.iter().map(FieldError::to_detail).collect::<Vec<_>>(),
            }),
            // The cause is logged by the handler; callers only see a generic message.
            ApiError::Upstream(_) => json!({ "detail": "Upstream delivery failed" }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_payload_lists_every_field() {
        let err = ApiError::InvalidPayload(vec![
            FieldError::new("name", "must not be empty"),
            FieldError::new("email", "not a valid email address"),
        ]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        let detail = json["detail"].as_array().unwrap();
        assert_eq!(detail.len(), 2);
        assert_eq!(detail[0]["loc"], json!(["body", "name"]));
        assert_eq!(detail[1]["msg"], "not a valid email address");
    }

    #[tokio::test]
    async fn test_upstream_error_hides_cause() {
        let err = ApiError::from(NotifyError::Rejected { status: 404 });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json, json!({ "detail": "Upstream delivery failed" }));
    }

    #[test]
    fn test_notify_error_messages() {
        assert_eq!(
            NotifyError::Rejected { status: 502 }.to_string(),
            "webhook rejected notification with HTTP 502"
        );
        assert_eq!(
            NotifyError::Timeout { secs: 10 }.to_string(),
            "webhook did not respond within 10s"
        );
    }
}
