//! Axum route handlers for the contact relay.
//!
//! # Routes
//!
//! - `GET  /health`      — Returns `{"status": "ok", "service": ..., "version": ...}`
//! - `POST /api/contact` — Accepts `{name, email, message}`, forwards an alert,
//!   returns a `ContactReceipt`

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::CorsConfig;
use crate::contact::{ContactForm, ContactReceipt, ContactSubmission};
use crate::error::ApiError;
use crate::notify::{AlertPayload, Notifier};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Where alerts are delivered.
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/contact", post(contact_handler))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Credentialed CORS restricted to the configured origins.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(cors.allowed_origins.iter().cloned()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "contact-relay",
        "version": crate::VERSION,
    }))
}

/// POST /api/contact — forward a contact form to the alert channel.
///
/// The handler:
/// 1. Decodes and validates the body (422 on failure)
/// 2. Tags the request with a fresh transaction id
/// 3. Sends exactly one alert through the notifier
/// 4. Returns the receipt, or 500 if the alert could not be delivered
async fn contact_handler(
    State(state): State<AppState>,
    body: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ContactReceipt>, ApiError> {
    let Json(form) = body.map_err(|rejection| ApiError::Malformed(rejection.body_text()))?;
    let submission = ContactSubmission::try_from(form).map_err(ApiError::InvalidPayload)?;

    let transaction_id = Uuid::new_v4();
    tracing::info!(
        %transaction_id,
        sender = submission.name(),
        "New contact inbound"
    );

    let payload = AlertPayload::from_submission(&submission);
    if let Err(e) = state.notifier.notify(&payload).await {
        tracing::error!(%transaction_id, error = %e, "Alert delivery failed");
        return Err(ApiError::Upstream(e));
    }

    tracing::info!(%transaction_id, "Alert delivered");
    Ok(Json(ContactReceipt::delivered(transaction_id)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
