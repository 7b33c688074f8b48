//! contact-relay HTTP server binary.
//!
//! Starts an axum HTTP server that accepts contact-form submissions and
//! relays them to the configured alert webhook.
//!
//! # Environment Variables
//!
//! - `WEBHOOK_URL` — Alert webhook URL (required; the server refuses to start without it)
//! - `HOST` — Bind address (default: 0.0.0.0)
//! - `PORT` — HTTP port (default: 4000)
//! - `WEBHOOK_TIMEOUT_SECS` — Outbound timeout (default: 10)
//! - `CORS_ALLOWED_ORIGINS` — Comma-separated origin allow-list
//! - `RUST_LOG` — Tracing filter (default: "info,contact_relay=debug")
//!
//! # Usage
//!
//! ```bash
//! WEBHOOK_URL=https://discord.com/api/webhooks/... cargo run --bin server
//! ```

use std::sync::Arc;

use anyhow::Context;
use contact_relay::server::{app_router, shutdown_signal, AppState};
use contact_relay::{telemetry, Config, WebhookNotifier};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    telemetry::init_tracing();

    let notifier = WebhookNotifier::new(config.webhook_url.clone(), config.webhook_timeout)
        .context("failed to build webhook client")?;
    info!(
        webhook_host = notifier.url().host_str().unwrap_or(""),
        timeout_secs = config.webhook_timeout.as_secs(),
        "Alert webhook configured"
    );

    let app = app_router(AppState::new(Arc::new(notifier)), &config.cors);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("contact-relay listening on {}", listener.local_addr()?);
    info!("Endpoints:");
    info!("  GET  /health      — liveness probe");
    info!("  POST /api/contact — contact form relay");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    info!("contact-relay stopped");
    Ok(())
}
