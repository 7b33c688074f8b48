//! HTTP server for the contact relay.
//!
//! # Endpoints
//!
//! - `GET  /health`      — Liveness probe
//! - `POST /api/contact` — Accept a contact form and forward it to the alert webhook

pub mod routes;
pub mod shutdown;

pub use routes::{app_router, AppState};
pub use shutdown::shutdown_signal;
