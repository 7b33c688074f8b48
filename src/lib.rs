//! # contact-relay
//!
//! Accepts contact-form submissions over HTTP and forwards each one as a
//! notification to a webhook-based alert channel (Discord-style embeds).
//!
//! The service is stateless: every request is validated, turned into one
//! outbound webhook call, and answered with the delivery outcome.

pub mod config;
pub mod contact;
pub mod error;
pub mod notify;
pub mod server;
pub mod telemetry;

pub use config::{Config, CorsConfig};
pub use contact::{ContactForm, ContactReceipt, ContactSubmission};
pub use error::{ApiError, ConfigError, NotifyError};
pub use notify::{AlertPayload, Notifier, WebhookNotifier};

/// Crate version reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
