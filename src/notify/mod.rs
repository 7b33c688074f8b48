//! Outbound notification to the alert channel.
//!
//! [`AlertPayload`] is the fixed-shape body the webhook receives;
//! [`Notifier`] is the seam the HTTP handlers call through, with
//! [`WebhookNotifier`] as the production implementation.

pub mod alert;
pub mod webhook;

use async_trait::async_trait;

use crate::error::NotifyError;

pub use alert::{AlertPayload, Embed, EmbedField, EmbedFooter};
pub use webhook::WebhookNotifier;

/// Delivers one alert. Implementations must not retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, payload: &AlertPayload) -> Result<(), NotifyError>;
}
