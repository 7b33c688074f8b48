//! Webhook-backed [`Notifier`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info_span, Instrument};

use super::{AlertPayload, Notifier};
use crate::error::NotifyError;

const USER_AGENT: &str = concat!("contact-relay/", env!("CARGO_PKG_VERSION"));

/// Posts alerts to a single webhook URL over a pooled HTTP client.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl WebhookNotifier {
    /// # Errors
    ///
    /// Returns `NotifyError::Client` if the HTTP client cannot be built.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| NotifyError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    /// One POST, no retry. Any 2xx counts as delivered.
    async fn notify(&self, payload: &AlertPayload) -> Result<(), NotifyError> {
        let span = info_span!("webhook_notify", host = self.url.host_str().unwrap_or(""));

        async move {
            let response = self
                .client
                .post(self.url.clone())
                .json(payload)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        NotifyError::Timeout {
                            secs: self.timeout.as_secs(),
                        }
                    } else {
                        NotifyError::Transport(e.to_string())
                    }
                })?;

            let status = response.status();
            debug!(status = status.as_u16(), "Webhook responded");

            if !status.is_success() {
                return Err(NotifyError::Rejected {
                    status: status.as_u16(),
                });
            }
            Ok(())
        }
        .instrument(span)
        .await
    }
}
