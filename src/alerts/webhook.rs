//! Webhook-backed alert notifier.

use super::{AlertMessage, AlertNotifier};
use crate::error::MonitorError;
use async_trait::async_trait;
use tracing::debug;

pub struct WebhookNotifier {
    url: String,
    http: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Injectable HTTP client, used by tests to point at a mock server.
    pub fn with_client(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }
}

#[async_trait]
impl AlertNotifier for WebhookNotifier {
    async fn publish(&self, alert: &AlertMessage) -> Result<(), MonitorError> {
        let response = self
            .http
            .post(&self.url)
            .json(alert)
            .send()
            .await
            .map_err(|e| MonitorError::NotifyFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MonitorError::NotifyFailed(format!(
                "webhook returned status {}",
                response.status()
            )));
        }

        debug!(subject = %alert.subject, "alert published");
        Ok(())
    }
}
