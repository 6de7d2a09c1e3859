//! Lead notification delivery
//!
//! A [`Notifier`] receives the rendered notification for every accepted
//! lead. Production wires [`WebhookNotifier`] when a webhook URL is
//! configured and [`LogNotifier`] otherwise; tests capture deliveries
//! with [`MemoryNotifier`].

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use shared::{AppError, AppResult};

/// Rendered, ready-to-deliver lead notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Lead kind: callback | promo | order
    pub kind: String,
    pub subject: String,
    /// Plain-text body in Russian
    pub body: String,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> AppResult<()>;
}

/// Writes notifications to the application log
///
/// Default sink for development deployments without a webhook
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> AppResult<()> {
        tracing::info!(
            kind = %notification.kind,
            subject = %notification.subject,
            body = %notification.body,
            "Lead notification"
        );
        Ok(())
    }
}

/// POSTs notifications as JSON to a configured webhook
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String, timeout_ms: u64) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build webhook client: {}", e)))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, notification: &Notification) -> AppResult<()> {
        let response = self
            .client
            .post(&self.url)
            .json(notification)
            .send()
            .await
            .map_err(|e| AppError::notify_failed(format!("Webhook request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::notify_failed(format!(
                "Webhook returned status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

/// Captures notifications in memory, for tests
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications delivered so far, in order
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn notify(&self, notification: &Notification) -> AppResult<()> {
        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification.clone());
        Ok(())
    }
}
