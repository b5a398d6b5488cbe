use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{DeliveryReceipt, Notification, NotificationDispatcher, NotificationTarget};

/// Dispatcher that accepts everything and keeps a copy of what it was given.
///
/// Webhook targets whose host contains `fail` answer with a 500, mirroring an
/// endpoint that is up but broken. An injected send error simulates an
/// unreachable transport.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    sent: RwLock<Vec<Notification>>,
    send_error: RwLock<Option<String>>,
}

impl RecordingDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_send_error(&self, err: Option<String>) {
        *self.send_error.write().await = err;
    }

    /// Everything delivered so far, oldest first.
    pub async fn sent(&self) -> Vec<Notification> {
        self.sent.read().await.clone()
    }
}

fn answer(target: &NotificationTarget) -> (u16, &'static str) {
    match target {
        NotificationTarget::Webhook { url, .. } => {
            let host = url::Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_owned))
                .unwrap_or_default();
            if host.contains("fail") {
                (500, "Internal Server Error")
            } else {
                (200, "Success")
            }
        }
        NotificationTarget::Email { .. } => (250, "Queued"),
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingDispatcher {
    async fn send(&self, notification: Notification) -> CoreResult<DeliveryReceipt> {
        if let Some(ref msg) = *self.send_error.read().await {
            return Err(CoreError::DeliveryError(msg.clone()));
        }
        let (status_code, message) = answer(&notification.target);
        log::info!("Delivered {:?} -> {status_code}", notification.target);
        self.sent.write().await.push(notification);
        Ok(DeliveryReceipt {
            status_code,
            message: message.to_string(),
            delivered_at: Utc::now(),
        })
    }
}
