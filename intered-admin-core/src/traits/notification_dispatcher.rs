//! Outbound notification abstract Trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::CoreResult;
use crate::types::WebhookEvent;

/// Where a notification goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NotificationTarget {
    Webhook {
        url: String,
        event: WebhookEvent,
        #[serde(skip)]
        secret: Option<String>,
    },
    Email {
        to: String,
        subject: String,
    },
}

/// A message to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub target: NotificationTarget,
    pub body: String,
}

/// Result of a delivery attempt that reached the other side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    pub status_code: u16,
    pub message: String,
    #[serde(with = "crate::utils::datetime")]
    pub delivered_at: DateTime<Utc>,
}

/// Notification dispatcher Trait
///
/// An `Err` means the notification could not be handed over at all; a receipt
/// with a non-2xx status means it was delivered and rejected.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Deliver one notification
    ///
    /// # Arguments
    /// * `notification` - Target and body
    async fn send(&self, notification: Notification) -> CoreResult<DeliveryReceipt>;
}
