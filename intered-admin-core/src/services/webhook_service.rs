//! Webhook management service

use std::sync::Arc;

use chrono::Utc;

use crate::dialog::{CreateWebhookForm, DialogForm};
use crate::error::{CoreError, CoreResult, FieldError};
use crate::payload;
use crate::traits::{DeliveryReceipt, Notification, NotificationTarget};
use crate::types::{
    ActiveStatus, AuditModule, DeliveryResponse, EntityId, NewAuditEntry, Webhook, WebhookEvent,
};

use super::{require, ServiceContext};

/// Webhook management service
pub struct WebhookService {
    ctx: Arc<ServiceContext>,
}

impl WebhookService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> CoreResult<Vec<Webhook>> {
        self.ctx.repositories.webhooks.list().await
    }

    pub async fn get(&self, id: EntityId) -> CoreResult<Webhook> {
        require(self.ctx.repositories.webhooks.as_ref(), id).await
    }

    /// Registers a new endpoint. A form without events is rejected.
    pub async fn create(&self, form: &CreateWebhookForm) -> CoreResult<Webhook> {
        form.validate()?;

        let draft = Webhook {
            id: 0,
            name: form.name.trim().to_string(),
            url: form.url.trim().to_string(),
            secret: form.secret(),
            events: form.events.clone(),
            status: ActiveStatus::Active,
            created_at: Utc::now(),
            last_triggered: None,
            last_response: None,
        };
        let webhook = self.ctx.repositories.webhooks.create(draft).await?;
        log::info!("Webhook #{} '{}' created", webhook.id, webhook.name);
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::ApiManagement,
                "Create Webhook",
                format!("Created webhook '{}' for {}", webhook.name, webhook.url),
            ))
            .await;
        Ok(webhook)
    }

    pub async fn set_status(&self, id: EntityId, status: ActiveStatus) -> CoreResult<Webhook> {
        let mut webhook = self.get(id).await?;
        if webhook.status == status {
            return Ok(webhook);
        }
        webhook.status = status;
        let webhook = self.ctx.repositories.webhooks.update(webhook).await?;
        log::info!("Webhook #{id} is now {}", status.label());
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::ApiManagement,
                "Update Webhook",
                format!("Set webhook '{}' to {}", webhook.name, status.label()),
            ))
            .await;
        Ok(webhook)
    }

    pub async fn delete(&self, id: EntityId) -> CoreResult<()> {
        let webhook = self.get(id).await?;
        self.ctx.repositories.webhooks.delete(id).await?;
        log::info!("Webhook #{id} deleted");
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::ApiManagement,
                "Delete Webhook",
                format!("Deleted webhook '{}'", webhook.name),
            ))
            .await;
        Ok(())
    }

    /// Example request body for `event`.
    pub fn example_payload(event: WebhookEvent) -> CoreResult<String> {
        payload::example_payload(event)
    }

    /// Sends an example payload to the endpoint and records the outcome.
    ///
    /// # Arguments
    /// * `id` - Webhook ID
    /// * `event` - Event to simulate, defaults to the first subscribed event
    pub async fn send_test(
        &self,
        id: EntityId,
        event: Option<WebhookEvent>,
    ) -> CoreResult<DeliveryReceipt> {
        let mut webhook = self.get(id).await?;
        let event = match event.or_else(|| webhook.events.first().copied()) {
            Some(event) if webhook.events.contains(&event) => event,
            Some(event) => {
                return Err(CoreError::Validation(FieldError::new(
                    "event",
                    format!("Webhook is not subscribed to {}", event.as_str()),
                )));
            }
            None => {
                return Err(CoreError::Validation(FieldError::new(
                    "event",
                    "Webhook has no events",
                )));
            }
        };

        let notification = Notification {
            target: NotificationTarget::Webhook {
                url: webhook.url.clone(),
                event,
                secret: webhook.secret.clone(),
            },
            body: payload::example_payload(event)?,
        };

        let outcome = self.ctx.dispatcher.send(notification).await;
        let (response, audit) = match &outcome {
            Ok(receipt) => {
                let response = DeliveryResponse {
                    status_code: receipt.status_code,
                    message: receipt.message.clone(),
                };
                let details = format!(
                    "Test {} delivery to '{}' answered {}",
                    event.as_str(),
                    webhook.name,
                    receipt.status_code
                );
                let audit = if response.is_success() {
                    NewAuditEntry::success(AuditModule::ApiManagement, "Test Webhook", details)
                } else {
                    NewAuditEntry::failed(AuditModule::ApiManagement, "Test Webhook", details)
                };
                (Some(response), audit)
            }
            Err(e) => (
                None,
                NewAuditEntry::failed(
                    AuditModule::ApiManagement,
                    "Test Webhook",
                    format!("Test delivery to '{}' failed: {e}", webhook.name),
                ),
            ),
        };

        if let Some(response) = response {
            webhook.last_triggered = Some(Utc::now());
            webhook.last_response = Some(response);
            self.ctx.repositories.webhooks.update(webhook).await?;
        }
        self.ctx.audit(audit).await;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context_with_dispatcher;

    #[tokio::test]
    async fn create_requires_events() {
        let (ctx, _) = create_test_context_with_dispatcher();
        let service = WebhookService::new(Arc::new(ctx));
        let form = CreateWebhookForm {
            name: "Visa Updates".to_string(),
            url: "https://visa.example.com/hook".to_string(),
            secret: String::new(),
            events: Vec::new(),
        };
        let err = service.create(&form).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref e) if e.field == "events"));
        assert_eq!(service.list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn send_test_records_response() {
        let (ctx, dispatcher) = create_test_context_with_dispatcher();
        let service = WebhookService::new(Arc::new(ctx));

        let receipt = service.send_test(3, None).await.unwrap();
        assert_eq!(receipt.status_code, 200);

        let sent = dispatcher.sent().await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].body.contains("\"payment.received\""));

        let webhook = service.get(3).await.unwrap();
        assert_eq!(webhook.last_response.map(|r| r.status_code), Some(200));
        assert!(webhook.last_triggered.unwrap() > crate::utils::datetime::ts("2023-05-02T09:10:00Z"));
    }

    #[tokio::test]
    async fn send_test_rejects_unsubscribed_event() {
        let (ctx, dispatcher) = create_test_context_with_dispatcher();
        let service = WebhookService::new(Arc::new(ctx));
        let err = service
            .send_test(2, Some(WebhookEvent::PaymentFailed))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(dispatcher.sent().await.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_keeps_last_response() {
        let (ctx, dispatcher) = create_test_context_with_dispatcher();
        dispatcher.set_send_error(Some("connection refused".to_string())).await;
        let service = WebhookService::new(Arc::new(ctx));

        let err = service.send_test(1, None).await.unwrap_err();
        assert!(matches!(err, CoreError::DeliveryError(_)));
        let webhook = service.get(1).await.unwrap();
        assert_eq!(
            webhook.last_triggered,
            Some(crate::utils::datetime::ts("2023-05-02T14:20:00Z"))
        );

        let audit = service.ctx.repositories.audit_logs.list().await.unwrap();
        let last = audit.last().unwrap();
        assert_eq!(last.action, "Test Webhook");
        assert_eq!(last.status, crate::types::AuditStatus::Failed);
    }

    #[tokio::test]
    async fn set_status_and_delete() {
        let (ctx, _) = create_test_context_with_dispatcher();
        let service = WebhookService::new(Arc::new(ctx));
        let webhook = service.set_status(4, ActiveStatus::Active).await.unwrap();
        assert_eq!(webhook.status, ActiveStatus::Active);
        service.delete(4).await.unwrap();
        assert!(matches!(service.get(4).await, Err(CoreError::NotFound { .. })));
    }
}
