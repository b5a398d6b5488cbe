//! Platform settings service

use std::sync::Arc;

use crate::dialog::{DialogForm, TestEmailForm};
use crate::error::{CoreError, CoreResult, FieldError};
use crate::traits::{DeliveryReceipt, Notification, NotificationTarget};
use crate::types::{
    AuditModule, BackupSchedule, EmailConfiguration, GeneralSettings, NewAuditEntry,
    NotificationSettings, PlatformSettings,
};

use super::ServiceContext;

pub struct SettingsService {
    ctx: Arc<ServiceContext>,
}

impl SettingsService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn get(&self) -> CoreResult<PlatformSettings> {
        self.ctx.settings_store.load().await
    }

    async fn update(
        &self,
        panel: &str,
        edit: impl FnOnce(&mut PlatformSettings) + Send,
    ) -> CoreResult<PlatformSettings> {
        let mut settings = self.get().await?;
        edit(&mut settings);
        self.ctx.settings_store.save(&settings).await?;
        log::info!("{panel} settings saved");
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::Settings,
                "Update Settings",
                format!("Updated {panel} settings"),
            ))
            .await;
        Ok(settings)
    }

    pub async fn save_general(&self, general: GeneralSettings) -> CoreResult<PlatformSettings> {
        if general.company_name.trim().is_empty() {
            return Err(CoreError::Validation(FieldError::new(
                "companyName",
                "Company name is required",
            )));
        }
        self.update("general", |s| s.general = general).await
    }

    /// Saves the mail configuration after validating it.
    pub async fn save_email(&self, email: EmailConfiguration) -> CoreResult<PlatformSettings> {
        email.validate()?;
        self.update("email", |s| s.email = email).await
    }

    pub async fn save_notifications(
        &self,
        notifications: NotificationSettings,
    ) -> CoreResult<PlatformSettings> {
        self.update("notification", |s| s.notifications = notifications)
            .await
    }

    pub async fn save_backup_schedule(
        &self,
        schedule: BackupSchedule,
    ) -> CoreResult<PlatformSettings> {
        if !BackupSchedule::RETENTION_CHOICES.contains(&schedule.retention_days) {
            return Err(CoreError::Validation(FieldError::new(
                "retentionDays",
                format!("Unsupported retention of {} days", schedule.retention_days),
            )));
        }
        self.update("backup schedule", |s| s.backup_schedule = schedule)
            .await
    }

    /// Sends a test message with the stored mail configuration.
    pub async fn send_test_email(&self, form: &TestEmailForm) -> CoreResult<DeliveryReceipt> {
        form.validate()?;
        let settings = self.get().await?;
        settings.email.validate()?;

        let notification = Notification {
            target: NotificationTarget::Email {
                to: form.recipient.trim().to_string(),
                subject: form.subject.trim().to_string(),
            },
            body: form.body.clone(),
        };
        let receipt = self.ctx.dispatcher.send(notification).await?;
        log::info!(
            "Test email to {} via {} accepted ({})",
            form.recipient.trim(),
            settings.email.provider.label(),
            receipt.status_code
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context_with_dispatcher;
    use crate::types::{DateFormat, EmailProvider};

    #[tokio::test]
    async fn save_general_persists() {
        let (ctx, _) = create_test_context_with_dispatcher();
        let service = SettingsService::new(Arc::new(ctx));

        let mut general = service.get().await.unwrap().general;
        general.date_format = DateFormat::Iso;
        general.maintenance_mode = true;
        service.save_general(general).await.unwrap();

        let reloaded = service.get().await.unwrap();
        assert_eq!(reloaded.general.date_format, DateFormat::Iso);
        assert!(reloaded.general.maintenance_mode);
    }

    #[tokio::test]
    async fn invalid_email_config_not_saved() {
        let (ctx, _) = create_test_context_with_dispatcher();
        let service = SettingsService::new(Arc::new(ctx));

        let mut email = EmailConfiguration::default();
        email.from_email = "nobody".to_string();
        assert!(service.save_email(email).await.is_err());
        assert_eq!(
            service.get().await.unwrap().email.from_email,
            "noreply@example.com"
        );
    }

    #[tokio::test]
    async fn retention_must_be_offered_choice() {
        let (ctx, _) = create_test_context_with_dispatcher();
        let service = SettingsService::new(Arc::new(ctx));
        let schedule = BackupSchedule {
            retention_days: 45,
            ..BackupSchedule::default()
        };
        assert!(matches!(
            service.save_backup_schedule(schedule).await,
            Err(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_email_goes_through_dispatcher() {
        let (ctx, dispatcher) = create_test_context_with_dispatcher();
        let service = SettingsService::new(Arc::new(ctx));

        let mut email = EmailConfiguration::default();
        email.provider = EmailProvider::Sendgrid;
        service.save_email(email).await.unwrap();

        let form = TestEmailForm {
            recipient: "ops@intered.com".to_string(),
            ..TestEmailForm::default()
        };
        let receipt = service.send_test_email(&form).await.unwrap();
        assert_eq!(receipt.status_code, 250);

        let sent = dispatcher.sent().await;
        assert!(matches!(
            &sent[0].target,
            NotificationTarget::Email { to, .. } if to == "ops@intered.com"
        ));
    }
}
