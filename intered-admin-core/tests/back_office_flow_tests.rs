#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for page flows: dialog -> service -> list reload.

use std::sync::Arc;

use intered_admin_core::dialog::{
    CreateBackupForm, CreateWebhookForm, DialogController, RestoreForm, RestoreSourceKind,
};
use intered_admin_core::error::CoreError;
use intered_admin_core::list::{ListManager, ViewStatus};
use intered_admin_core::memory::{
    InMemorySettingsStore, RecordingDispatcher, SimulatedBackupService,
};
use intered_admin_core::seed;
use intered_admin_core::services::{
    ApiKeyService, BackupCatalogService, Repositories, ServiceContext, WebhookService,
};
use intered_admin_core::task::ProgressEvent;
use intered_admin_core::types::{BackupScope, WebhookEvent};

// ===== Helpers =====

fn context_with_backup() -> (Arc<ServiceContext>, Arc<SimulatedBackupService>) {
    let backup_service = Arc::new(SimulatedBackupService::new());
    let ctx = ServiceContext::new(
        Repositories::seeded(),
        Arc::new(InMemorySettingsStore::new(seed::settings())),
        Arc::new(RecordingDispatcher::new()),
        backup_service.clone(),
    );
    (Arc::new(ctx), backup_service)
}

// ===== Webhooks =====

#[tokio::test]
async fn webhook_without_events_is_blocked_until_fixed() {
    let ctx = Arc::new(ServiceContext::seeded());
    let service = WebhookService::new(ctx);
    let mut page = ListManager::new(service.list().await.unwrap());

    let mut dialog = DialogController::new();
    dialog
        .open(CreateWebhookForm {
            name: "Offer Tracking".to_string(),
            url: "https://hooks.example.com/offers".to_string(),
            ..CreateWebhookForm::default()
        })
        .unwrap();

    assert!(dialog.submit().is_err());
    assert!(dialog.error_for("events").is_some());
    assert!(!dialog.is_submitting());

    dialog
        .form_mut()
        .unwrap()
        .toggle_event(WebhookEvent::OfferSent);
    let form = dialog.submit().unwrap().clone();
    let created = service.create(&form).await.unwrap();
    dialog.complete().unwrap();
    assert!(dialog.is_closed());

    page.replace_records(service.list().await.unwrap());
    assert_eq!(page.view_status(), ViewStatus::Rows(6));
    assert_eq!(page.find(created.id).map(|w| w.events.len()), Some(1));
}

#[tokio::test]
async fn cancel_is_rejected_while_submitting() {
    let mut dialog = DialogController::new();
    dialog
        .open(CreateBackupForm {
            name: "Nightly".to_string(),
            scope: BackupScope::Config,
        })
        .unwrap();
    dialog.submit().unwrap();

    let err = dialog.cancel().unwrap_err();
    assert!(matches!(err, CoreError::InvalidTransition { .. }));
    assert!(dialog.is_submitting());

    dialog.close();
    assert!(dialog.is_closed());
}

// ===== Backups =====

#[tokio::test(start_paused = true)]
async fn backup_dialog_tracks_ten_steps_then_closes() {
    let (ctx, _) = context_with_backup();
    let service = BackupCatalogService::new(ctx);
    let mut page = ListManager::new(service.list().await.unwrap());

    let mut dialog = DialogController::new();
    dialog
        .open(CreateBackupForm {
            name: "Before Term Start".to_string(),
            scope: BackupScope::Full,
        })
        .unwrap();
    let job = dialog.submit().unwrap().to_job();
    let mut handle = service.start_backup(&job).await.unwrap();

    let mut steps = Vec::new();
    let mut finished = None;
    while let Some(event) = handle.next().await {
        if let ProgressEvent::Progress(value) = event {
            steps.push(value);
        }
        if let Some(form) = dialog.apply_progress(&event).unwrap() {
            finished = Some(form);
            break;
        }
        assert_eq!(dialog.progress(), steps.last().copied());
    }

    assert_eq!(steps, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    assert!(dialog.is_closed());
    let form = finished.unwrap();
    let backup = service.finish_backup(&form.to_job()).await.unwrap();

    page.replace_records(service.list().await.unwrap());
    assert_eq!(page.visible_len(), 6);
    assert_eq!(page.find(backup.id).map(|b| b.name.as_str()), Some("Before Term Start"));
}

#[tokio::test(start_paused = true)]
async fn failed_restore_can_be_retried() {
    let (ctx, backup_service) = context_with_backup();
    let service = BackupCatalogService::new(ctx);
    backup_service.set_fail_at(Some(50)).await;

    let mut dialog = DialogController::new();
    dialog
        .open(RestoreForm {
            source: RestoreSourceKind::Existing,
            backup_id: Some(2),
            file_name: String::new(),
            confirmed: true,
        })
        .unwrap();

    let job = dialog.submit().unwrap().to_job().unwrap();
    let mut handle = service.start_restore(&job).await.unwrap();
    while let Some(event) = handle.next().await {
        dialog.apply_progress(&event).unwrap();
        if event.is_terminal() {
            break;
        }
    }
    assert!(dialog.failure().is_some());
    assert_eq!(dialog.form().and_then(|f| f.backup_id), Some(2));

    backup_service.set_fail_at(None).await;
    let job = dialog.retry().unwrap().to_job().unwrap();
    let mut handle = service.start_restore(&job).await.unwrap();
    let mut completed = None;
    while let Some(event) = handle.next().await {
        if let Some(form) = dialog.apply_progress(&event).unwrap() {
            completed = Some(form);
            break;
        }
    }
    assert!(completed.is_some());
    assert!(dialog.is_closed());
}

#[tokio::test]
async fn restore_form_requires_confirmation() {
    let mut dialog = DialogController::new();
    dialog
        .open(RestoreForm {
            source: RestoreSourceKind::Upload,
            backup_id: None,
            file_name: "export.zip".to_string(),
            confirmed: false,
        })
        .unwrap();
    assert!(dialog.submit().is_err());
    assert!(dialog.error_for("confirmed").is_some());
}

// ===== API keys =====

#[tokio::test]
async fn deleting_open_record_closes_detail() {
    let ctx = Arc::new(ServiceContext::seeded());
    let service = ApiKeyService::new(ctx);
    let mut page = ListManager::new(service.list().await.unwrap());

    page.open_detail(4).unwrap();
    service.delete(4).await.unwrap();
    page.replace_records(service.list().await.unwrap());

    assert!(page.detail().is_none());
    assert_eq!(page.visible_len(), 4);
    assert!(matches!(
        service.get(4).await,
        Err(CoreError::NotFound { .. })
    ));
}
