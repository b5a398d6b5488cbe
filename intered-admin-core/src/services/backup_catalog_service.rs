//! Backup catalog service
//!
//! Starts backup / restore tasks through the `BackupService` and keeps the
//! catalog of stored backups in step with finished tasks.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{CoreError, CoreResult, FieldError};
use crate::task::{ProgressEvent, TaskHandle};
use crate::types::{
    AuditModule, Backup, BackupJob, BackupStatus, EntityId, NewAuditEntry, RestoreJob,
    RestoreSource,
};

use super::{require, ServiceContext};

pub struct BackupCatalogService {
    ctx: Arc<ServiceContext>,
}

impl BackupCatalogService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> CoreResult<Vec<Backup>> {
        self.ctx.repositories.backups.list().await
    }

    pub async fn get(&self, id: EntityId) -> CoreResult<Backup> {
        require(self.ctx.repositories.backups.as_ref(), id).await
    }

    /// Starts a backup task. Call [`finish_backup`](Self::finish_backup) once
    /// the handle reports completion.
    pub async fn start_backup(&self, job: &BackupJob) -> CoreResult<TaskHandle> {
        if job.name.trim().is_empty() {
            return Err(CoreError::Validation(FieldError::new(
                "name",
                "Backup name is required",
            )));
        }
        self.ctx.backup_service.start_backup(job).await
    }

    /// Records a completed backup in the catalog.
    pub async fn finish_backup(&self, job: &BackupJob) -> CoreResult<Backup> {
        let draft = Backup {
            id: 0,
            name: job.name.trim().to_string(),
            created_at: Utc::now(),
            size_bytes: job.scope.nominal_size(),
            kind: job.scope.kind(),
            status: BackupStatus::Completed,
        };
        let backup = self.ctx.repositories.backups.create(draft).await?;
        log::info!("Backup #{} '{}' stored", backup.id, backup.name);
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::System,
                "System Backup",
                format!("Manual {} backup '{}' completed", backup.kind.label(), backup.name),
            ))
            .await;
        Ok(backup)
    }

    /// Records a backup or restore that did not complete.
    pub async fn record_failure(&self, action: &str, reason: &str) {
        self.ctx
            .audit(NewAuditEntry::failed(
                AuditModule::System,
                action,
                reason.to_string(),
            ))
            .await;
    }

    /// Starts a restore task. A catalog source must exist.
    pub async fn start_restore(&self, job: &RestoreJob) -> CoreResult<TaskHandle> {
        if let RestoreSource::Existing(id) = job.source {
            self.get(id).await?;
        }
        self.ctx.backup_service.start_restore(job).await
    }

    pub async fn finish_restore(&self, job: &RestoreJob) {
        log::info!("Restore from {} completed", job.source.describe());
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::System,
                "System Restore",
                format!("Restored system from {}", job.source.describe()),
            ))
            .await;
    }

    /// Runs a backup to the end and records the result.
    pub async fn run_backup(&self, job: &BackupJob) -> CoreResult<Backup> {
        let mut handle = self.start_backup(job).await?;
        match drain_to_end(&mut handle).await {
            Ok(()) => self.finish_backup(job).await,
            Err(e) => {
                self.record_failure("System Backup", &format!("Backup '{}': {e}", job.name))
                    .await;
                Err(e)
            }
        }
    }

    /// Runs a restore to the end and records the result.
    pub async fn run_restore(&self, job: &RestoreJob) -> CoreResult<()> {
        let mut handle = self.start_restore(job).await?;
        match drain_to_end(&mut handle).await {
            Ok(()) => {
                self.finish_restore(job).await;
                Ok(())
            }
            Err(e) => {
                self.record_failure(
                    "System Restore",
                    &format!("Restore from {}: {e}", job.source.describe()),
                )
                .await;
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: EntityId) -> CoreResult<()> {
        let backup = self.get(id).await?;
        self.ctx.repositories.backups.delete(id).await?;
        log::info!("Backup #{id} deleted");
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::System,
                "Delete Backup",
                format!("Deleted backup '{}'", backup.name),
            ))
            .await;
        Ok(())
    }
}

async fn drain_to_end(handle: &mut TaskHandle) -> CoreResult<()> {
    while let Some(event) = handle.next().await {
        match event {
            ProgressEvent::Progress(_) => {}
            ProgressEvent::Completed => return Ok(()),
            ProgressEvent::Failed(reason) => return Err(CoreError::TaskFailed(reason)),
            ProgressEvent::Cancelled => return Err(CoreError::TaskCancelled),
        }
    }
    Err(CoreError::TaskCancelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context_with_backup;
    use crate::types::{BackupKind, BackupScope};

    fn job() -> BackupJob {
        BackupJob {
            name: "Before Term Start".to_string(),
            scope: BackupScope::Database,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completed_backup_is_cataloged() {
        let (ctx, _) = create_test_context_with_backup();
        let service = BackupCatalogService::new(Arc::new(ctx));

        let backup = service.run_backup(&job()).await.unwrap();
        assert_eq!(backup.id, 6);
        assert_eq!(backup.kind, BackupKind::Database);
        assert_eq!(backup.size_label(), "128 MB");
        assert_eq!(service.list().await.unwrap().len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_backup_is_not_cataloged() {
        let (ctx, backup_service) = create_test_context_with_backup();
        backup_service.set_fail_at(Some(60)).await;
        let ctx = Arc::new(ctx);
        let service = BackupCatalogService::new(ctx.clone());

        let err = service.run_backup(&job()).await.unwrap_err();
        assert!(matches!(err, CoreError::TaskFailed(_)));
        assert_eq!(service.list().await.unwrap().len(), 5);

        let audit = ctx.repositories.audit_logs.list().await.unwrap();
        let last = audit.last().unwrap();
        assert_eq!(last.status, crate::types::AuditStatus::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn restore_requires_existing_backup() {
        let (ctx, _) = create_test_context_with_backup();
        let service = BackupCatalogService::new(Arc::new(ctx));

        let missing = RestoreJob {
            source: RestoreSource::Existing(42),
        };
        assert!(matches!(
            service.start_restore(&missing).await,
            Err(CoreError::NotFound { .. })
        ));

        let upload = RestoreJob {
            source: RestoreSource::Upload("export.zip".to_string()),
        };
        service.run_restore(&upload).await.unwrap();
    }

    #[tokio::test]
    async fn blank_name_rejected() {
        let (ctx, _) = create_test_context_with_backup();
        let service = BackupCatalogService::new(Arc::new(ctx));
        let job = BackupJob {
            name: " ".to_string(),
            scope: BackupScope::Full,
        };
        assert!(matches!(
            service.start_backup(&job).await,
            Err(CoreError::Validation(_))
        ));
    }
}
