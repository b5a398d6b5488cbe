use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::task::{SimulatedProgress, TaskHandle, TaskKind};
use crate::traits::BackupService;
use crate::types::{BackupJob, RestoreJob};

/// Timer-driven stand-in for a backup engine.
#[derive(Debug, Default)]
pub struct SimulatedBackupService {
    /// Percentage at which the next tasks fail, for exercising failure paths
    fail_at: RwLock<Option<u8>>,
}

impl SimulatedBackupService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_fail_at(&self, percent: Option<u8>) {
        *self.fail_at.write().await = percent;
    }

    async fn spawn(&self, kind: TaskKind) -> TaskHandle {
        let mut progress = SimulatedProgress::new(kind.plan().step);
        if let Some(percent) = *self.fail_at.read().await {
            progress = progress.failing_at(percent);
        }
        TaskHandle::spawn_simulated(kind, progress)
    }
}

#[async_trait]
impl BackupService for SimulatedBackupService {
    async fn start_backup(&self, job: &BackupJob) -> CoreResult<TaskHandle> {
        log::info!("Starting backup '{}' ({})", job.name, job.scope.label());
        Ok(self.spawn(TaskKind::Backup).await)
    }

    async fn start_restore(&self, job: &RestoreJob) -> CoreResult<TaskHandle> {
        log::info!("Starting restore from {}", job.source.describe());
        Ok(self.spawn(TaskKind::Restore).await)
    }
}
