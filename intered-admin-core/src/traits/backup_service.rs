//! Backup / restore engine abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::task::TaskHandle;
use crate::types::{BackupJob, RestoreJob};

/// Starts long-running backup and restore operations.
///
/// Progress is read from the returned [`TaskHandle`].
#[async_trait]
pub trait BackupService: Send + Sync {
    /// Start a backup
    ///
    /// # Arguments
    /// * `job` - Name and scope of the backup
    async fn start_backup(&self, job: &BackupJob) -> CoreResult<TaskHandle>;

    /// Start a restore
    ///
    /// # Arguments
    /// * `job` - Source to restore from
    async fn start_restore(&self, job: &RestoreJob) -> CoreResult<TaskHandle>;
}
