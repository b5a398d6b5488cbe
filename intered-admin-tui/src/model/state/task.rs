//! Running backup / restore task

use intered_admin_core::types::{BackupJob, RestoreJob};
use intered_admin_core::TaskHandle;

/// Job a task was started for, needed again when it finishes
#[derive(Debug, Clone)]
pub enum TaskJob {
    Backup(BackupJob),
    Restore(RestoreJob),
}

/// Task polled by the main loop on every tick
#[derive(Debug)]
pub struct RunningTask {
    pub handle: TaskHandle,
    pub job: TaskJob,
}
