//! Background backup / restore progress

use intered_admin_core::ProgressEvent;

use super::data::reload;
use crate::model::state::{Modal, TaskJob};
use crate::model::{App, Page};

/// Drains the running task and feeds its events to the open dialog.
pub fn tick(app: &mut App) {
    let Some(running) = app.task.as_mut() else {
        return;
    };
    let events = running.handle.drain();
    if events.is_empty() {
        return;
    }
    let job = running.job.clone();
    let finished = running.handle.is_finished();

    for event in &events {
        apply_to_dialog(app, event);
        if event.is_terminal() {
            finish(app, &job, event);
        }
    }

    if finished {
        app.task = None;
    }
}

fn apply_to_dialog(app: &mut App, event: &ProgressEvent) {
    let result = match app.modal.active.as_mut() {
        Some(Modal::CreateBackup(form)) => form.dialog.apply_progress(event).map(|f| f.is_some()),
        Some(Modal::Restore(form)) => form.dialog.apply_progress(event).map(|f| f.is_some()),
        _ => return,
    };
    match result {
        // completed: the dialog closed itself
        Ok(true) => app.modal.close(),
        Ok(false) => {}
        Err(e) => log::warn!("Progress event {event:?} not applied: {e}"),
    }
}

fn finish(app: &mut App, job: &TaskJob, event: &ProgressEvent) {
    let backups = app.backend.backups();
    let action = match job {
        TaskJob::Backup(_) => "System Backup",
        TaskJob::Restore(_) => "System Restore",
    };
    let _span = tracing::info_span!("task_finish", action).entered();

    match (event, job) {
        (ProgressEvent::Completed, TaskJob::Backup(job)) => {
            match app.backend.block_on(backups.finish_backup(job)) {
                Ok(backup) => app.set_status(format!("Backup '{}' completed", backup.name)),
                Err(e) => super::report(app, "Failed to record backup", &e),
            }
        }
        (ProgressEvent::Completed, TaskJob::Restore(job)) => {
            app.backend.block_on(backups.finish_restore(job));
            app.set_status(format!("System restored from {}", job.source.describe()));
        }
        (ProgressEvent::Failed(reason), _) => {
            log::error!("{action} failed: {reason}");
            app.backend.block_on(backups.record_failure(action, reason));
            app.set_status(format!("{action} failed: {reason}"));
        }
        (ProgressEvent::Cancelled, _) => {
            log::warn!("{action} cancelled");
            app.backend
                .block_on(backups.record_failure(action, "Operation was cancelled"));
            app.set_status(format!("{action} cancelled"));
        }
        (ProgressEvent::Progress(_), _) => return,
    }

    reload(app, Page::Backups);
    reload(app, Page::AuditLogs);
}
