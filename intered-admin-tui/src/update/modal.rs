//! Modal message handling
//!
//! The open modal is taken out of the model while a message is handled and put
//! back unless the message closed it. Form dialogs run through their
//! `DialogController`: Enter validates and submits, a service error leaves the
//! dialog in its failed state where Enter retries, and Esc is refused while a
//! backup or restore is running.

use intered_admin_core::dialog::{
    ConfirmDelete, CreateApiKeyForm, CreateBackupForm, CreateRoleForm, CreateUserForm,
    CreateWebhookForm, CreateWorkflowForm, TestEmailForm,
};
use intered_admin_core::types::{EntityId, Permission};
use intered_admin_core::{CoreError, CoreResult, DialogController};

use super::data::after_mutation;
use super::actions;
use crate::message::ModalMessage;
use crate::model::state::{
    EditableForm, FieldEdit, FormDialog, Modal, RestoreChoice, RunningTask, TaskJob,
};
use crate::model::{App, Page};

/// Outcome of a successful submit
enum Submitted {
    /// Done; the dialog closes with this status message
    Done(String),
    /// A long-running task started; the dialog stays open showing its progress
    Started(RunningTask),
}

/// Handles modal messages
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(modal) = app.modal.take() else {
        return;
    };

    match modal {
        Modal::Help | Modal::Error { .. } => {
            if !matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.show(modal);
            }
        }
        Modal::Detail { page, cursor } => handle_detail(app, page, cursor, msg),
        Modal::ConfirmDelete {
            page,
            dialog,
            confirm_focused,
        } => handle_confirm_delete(app, page, dialog, confirm_focused, msg),
        Modal::CreateApiKey(form) => handle_form(app, form, msg, Modal::CreateApiKey, create_api_key),
        Modal::CreateWebhook(form) => {
            handle_form(app, form, msg, Modal::CreateWebhook, create_webhook);
        }
        Modal::CreateUser(form) => handle_form(app, form, msg, Modal::CreateUser, create_user),
        Modal::CreateRole(form) => handle_form(app, form, msg, Modal::CreateRole, create_role),
        Modal::CreateWorkflow(form) => {
            handle_form(app, form, msg, Modal::CreateWorkflow, create_workflow);
        }
        Modal::CreateBackup(form) => handle_form(app, form, msg, Modal::CreateBackup, start_backup),
        Modal::Restore(form) => handle_form(app, form, msg, Modal::Restore, start_restore),
        Modal::TestEmail(form) => handle_form(app, form, msg, Modal::TestEmail, send_test_email),
    }
}

// ========== Form dialogs ==========

fn handle_form<F: EditableForm>(
    app: &mut App,
    mut form: FormDialog<F>,
    msg: ModalMessage,
    wrap: fn(FormDialog<F>) -> Modal,
    submit: fn(&mut App, &F) -> CoreResult<Submitted>,
) {
    match msg {
        ModalMessage::Close => match form.dialog.cancel() {
            Ok(()) => {
                app.clear_status();
                return;
            }
            Err(e) => app.set_status(e.to_string()),
        },
        ModalMessage::NextField => form.next_field(),
        ModalMessage::PrevField => form.prev_field(),
        ModalMessage::Prev => form.edit(FieldEdit::Prev),
        ModalMessage::Next => form.edit(FieldEdit::Next),
        ModalMessage::Input(ch) => form.edit(FieldEdit::Input(ch)),
        ModalMessage::Backspace => form.edit(FieldEdit::Backspace),
        ModalMessage::Confirm => {
            // Validation errors stay inline on the open dialog
            let submitted = match form.dialog.submit() {
                Ok(submitted) => submitted.clone(),
                Err(e) => {
                    log::warn!("{} not submitted: {e}", F::TITLE);
                    app.modal.show(wrap(form));
                    return;
                }
            };
            match submit(app, &submitted) {
                Ok(Submitted::Done(status)) => {
                    if let Err(e) = form.dialog.complete() {
                        log::warn!("{} could not complete: {e}", F::TITLE);
                    }
                    app.set_status(status);
                    return;
                }
                Ok(Submitted::Started(task)) => {
                    let _ = form.dialog.set_progress(0);
                    app.set_status(format!("{} started", task.handle.kind().label()));
                    app.task = Some(task);
                }
                Err(e) => {
                    log_failure(F::TITLE, &e);
                    let _ = form.dialog.fail(e.to_string());
                }
            }
        }
        _ => {}
    }
    app.modal.show(wrap(form));
}

fn log_failure(context: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{context} failed: {err}");
    } else {
        log::error!("{context} failed: {err}");
    }
}

fn create_api_key(app: &mut App, form: &CreateApiKeyForm) -> CoreResult<Submitted> {
    let key = app.backend.block_on(app.backend.api_keys().create(form))?;
    after_mutation(app, Page::ApiKeys);
    Ok(Submitted::Done(format!("API key '{}' created", key.name)))
}

fn create_webhook(app: &mut App, form: &CreateWebhookForm) -> CoreResult<Submitted> {
    let hook = app.backend.block_on(app.backend.webhooks().create(form))?;
    after_mutation(app, Page::Webhooks);
    Ok(Submitted::Done(format!("Webhook '{}' created", hook.name)))
}

fn create_user(app: &mut App, form: &CreateUserForm) -> CoreResult<Submitted> {
    let user = app.backend.block_on(app.backend.users().create(form))?;
    after_mutation(app, Page::Users);
    Ok(Submitted::Done(format!("User '{}' added", user.name)))
}

fn create_role(app: &mut App, form: &CreateRoleForm) -> CoreResult<Submitted> {
    let role = app.backend.block_on(app.backend.roles().create(form))?;
    after_mutation(app, Page::Roles);
    Ok(Submitted::Done(format!("Role '{}' created", role.name)))
}

fn create_workflow(app: &mut App, form: &CreateWorkflowForm) -> CoreResult<Submitted> {
    let flow = app.backend.block_on(app.backend.workflows().create(form))?;
    after_mutation(app, Page::Workflows);
    Ok(Submitted::Done(format!("Workflow '{}' created", flow.name)))
}

fn send_test_email(app: &mut App, form: &TestEmailForm) -> CoreResult<Submitted> {
    let receipt = app
        .backend
        .block_on(app.backend.settings().send_test_email(form))?;
    log::info!("Test email accepted: {}", receipt.message);
    Ok(Submitted::Done(format!(
        "Test email sent to {}",
        form.recipient.trim()
    )))
}

fn start_backup(app: &mut App, form: &CreateBackupForm) -> CoreResult<Submitted> {
    let job = form.to_job();
    let handle = app.backend.block_on(app.backend.backups().start_backup(&job))?;
    Ok(Submitted::Started(RunningTask {
        handle,
        job: TaskJob::Backup(job),
    }))
}

fn start_restore(app: &mut App, choice: &RestoreChoice) -> CoreResult<Submitted> {
    let Some(job) = choice.form.to_job() else {
        return Err(CoreError::Conflict("Nothing selected to restore".to_string()));
    };
    let handle = app
        .backend
        .block_on(app.backend.backups().start_restore(&job))?;
    Ok(Submitted::Started(RunningTask {
        handle,
        job: TaskJob::Restore(job),
    }))
}

// ========== Delete confirmation ==========

fn handle_confirm_delete(
    app: &mut App,
    page: Page,
    mut dialog: DialogController<ConfirmDelete>,
    mut confirm_focused: bool,
    msg: ModalMessage,
) {
    match msg {
        ModalMessage::Close => {
            if dialog.cancel().is_ok() {
                return;
            }
        }
        ModalMessage::ToggleDeleteFocus
        | ModalMessage::NextField
        | ModalMessage::PrevField
        | ModalMessage::Prev
        | ModalMessage::Next => confirm_focused = !confirm_focused,
        ModalMessage::Confirm if !confirm_focused => {
            dialog.close();
            app.clear_status();
            return;
        }
        ModalMessage::Confirm => {
            match dialog.submit().cloned() {
                Ok(target) => match delete_record(app, page, target.id) {
                    Ok(()) => {
                        let _ = dialog.complete();
                        log::info!("Deleted {} #{} '{}'", target.kind, target.id, target.label);
                        after_mutation(app, page);
                        app.set_status(format!("Deleted {}: \"{}\"", target.kind, target.label));
                        return;
                    }
                    Err(e) => {
                        log_failure("Delete", &e);
                        let _ = dialog.fail(e.to_string());
                    }
                },
                Err(e) => log::warn!("Delete not submitted: {e}"),
            }
        }
        _ => {}
    }
    app.modal.show(Modal::ConfirmDelete {
        page,
        dialog,
        confirm_focused,
    });
}

fn delete_record(app: &App, page: Page, id: EntityId) -> CoreResult<()> {
    let backend = &app.backend;
    match page {
        Page::ApiKeys => backend.block_on(backend.api_keys().delete(id)),
        Page::Webhooks => backend.block_on(backend.webhooks().delete(id)),
        Page::Users => backend.block_on(backend.users().delete(id)),
        Page::Roles => backend.block_on(backend.roles().delete(id)),
        Page::Workflows => backend.block_on(backend.workflows().delete(id)),
        Page::Backups => backend.block_on(backend.backups().delete(id)),
        Page::AuditLogs | Page::Overview | Page::Settings => Err(CoreError::Conflict(format!(
            "{} records cannot be deleted",
            page.title()
        ))),
    }
}

// ========== Detail ==========

/// Rows the detail cursor can move over
fn detail_rows(app: &App, page: Page) -> usize {
    match page {
        Page::Webhooks => app.lists.webhooks.detail().map_or(0, |hook| hook.events.len()),
        Page::Roles => Permission::all().count(),
        _ => 0,
    }
}

fn handle_detail(app: &mut App, page: Page, mut cursor: usize, msg: ModalMessage) {
    let Some(id) = app.lists.get(page).and_then(|list| list.detail_id()) else {
        // record vanished (deleted elsewhere)
        close_detail(app, page);
        return;
    };

    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            close_detail(app, page);
            return;
        }
        ModalMessage::PrevItem => cursor = cursor.saturating_sub(1),
        ModalMessage::NextItem => {
            if cursor + 1 < detail_rows(app, page) {
                cursor += 1;
            }
        }
        ModalMessage::Prev | ModalMessage::Next if page == Page::Users => {
            actions::step_user_role(app, id, matches!(msg, ModalMessage::Next));
        }
        ModalMessage::Toggle if page == Page::Roles => actions::toggle_permission(app, id, cursor),
        ModalMessage::Copy if page == Page::ApiKeys => actions::copy_key(app, id),
        ModalMessage::Regenerate if page == Page::ApiKeys => actions::regenerate_key(app, id),
        ModalMessage::ToggleStatus
            if matches!(
                page,
                Page::ApiKeys | Page::Webhooks | Page::Users | Page::Workflows
            ) =>
        {
            actions::toggle_status(app, page, id);
        }
        ModalMessage::SendTest if page == Page::Webhooks => {
            let event = app
                .lists
                .webhooks
                .detail()
                .and_then(|hook| hook.events.get(cursor).copied());
            actions::send_test(app, id, event);
        }
        _ => {}
    }

    // an action may have opened an error modal on top
    if !app.modal.is_open() {
        app.modal.show(Modal::Detail { page, cursor });
    }
}

fn close_detail(app: &mut App, page: Page) {
    if let Some(list) = app.lists.get_mut(page) {
        list.close_detail();
    }
}
