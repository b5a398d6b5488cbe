//! Content panel message handling

use intered_admin_core::dialog::{
    ConfirmDelete, CreateApiKeyForm, CreateBackupForm, CreateRoleForm, CreateUserForm,
    CreateWebhookForm, CreateWorkflowForm, TestEmailForm,
};

use super::{actions, report, settings};
use crate::message::ContentMessage;
use crate::model::state::{FilterInput, FilterKind, FormDialog, Modal, RestoreChoice, SettingItem};
use crate::model::{App, Page};

/// Handles content panel messages
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Overview => {}
        Page::Settings => update_settings(app, msg),
        page => update_list(app, page, msg),
    }
}

fn update_settings(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::SelectFirst => app.settings.selected = 0,
        ContentMessage::SelectLast => app.settings.selected = SettingItem::ALL.len() - 1,
        ContentMessage::TogglePrev => settings::change(app, app.settings.current_item(), false),
        ContentMessage::ToggleNext => settings::change(app, app.settings.current_item(), true),
        ContentMessage::Confirm => {
            let item = app.settings.current_item();
            if item == SettingItem::SendTestEmail {
                app.modal
                    .show(Modal::TestEmail(FormDialog::open(TestEmailForm::default())));
            } else {
                settings::change(app, item, true);
            }
        }
        _ => {}
    }
}

fn update_list(app: &mut App, page: Page, msg: ContentMessage) {
    let Some(list) = app.lists.get_mut(page) else {
        return;
    };

    match msg {
        // ========== Cursor ==========
        ContentMessage::SelectPrevious => list.select_previous(),
        ContentMessage::SelectNext => list.select_next(),
        ContentMessage::SelectFirst => list.select_first(),
        ContentMessage::SelectLast => list.select_last(),
        ContentMessage::Confirm => match list.open_current() {
            Ok(true) => app.modal.show(Modal::Detail { page, cursor: 0 }),
            Ok(false) => {}
            Err(e) => report(app, "Failed to open record", &e),
        },

        // ========== Filters ==========
        ContentMessage::StartSearch => {
            app.input = Some(FilterInput::new(FilterKind::Search, list.search().to_string()));
        }
        ContentMessage::StartDate => {
            let current = list
                .date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            app.input = Some(FilterInput::new(FilterKind::Date, current));
        }
        ContentMessage::CycleFacet(slot) => {
            list.cycle_facet(slot);
        }
        ContentMessage::ClearFilters => {
            if list.has_filters() {
                list.clear_filters();
                app.set_status("Filters cleared");
            }
        }

        // ========== Records ==========
        ContentMessage::Add => open_create_dialog(app, page),
        ContentMessage::Delete => {
            if let (Some(id), Some(label)) = (list.current_id(), list.current_label()) {
                let target = ConfirmDelete {
                    kind: list.kind(),
                    id,
                    label,
                };
                app.modal.show(Modal::confirm_delete(page, target));
            }
        }
        ContentMessage::Copy => {
            if let Some(id) = list.current_id() {
                actions::copy_key(app, id);
            }
        }
        ContentMessage::Regenerate => {
            if let Some(id) = list.current_id() {
                actions::regenerate_key(app, id);
            }
        }
        ContentMessage::ToggleStatus => {
            if let Some(id) = list.current_id() {
                actions::toggle_status(app, page, id);
            }
        }
        ContentMessage::SendTest => {
            if let Some(id) = list.current_id() {
                actions::send_test(app, id, None);
            }
        }
        ContentMessage::Restore => open_restore_dialog(app),

        ContentMessage::TogglePrev | ContentMessage::ToggleNext => {}
    }
}

fn open_create_dialog(app: &mut App, page: Page) {
    let modal = match page {
        Page::ApiKeys => Modal::CreateApiKey(FormDialog::open(CreateApiKeyForm::default())),
        Page::Webhooks => Modal::CreateWebhook(FormDialog::open(CreateWebhookForm::default())),
        Page::Users => Modal::CreateUser(FormDialog::open(CreateUserForm::default())),
        Page::Roles => {
            let taken_names = app
                .lists
                .roles
                .records()
                .iter()
                .map(|role| role.name.clone())
                .collect();
            Modal::CreateRole(FormDialog::open(CreateRoleForm {
                taken_names,
                ..CreateRoleForm::default()
            }))
        }
        Page::Workflows => Modal::CreateWorkflow(FormDialog::open(CreateWorkflowForm::default())),
        Page::Backups => {
            if app.task.is_some() {
                app.set_status("A backup or restore is already running");
                return;
            }
            Modal::CreateBackup(FormDialog::open(CreateBackupForm::default()))
        }
        // audit entries are written by the services only
        Page::AuditLogs | Page::Overview | Page::Settings => return,
    };
    app.modal.show(modal);
}

fn open_restore_dialog(app: &mut App) {
    if app.task.is_some() {
        app.set_status("A backup or restore is already running");
        return;
    }
    let backups = app
        .lists
        .backups
        .records()
        .iter()
        .map(|backup| (backup.id, backup.name.clone()))
        .collect();
    app.modal
        .show(Modal::Restore(FormDialog::open(RestoreChoice::new(backups))));
}
