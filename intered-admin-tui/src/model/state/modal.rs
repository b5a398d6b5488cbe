//! Modal state

use intered_admin_core::dialog::{
    ConfirmDelete, CreateApiKeyForm, CreateBackupForm, CreateRoleForm, CreateUserForm,
    CreateWebhookForm, CreateWorkflowForm, TestEmailForm,
};
use intered_admin_core::DialogController;

use super::forms::{FormDialog, RestoreChoice};
use crate::model::Page;

/// Modal type
#[derive(Debug, Clone)]
pub enum Modal {
    Help,
    Error {
        title: String,
        message: String,
    },
    /// Detail of the record selected on `page`
    Detail {
        page: Page,
        /// Highlighted row inside the detail (webhook event, role permission)
        cursor: usize,
    },
    ConfirmDelete {
        page: Page,
        dialog: DialogController<ConfirmDelete>,
        /// `true` when the Delete button is focused
        confirm_focused: bool,
    },
    CreateApiKey(FormDialog<CreateApiKeyForm>),
    CreateWebhook(FormDialog<CreateWebhookForm>),
    CreateUser(FormDialog<CreateUserForm>),
    CreateRole(FormDialog<CreateRoleForm>),
    CreateWorkflow(FormDialog<CreateWorkflowForm>),
    CreateBackup(FormDialog<CreateBackupForm>),
    Restore(FormDialog<RestoreChoice>),
    TestEmail(FormDialog<TestEmailForm>),
}

impl Modal {
    pub fn confirm_delete(page: Page, target: ConfirmDelete) -> Self {
        let mut dialog = DialogController::new();
        // a fresh controller is closed, so opening cannot be refused
        let _ = dialog.open(target);
        Self::ConfirmDelete {
            page,
            dialog,
            confirm_focused: false,
        }
    }

    /// Whether the modal is waiting on a service call or a running task
    pub fn is_busy(&self) -> bool {
        match self {
            Self::ConfirmDelete { dialog, .. } => dialog.is_submitting(),
            Self::CreateBackup(form) => form.dialog.is_submitting(),
            Self::Restore(form) => form.dialog.is_submitting(),
            _ => false,
        }
    }
}

/// Modal state
#[derive(Debug, Default)]
pub struct ModalState {
    /// Open modal, if any
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    /// Removes the modal so the update layer can own it while handling a message.
    pub fn take(&mut self) -> Option<Modal> {
        self.active.take()
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
