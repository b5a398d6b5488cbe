//! Editable dialog forms
//!
//! The core forms only know how to validate themselves. [`EditableForm`] adds the
//! field list the modal renders and the key-driven edits the update layer applies.

use intered_admin_core::dialog::{
    CreateApiKeyForm, CreateBackupForm, CreateRoleForm, CreateUserForm, CreateWebhookForm,
    CreateWorkflowForm, RestoreForm, RestoreSourceKind, TestEmailForm,
};
use intered_admin_core::types::{
    ApiScope, BackupScope, EntityId, KeyExpiry, TriggerType, UserRole, WebhookEvent,
};
use intered_admin_core::{DialogController, DialogForm, FieldError};

use crate::util::step;

/// Rendered value of one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Text shown masked
    Secret(String),
    /// One value out of a fixed set, cycled with ←→
    Choice(&'static str),
    Flag(bool),
    /// Multi-select list of `(label, checked)`
    Options(Vec<(&'static str, bool)>),
}

/// One field of a form
#[derive(Debug, Clone)]
pub struct FormField {
    /// Same key the validation errors use
    pub key: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
}

impl FormField {
    fn new(key: &'static str, label: &'static str, value: FieldValue) -> Self {
        Self { key, label, value }
    }
}

/// Edit applied to the focused field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Input(char),
    Backspace,
    /// Previous choice (←)
    Prev,
    /// Next choice (→)
    Next,
    /// Flip a flag, or the option at the given index of a multi-select
    Toggle(usize),
}

/// A dialog form the TUI can render and edit.
pub trait EditableForm: DialogForm {
    /// Dialog title
    const TITLE: &'static str;

    fn fields(&self) -> Vec<FormField>;

    /// Applies `edit` to the field named `key`.
    fn edit(&mut self, key: &str, edit: FieldEdit);
}

fn edit_text(text: &mut String, edit: FieldEdit) {
    match edit {
        FieldEdit::Input(ch) => text.push(ch),
        FieldEdit::Backspace => {
            text.pop();
        }
        FieldEdit::Prev | FieldEdit::Next | FieldEdit::Toggle(_) => {}
    }
}

fn edit_flag(flag: &mut bool, edit: FieldEdit) {
    if matches!(
        edit,
        FieldEdit::Input(' ') | FieldEdit::Prev | FieldEdit::Next | FieldEdit::Toggle(_)
    ) {
        *flag = !*flag;
    }
}

/// Moves a choice field to its previous or next value.
fn edit_choice<T: Copy + PartialEq>(current: &mut T, all: &[T], edit: FieldEdit) {
    let forward = match edit {
        FieldEdit::Next | FieldEdit::Input(' ') => true,
        FieldEdit::Prev => false,
        _ => return,
    };
    *current = step(*current, all, forward);
}

// ===== API key =====

impl EditableForm for CreateApiKeyForm {
    const TITLE: &'static str = "Create API Key";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Key Name", FieldValue::Text(self.name.clone())),
            FormField::new(
                "description",
                "Description",
                FieldValue::Text(self.description.clone()),
            ),
            FormField::new(
                "scopes",
                "Permissions",
                FieldValue::Options(
                    ApiScope::ALL
                        .iter()
                        .map(|s| (s.label(), self.scopes.contains(s)))
                        .collect(),
                ),
            ),
            FormField::new("expiry", "Expiration", FieldValue::Choice(self.expiry.label())),
        ]
    }

    fn edit(&mut self, key: &str, edit: FieldEdit) {
        match key {
            "name" => edit_text(&mut self.name, edit),
            "description" => edit_text(&mut self.description, edit),
            "scopes" => {
                if let FieldEdit::Toggle(i) = edit {
                    if let Some(&scope) = ApiScope::ALL.get(i) {
                        self.toggle_scope(scope);
                    }
                }
            }
            "expiry" => edit_choice(&mut self.expiry, &KeyExpiry::ALL, edit),
            _ => {}
        }
    }
}

// ===== Webhook =====

impl EditableForm for CreateWebhookForm {
    const TITLE: &'static str = "Create Webhook";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Webhook Name", FieldValue::Text(self.name.clone())),
            FormField::new("url", "Endpoint URL", FieldValue::Text(self.url.clone())),
            FormField::new(
                "secret",
                "Secret Key (optional)",
                FieldValue::Secret(self.secret.clone()),
            ),
            FormField::new(
                "events",
                "Events",
                FieldValue::Options(
                    WebhookEvent::ALL
                        .iter()
                        .map(|e| (e.label(), self.events.contains(e)))
                        .collect(),
                ),
            ),
        ]
    }

    fn edit(&mut self, key: &str, edit: FieldEdit) {
        match key {
            "name" => edit_text(&mut self.name, edit),
            "url" => edit_text(&mut self.url, edit),
            "secret" => edit_text(&mut self.secret, edit),
            "events" => {
                if let FieldEdit::Toggle(i) = edit {
                    if let Some(&event) = WebhookEvent::ALL.get(i) {
                        self.toggle_event(event);
                    }
                }
            }
            _ => {}
        }
    }
}

// ===== User / role / workflow =====

impl EditableForm for CreateUserForm {
    const TITLE: &'static str = "Add User";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Full Name", FieldValue::Text(self.name.clone())),
            FormField::new("email", "Email", FieldValue::Text(self.email.clone())),
            FormField::new("role", "Role", FieldValue::Choice(self.role.label())),
            FormField::new("active", "Active", FieldValue::Flag(self.active)),
        ]
    }

    fn edit(&mut self, key: &str, edit: FieldEdit) {
        match key {
            "name" => edit_text(&mut self.name, edit),
            "email" => edit_text(&mut self.email, edit),
            "role" => edit_choice(&mut self.role, &UserRole::ALL, edit),
            "active" => edit_flag(&mut self.active, edit),
            _ => {}
        }
    }
}

impl EditableForm for CreateRoleForm {
    const TITLE: &'static str = "Create Role";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Role Name", FieldValue::Text(self.name.clone())),
            FormField::new(
                "description",
                "Description",
                FieldValue::Text(self.description.clone()),
            ),
        ]
    }

    fn edit(&mut self, key: &str, edit: FieldEdit) {
        match key {
            "name" => edit_text(&mut self.name, edit),
            "description" => edit_text(&mut self.description, edit),
            _ => {}
        }
    }
}

impl EditableForm for CreateWorkflowForm {
    const TITLE: &'static str = "Create Workflow";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Workflow Name", FieldValue::Text(self.name.clone())),
            FormField::new(
                "description",
                "Description",
                FieldValue::Text(self.description.clone()),
            ),
            FormField::new("trigger", "Trigger Type", FieldValue::Choice(self.trigger.label())),
            FormField::new("active", "Active", FieldValue::Flag(self.active)),
        ]
    }

    fn edit(&mut self, key: &str, edit: FieldEdit) {
        match key {
            "name" => edit_text(&mut self.name, edit),
            "description" => edit_text(&mut self.description, edit),
            "trigger" => edit_choice(&mut self.trigger, &TriggerType::ALL, edit),
            "active" => edit_flag(&mut self.active, edit),
            _ => {}
        }
    }
}

// ===== Backup / restore =====

impl EditableForm for CreateBackupForm {
    const TITLE: &'static str = "Create Backup";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("name", "Backup Name", FieldValue::Text(self.name.clone())),
            FormField::new("scope", "Backup Type", FieldValue::Choice(self.scope.label())),
        ]
    }

    fn edit(&mut self, key: &str, edit: FieldEdit) {
        match key {
            "name" => edit_text(&mut self.name, edit),
            "scope" => edit_choice(&mut self.scope, &BackupScope::ALL, edit),
            _ => {}
        }
    }
}

/// Restore form plus the catalog it picks from.
#[derive(Debug, Clone)]
pub struct RestoreChoice {
    pub form: RestoreForm,
    /// `(id, name)` of every stored backup, newest catalog order
    pub backups: Vec<(EntityId, String)>,
}

impl RestoreChoice {
    pub fn new(backups: Vec<(EntityId, String)>) -> Self {
        let form = RestoreForm {
            backup_id: backups.first().map(|(id, _)| *id),
            ..RestoreForm::default()
        };
        Self { form, backups }
    }

    fn selected_name(&self) -> &str {
        self.form
            .backup_id
            .and_then(|id| self.backups.iter().find(|(b, _)| *b == id))
            .map_or("(no backups)", |(_, name)| name.as_str())
    }

    fn step_backup(&mut self, edit: FieldEdit) {
        let ids: Vec<EntityId> = self.backups.iter().map(|(id, _)| *id).collect();
        match self.form.backup_id.as_mut() {
            Some(current) => edit_choice(current, &ids, edit),
            None => self.form.backup_id = ids.first().copied(),
        }
    }
}

impl DialogForm for RestoreChoice {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        self.form.validate()
    }
}

impl EditableForm for RestoreChoice {
    const TITLE: &'static str = "Restore System";

    fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::new(
            "source",
            "Restore Source",
            FieldValue::Choice(self.form.source.label()),
        )];
        match self.form.source {
            RestoreSourceKind::Existing => fields.push(FormField::new(
                "backup",
                "Backup",
                FieldValue::Text(self.selected_name().to_string()),
            )),
            RestoreSourceKind::Upload => fields.push(FormField::new(
                "file",
                "Backup File",
                FieldValue::Text(self.form.file_name.clone()),
            )),
        }
        fields.push(FormField::new(
            "confirmed",
            "I understand current data will be overwritten",
            FieldValue::Flag(self.form.confirmed),
        ));
        fields
    }

    fn edit(&mut self, key: &str, edit: FieldEdit) {
        match key {
            "source" => {
                if matches!(edit, FieldEdit::Prev | FieldEdit::Next | FieldEdit::Input(' ')) {
                    self.form.source = self.form.source.toggled();
                }
            }
            "backup" => self.step_backup(edit),
            "file" => edit_text(&mut self.form.file_name, edit),
            "confirmed" => edit_flag(&mut self.form.confirmed, edit),
            _ => {}
        }
    }
}

// ===== Email =====

impl EditableForm for TestEmailForm {
    const TITLE: &'static str = "Send Test Email";

    fn fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("recipient", "Recipient", FieldValue::Text(self.recipient.clone())),
            FormField::new("subject", "Subject", FieldValue::Text(self.subject.clone())),
            FormField::new("body", "Message", FieldValue::Text(self.body.clone())),
        ]
    }

    fn edit(&mut self, key: &str, edit: FieldEdit) {
        match key {
            "recipient" => edit_text(&mut self.recipient, edit),
            "subject" => edit_text(&mut self.subject, edit),
            "body" => edit_text(&mut self.body, edit),
            _ => {}
        }
    }
}

// ===== Dialog wrapper =====

/// A dialog controller plus the field focus of its modal.
#[derive(Debug, Clone)]
pub struct FormDialog<F: EditableForm> {
    pub dialog: DialogController<F>,
    /// Index of the focused field
    pub focus: usize,
    /// Highlighted option inside a multi-select field
    pub option_cursor: usize,
}

impl<F: EditableForm> FormDialog<F> {
    pub fn open(form: F) -> Self {
        let mut dialog = DialogController::new();
        // a fresh controller is closed, so opening cannot be refused
        let _ = dialog.open(form);
        Self {
            dialog,
            focus: 0,
            option_cursor: 0,
        }
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.dialog.form().map(F::fields).unwrap_or_default()
    }

    pub fn focused_field(&self) -> Option<FormField> {
        self.fields().into_iter().nth(self.focus)
    }

    pub fn next_field(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
            self.option_cursor = 0;
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
            self.option_cursor = 0;
        }
    }

    /// Applies a key edit to the focused field.
    ///
    /// ←→ move the highlight inside a multi-select and Space toggles the
    /// highlighted option. Nothing changes while the dialog is submitting.
    pub fn edit(&mut self, edit: FieldEdit) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let edit = match (&field.value, edit) {
            (FieldValue::Options(_), FieldEdit::Prev) => {
                self.option_cursor = self.option_cursor.saturating_sub(1);
                return;
            }
            (FieldValue::Options(options), FieldEdit::Next) => {
                if self.option_cursor + 1 < options.len() {
                    self.option_cursor += 1;
                }
                return;
            }
            (FieldValue::Options(_), FieldEdit::Input(' ')) => FieldEdit::Toggle(self.option_cursor),
            (FieldValue::Options(_), _) => return,
            (_, edit) => edit,
        };
        if let Some(form) = self.dialog.form_mut() {
            form.edit(field.key, edit);
        }
        // the field list can change shape (restore source)
        let count = self.fields().len();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut dialog = FormDialog::open(CreateRoleForm::default());
        for ch in "Auditor".chars() {
            dialog.edit(FieldEdit::Input(ch));
        }
        dialog.next_field();
        dialog.edit(FieldEdit::Input('x'));
        dialog.edit(FieldEdit::Backspace);
        dialog.edit(FieldEdit::Input('r'));

        let form = dialog.dialog.form().unwrap();
        assert_eq!(form.name, "Auditor");
        assert_eq!(form.description, "r");
    }

    #[test]
    fn space_toggles_highlighted_option() {
        let mut dialog = FormDialog::open(CreateWebhookForm::default());
        dialog.focus = 3;
        dialog.edit(FieldEdit::Next);
        dialog.edit(FieldEdit::Input(' '));
        assert_eq!(
            dialog.dialog.form().unwrap().events,
            vec![WebhookEvent::ALL[1]]
        );
        // letters are ignored inside a multi-select
        dialog.edit(FieldEdit::Input('a'));
        assert_eq!(dialog.dialog.form().unwrap().events.len(), 1);
    }

    #[test]
    fn choices_wrap() {
        let mut dialog = FormDialog::open(CreateUserForm::default());
        dialog.focus = 2;
        dialog.edit(FieldEdit::Next);
        assert_eq!(dialog.dialog.form().unwrap().role, UserRole::Administrator);
        dialog.edit(FieldEdit::Prev);
        assert_eq!(dialog.dialog.form().unwrap().role, UserRole::Staff);
    }

    #[test]
    fn restore_fields_follow_source() {
        let mut dialog = FormDialog::open(RestoreChoice::new(vec![
            (1, "Full System Backup".to_string()),
            (2, "Database Backup".to_string()),
        ]));
        let keys: Vec<_> = dialog.fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["source", "backup", "confirmed"]);

        dialog.focus = 1;
        dialog.edit(FieldEdit::Next);
        assert_eq!(dialog.dialog.form().unwrap().form.backup_id, Some(2));

        dialog.focus = 0;
        dialog.edit(FieldEdit::Next);
        let keys: Vec<_> = dialog.fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["source", "file", "confirmed"]);
    }
}
