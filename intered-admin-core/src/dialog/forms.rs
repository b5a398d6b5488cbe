//! Dialog forms and their validation rules.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::types::{
    ActiveStatus, ApiScope, BackupJob, BackupScope, EmailConfiguration, EmailProvider, EntityId,
    KeyExpiry, RestoreJob, RestoreSource, TriggerType, UserRole, WebhookEvent,
};

use super::DialogForm;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Loose `local@domain.tld` check used by every email field.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
    }
}

fn check_email(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "Email is required"));
    } else if !is_valid_email(value.trim()) {
        errors.push(FieldError::new(field, "Enter a valid email address"));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Toggles membership of `item` in `list`, keeping insertion order.
fn toggle<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if let Some(pos) = list.iter().position(|x| *x == item) {
        list.remove(pos);
    } else {
        list.push(item);
    }
}

// ===== API key =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateApiKeyForm {
    pub name: String,
    pub description: String,
    pub scopes: Vec<ApiScope>,
    pub expiry: KeyExpiry,
}

impl CreateApiKeyForm {
    pub fn toggle_scope(&mut self, scope: ApiScope) {
        toggle(&mut self.scopes, scope);
    }
}

impl DialogForm for CreateApiKeyForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name, "Key name");
        if self.scopes.is_empty() {
            errors.push(FieldError::new("scopes", "Select at least one permission"));
        } else if self.scopes.contains(&ApiScope::All) && self.scopes.len() > 1 {
            errors.push(FieldError::new(
                "scopes",
                "All Permissions cannot be combined with other scopes",
            ));
        }
        finish(errors)
    }
}

// ===== Webhook =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateWebhookForm {
    pub name: String,
    pub url: String,
    /// Optional signing secret, empty for none
    pub secret: String,
    pub events: Vec<WebhookEvent>,
}

impl CreateWebhookForm {
    pub fn toggle_event(&mut self, event: WebhookEvent) {
        toggle(&mut self.events, event);
    }

    #[must_use]
    pub fn secret(&self) -> Option<String> {
        let secret = self.secret.trim();
        (!secret.is_empty()).then(|| secret.to_string())
    }
}

impl DialogForm for CreateWebhookForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name, "Webhook name");

        let url = self.url.trim();
        if url.is_empty() {
            errors.push(FieldError::new("url", "Endpoint URL is required"));
        } else {
            match url::Url::parse(url) {
                Ok(parsed)
                    if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {}
                Ok(_) => errors.push(FieldError::new("url", "URL must use http or https")),
                Err(e) => errors.push(FieldError::new("url", format!("Invalid URL: {e}"))),
            }
        }

        if self.events.is_empty() {
            errors.push(FieldError::new("events", "Select at least one event"));
        }
        finish(errors)
    }
}

// ===== Role =====

#[derive(Debug, Clone, Default)]
pub struct CreateRoleForm {
    pub name: String,
    pub description: String,
    /// Names already in use, captured when the dialog opens
    pub taken_names: Vec<String>,
}

impl DialogForm for CreateRoleForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name, "Role name");
        let name = self.name.trim();
        if !name.is_empty() && self.taken_names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            errors.push(FieldError::new("name", format!("A role named '{name}' already exists")));
        }
        finish(errors)
    }
}

// ===== User =====

#[derive(Debug, Clone)]
pub struct CreateUserForm {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
}

impl Default for CreateUserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: UserRole::Staff,
            active: true,
        }
    }
}

impl CreateUserForm {
    #[must_use]
    pub fn status(&self) -> ActiveStatus {
        ActiveStatus::from_active(self.active)
    }
}

impl DialogForm for CreateUserForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name, "Full name");
        check_email(&mut errors, "email", &self.email);
        finish(errors)
    }
}

// ===== Workflow =====

#[derive(Debug, Clone)]
pub struct CreateWorkflowForm {
    pub name: String,
    pub description: String,
    pub trigger: TriggerType,
    pub active: bool,
}

impl Default for CreateWorkflowForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            trigger: TriggerType::Event,
            active: true,
        }
    }
}

impl DialogForm for CreateWorkflowForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name, "Workflow name");
        finish(errors)
    }
}

// ===== Backup / restore =====

#[derive(Debug, Clone, Default)]
pub struct CreateBackupForm {
    pub name: String,
    pub scope: BackupScope,
}

impl CreateBackupForm {
    #[must_use]
    pub fn to_job(&self) -> BackupJob {
        BackupJob {
            name: self.name.trim().to_string(),
            scope: self.scope,
        }
    }
}

impl DialogForm for CreateBackupForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name, "Backup name");
        finish(errors)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestoreSourceKind {
    #[default]
    Existing,
    Upload,
}

impl RestoreSourceKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Existing => "Existing Backup",
            Self::Upload => "Upload Backup File",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Existing => Self::Upload,
            Self::Upload => Self::Existing,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RestoreForm {
    pub source: RestoreSourceKind,
    pub backup_id: Option<EntityId>,
    pub file_name: String,
    /// Explicit acknowledgement that current data will be overwritten
    pub confirmed: bool,
}

impl RestoreForm {
    /// Job described by the form, `None` while the source is incomplete.
    #[must_use]
    pub fn to_job(&self) -> Option<RestoreJob> {
        let source = match self.source {
            RestoreSourceKind::Existing => RestoreSource::Existing(self.backup_id?),
            RestoreSourceKind::Upload => {
                let file = self.file_name.trim();
                if file.is_empty() {
                    return None;
                }
                RestoreSource::Upload(file.to_string())
            }
        };
        Some(RestoreJob { source })
    }
}

impl DialogForm for RestoreForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        match self.source {
            RestoreSourceKind::Existing if self.backup_id.is_none() => {
                errors.push(FieldError::new("backup", "Select a backup to restore"));
            }
            RestoreSourceKind::Upload => require(&mut errors, "file", &self.file_name, "Backup file"),
            RestoreSourceKind::Existing => {}
        }
        if !self.confirmed {
            errors.push(FieldError::new(
                "confirmed",
                "Confirm that current data will be overwritten",
            ));
        }
        finish(errors)
    }
}

// ===== Delete confirmation =====

/// "Are you sure?" dialog for a destructive action.
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    pub kind: &'static str,
    pub id: EntityId,
    pub label: String,
}

impl DialogForm for ConfirmDelete {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Ok(())
    }
}

// ===== Email =====

/// Recipient and content of a test email.
#[derive(Debug, Clone)]
pub struct TestEmailForm {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl Default for TestEmailForm {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            subject: "Test Email from InterEd Recruitment Platform".to_string(),
            body: "This is a test email from the InterEd Recruitment Platform to verify that \
                   the email sending functionality is working correctly."
                .to_string(),
        }
    }
}

impl DialogForm for TestEmailForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&mut errors, "recipient", &self.recipient);
        require(&mut errors, "subject", &self.subject, "Subject");
        finish(errors)
    }
}

impl DialogForm for EmailConfiguration {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&mut errors, "fromEmail", &self.from_email);
        if !self.reply_to.trim().is_empty() && !is_valid_email(self.reply_to.trim()) {
            errors.push(FieldError::new("replyTo", "Enter a valid email address"));
        }
        if self.provider == EmailProvider::Custom {
            require(&mut errors, "smtpHost", &self.smtp_host, "SMTP host");
        }
        if self.smtp_port == 0 {
            errors.push(FieldError::new("smtpPort", "SMTP port must be between 1 and 65535"));
        }
        finish(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(result: Result<(), Vec<FieldError>>) -> Vec<&'static str> {
        result.err().unwrap_or_default().iter().map(|e| e.field).collect()
    }

    #[test]
    fn api_key_scope_rules() {
        let mut form = CreateApiKeyForm {
            name: "Reporting".to_string(),
            ..CreateApiKeyForm::default()
        };
        assert_eq!(fields(form.validate()), vec!["scopes"]);

        form.toggle_scope(ApiScope::StudentsRead);
        assert!(form.validate().is_ok());

        form.toggle_scope(ApiScope::All);
        assert_eq!(fields(form.validate()), vec!["scopes"]);

        form.toggle_scope(ApiScope::StudentsRead);
        assert_eq!(form.scopes, vec![ApiScope::All]);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn webhook_url_rules() {
        let mut form = CreateWebhookForm {
            name: "CRM".to_string(),
            url: "ftp://crm.example.com/hook".to_string(),
            secret: "  ".to_string(),
            events: vec![WebhookEvent::StudentCreated],
        };
        assert_eq!(fields(form.validate()), vec!["url"]);
        assert_eq!(form.secret(), None);

        form.url = "not a url".to_string();
        assert_eq!(fields(form.validate()), vec!["url"]);

        form.url = "http://localhost:8080/hook".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn webhook_reports_every_field() {
        assert_eq!(
            fields(CreateWebhookForm::default().validate()),
            vec!["name", "url", "events"]
        );
    }

    #[test]
    fn role_name_must_be_unique() {
        let form = CreateRoleForm {
            name: " manager ".to_string(),
            description: String::new(),
            taken_names: vec!["Administrator".to_string(), "Manager".to_string()],
        };
        assert_eq!(fields(form.validate()), vec!["name"]);
    }

    #[test]
    fn user_email_rules() {
        let mut form = CreateUserForm {
            name: "Ana Lopez".to_string(),
            email: "ana.lopez".to_string(),
            ..CreateUserForm::default()
        };
        assert_eq!(fields(form.validate()), vec!["email"]);
        form.email = "ana.lopez@intered.com".to_string();
        assert!(form.validate().is_ok());
        assert_eq!(form.status(), ActiveStatus::Active);
    }

    #[test]
    fn restore_needs_source_and_confirmation() {
        let mut form = RestoreForm::default();
        assert_eq!(fields(form.validate()), vec!["backup", "confirmed"]);
        assert!(form.to_job().is_none());

        form.backup_id = Some(2);
        form.confirmed = true;
        assert!(form.validate().is_ok());
        assert_eq!(form.to_job().map(|j| j.source), Some(RestoreSource::Existing(2)));

        form.source = RestoreSourceKind::Upload;
        assert_eq!(fields(form.validate()), vec!["file"]);
        form.file_name = "backup-2023-05-01.zip".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn email_configuration_rules() {
        let mut config = EmailConfiguration::default();
        assert!(config.validate().is_ok());

        config.smtp_host.clear();
        config.smtp_port = 0;
        assert_eq!(fields(config.validate()), vec!["smtpHost", "smtpPort"]);

        config.provider = EmailProvider::Sendgrid;
        config.smtp_port = 587;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_email_defaults() {
        let form = TestEmailForm::default();
        assert_eq!(fields(form.validate()), vec!["recipient"]);
        assert!(form.body.contains("functionality is working correctly."));
    }
}
