//! Create / edit / confirm dialogs as short-lived state machines.
//!
//! ```text
//! Closed -> Open(form) -> Submitting(progress) -> Closed
//!              ^   |            |
//!              |   | invalid    | fail
//!              +---+            v
//!                           Failed(form, error) -> retry -> Submitting
//! ```

mod forms;

pub use forms::{
    is_valid_email, ConfirmDelete, CreateApiKeyForm, CreateBackupForm, CreateRoleForm,
    CreateUserForm, CreateWebhookForm, CreateWorkflowForm, RestoreForm, RestoreSourceKind,
    TestEmailForm,
};

use crate::error::{CoreError, CoreResult, FieldError};
use crate::task::ProgressEvent;

/// Form content of a dialog.
pub trait DialogForm: Clone + std::fmt::Debug + Send {
    /// Checks every field, returning all problems at once.
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// Current state of a dialog.
#[derive(Debug, Clone, Default)]
pub enum DialogState<F> {
    #[default]
    Closed,
    Open {
        form: F,
        errors: Vec<FieldError>,
    },
    /// Submitted and waiting; `progress` is set for long-running operations
    Submitting {
        form: F,
        progress: Option<u8>,
    },
    Failed {
        form: F,
        error: String,
    },
}

impl<F> DialogState<F> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open { .. } => "open",
            Self::Submitting { .. } => "submitting",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Drives one dialog through its states.
#[derive(Debug, Clone)]
pub struct DialogController<F: DialogForm> {
    state: DialogState<F>,
}

impl<F: DialogForm> Default for DialogController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: DialogForm> DialogController<F> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
        }
    }

    #[must_use]
    pub fn state(&self) -> &DialogState<F> {
        &self.state
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.state, DialogState::Closed)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, DialogState::Submitting { .. })
    }

    #[must_use]
    pub fn form(&self) -> Option<&F> {
        match &self.state {
            DialogState::Closed => None,
            DialogState::Open { form, .. }
            | DialogState::Submitting { form, .. }
            | DialogState::Failed { form, .. } => Some(form),
        }
    }

    /// Inline errors from the last rejected submit.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match &self.state {
            DialogState::Open { errors, .. } => errors,
            _ => &[],
        }
    }

    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    #[must_use]
    pub fn progress(&self) -> Option<u8> {
        match self.state {
            DialogState::Submitting { progress, .. } => progress,
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            DialogState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> CoreError {
        CoreError::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }

    /// Opens the dialog with a fresh form.
    pub fn open(&mut self, form: F) -> CoreResult<()> {
        if self.is_submitting() {
            return Err(self.invalid("open"));
        }
        self.state = DialogState::Open {
            form,
            errors: Vec::new(),
        };
        Ok(())
    }

    /// Mutable access for editing. Stale errors are cleared and a failed
    /// dialog goes back to `Open`. Not available while submitting.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        if let DialogState::Failed { .. } = self.state {
            if let DialogState::Failed { form, .. } = std::mem::take(&mut self.state) {
                self.state = DialogState::Open {
                    form,
                    errors: Vec::new(),
                };
            }
        }
        match &mut self.state {
            DialogState::Open { form, errors } => {
                errors.clear();
                Some(form)
            }
            _ => None,
        }
    }

    /// Validates and moves to `Submitting`.
    ///
    /// On validation failure the dialog stays `Open` with inline errors and the
    /// same errors are returned.
    pub fn submit(&mut self) -> CoreResult<&F> {
        let form = match std::mem::take(&mut self.state) {
            DialogState::Open { form, .. } | DialogState::Failed { form, .. } => form,
            other => {
                self.state = other;
                return Err(self.invalid("submit"));
            }
        };
        if let Err(errors) = form.validate() {
            self.state = DialogState::Open {
                form,
                errors: errors.clone(),
            };
            return Err(errors.into());
        }
        self.state = DialogState::Submitting {
            form,
            progress: None,
        };
        self.form().ok_or_else(|| self.invalid("submit"))
    }

    pub fn set_progress(&mut self, value: u8) -> CoreResult<()> {
        match &mut self.state {
            DialogState::Submitting { progress, .. } => {
                *progress = Some(value.min(100));
                Ok(())
            }
            _ => Err(self.invalid("report progress")),
        }
    }

    /// Finishes a successful submit, closing the dialog and handing back the form.
    pub fn complete(&mut self) -> CoreResult<F> {
        match std::mem::take(&mut self.state) {
            DialogState::Submitting { form, .. } => Ok(form),
            other => {
                self.state = other;
                Err(self.invalid("complete"))
            }
        }
    }

    pub fn fail(&mut self, error: impl Into<String>) -> CoreResult<()> {
        match std::mem::take(&mut self.state) {
            DialogState::Submitting { form, .. } => {
                self.state = DialogState::Failed {
                    form,
                    error: error.into(),
                };
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("fail"))
            }
        }
    }

    /// Resubmits a failed dialog.
    pub fn retry(&mut self) -> CoreResult<&F> {
        if !matches!(self.state, DialogState::Failed { .. }) {
            return Err(self.invalid("retry"));
        }
        self.submit()
    }

    /// User dismissal. Rejected while submitting.
    pub fn cancel(&mut self) -> CoreResult<()> {
        if self.is_submitting() {
            return Err(self.invalid("cancel"));
        }
        self.state = DialogState::Closed;
        Ok(())
    }

    /// Unconditional teardown, e.g. when the page is left.
    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Feeds a task progress event into a submitting dialog.
    ///
    /// Returns the form when the task completed and the dialog closed.
    pub fn apply_progress(&mut self, event: &ProgressEvent) -> CoreResult<Option<F>> {
        match event {
            ProgressEvent::Progress(value) => self.set_progress(*value).map(|()| None),
            ProgressEvent::Completed => self.complete().map(Some),
            ProgressEvent::Failed(reason) => self.fail(reason.clone()).map(|()| None),
            ProgressEvent::Cancelled => self.fail("Operation was cancelled").map(|()| None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WebhookEvent;

    fn valid_webhook() -> CreateWebhookForm {
        CreateWebhookForm {
            name: "Offers".to_string(),
            url: "https://hooks.example.com/offers".to_string(),
            secret: String::new(),
            events: vec![WebhookEvent::OfferSent],
        }
    }

    #[test]
    fn zero_events_blocks_submission() {
        let mut dialog = DialogController::new();
        dialog
            .open(CreateWebhookForm {
                events: Vec::new(),
                ..valid_webhook()
            })
            .unwrap();

        let err = dialog.submit().unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref e) if e.field == "events"));
        assert!(matches!(dialog.state(), DialogState::Open { .. }));
        assert!(dialog.error_for("events").is_some());
    }

    #[test]
    fn editing_clears_errors() {
        let mut dialog = DialogController::new();
        dialog.open(CreateWebhookForm::default()).unwrap();
        assert!(dialog.submit().is_err());
        assert!(!dialog.errors().is_empty());

        let form = dialog.form_mut().unwrap();
        *form = valid_webhook();
        assert!(dialog.errors().is_empty());
        assert_eq!(dialog.submit().unwrap().name, "Offers");
        assert!(dialog.is_submitting());
    }

    #[test]
    fn cancel_rejected_while_submitting() {
        let mut dialog = DialogController::new();
        dialog.open(valid_webhook()).unwrap();
        dialog.submit().unwrap();

        let err = dialog.cancel().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                from: "submitting",
                action: "cancel"
            }
        ));
        assert!(dialog.is_submitting());
        assert!(dialog.open(valid_webhook()).is_err());
    }

    #[test]
    fn success_closes_and_returns_form() {
        let mut dialog = DialogController::new();
        dialog.open(valid_webhook()).unwrap();
        dialog.submit().unwrap();
        let form = dialog.complete().unwrap();
        assert_eq!(form.events, vec![WebhookEvent::OfferSent]);
        assert!(dialog.is_closed());
        assert!(dialog.complete().is_err());
    }

    #[test]
    fn failure_is_distinct_and_retryable() {
        let mut dialog = DialogController::new();
        dialog.open(valid_webhook()).unwrap();
        dialog.submit().unwrap();
        dialog.fail("disk full").unwrap();

        assert_eq!(dialog.failure(), Some("disk full"));
        assert!(!dialog.is_closed());
        assert!(dialog.retry().is_ok());
        assert!(dialog.is_submitting());
    }

    #[test]
    fn progress_events_drive_dialog() {
        let mut dialog = DialogController::new();
        dialog.open(valid_webhook()).unwrap();
        dialog.submit().unwrap();

        assert!(dialog.apply_progress(&ProgressEvent::Progress(40)).unwrap().is_none());
        assert_eq!(dialog.progress(), Some(40));
        assert!(dialog.apply_progress(&ProgressEvent::Completed).unwrap().is_some());
        assert!(dialog.is_closed());
        assert!(dialog.set_progress(10).is_err());
    }

    #[test]
    fn cancel_when_open_closes() {
        let mut dialog = DialogController::new();
        dialog.open(valid_webhook()).unwrap();
        dialog.cancel().unwrap();
        assert!(dialog.is_closed());
        assert!(dialog.form().is_none());
    }
}
