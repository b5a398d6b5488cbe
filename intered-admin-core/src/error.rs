//! Unified error type definition

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A validation failure bound to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field key (e.g. `"name"`, `"events"`)
    pub field: &'static str,
    /// Human readable message shown inline under the field
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Record does not exist in the store
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Single field validation error
    #[error("Validation error: {0}")]
    Validation(FieldError),

    /// Several field validation errors collected from one form
    #[error("Validation failed on {} field(s)", .0.len())]
    ValidationErrors(Vec<FieldError>),

    /// Dialog / task state machine refused a transition
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    /// Operation conflicts with current data (duplicate name, protected record)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Long-running task reported a failure
    #[error("Task failed: {0}")]
    TaskFailed(String),

    /// Long-running task was cancelled before completion
    #[error("Task cancelled")]
    TaskCancelled,

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Notification could not be delivered
    #[error("Delivery error: {0}")]
    DeliveryError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Shorthand for a `NotFound` error.
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound { .. }
            | Self::Validation(_)
            | Self::ValidationErrors(_)
            | Self::InvalidTransition { .. }
            | Self::Conflict(_)
            | Self::TaskCancelled => true,
            Self::TaskFailed(_)
            | Self::StorageError(_)
            | Self::DeliveryError(_)
            | Self::SerializationError(_) => false,
        }
    }

    /// Field errors carried by this error, empty for non-validation errors.
    #[must_use]
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::Validation(e) => vec![e.clone()],
            Self::ValidationErrors(errors) => errors.clone(),
            _ => Vec::new(),
        }
    }
}

impl From<Vec<FieldError>> for CoreError {
    fn from(mut errors: Vec<FieldError>) -> Self {
        if errors.len() == 1 {
            Self::Validation(errors.remove(0))
        } else {
            Self::ValidationErrors(errors)
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_errors_are_user_caused() {
        assert!(CoreError::not_found("Webhook", 9).is_expected());
        assert!(CoreError::Validation(FieldError::new("name", "required")).is_expected());
        assert!(!CoreError::TaskFailed("disk full".to_string()).is_expected());
    }

    #[test]
    fn single_field_error_collapses() {
        let err: CoreError = vec![FieldError::new("url", "bad")].into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.field_errors().len(), 1);

        let err: CoreError = vec![
            FieldError::new("url", "bad"),
            FieldError::new("name", "required"),
        ]
        .into();
        assert!(matches!(err, CoreError::ValidationErrors(ref v) if v.len() == 2));
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::not_found("User", 3)).unwrap();
        assert_eq!(json["code"], "NotFound");
        assert_eq!(json["details"]["entity"], "User");
    }
}
