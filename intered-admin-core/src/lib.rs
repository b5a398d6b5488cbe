//! InterEd Admin Core Library
//!
//! Provides the list-management core of the InterEd recruitment back-office, including:
//! - Filterable, selectable record lists (`ListManager`)
//! - Create / confirm dialogs with validation (`DialogController`)
//! - Simulated backup and restore tasks with progress reporting
//! - Services for API keys, webhooks, users, roles, workflows, audit logs, backups and settings
//!
//! Storage, delivery and the backup engine sit behind traits. The in-memory
//! adapters in [`memory`] back the seeded front end and the tests.

pub mod dialog;
pub mod error;
pub mod list;
pub mod memory;
pub mod payload;
pub mod seed;
pub mod services;
pub mod task;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use dialog::{DialogController, DialogForm, DialogState};
pub use error::{CoreError, CoreResult, FieldError};
pub use list::{Entity, FilterState, ListManager, ViewStatus};
pub use services::ServiceContext;
pub use task::{ProgressEvent, TaskHandle, TaskKind};
pub use traits::{BackupService, EntityRepository, NotificationDispatcher, SettingsStore};
