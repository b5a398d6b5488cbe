//! Storage and delivery abstraction trait definitions

mod backup_service;
mod entity_repository;
mod notification_dispatcher;
mod settings_store;

pub use backup_service::BackupService;
pub use entity_repository::EntityRepository;
pub use notification_dispatcher::{
    DeliveryReceipt, Notification, NotificationDispatcher, NotificationTarget,
};
pub use settings_store::SettingsStore;
