//! Type definitions

mod api_key;
mod audit_log;
mod backup;
mod role;
mod settings;
mod status;
mod user;
mod webhook;
mod workflow;

/// Identifier of a stored record, assigned by the repository on creation.
pub type EntityId = u32;

pub use api_key::{ApiKey, ApiScope, KeyExpiry};
pub use audit_log::{AuditLogEntry, AuditModule, AuditStatus, NewAuditEntry};
pub use backup::{
    Backup, BackupFrequency, BackupJob, BackupKind, BackupScope, BackupSchedule, BackupStatus,
    BackupTime, BackupType, RestoreJob, RestoreSource,
};
pub use role::{Permission, PermissionModule, Role, PERMISSION_CATALOG};
pub use settings::{
    ChannelPreferences, DateFormat, DigestFrequency, EmailConfiguration, EmailProvider,
    GeneralSettings, NotificationChannel, NotificationSettings, PlatformSettings, Timezone,
    NOTIFICATION_TOPICS,
};
pub use status::ActiveStatus;
pub use user::{User, UserRole};
pub use webhook::{DeliveryResponse, EventCategory, Webhook, WebhookEvent};
pub use workflow::{TriggerType, Workflow};
