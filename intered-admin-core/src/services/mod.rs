//! Business logic service layer

mod api_key_service;
mod audit_log_service;
mod backup_catalog_service;
mod role_service;
mod settings_service;
mod user_service;
mod webhook_service;
mod workflow_service;

pub use api_key_service::ApiKeyService;
pub use audit_log_service::AuditLogService;
pub use backup_catalog_service::BackupCatalogService;
pub use role_service::RoleService;
pub use settings_service::SettingsService;
pub use user_service::UserService;
pub use webhook_service::WebhookService;
pub use workflow_service::WorkflowService;

use std::sync::Arc;

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::list::Entity;
use crate::memory::{
    InMemoryRepository, InMemorySettingsStore, RecordingDispatcher, SimulatedBackupService,
};
use crate::seed;
use crate::traits::{BackupService, EntityRepository, NotificationDispatcher, SettingsStore};
use crate::types::{
    ApiKey, AuditLogEntry, Backup, EntityId, NewAuditEntry, Role, User, Webhook, Workflow,
};

/// One repository per managed entity.
pub struct Repositories {
    pub api_keys: Arc<dyn EntityRepository<ApiKey>>,
    pub webhooks: Arc<dyn EntityRepository<Webhook>>,
    pub audit_logs: Arc<dyn EntityRepository<AuditLogEntry>>,
    pub users: Arc<dyn EntityRepository<User>>,
    pub roles: Arc<dyn EntityRepository<Role>>,
    pub workflows: Arc<dyn EntityRepository<Workflow>>,
    pub backups: Arc<dyn EntityRepository<Backup>>,
}

impl Repositories {
    /// In-memory repositories filled with the seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            api_keys: Arc::new(InMemoryRepository::new(seed::api_keys())),
            webhooks: Arc::new(InMemoryRepository::new(seed::webhooks())),
            audit_logs: Arc::new(InMemoryRepository::new(seed::audit_logs())),
            users: Arc::new(InMemoryRepository::new(seed::users())),
            roles: Arc::new(InMemoryRepository::new(seed::roles())),
            workflows: Arc::new(InMemoryRepository::new(seed::workflows())),
            backups: Arc::new(InMemoryRepository::new(seed::backups())),
        }
    }
}

/// Who the audit trail attributes service calls to.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user: String,
    pub ip_address: String,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            user: "admin".to_string(),
            ip_address: "127.0.0.1".to_string(),
        }
    }
}

/// Service context - holds all dependencies
///
/// The front end builds this context and injects the adapters it wants.
pub struct ServiceContext {
    pub repositories: Repositories,
    pub settings_store: Arc<dyn SettingsStore>,
    pub dispatcher: Arc<dyn NotificationDispatcher>,
    pub backup_service: Arc<dyn BackupService>,
    pub actor: Actor,
}

impl ServiceContext {
    /// Create service context
    #[must_use]
    pub fn new(
        repositories: Repositories,
        settings_store: Arc<dyn SettingsStore>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        backup_service: Arc<dyn BackupService>,
    ) -> Self {
        Self {
            repositories,
            settings_store,
            dispatcher,
            backup_service,
            actor: Actor::default(),
        }
    }

    /// Seeded in-memory context used by the back-office front end.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(
            Repositories::seeded(),
            Arc::new(InMemorySettingsStore::new(seed::settings())),
            Arc::new(RecordingDispatcher::new()),
            Arc::new(SimulatedBackupService::new()),
        )
    }

    /// Stamps an entry with the actor and the current time.
    pub(crate) fn audit_record(&self, entry: NewAuditEntry) -> AuditLogEntry {
        AuditLogEntry {
            id: 0,
            action: entry.action,
            user: self.actor.user.clone(),
            timestamp: Utc::now(),
            ip_address: self.actor.ip_address.clone(),
            status: entry.status,
            details: entry.details,
            module: entry.module,
        }
    }

    /// Appends an audit entry.
    ///
    /// A failing audit store never fails the audited operation; it is logged instead.
    pub async fn audit(&self, entry: NewAuditEntry) {
        let record = self.audit_record(entry);
        if let Err(e) = self.repositories.audit_logs.create(record).await {
            log::error!("Failed to append audit entry: {e}");
        }
    }
}

/// Fetches a record or fails with `NotFound`.
pub(crate) async fn require<E: Entity>(
    repo: &dyn EntityRepository<E>,
    id: EntityId,
) -> CoreResult<E> {
    repo.get(id)
        .await?
        .ok_or_else(|| CoreError::not_found(E::KIND, id))
}
