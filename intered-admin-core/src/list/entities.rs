//! `Entity` implementations and facet filters for every managed record type.

use chrono::{DateTime, Utc};

use crate::types::{
    ActiveStatus, ApiKey, AuditLogEntry, AuditModule, AuditStatus, Backup, BackupKind,
    EntityId, EventCategory, Role, TriggerType, User, UserRole, Webhook, Workflow,
};

use super::{Entity, Facets};

/// `None` matches everything, `Some(v)` matches exactly `v`.
fn facet_eq<T: PartialEq>(facet: Option<&T>, value: &T) -> bool {
    facet.is_none_or(|f| f == value)
}

// ===== API keys =====

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiKeyFacets {
    pub status: Option<ActiveStatus>,
}

impl Facets<ApiKey> for ApiKeyFacets {
    fn matches(&self, key: &ApiKey) -> bool {
        facet_eq(self.status.as_ref(), &key.status)
    }
}

impl Entity for ApiKey {
    const KIND: &'static str = "API key";
    type Facets = ApiKeyFacets;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn filter_timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

// ===== Webhooks =====

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebhookFacets {
    pub status: Option<ActiveStatus>,
    /// Matches webhooks subscribed to at least one event of the category
    pub category: Option<EventCategory>,
}

impl Facets<Webhook> for WebhookFacets {
    fn matches(&self, webhook: &Webhook) -> bool {
        facet_eq(self.status.as_ref(), &webhook.status)
            && self.category.is_none_or(|c| webhook.subscribes_to(c))
    }
}

impl Entity for Webhook {
    const KIND: &'static str = "Webhook";
    type Facets = WebhookFacets;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.url.as_str()]
    }

    fn filter_timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

// ===== Audit logs =====

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditLogFacets {
    pub module: Option<AuditModule>,
    pub status: Option<AuditStatus>,
}

impl Facets<AuditLogEntry> for AuditLogFacets {
    fn matches(&self, entry: &AuditLogEntry) -> bool {
        facet_eq(self.module.as_ref(), &entry.module) && facet_eq(self.status.as_ref(), &entry.status)
    }
}

impl Entity for AuditLogEntry {
    const KIND: &'static str = "Audit log entry";
    type Facets = AuditLogFacets;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.action
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.action.as_str(), self.user.as_str(), self.details.as_str()]
    }

    fn filter_timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.timestamp)
    }
}

// ===== Users =====

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFacets {
    pub role: Option<UserRole>,
    pub status: Option<ActiveStatus>,
}

impl Facets<User> for UserFacets {
    fn matches(&self, user: &User) -> bool {
        facet_eq(self.role.as_ref(), &user.role) && facet_eq(self.status.as_ref(), &user.status)
    }
}

impl Entity for User {
    const KIND: &'static str = "User";
    type Facets = UserFacets;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.label()]
    }

    fn filter_timestamp(&self) -> Option<DateTime<Utc>> {
        self.last_login
    }
}

// ===== Roles =====

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleFacets {
    /// Built-in vs. custom roles
    pub system: Option<bool>,
}

impl Facets<Role> for RoleFacets {
    fn matches(&self, role: &Role) -> bool {
        facet_eq(self.system.as_ref(), &role.is_system)
    }
}

impl Entity for Role {
    const KIND: &'static str = "Role";
    type Facets = RoleFacets;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

// ===== Workflows =====

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowFacets {
    pub status: Option<ActiveStatus>,
    pub trigger: Option<TriggerType>,
}

impl Facets<Workflow> for WorkflowFacets {
    fn matches(&self, workflow: &Workflow) -> bool {
        facet_eq(self.status.as_ref(), &workflow.status)
            && facet_eq(self.trigger.as_ref(), &workflow.trigger)
    }
}

impl Entity for Workflow {
    const KIND: &'static str = "Workflow";
    type Facets = WorkflowFacets;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn filter_timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.last_modified)
    }
}

// ===== Backups =====

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackupFacets {
    pub kind: Option<BackupKind>,
}

impl Facets<Backup> for BackupFacets {
    fn matches(&self, backup: &Backup) -> bool {
        facet_eq(self.kind.as_ref(), &backup.kind)
    }
}

impl Entity for Backup {
    const KIND: &'static str = "Backup";
    type Facets = BackupFacets;

    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn filter_timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}
