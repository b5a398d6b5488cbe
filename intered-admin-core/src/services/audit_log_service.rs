//! Audit trail service

use std::sync::Arc;

use crate::error::CoreResult;
use crate::types::{AuditLogEntry, EntityId, NewAuditEntry};

use super::{require, ServiceContext};

/// Read access to the audit trail plus manual recording.
pub struct AuditLogService {
    ctx: Arc<ServiceContext>,
}

impl AuditLogService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> CoreResult<Vec<AuditLogEntry>> {
        self.ctx.repositories.audit_logs.list().await
    }

    pub async fn get(&self, id: EntityId) -> CoreResult<AuditLogEntry> {
        require(self.ctx.repositories.audit_logs.as_ref(), id).await
    }

    /// Appends an entry attributed to the context's actor.
    ///
    /// Unlike the implicit entries written by other services, a storage
    /// failure is returned to the caller.
    pub async fn record(&self, entry: NewAuditEntry) -> CoreResult<AuditLogEntry> {
        let record = self.ctx.audit_record(entry);
        self.ctx.repositories.audit_logs.create(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{create_test_context, FailingRepository};
    use crate::types::AuditModule;

    #[tokio::test]
    async fn record_appends_with_actor() {
        let service = AuditLogService::new(Arc::new(create_test_context()));
        let entry = service
            .record(NewAuditEntry::success(
                AuditModule::Authentication,
                "User Logout",
                "User 'admin' logged out",
            ))
            .await
            .unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.user, "admin");
        assert_eq!(service.list().await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn implicit_audit_failure_does_not_fail_mutation() {
        let mut ctx = create_test_context();
        ctx.repositories.audit_logs = Arc::new(FailingRepository::<AuditLogEntry>::new("audit store offline"));
        let ctx = Arc::new(ctx);

        let workflows = crate::services::WorkflowService::new(ctx.clone());
        assert!(workflows.toggle_status(1).await.is_ok());

        let audit = AuditLogService::new(ctx);
        let err = audit
            .record(NewAuditEntry::success(AuditModule::System, "Ping", "ping"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::StorageError(_)));
    }
}
