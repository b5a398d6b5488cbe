//! Core services
//!
//! Wraps the services of `intered-admin-core` behind one handle the update
//! layer can call from the synchronous main loop.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use intered_admin_core::services::{
    ApiKeyService, AuditLogService, BackupCatalogService, RoleService, SettingsService,
    UserService, WebhookService, WorkflowService,
};
use intered_admin_core::ServiceContext;
use tokio::runtime::{self, Runtime};

/// Services plus the runtime that drives them.
///
/// Backup and restore timers run on the runtime's worker threads while the UI
/// thread polls their handles, so the runtime must be multi-threaded.
pub struct Backend {
    runtime: Runtime,
    ctx: Arc<ServiceContext>,
}

impl Backend {
    /// Builds a backend over an existing context.
    pub fn new(ctx: ServiceContext) -> Result<Self> {
        let runtime = runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("intered-admin-worker")
            .enable_time()
            .build()?;
        Ok(Self {
            runtime,
            ctx: Arc::new(ctx),
        })
    }

    /// Backend over the seeded in-memory store.
    pub fn seeded() -> Result<Self> {
        Self::new(ServiceContext::seeded())
    }

    /// Runs a service future to completion on the backend runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    // ========== Access ==========

    pub fn api_keys(&self) -> ApiKeyService {
        ApiKeyService::new(self.ctx.clone())
    }

    pub fn webhooks(&self) -> WebhookService {
        WebhookService::new(self.ctx.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.ctx.clone())
    }

    pub fn roles(&self) -> RoleService {
        RoleService::new(self.ctx.clone())
    }

    // ========== Operations ==========

    pub fn workflows(&self) -> WorkflowService {
        WorkflowService::new(self.ctx.clone())
    }

    pub fn audit_logs(&self) -> AuditLogService {
        AuditLogService::new(self.ctx.clone())
    }

    pub fn backups(&self) -> BackupCatalogService {
        BackupCatalogService::new(self.ctx.clone())
    }

    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self.ctx.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_backend_serves_lists() {
        let backend = Backend::seeded().unwrap();
        let keys = backend.block_on(backend.api_keys().list()).unwrap();
        assert_eq!(keys.len(), 5);
        let roles = backend.block_on(backend.roles().list()).unwrap();
        assert!(!roles.is_empty());
    }
}
