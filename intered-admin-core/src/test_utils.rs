//! Test helper module
//!
//! Provides failing mocks and convenient test factory methods.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::list::Entity;
use crate::memory::{
    InMemorySettingsStore, RecordingDispatcher, SimulatedBackupService,
};
use crate::seed;
use crate::services::{Repositories, ServiceContext};
use crate::traits::EntityRepository;
use crate::types::EntityId;

// ===== FailingRepository =====

/// Repository whose every call fails with a storage error.
pub struct FailingRepository<E> {
    message: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E> FailingRepository<E> {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            _entity: PhantomData,
        }
    }

    fn fail<T>(&self) -> CoreResult<T> {
        Err(CoreError::StorageError(self.message.clone()))
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for FailingRepository<E> {
    async fn list(&self) -> CoreResult<Vec<E>> {
        self.fail()
    }

    async fn get(&self, _id: EntityId) -> CoreResult<Option<E>> {
        self.fail()
    }

    async fn create(&self, _entity: E) -> CoreResult<E> {
        self.fail()
    }

    async fn update(&self, _entity: E) -> CoreResult<E> {
        self.fail()
    }

    async fn delete(&self, _id: EntityId) -> CoreResult<()> {
        self.fail()
    }
}

// ===== Factory =====

/// Seeded context with default in-memory adapters.
pub fn create_test_context() -> ServiceContext {
    ServiceContext::seeded()
}

/// Seeded context that also hands back the dispatcher for inspection.
pub fn create_test_context_with_dispatcher() -> (ServiceContext, Arc<RecordingDispatcher>) {
    let dispatcher = Arc::new(RecordingDispatcher::new());
    let ctx = ServiceContext::new(
        Repositories::seeded(),
        Arc::new(InMemorySettingsStore::new(seed::settings())),
        dispatcher.clone(),
        Arc::new(SimulatedBackupService::new()),
    );
    (ctx, dispatcher)
}

/// Seeded context that also hands back the backup engine for failure injection.
pub fn create_test_context_with_backup() -> (ServiceContext, Arc<SimulatedBackupService>) {
    let backup_service = Arc::new(SimulatedBackupService::new());
    let ctx = ServiceContext::new(
        Repositories::seeded(),
        Arc::new(InMemorySettingsStore::new(seed::settings())),
        Arc::new(RecordingDispatcher::new()),
        backup_service.clone(),
    );
    (ctx, backup_service)
}
