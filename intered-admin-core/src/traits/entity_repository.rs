//! Entity persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::list::Entity;
use crate::types::EntityId;

/// Ordered store of one entity type.
///
/// Implementations:
/// - `InMemoryRepository` (seeded, process lifetime)
/// - test mocks with injectable failures
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// All records in store order
    async fn list(&self) -> CoreResult<Vec<E>>;

    /// Get a record by ID
    ///
    /// # Arguments
    /// * `id` - Record ID
    async fn get(&self, id: EntityId) -> CoreResult<Option<E>>;

    /// Append a new record. The repository assigns the id and returns the stored record.
    ///
    /// # Arguments
    /// * `entity` - Record data, its id is ignored
    async fn create(&self, entity: E) -> CoreResult<E>;

    /// Replace an existing record, keeping its position
    ///
    /// # Arguments
    /// * `entity` - Record data carrying the id to replace
    async fn update(&self, entity: E) -> CoreResult<E>;

    /// Remove a record
    ///
    /// # Arguments
    /// * `id` - Record ID
    async fn delete(&self, id: EntityId) -> CoreResult<()>;
}
