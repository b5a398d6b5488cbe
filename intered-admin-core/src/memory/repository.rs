use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::list::Entity;
use crate::traits::EntityRepository;
use crate::types::EntityId;

/// Insertion-ordered in-memory store.
///
/// Ids come from a counter seeded past the highest initial id. It only moves
/// forward, so a deleted id is never handed out again.
#[derive(Debug)]
pub struct InMemoryRepository<E: Entity> {
    store: RwLock<Store<E>>,
}

#[derive(Debug)]
struct Store<E> {
    records: Vec<E>,
    /// `None` once the id space is used up
    next_id: Option<EntityId>,
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<E: Entity> InMemoryRepository<E> {
    #[must_use]
    pub fn new(records: Vec<E>) -> Self {
        let next_id = records
            .iter()
            .map(Entity::id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self {
            store: RwLock::new(Store { records, next_id }),
        }
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for InMemoryRepository<E> {
    async fn list(&self) -> CoreResult<Vec<E>> {
        Ok(self.store.read().await.records.clone())
    }

    async fn get(&self, id: EntityId) -> CoreResult<Option<E>> {
        Ok(self
            .store
            .read()
            .await
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn create(&self, mut entity: E) -> CoreResult<E> {
        let mut store = self.store.write().await;
        let id = store
            .next_id
            .ok_or_else(|| CoreError::StorageError(format!("{} id space exhausted", E::KIND)))?;
        store.next_id = id.checked_add(1);
        entity.assign_id(id);
        store.records.push(entity.clone());
        log::debug!("{} #{id} stored", E::KIND);
        Ok(entity)
    }

    async fn update(&self, entity: E) -> CoreResult<E> {
        let mut store = self.store.write().await;
        let slot = store
            .records
            .iter_mut()
            .find(|r| r.id() == entity.id())
            .ok_or_else(|| CoreError::not_found(E::KIND, entity.id()))?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: EntityId) -> CoreResult<()> {
        let mut store = self.store.write().await;
        let before = store.records.len();
        store.records.retain(|r| r.id() != id);
        if store.records.len() == before {
            return Err(CoreError::not_found(E::KIND, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::{ActiveStatus, Workflow};

    #[tokio::test]
    async fn create_appends_with_next_id() {
        let repo = InMemoryRepository::new(seed::workflows());
        let mut draft = seed::workflows()[0].clone();
        draft.name = "Visa Checklist".to_string();

        let created = repo.create(draft).await.unwrap();
        assert_eq!(created.id, 6);

        let all = repo.list().await.unwrap();
        assert_eq!(all.last().map(|w| w.name.as_str()), Some("Visa Checklist"));
    }

    #[tokio::test]
    async fn empty_repository_starts_at_one() {
        let repo = InMemoryRepository::<Workflow>::default();
        let created = repo.create(seed::workflows()[1].clone()).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reassigned() {
        let repo = InMemoryRepository::new(seed::workflows());
        let first = repo.create(seed::workflows()[0].clone()).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(seed::workflows()[0].clone()).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(second.id, 7);
    }

    #[tokio::test]
    async fn exhausted_id_space_is_a_storage_error() {
        let mut last = seed::workflows()[0].clone();
        last.id = EntityId::MAX;
        let repo = InMemoryRepository::new(vec![last]);

        let result = repo.create(seed::workflows()[1].clone()).await;
        assert!(matches!(result, Err(CoreError::StorageError(_))));
    }

    #[tokio::test]
    async fn update_keeps_position() {
        let repo = InMemoryRepository::new(seed::workflows());
        let mut second = repo.get(2).await.unwrap().unwrap();
        second.status = ActiveStatus::Inactive;
        repo.update(second).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all[1].id, 2);
        assert_eq!(all[1].status, ActiveStatus::Inactive);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let repo = InMemoryRepository::new(seed::workflows());
        let mut ghost = seed::workflows()[0].clone();
        ghost.id = 99;

        assert!(matches!(repo.update(ghost).await, Err(CoreError::NotFound { .. })));
        assert!(matches!(repo.delete(99).await, Err(CoreError::NotFound { .. })));
        assert!(repo.get(99).await.unwrap().is_none());

        repo.delete(3).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 4);
    }
}
