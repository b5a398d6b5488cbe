use std::fmt;

use chrono::{DateTime, Utc};

use crate::types::EntityId;

/// A record type managed by a list page.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Human readable kind, used in errors and logs (e.g. `"Webhook"`)
    const KIND: &'static str;

    /// Discrete-field filters available for this entity
    type Facets: Facets<Self>;

    fn id(&self) -> EntityId;

    /// Sets the id; only repositories call this, on creation.
    fn assign_id(&mut self, id: EntityId);

    /// Short label for confirmations and log lines.
    fn label(&self) -> &str;

    /// Fields the free-text search looks at, in no particular order.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Timestamp the date filter compares against, if the entity has one.
    fn filter_timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// Equality filters over the discrete fields of an entity.
///
/// Each field is `None` (match all) or an exact enum value.
pub trait Facets<E>: Clone + Default + fmt::Debug + PartialEq + Send + Sync {
    fn matches(&self, entity: &E) -> bool;

    /// True when no facet is set.
    fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}
