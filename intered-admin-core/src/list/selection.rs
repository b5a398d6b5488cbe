use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::EntityId;

use super::Entity;

/// What happens to the selected id when the detail view closes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CloseBehavior {
    /// Keep the id so the row stays highlighted
    #[default]
    Retain,
    /// Forget the id
    Clear,
}

/// At most one record open for detail.
///
/// Selection is validated against the full collection, never against the
/// filtered view, so a record hidden by the current filter can still be opened.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<EntityId>,
    detail_open: bool,
    close_behavior: CloseBehavior,
}

impl SelectionController {
    #[must_use]
    pub fn new(close_behavior: CloseBehavior) -> Self {
        Self {
            selected: None,
            detail_open: false,
            close_behavior,
        }
    }

    /// Selects `id` and opens its detail, replacing any previous selection.
    ///
    /// # Arguments
    /// * `id` - Record to open
    /// * `records` - Full collection the id must belong to
    pub fn select<E: Entity>(&mut self, id: EntityId, records: &[E]) -> CoreResult<()> {
        if !records.iter().any(|r| r.id() == id) {
            return Err(CoreError::not_found(E::KIND, id));
        }
        self.selected = Some(id);
        self.detail_open = true;
        Ok(())
    }

    pub fn close(&mut self) {
        self.detail_open = false;
        if self.close_behavior == CloseBehavior::Clear {
            self.selected = None;
        }
    }

    /// Drops the selection if it points at a record that no longer exists.
    pub fn retain_existing<E: Entity>(&mut self, records: &[E]) {
        if let Some(id) = self.selected {
            if !records.iter().any(|r| r.id() == id) {
                self.selected = None;
                self.detail_open = false;
            }
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.detail_open
    }

    #[must_use]
    pub fn close_behavior(&self) -> CloseBehavior {
        self.close_behavior
    }

    pub fn set_close_behavior(&mut self, close_behavior: CloseBehavior) {
        self.close_behavior = close_behavior;
    }
}
