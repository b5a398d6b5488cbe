use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::types::EntityId;

use super::{CloseBehavior, DayBoundary, Entity, FilterState, SelectionController};

/// What a list page should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// The collection itself is empty
    Empty,
    /// Records exist but the filter hides all of them
    NoMatches,
    /// Number of visible rows
    Rows(usize),
}

/// One management page: a snapshot of the store, its filter, the derived view,
/// a row cursor and the detail selection.
///
/// The derived view is recomputed eagerly on every change to the filter or the
/// records, so reads never observe a stale view.
#[derive(Debug, Clone)]
pub struct ListManager<E: Entity> {
    records: Vec<E>,
    filter: FilterState<E>,
    /// Indices into `records` of the visible rows, in store order
    visible: Vec<usize>,
    cursor: usize,
    selection: SelectionController,
}

impl<E: Entity> Default for ListManager<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<E: Entity> ListManager<E> {
    #[must_use]
    pub fn new(records: Vec<E>) -> Self {
        Self::with_options(records, DayBoundary::default(), CloseBehavior::default())
    }

    #[must_use]
    pub fn with_options(
        records: Vec<E>,
        day_boundary: DayBoundary,
        close_behavior: CloseBehavior,
    ) -> Self {
        let mut manager = Self {
            records,
            filter: FilterState::with_day_boundary(day_boundary),
            visible: Vec::new(),
            cursor: 0,
            selection: SelectionController::new(close_behavior),
        };
        manager.refresh();
        manager
    }

    // ===== store snapshot =====

    #[must_use]
    pub fn records(&self) -> &[E] {
        &self.records
    }

    #[must_use]
    pub fn find(&self, id: EntityId) -> Option<&E> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Swaps in a fresh snapshot after a store mutation.
    ///
    /// The selection survives if its record still exists. The cursor follows the
    /// previously highlighted record when it is still visible.
    pub fn replace_records(&mut self, records: Vec<E>) {
        let highlighted = self.current().map(Entity::id);
        self.records = records;
        self.selection.retain_existing(&self.records);
        self.refresh();
        if let Some(id) = highlighted {
            if let Some(pos) = self.visible_position(id) {
                self.cursor = pos;
            }
        }
    }

    // ===== filter =====

    #[must_use]
    pub fn filter(&self) -> &FilterState<E> {
        &self.filter
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.search = query.into();
        self.refresh();
    }

    pub fn set_facets(&mut self, facets: E::Facets) {
        self.filter.facets = facets;
        self.refresh();
    }

    /// Edits the facets in place and recomputes the view.
    pub fn update_facets(&mut self, edit: impl FnOnce(&mut E::Facets)) {
        edit(&mut self.filter.facets);
        self.refresh();
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.filter.date = date;
        self.refresh();
    }

    pub fn set_day_boundary(&mut self, boundary: DayBoundary) {
        self.filter.day_boundary = boundary;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = self.filter.matching_indices(&self.records);
        self.cursor = self.cursor.min(self.visible.len().saturating_sub(1));
    }

    // ===== derived view =====

    /// Visible rows in store order.
    pub fn visible(&self) -> impl ExactSizeIterator<Item = &E> + '_ {
        self.visible.iter().map(|&i| &self.records[i])
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn view_status(&self) -> ViewStatus {
        if self.records.is_empty() {
            ViewStatus::Empty
        } else if self.visible.is_empty() {
            ViewStatus::NoMatches
        } else {
            ViewStatus::Rows(self.visible.len())
        }
    }

    fn visible_position(&self, id: EntityId) -> Option<usize> {
        self.visible.iter().position(|&i| self.records[i].id() == id)
    }

    // ===== cursor =====

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Record under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&E> {
        self.visible.get(self.cursor).map(|&i| &self.records[i])
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.visible.len().saturating_sub(1);
    }

    // ===== detail =====

    /// Opens the detail of `id`; the id is checked against the full collection.
    pub fn open_detail(&mut self, id: EntityId) -> CoreResult<&E> {
        self.selection.select(id, &self.records)?;
        self.find(id).ok_or_else(|| CoreError::not_found(E::KIND, id))
    }

    /// Opens the detail of the record under the cursor, if any.
    pub fn open_current(&mut self) -> CoreResult<Option<&E>> {
        let Some(id) = self.current().map(Entity::id) else {
            return Ok(None);
        };
        self.open_detail(id).map(Some)
    }

    pub fn close_detail(&mut self) {
        self.selection.close();
    }

    /// Record whose detail is open.
    #[must_use]
    pub fn detail(&self) -> Option<&E> {
        if !self.selection.is_open() {
            return None;
        }
        self.selection.selected().and_then(|id| self.find(id))
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn set_close_behavior(&mut self, close_behavior: CloseBehavior) {
        self.selection.set_close_behavior(close_behavior);
    }
}
