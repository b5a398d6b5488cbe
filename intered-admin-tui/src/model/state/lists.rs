//! List page state
//!
//! Each management page owns a `ListManager` from the core. [`PageList`] is the
//! object-safe slice of it the update layer and the shared table components need,
//! so they can work on "the list of the current page" without knowing its type.

use chrono::NaiveDate;
use intered_admin_core::list::{
    ApiKeyFacets, AuditLogFacets, BackupFacets, CloseBehavior, DayBoundary, RoleFacets,
    UserFacets, WebhookFacets, WorkflowFacets,
};
use intered_admin_core::types::{
    ActiveStatus, ApiKey, AuditLogEntry, AuditModule, AuditStatus, Backup, BackupKind, EntityId,
    EventCategory, Role, TriggerType, User, UserRole, Webhook, Workflow,
};
use intered_admin_core::{CoreResult, Entity, ListManager, ViewStatus};

use crate::model::Page;

/// Facet filters that can be stepped through with the number keys.
pub trait FacetCycle {
    /// Facet names, bound to keys `1`, `2`, ... in this order
    const SLOTS: &'static [&'static str];

    /// Advances one facet: All -> first value -> ... -> last value -> All.
    fn cycle(&mut self, slot: usize);

    /// Current value of a facet, `"All"` when unset.
    fn value_label(&self, slot: usize) -> &'static str;
}

fn cycle_option<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => all
            .iter()
            .position(|x| *x == value)
            .and_then(|i| all.get(i + 1))
            .copied(),
    }
}

fn label_or_all<T>(value: Option<T>, label: impl FnOnce(T) -> &'static str) -> &'static str {
    value.map_or("All", label)
}

fn role_type_label(system: bool) -> &'static str {
    if system {
        "System"
    } else {
        "Custom"
    }
}

impl FacetCycle for ApiKeyFacets {
    const SLOTS: &'static [&'static str] = &["Status"];

    fn cycle(&mut self, slot: usize) {
        if slot == 0 {
            self.status = cycle_option(self.status, &ActiveStatus::ALL);
        }
    }

    fn value_label(&self, slot: usize) -> &'static str {
        match slot {
            0 => label_or_all(self.status, ActiveStatus::label),
            _ => "All",
        }
    }
}

impl FacetCycle for WebhookFacets {
    const SLOTS: &'static [&'static str] = &["Status", "Category"];

    fn cycle(&mut self, slot: usize) {
        match slot {
            0 => self.status = cycle_option(self.status, &ActiveStatus::ALL),
            1 => self.category = cycle_option(self.category, &EventCategory::ALL),
            _ => {}
        }
    }

    fn value_label(&self, slot: usize) -> &'static str {
        match slot {
            0 => label_or_all(self.status, ActiveStatus::label),
            1 => label_or_all(self.category, EventCategory::label),
            _ => "All",
        }
    }
}

impl FacetCycle for AuditLogFacets {
    const SLOTS: &'static [&'static str] = &["Module", "Status"];

    fn cycle(&mut self, slot: usize) {
        match slot {
            0 => self.module = cycle_option(self.module, &AuditModule::ALL),
            1 => self.status = cycle_option(self.status, &AuditStatus::ALL),
            _ => {}
        }
    }

    fn value_label(&self, slot: usize) -> &'static str {
        match slot {
            0 => label_or_all(self.module, AuditModule::label),
            1 => label_or_all(self.status, AuditStatus::label),
            _ => "All",
        }
    }
}

impl FacetCycle for UserFacets {
    const SLOTS: &'static [&'static str] = &["Role", "Status"];

    fn cycle(&mut self, slot: usize) {
        match slot {
            0 => self.role = cycle_option(self.role, &UserRole::ALL),
            1 => self.status = cycle_option(self.status, &ActiveStatus::ALL),
            _ => {}
        }
    }

    fn value_label(&self, slot: usize) -> &'static str {
        match slot {
            0 => label_or_all(self.role, UserRole::label),
            1 => label_or_all(self.status, ActiveStatus::label),
            _ => "All",
        }
    }
}

impl FacetCycle for RoleFacets {
    const SLOTS: &'static [&'static str] = &["Type"];

    fn cycle(&mut self, slot: usize) {
        if slot == 0 {
            self.system = cycle_option(self.system, &[true, false]);
        }
    }

    fn value_label(&self, slot: usize) -> &'static str {
        match slot {
            0 => label_or_all(self.system, role_type_label),
            _ => "All",
        }
    }
}

impl FacetCycle for WorkflowFacets {
    const SLOTS: &'static [&'static str] = &["Status", "Trigger"];

    fn cycle(&mut self, slot: usize) {
        match slot {
            0 => self.status = cycle_option(self.status, &ActiveStatus::ALL),
            1 => self.trigger = cycle_option(self.trigger, &TriggerType::ALL),
            _ => {}
        }
    }

    fn value_label(&self, slot: usize) -> &'static str {
        match slot {
            0 => label_or_all(self.status, ActiveStatus::label),
            1 => label_or_all(self.trigger, TriggerType::label),
            _ => "All",
        }
    }
}

impl FacetCycle for BackupFacets {
    const SLOTS: &'static [&'static str] = &["Type"];

    fn cycle(&mut self, slot: usize) {
        if slot == 0 {
            self.kind = cycle_option(self.kind, &BackupKind::ALL);
        }
    }

    fn value_label(&self, slot: usize) -> &'static str {
        match slot {
            0 => label_or_all(self.kind, BackupKind::label),
            _ => "All",
        }
    }
}

/// Type-erased view of one list page.
pub trait PageList {
    /// Entity kind shown in messages (e.g. `"Webhook"`)
    fn kind(&self) -> &'static str;
    fn view_status(&self) -> ViewStatus;
    fn total(&self) -> usize;
    fn cursor(&self) -> usize;

    fn select_previous(&mut self);
    fn select_next(&mut self);
    fn select_first(&mut self);
    fn select_last(&mut self);

    fn search(&self) -> &str;
    fn set_search(&mut self, query: String);
    fn date(&self) -> Option<NaiveDate>;
    fn set_date(&mut self, date: Option<NaiveDate>);
    /// `(facet name, current value)` pairs
    fn facets(&self) -> Vec<(&'static str, &'static str)>;
    /// Returns `false` when the page has no facet in `slot`.
    fn cycle_facet(&mut self, slot: usize) -> bool;
    fn has_filters(&self) -> bool;
    fn clear_filters(&mut self);

    fn current_id(&self) -> Option<EntityId>;
    fn current_label(&self) -> Option<String>;
    /// Opens the detail of the highlighted row. `Ok(false)` when no row is highlighted.
    fn open_current(&mut self) -> CoreResult<bool>;
    fn open_detail(&mut self, id: EntityId) -> CoreResult<()>;
    fn close_detail(&mut self);
    /// Record whose detail is open
    fn detail_id(&self) -> Option<EntityId>;
    /// Selected record, kept after close under `CloseBehavior::Retain`
    fn selected_id(&self) -> Option<EntityId>;

    fn set_day_boundary(&mut self, boundary: DayBoundary);
    fn set_close_behavior(&mut self, close_behavior: CloseBehavior);
}

impl<E> PageList for ListManager<E>
where
    E: Entity,
    E::Facets: FacetCycle,
{
    fn kind(&self) -> &'static str {
        E::KIND
    }

    fn view_status(&self) -> ViewStatus {
        ListManager::view_status(self)
    }

    fn total(&self) -> usize {
        self.records().len()
    }

    fn cursor(&self) -> usize {
        ListManager::cursor(self)
    }

    fn select_previous(&mut self) {
        ListManager::select_previous(self);
    }

    fn select_next(&mut self) {
        ListManager::select_next(self);
    }

    fn select_first(&mut self) {
        ListManager::select_first(self);
    }

    fn select_last(&mut self) {
        ListManager::select_last(self);
    }

    fn search(&self) -> &str {
        &self.filter().search
    }

    fn set_search(&mut self, query: String) {
        ListManager::set_search(self, query);
    }

    fn date(&self) -> Option<NaiveDate> {
        self.filter().date
    }

    fn set_date(&mut self, date: Option<NaiveDate>) {
        ListManager::set_date(self, date);
    }

    fn facets(&self) -> Vec<(&'static str, &'static str)> {
        let facets = &self.filter().facets;
        E::Facets::SLOTS
            .iter()
            .enumerate()
            .map(|(slot, name)| (*name, facets.value_label(slot)))
            .collect()
    }

    fn cycle_facet(&mut self, slot: usize) -> bool {
        if slot >= E::Facets::SLOTS.len() {
            return false;
        }
        self.update_facets(|facets| facets.cycle(slot));
        true
    }

    fn has_filters(&self) -> bool {
        !self.filter().is_unset()
    }

    fn clear_filters(&mut self) {
        ListManager::clear_filters(self);
    }

    fn current_id(&self) -> Option<EntityId> {
        self.current().map(Entity::id)
    }

    fn current_label(&self) -> Option<String> {
        self.current().map(|e| e.label().to_string())
    }

    fn open_current(&mut self) -> CoreResult<bool> {
        ListManager::open_current(self).map(|opened| opened.is_some())
    }

    fn open_detail(&mut self, id: EntityId) -> CoreResult<()> {
        ListManager::open_detail(self, id).map(|_| ())
    }

    fn close_detail(&mut self) {
        ListManager::close_detail(self);
    }

    fn detail_id(&self) -> Option<EntityId> {
        self.detail().map(Entity::id)
    }

    fn selected_id(&self) -> Option<EntityId> {
        self.selection().selected()
    }

    fn set_day_boundary(&mut self, boundary: DayBoundary) {
        ListManager::set_day_boundary(self, boundary);
    }

    fn set_close_behavior(&mut self, close_behavior: CloseBehavior) {
        ListManager::set_close_behavior(self, close_behavior);
    }
}

/// Every list page
pub struct ListsState {
    pub api_keys: ListManager<ApiKey>,
    pub webhooks: ListManager<Webhook>,
    pub users: ListManager<User>,
    pub roles: ListManager<Role>,
    pub workflows: ListManager<Workflow>,
    pub audit_logs: ListManager<AuditLogEntry>,
    pub backups: ListManager<Backup>,
}

impl ListsState {
    /// Empty lists; the records arrive with the first refresh.
    pub fn new(day_boundary: DayBoundary, close_behavior: CloseBehavior) -> Self {
        Self {
            api_keys: ListManager::with_options(Vec::new(), day_boundary, close_behavior),
            webhooks: ListManager::with_options(Vec::new(), day_boundary, close_behavior),
            users: ListManager::with_options(Vec::new(), day_boundary, close_behavior),
            roles: ListManager::with_options(Vec::new(), day_boundary, close_behavior),
            workflows: ListManager::with_options(Vec::new(), day_boundary, close_behavior),
            audit_logs: ListManager::with_options(Vec::new(), day_boundary, close_behavior),
            backups: ListManager::with_options(Vec::new(), day_boundary, close_behavior),
        }
    }

    pub fn get(&self, page: Page) -> Option<&dyn PageList> {
        match page {
            Page::ApiKeys => Some(&self.api_keys),
            Page::Webhooks => Some(&self.webhooks),
            Page::Users => Some(&self.users),
            Page::Roles => Some(&self.roles),
            Page::Workflows => Some(&self.workflows),
            Page::AuditLogs => Some(&self.audit_logs),
            Page::Backups => Some(&self.backups),
            Page::Overview | Page::Settings => None,
        }
    }

    pub fn get_mut(&mut self, page: Page) -> Option<&mut dyn PageList> {
        match page {
            Page::ApiKeys => Some(&mut self.api_keys),
            Page::Webhooks => Some(&mut self.webhooks),
            Page::Users => Some(&mut self.users),
            Page::Roles => Some(&mut self.roles),
            Page::Workflows => Some(&mut self.workflows),
            Page::AuditLogs => Some(&mut self.audit_logs),
            Page::Backups => Some(&mut self.backups),
            Page::Overview | Page::Settings => None,
        }
    }

    /// Applies `f` to every list page.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut dyn PageList)) {
        f(&mut self.api_keys);
        f(&mut self.webhooks);
        f(&mut self.users);
        f(&mut self.roles);
        f(&mut self.workflows);
        f(&mut self.audit_logs);
        f(&mut self.backups);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intered_admin_core::seed;

    #[test]
    fn facet_cycle_wraps_to_all() {
        let mut facets = AuditLogFacets::default();
        for expected in AuditStatus::ALL {
            facets.cycle(1);
            assert_eq!(facets.status, Some(expected));
        }
        facets.cycle(1);
        assert_eq!(facets.status, None);
        assert_eq!(facets.value_label(1), "All");
    }

    #[test]
    fn role_type_facet() {
        let mut list: ListManager<Role> = ListManager::new(seed::roles());
        assert!(PageList::cycle_facet(&mut list, 0));
        assert_eq!(PageList::facets(&list), vec![("Type", "System")]);
        PageList::cycle_facet(&mut list, 0);
        assert_eq!(list.visible().map(|r| r.id).collect::<Vec<_>>(), vec![5]);
        assert!(!PageList::cycle_facet(&mut list, 1));
    }

    #[test]
    fn dyn_access_by_page() {
        let mut lists = ListsState::new(DayBoundary::Utc, CloseBehavior::Retain);
        lists.users.replace_records(seed::users());
        let users = lists.get_mut(Page::Users).unwrap();
        users.set_search("john".to_string());
        assert_eq!(users.view_status(), ViewStatus::Rows(2));
        assert!(users.has_filters());
        assert!(lists.get(Page::Settings).is_none());
    }
}
