#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `ListManager` over the seeded collections.

use chrono::NaiveDate;
use intered_admin_core::error::CoreError;
use intered_admin_core::list::{
    AuditLogFacets, CloseBehavior, DayBoundary, Entity, FilterState, ListManager, RoleFacets,
    UserFacets, ViewStatus, WebhookFacets, WorkflowFacets,
};
use intered_admin_core::seed;
use intered_admin_core::types::{
    ActiveStatus, AuditLogEntry, AuditModule, AuditStatus, EventCategory, Role, User, UserRole,
};

// ===== Helpers =====

fn visible_ids<E: Entity>(manager: &ListManager<E>) -> Vec<u32> {
    manager.visible().map(Entity::id).collect()
}

fn may_first() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2023, 5, 1)
}

// ===== Derived view =====

#[test]
fn unset_filter_is_identity() {
    let manager = ListManager::new(seed::audit_logs());
    assert!(manager.filter().is_unset());
    assert_eq!(visible_ids(&manager), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(manager.view_status(), ViewStatus::Rows(6));
}

#[test]
fn filtered_view_is_ordered_subsequence() {
    let mut manager = ListManager::new(seed::users());
    manager.set_search("john");
    let ids = visible_ids(&manager);
    assert_eq!(ids, vec![2, 3]);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn search_is_case_insensitive() {
    let mut manager = ListManager::new(seed::users());
    manager.set_search("SARAH");
    assert_eq!(visible_ids(&manager), vec![3]);

    manager.set_search("sarah");
    assert_eq!(visible_ids(&manager), vec![3]);
}

#[test]
fn reapplying_filter_is_idempotent() {
    let records = seed::audit_logs();
    let filter: FilterState<AuditLogEntry> = FilterState {
        search: "user".to_string(),
        ..FilterState::default()
    };

    let once: Vec<_> = filter.apply(&records).into_iter().cloned().collect();
    let twice: Vec<u32> = filter.apply(&once).into_iter().map(Entity::id).collect();
    assert_eq!(once.iter().map(Entity::id).collect::<Vec<_>>(), twice);
}

#[test]
fn webhook_search_matches_single_payment_hook() {
    let mut manager = ListManager::new(seed::webhooks());
    manager.set_search("payment");
    let names: Vec<_> = manager.visible().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Payment Status Updates"]);
}

#[test]
fn webhook_category_and_status_facets() {
    let mut manager = ListManager::new(seed::webhooks());
    manager.set_facets(WebhookFacets {
        status: Some(ActiveStatus::Inactive),
        category: None,
    });
    assert_eq!(manager.visible_len(), 1);

    manager.set_facets(WebhookFacets {
        status: None,
        category: Some(EventCategory::Payments),
    });
    assert_eq!(visible_ids(&manager), vec![3]);
}

#[test]
fn audit_facets_match_seed_counts() {
    let mut manager = ListManager::new(seed::audit_logs());
    manager.update_facets(|f| f.module = Some(AuditModule::Authentication));
    assert_eq!(visible_ids(&manager), vec![1, 4]);

    manager.set_facets(AuditLogFacets {
        module: None,
        status: Some(AuditStatus::Failed),
    });
    assert_eq!(visible_ids(&manager), vec![4]);

    manager.update_facets(|f| f.module = Some(AuditModule::System));
    assert_eq!(manager.view_status(), ViewStatus::NoMatches);
}

#[test]
fn user_and_workflow_facets() {
    let mut users = ListManager::new(seed::users());
    users.set_facets(UserFacets {
        role: Some(UserRole::Staff),
        status: None,
    });
    assert_eq!(users.visible_len(), 3);

    let mut workflows = ListManager::new(seed::workflows());
    workflows.set_facets(WorkflowFacets {
        status: Some(ActiveStatus::Active),
        trigger: None,
    });
    assert_eq!(workflows.visible_len(), 4);
}

#[test]
fn role_system_facet() {
    let mut roles = ListManager::new(seed::roles());
    roles.set_facets(RoleFacets { system: Some(false) });
    assert_eq!(visible_ids(&roles), vec![5]);
}

#[test]
fn clear_filters_restores_everything() {
    let mut manager = ListManager::new(seed::users());
    manager.set_search("zzz");
    manager.update_facets(|f| f.status = Some(ActiveStatus::Inactive));
    assert_eq!(manager.view_status(), ViewStatus::NoMatches);

    manager.clear_filters();
    assert!(manager.filter().is_unset());
    assert_eq!(manager.visible_len(), 5);
}

#[test]
fn empty_collection_reports_empty() {
    let manager: ListManager<User> = ListManager::new(Vec::new());
    assert_eq!(manager.view_status(), ViewStatus::Empty);
    assert!(manager.current().is_none());
}

// ===== Date filter =====

#[test]
fn date_filter_uses_utc_day_by_default() {
    let mut users = ListManager::new(seed::users());
    users.set_date(may_first());
    assert_eq!(visible_ids(&users), vec![1, 5]);

    let mut audit = ListManager::new(seed::audit_logs());
    audit.set_date(may_first());
    assert_eq!(audit.visible_len(), 6);
}

#[test]
fn date_filter_respects_day_boundary() {
    let mut users = ListManager::with_options(
        seed::users(),
        DayBoundary::Fixed {
            offset_minutes: 600,
        },
        CloseBehavior::default(),
    );
    users.set_date(may_first());
    // 16:20 UTC is already May 2nd at +10:00
    assert_eq!(visible_ids(&users), vec![1]);

    users.set_day_boundary(DayBoundary::Utc);
    assert_eq!(visible_ids(&users), vec![1, 5]);
}

#[test]
fn undated_records_fail_active_date_filter() {
    let mut roles: ListManager<Role> = ListManager::new(seed::roles());
    roles.set_date(may_first());
    assert_eq!(roles.view_status(), ViewStatus::NoMatches);
}

// ===== Detail selection =====

#[test]
fn open_unknown_id_is_not_found() {
    let mut manager = ListManager::new(seed::workflows());
    let err = manager.open_detail(99).unwrap_err();
    assert!(matches!(err, CoreError::NotFound { entity: "Workflow", .. }));
    assert!(manager.detail().is_none());
}

#[test]
fn hidden_record_can_be_opened() {
    let mut manager = ListManager::new(seed::users());
    manager.set_search("john");
    assert!(manager.visible().all(|u| u.id != 4));

    let user = manager.open_detail(4).unwrap();
    assert_eq!(user.name, "Michael Brown");
    assert_eq!(manager.detail().map(|u| u.id), Some(4));
}

#[test]
fn close_retains_or_clears_selection() {
    let mut manager = ListManager::new(seed::api_keys());
    manager.open_detail(2).unwrap();
    manager.close_detail();
    assert!(manager.detail().is_none());
    assert_eq!(manager.selection().selected(), Some(2));

    manager.set_close_behavior(CloseBehavior::Clear);
    manager.open_detail(3).unwrap();
    manager.close_detail();
    assert_eq!(manager.selection().selected(), None);
}

#[test]
fn opening_replaces_previous_selection() {
    let mut manager = ListManager::new(seed::api_keys());
    manager.open_detail(1).unwrap();
    manager.open_detail(5).unwrap();
    assert_eq!(manager.detail().map(|k| k.id), Some(5));
}

#[test]
fn replace_records_drops_deleted_selection() {
    let mut manager = ListManager::new(seed::users());
    manager.open_detail(3).unwrap();

    let remaining: Vec<_> = seed::users().into_iter().filter(|u| u.id != 3).collect();
    manager.replace_records(remaining);
    assert!(manager.detail().is_none());
    assert_eq!(manager.selection().selected(), None);
    assert_eq!(manager.visible_len(), 4);
}

#[test]
fn replace_records_keeps_filter_and_cursor_record() {
    let mut manager = ListManager::new(seed::users());
    manager.update_facets(|f| f.role = Some(UserRole::Staff));
    manager.select_last();
    assert_eq!(manager.current().map(|u| u.id), Some(5));

    let mut records = seed::users();
    records.retain(|u| u.id != 2);
    manager.replace_records(records);
    assert_eq!(visible_ids(&manager), vec![4, 5]);
    assert_eq!(manager.current().map(|u| u.id), Some(5));
}

#[test]
fn cursor_stays_within_view() {
    let mut manager = ListManager::new(seed::workflows());
    manager.select_last();
    assert_eq!(manager.cursor(), 4);
    manager.select_next();
    assert_eq!(manager.cursor(), 4);

    manager.set_search("approval");
    assert_eq!(manager.cursor(), 0);
    assert_eq!(manager.open_current().unwrap().map(|w| w.id), Some(3));
}
