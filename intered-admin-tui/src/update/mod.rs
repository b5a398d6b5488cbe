//! Update layer: state transitions
//!
//! Receives every `AppMessage` and changes the model. Service calls go
//! through the backend synchronously; only backup and restore run in the
//! background and are drained on `Tick`.
//!
//! - `navigation`: page selection
//! - `content`: list cursor, filters, record actions, settings
//! - `modal`: dialogs, delete confirmation, detail view
//! - `filter`: search / date input line
//! - `task`: backup / restore progress
//! - `data`: reloading lists from the services

mod actions;
mod content;
mod data;
mod filter;
mod modal;
mod navigation;
mod settings;
mod task;

use std::time::Instant;

use intered_admin_core::CoreError;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// Handles an application message
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // focus stays put under a modal
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),
        AppMessage::Filter(filter_msg) => filter::update(app, filter_msg),

        AppMessage::GoBack => {
            if app.focus.is_content() {
                app.focus = FocusPanel::Navigation;
                app.clear_status();
            }
        }

        AppMessage::Refresh => {
            data::reload_all(app);
            if !app.modal.is_open() {
                app.set_status("Refreshed");
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Tick => {
            task::tick(app);
            if app.copy_feedback.expire(Instant::now())
                && app.status_message.as_deref() == Some("Copied!")
            {
                app.clear_status();
            }
        }

        AppMessage::Noop => {}
    }
}

/// Logs a service error and shows it: expected errors in the status bar,
/// anything else in an error modal.
fn report(app: &mut App, context: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
        app.set_status(format!("{context}: {err}"));
    } else {
        log::error!("{context}: {err}");
        app.modal.show_error(context, err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use intered_admin_core::list::DayBoundary;
    use intered_admin_core::types::Timezone;
    use intered_admin_core::{DialogState, ViewStatus};

    use super::*;
    use crate::backend::{AppConfig, Backend, MemoryConfigService};
    use crate::message::{ContentMessage, FilterMessage, ModalMessage, NavigationMessage};
    use crate::model::state::{Modal, SettingItem};
    use crate::model::Page;
    use crate::view::theme::Theme;

    fn loaded_app() -> App {
        let mut app = App::for_test();
        update(&mut app, AppMessage::Refresh);
        app
    }

    fn open_page(app: &mut App, page: Page) {
        let index = Page::ALL.iter().position(|p| *p == page).unwrap();
        app.navigation.selected = index;
        update(app, AppMessage::Navigation(NavigationMessage::Confirm));
    }

    fn content(app: &mut App, msg: ContentMessage) {
        update(app, AppMessage::Content(msg));
    }

    fn modal(app: &mut App, msg: ModalMessage) {
        update(app, AppMessage::Modal(msg));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            modal(app, ModalMessage::Input(ch));
        }
    }

    #[test]
    fn navigation_confirm_opens_page() {
        let mut app = loaded_app();
        open_page(&mut app, Page::Users);
        assert_eq!(app.current_page, Page::Users);
        assert!(app.focus.is_content());

        update(&mut app, AppMessage::GoBack);
        assert!(app.focus.is_navigation());
    }

    #[test]
    fn search_applies_while_typing_and_cancel_restores() {
        let mut app = loaded_app();
        open_page(&mut app, Page::Webhooks);

        content(&mut app, ContentMessage::StartSearch);
        for ch in "payment".chars() {
            update(&mut app, AppMessage::Filter(FilterMessage::Input(ch)));
        }
        assert_eq!(app.lists.webhooks.visible_len(), 1);

        update(&mut app, AppMessage::Filter(FilterMessage::Cancel));
        assert!(app.input.is_none());
        assert_eq!(app.lists.webhooks.visible_len(), 5);
    }

    #[test]
    fn bad_date_keeps_input_open() {
        let mut app = loaded_app();
        open_page(&mut app, Page::AuditLogs);

        content(&mut app, ContentMessage::StartDate);
        for ch in "2024-13-40".chars() {
            update(&mut app, AppMessage::Filter(FilterMessage::Input(ch)));
        }
        update(&mut app, AppMessage::Filter(FilterMessage::Commit));
        let input = app.input.as_ref().unwrap();
        assert!(input.error.is_some());
        assert_eq!(app.lists.audit_logs.filter().date, None);
    }

    #[test]
    fn webhook_without_events_stays_open() {
        let mut app = loaded_app();
        open_page(&mut app, Page::Webhooks);
        content(&mut app, ContentMessage::Add);

        type_text(&mut app, "Offers");
        modal(&mut app, ModalMessage::NextField);
        type_text(&mut app, "https://hooks.example.com/offers");
        modal(&mut app, ModalMessage::Confirm);

        let Some(Modal::CreateWebhook(form)) = &app.modal.active else {
            panic!("dialog closed");
        };
        assert!(form.dialog.error_for("events").is_some());
        assert_eq!(app.lists.webhooks.records().len(), 5);
    }

    #[test]
    fn create_role_closes_dialog_and_reloads() {
        let mut app = loaded_app();
        open_page(&mut app, Page::Roles);
        content(&mut app, ContentMessage::Add);
        type_text(&mut app, "Auditor");
        modal(&mut app, ModalMessage::Confirm);

        assert!(!app.modal.is_open());
        assert_eq!(app.lists.roles.records().len(), 6);
        assert!(app
            .lists
            .audit_logs
            .records()
            .iter()
            .any(|entry| entry.details.contains("Auditor")));
    }

    #[test]
    fn delete_needs_the_delete_button() {
        let mut app = loaded_app();
        open_page(&mut app, Page::Users);

        content(&mut app, ContentMessage::Delete);
        // Cancel is focused first
        modal(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert_eq!(app.lists.users.records().len(), 5);

        content(&mut app, ContentMessage::Delete);
        modal(&mut app, ModalMessage::ToggleDeleteFocus);
        modal(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert_eq!(app.lists.users.records().len(), 4);
    }

    #[test]
    fn system_role_delete_fails_in_dialog() {
        let mut app = loaded_app();
        open_page(&mut app, Page::Roles);

        content(&mut app, ContentMessage::Delete);
        modal(&mut app, ModalMessage::ToggleDeleteFocus);
        modal(&mut app, ModalMessage::Confirm);

        let Some(Modal::ConfirmDelete { dialog, .. }) = &app.modal.active else {
            panic!("dialog closed");
        };
        assert!(matches!(dialog.state(), DialogState::Failed { .. }));
        assert_eq!(app.lists.roles.records().len(), 5);
    }

    #[test]
    fn detail_opens_and_closes() {
        let mut app = loaded_app();
        open_page(&mut app, Page::ApiKeys);

        content(&mut app, ContentMessage::Confirm);
        assert!(matches!(app.modal.active, Some(Modal::Detail { page: Page::ApiKeys, .. })));
        assert!(app.lists.api_keys.detail().is_some());

        modal(&mut app, ModalMessage::Close);
        assert!(!app.modal.is_open());
        assert!(app.lists.api_keys.detail().is_none());
    }

    #[test]
    fn facet_and_clear() {
        let mut app = loaded_app();
        open_page(&mut app, Page::Users);

        // Role -> Administrator
        content(&mut app, ContentMessage::CycleFacet(0));
        let admins = app.lists.users.visible_len();
        assert!(admins < 5);

        content(&mut app, ContentMessage::ClearFilters);
        assert_eq!(app.lists.users.view_status(), ViewStatus::Rows(5));
    }

    #[test]
    fn backup_cannot_be_dismissed_while_running() {
        let mut app = loaded_app();
        open_page(&mut app, Page::Backups);
        content(&mut app, ContentMessage::Add);
        type_text(&mut app, "Before upgrade");
        modal(&mut app, ModalMessage::Confirm);
        assert!(app.task.is_some());

        modal(&mut app, ModalMessage::Close);
        assert!(matches!(app.modal.active, Some(Modal::CreateBackup(_))));

        // runs for about five seconds on the backend runtime
        let deadline = Instant::now() + Duration::from_secs(15);
        while app.task.is_some() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(100));
            update(&mut app, AppMessage::Tick);
        }
        assert!(app.task.is_none());
        assert!(!app.modal.is_open());
        assert_eq!(app.lists.backups.records().len(), 6);
    }

    #[test]
    fn platform_setting_is_saved() {
        let mut app = loaded_app();
        open_page(&mut app, Page::Settings);
        app.settings.selected = SettingItem::ALL
            .iter()
            .position(|item| *item == SettingItem::Timezone)
            .unwrap();
        let before = app.settings.platform.general.timezone;

        content(&mut app, ContentMessage::ToggleNext);
        let after = app.settings.platform.general.timezone;
        assert_ne!(before, after);
        assert_eq!(after, crate::util::step(before, &Timezone::ALL, true));

        let stored = app.backend.block_on(app.backend.settings().get()).unwrap();
        assert_eq!(stored.general.timezone, after);
    }

    #[test]
    fn interface_preferences_go_to_config() {
        let config_service = MemoryConfigService::default();
        let mut app = App::new(
            Backend::seeded().unwrap(),
            AppConfig::default(),
            Box::new(config_service.clone()),
        );
        open_page(&mut app, Page::Settings);

        content(&mut app, ContentMessage::ToggleNext);
        assert_eq!(config_service.saved().unwrap().theme, Theme::Light);

        content(&mut app, ContentMessage::SelectNext);
        content(&mut app, ContentMessage::ToggleNext);
        assert_eq!(
            config_service.saved().unwrap().day_boundary,
            DayBoundary::Local
        );
        assert_eq!(app.lists.audit_logs.filter().day_boundary, DayBoundary::Local);
        crate::view::theme::set_theme(Theme::Dark);
    }
}
