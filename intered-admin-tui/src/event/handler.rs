//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::{typed_char, DefaultKeymap};
use crate::message::{AppMessage, ContentMessage, FilterMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Page};

/// Polls for the next event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translates an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // resize redraws on the next loop iteration
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only Press: Windows terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.input.is_some() {
        return handle_filter_keys(key);
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // Global shortcuts
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Overview => AppMessage::Noop,
        Page::Settings => handle_settings_keys(key),
        page => handle_list_keys(key, page),
    }
}

/// Keys shared by every list page, plus the actions of `page`
fn handle_list_keys(key: KeyEvent, page: Page) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return match page {
            Page::AuditLogs => AppMessage::Noop,
            _ => content(ContentMessage::Delete),
        };
    }
    if DefaultKeymap::FILTER_SEARCH.matches(&key) {
        return content(ContentMessage::StartSearch);
    }
    if DefaultKeymap::FILTER_DATE.matches(&key) && page.has_date_filter() {
        return content(ContentMessage::StartDate);
    }
    if DefaultKeymap::FILTER_CLEAR.matches(&key) {
        return content(ContentMessage::ClearFilters);
    }
    if let Some(msg) = page_action(&key, page) {
        return content(msg);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => content(ContentMessage::SelectNext),
        KeyCode::Enter => content(ContentMessage::Confirm),
        KeyCode::Home => content(ContentMessage::SelectFirst),
        KeyCode::End => content(ContentMessage::SelectLast),
        KeyCode::Char(ch @ '1'..='9') if key.modifiers.is_empty() => {
            let slot = ch as usize - '1' as usize;
            content(ContentMessage::CycleFacet(slot))
        }
        _ => AppMessage::Noop,
    }
}

/// Record actions that exist only on some pages
fn page_action(key: &KeyEvent, page: Page) -> Option<ContentMessage> {
    let msg = if DefaultKeymap::ACTION_COPY.matches(key) {
        ContentMessage::Copy
    } else if DefaultKeymap::ACTION_REGENERATE.matches(key) {
        ContentMessage::Regenerate
    } else if DefaultKeymap::ACTION_STATUS.matches(key) {
        ContentMessage::ToggleStatus
    } else if DefaultKeymap::ACTION_SEND_TEST.matches(key) {
        ContentMessage::SendTest
    } else if DefaultKeymap::ACTION_RESTORE.matches(key) {
        ContentMessage::Restore
    } else {
        return None;
    };

    let available = match msg {
        ContentMessage::Copy | ContentMessage::Regenerate => page == Page::ApiKeys,
        ContentMessage::ToggleStatus => matches!(
            page,
            Page::ApiKeys | Page::Webhooks | Page::Users | Page::Workflows
        ),
        ContentMessage::SendTest => page == Page::Webhooks,
        ContentMessage::Restore => page == Page::Backups,
        _ => false,
    };
    available.then_some(msg)
}

fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => content(ContentMessage::SelectNext),
        KeyCode::Home => content(ContentMessage::SelectFirst),
        KeyCode::End => content(ContentMessage::SelectLast),
        KeyCode::Left => content(ContentMessage::TogglePrev),
        KeyCode::Right => content(ContentMessage::ToggleNext),
        KeyCode::Enter | KeyCode::Char(' ') => content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return filter(FilterMessage::Cancel);
    }
    match key.code {
        KeyCode::Esc => filter(FilterMessage::Cancel),
        KeyCode::Enter => filter(FilterMessage::Commit),
        KeyCode::Backspace => filter(FilterMessage::Backspace),
        _ => typed_char(&key).map_or(AppMessage::Noop, |ch| filter(FilterMessage::Input(ch))),
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc and Ctrl+C always try to close
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref active) = app.modal.active else {
        return AppMessage::Noop;
    };

    match active {
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter => modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        Modal::Detail { .. } => handle_detail_keys(key),
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::CreateApiKey(_)
        | Modal::CreateWebhook(_)
        | Modal::CreateUser(_)
        | Modal::CreateRole(_)
        | Modal::CreateWorkflow(_)
        | Modal::CreateBackup(_)
        | Modal::Restore(_)
        | Modal::TestEmail(_) => handle_form_keys(key),
    }
}

fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Down => modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => modal(ModalMessage::PrevField),
        KeyCode::Left => modal(ModalMessage::Prev),
        KeyCode::Right => modal(ModalMessage::Next),
        KeyCode::Enter => modal(ModalMessage::Confirm),
        KeyCode::Backspace => modal(ModalMessage::Backspace),
        _ => typed_char(&key).map_or(AppMessage::Noop, |ch| modal(ModalMessage::Input(ch))),
    }
}

fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => modal(ModalMessage::PrevItem),
        KeyCode::Down | KeyCode::Char('j') => modal(ModalMessage::NextItem),
        KeyCode::Left => modal(ModalMessage::Prev),
        KeyCode::Right => modal(ModalMessage::Next),
        KeyCode::Char(' ') => modal(ModalMessage::Toggle),
        KeyCode::Enter => modal(ModalMessage::Close),
        KeyCode::Char('c') => modal(ModalMessage::Copy),
        KeyCode::Char('g') => modal(ModalMessage::Regenerate),
        KeyCode::Char('s') => modal(ModalMessage::ToggleStatus),
        KeyCode::Char('t') => modal(ModalMessage::SendTest),
        _ => AppMessage::Noop,
    }
}

fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => modal(ModalMessage::ToggleDeleteFocus),
        KeyCode::Enter => modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

fn content(msg: ContentMessage) -> AppMessage {
    AppMessage::Content(msg)
}

fn modal(msg: ModalMessage) -> AppMessage {
    AppMessage::Modal(msg)
}

fn filter(msg: FilterMessage) -> AppMessage {
    AppMessage::Filter(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::state::{FilterInput, FilterKind};
    use crate::model::FocusPanel;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn content_keys_depend_on_page() {
        let mut app = App::for_test();
        app.focus = FocusPanel::Content;

        app.current_page = Page::ApiKeys;
        assert!(matches!(
            handle_event(press(KeyCode::Char('c')), &app),
            AppMessage::Content(ContentMessage::Copy)
        ));

        app.current_page = Page::Roles;
        assert!(matches!(handle_event(press(KeyCode::Char('c')), &app), AppMessage::Noop));
        // roles have no timestamp to filter on
        assert!(matches!(handle_event(press(KeyCode::Char('d')), &app), AppMessage::Noop));

        app.current_page = Page::AuditLogs;
        assert!(matches!(
            handle_event(press(KeyCode::Char('2')), &app),
            AppMessage::Content(ContentMessage::CycleFacet(1))
        ));
    }

    #[test]
    fn input_line_takes_every_key() {
        let mut app = App::for_test();
        app.focus = FocusPanel::Content;
        app.current_page = Page::Webhooks;
        app.input = Some(FilterInput::new(FilterKind::Search, String::new()));

        assert!(matches!(
            handle_event(press(KeyCode::Char('t')), &app),
            AppMessage::Filter(FilterMessage::Input('t'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Filter(FilterMessage::Cancel)
        ));
    }

    #[test]
    fn modal_gets_keys_before_globals() {
        let mut app = App::for_test();
        app.modal.show_help();
        assert!(matches!(handle_event(press(KeyCode::Tab), &app), AppMessage::Noop));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::for_test();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
