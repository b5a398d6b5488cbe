//! View layer: UI rendering
//!
//! Reads the model and draws it; never changes state.
//!
//! - `layout`: title bar, navigation / content split, status bar, modal on top
//! - `components`: widgets shared by several pages
//! - `pages`: one renderer per page
//! - `theme`: colors and styles

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// Renders the whole UI
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::message::{AppMessage, ContentMessage};
    use crate::model::Page;
    use crate::update::update;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn loaded_app() -> App {
        let mut app = App::for_test();
        update(&mut app, AppMessage::Refresh);
        app
    }

    #[test]
    fn every_page_renders() {
        let mut app = loaded_app();
        for page in Page::ALL {
            app.current_page = page;
            let text = screen(&app);
            assert!(text.contains(page.title()), "{page:?} title missing");
        }
    }

    #[test]
    fn users_page_lists_seeded_users() {
        let mut app = loaded_app();
        app.current_page = Page::Users;
        assert!(screen(&app).contains("Admin User"));
    }

    #[test]
    fn filtered_out_list_shows_placeholder() {
        let mut app = loaded_app();
        app.current_page = Page::Users;
        if let Some(list) = app.lists.get_mut(Page::Users) {
            list.set_search("no such person".to_string());
        }
        assert!(screen(&app).contains("No records match the current filters"));
    }

    #[test]
    fn copied_marker_follows_key_id_not_name() {
        let mut app = loaded_app();
        app.current_page = Page::ApiKeys;
        let mut keys = app.lists.api_keys.records().to_vec();
        let first = keys[0].clone();
        keys[1].name = first.name.clone();
        let twin = keys[1].id;
        app.lists.api_keys.replace_records(keys);
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));

        app.copy_feedback.mark(twin.to_string(), Instant::now());
        assert!(!screen(&app).contains("Copied!"));

        app.copy_feedback.mark(first.id.to_string(), Instant::now());
        assert!(screen(&app).contains("Copied!"));
    }

    #[test]
    fn detail_and_help_modals_render() {
        let mut app = loaded_app();
        app.current_page = Page::Roles;
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert!(screen(&app).contains("View Dashboard"));

        app.modal.close();
        update(&mut app, AppMessage::ShowHelp);
        assert!(screen(&app).contains("Press Esc to close the help"));
    }
}
