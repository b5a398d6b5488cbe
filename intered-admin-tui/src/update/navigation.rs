//! Navigation message handling

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::Confirm => {
            if let Some(page) = app.navigation.current_page() {
                app.current_page = page;
                app.focus = FocusPanel::Content;
                app.input = None;
                app.clear_status();
            }
        }
    }
}
