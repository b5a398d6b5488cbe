//! Page renderers

pub mod api_keys;
pub mod audit_logs;
pub mod backups;
pub mod overview;
pub mod roles;
pub mod settings;
pub mod users;
pub mod webhooks;
pub mod workflows;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::view::components::filterbar;

/// Splits a list page into the filter bar and the table.
fn split_list(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(filterbar::HEIGHT), Constraint::Min(1)])
        .split(area);
    (chunks[0], chunks[1])
}
