//! API keys page

use intered_admin_core::utils::datetime::format_short;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::Cell,
    Frame,
};

use crate::model::{App, Page};
use crate::view::components::table::{self, status_cell, truncate, Column};
use crate::view::components::filterbar;

const COLUMNS: [Column; 5] = [
    Column::new("Name", Constraint::Percentage(24)),
    Column::new("Key", Constraint::Length(16)),
    Column::new("Scopes", Constraint::Percentage(30)),
    Column::new("Status", Constraint::Length(10)),
    Column::new("Last Used", Constraint::Length(17)),
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let list = &app.lists.api_keys;
    let (bar, body) = super::split_list(area);

    filterbar::render(frame, bar, list, app.input.as_ref(), Page::ApiKeys.has_date_filter());
    table::render(frame, body, list, &COLUMNS, |key| {
        vec![
            Cell::from(key.name.as_str()),
            Cell::from(key.masked_key()),
            Cell::from(truncate(&key.scope_list(), 32)),
            status_cell(key.status.label(), key.status.is_active()),
            Cell::from(key.last_used.as_ref().map_or_else(|| "Never".to_string(), format_short)),
        ]
    });
}
