//! Users page

use intered_admin_core::utils::datetime::format_short;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::Cell,
    Frame,
};

use crate::model::{App, Page};
use crate::view::components::filterbar;
use crate::view::components::table::{self, status_cell, Column};

const COLUMNS: [Column; 5] = [
    Column::new("Name", Constraint::Percentage(22)),
    Column::new("Email", Constraint::Percentage(30)),
    Column::new("Role", Constraint::Length(14)),
    Column::new("Status", Constraint::Length(10)),
    Column::new("Last Login", Constraint::Length(17)),
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let list = &app.lists.users;
    let (bar, body) = super::split_list(area);

    filterbar::render(frame, bar, list, app.input.as_ref(), Page::Users.has_date_filter());
    table::render(frame, body, list, &COLUMNS, |user| {
        vec![
            Cell::from(user.name.as_str()),
            Cell::from(user.email.as_str()),
            Cell::from(user.role.label()),
            status_cell(user.status.label(), user.status.is_active()),
            Cell::from(
                user.last_login
                    .as_ref()
                    .map_or_else(|| "Never".to_string(), format_short),
            ),
        ]
    });
}
