//! Roles & permissions page

use intered_admin_core::types::Permission;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::Cell,
    Frame,
};

use crate::model::{App, Page};
use crate::view::components::filterbar;
use crate::view::components::table::{self, truncate, Column};
use crate::view::theme::Styles;

const COLUMNS: [Column; 5] = [
    Column::new("Role", Constraint::Percentage(22)),
    Column::new("Description", Constraint::Percentage(40)),
    Column::new("Users", Constraint::Length(6)),
    Column::new("Permissions", Constraint::Length(12)),
    Column::new("Type", Constraint::Length(8)),
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let list = &app.lists.roles;
    let total = Permission::all().count();
    let (bar, body) = super::split_list(area);

    filterbar::render(frame, bar, list, app.input.as_ref(), Page::Roles.has_date_filter());
    table::render(frame, body, list, &COLUMNS, |role| {
        let kind = if role.is_system {
            Cell::from("System").style(Styles::muted())
        } else {
            Cell::from("Custom")
        };
        vec![
            Cell::from(role.name.as_str()),
            Cell::from(truncate(&role.description, 48)),
            Cell::from(role.user_count.to_string()),
            Cell::from(format!("{} / {total}", role.permissions.len())),
            kind,
        ]
    });
}
