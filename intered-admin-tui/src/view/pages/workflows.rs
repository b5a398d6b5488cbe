//! Workflows page

use intered_admin_core::utils::datetime::format_short;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::Cell,
    Frame,
};

use crate::model::{App, Page};
use crate::view::components::filterbar;
use crate::view::components::table::{self, status_cell, truncate, Column};

const COLUMNS: [Column; 5] = [
    Column::new("Name", Constraint::Percentage(24)),
    Column::new("Description", Constraint::Percentage(36)),
    Column::new("Trigger", Constraint::Length(12)),
    Column::new("Status", Constraint::Length(10)),
    Column::new("Modified", Constraint::Length(17)),
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let list = &app.lists.workflows;
    let (bar, body) = super::split_list(area);

    filterbar::render(frame, bar, list, app.input.as_ref(), Page::Workflows.has_date_filter());
    table::render(frame, body, list, &COLUMNS, |workflow| {
        vec![
            Cell::from(workflow.name.as_str()),
            Cell::from(truncate(&workflow.description, 44)),
            Cell::from(workflow.trigger.label()),
            status_cell(workflow.status.label(), workflow.status.is_active()),
            Cell::from(format_short(&workflow.last_modified)),
        ]
    });
}
