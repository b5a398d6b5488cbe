//! Audit logs page

use intered_admin_core::types::AuditStatus;
use intered_admin_core::utils::datetime::format_short;
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::Cell,
    Frame,
};

use crate::model::{App, Page};
use crate::view::components::filterbar;
use crate::view::components::table::{self, truncate, Column};
use crate::view::theme::colors;

const COLUMNS: [Column; 6] = [
    Column::new("Time", Constraint::Length(17)),
    Column::new("User", Constraint::Length(14)),
    Column::new("Action", Constraint::Percentage(34)),
    Column::new("Module", Constraint::Length(14)),
    Column::new("Status", Constraint::Length(8)),
    Column::new("IP", Constraint::Length(15)),
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let list = &app.lists.audit_logs;
    let (bar, body) = super::split_list(area);

    filterbar::render(frame, bar, list, app.input.as_ref(), Page::AuditLogs.has_date_filter());
    table::render(frame, body, list, &COLUMNS, |entry| {
        let status_color = match entry.status {
            AuditStatus::Success => c.success,
            AuditStatus::Warning => c.warning,
            AuditStatus::Failed => c.error,
        };
        vec![
            Cell::from(format_short(&entry.timestamp)),
            Cell::from(entry.user.as_str()),
            Cell::from(truncate(&entry.action, 40)),
            Cell::from(entry.module.label()),
            Cell::from(entry.status.label()).style(Style::default().fg(status_color)),
            Cell::from(entry.ip_address.as_str()),
        ]
    });
}
