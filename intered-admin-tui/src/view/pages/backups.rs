//! Backup & restore page

use intered_admin_core::utils::datetime::format_short;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph},
    Frame,
};

use crate::model::{App, Page};
use crate::view::components::filterbar;
use crate::view::components::table::{self, Column};
use crate::view::theme::{colors, Styles};

const COLUMNS: [Column; 5] = [
    Column::new("Name", Constraint::Percentage(36)),
    Column::new("Created", Constraint::Length(17)),
    Column::new("Size", Constraint::Length(10)),
    Column::new("Type", Constraint::Length(14)),
    Column::new("Status", Constraint::Length(12)),
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    render_summary(app, frame, chunks[0]);

    let list = &app.lists.backups;
    let (bar, body) = super::split_list(chunks[1]);
    filterbar::render(frame, bar, list, app.input.as_ref(), Page::Backups.has_date_filter());
    table::render(frame, body, list, &COLUMNS, |backup| {
        vec![
            Cell::from(backup.name.as_str()),
            Cell::from(format_short(&backup.created_at)),
            Cell::from(backup.size_label()),
            Cell::from(backup.kind.label()),
            Cell::from(backup.status.label()),
        ]
    });
}

/// Schedule summary and the running task, if any
fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let schedule = &app.settings.platform.backup_schedule;

    let schedule_line = if schedule.enabled {
        Line::from(vec![
            Span::styled("Automatic: ", Styles::muted()),
            Span::styled(
                format!(
                    "{} at {} · {} · keep {} days",
                    schedule.frequency.label(),
                    schedule.time.label(),
                    schedule.backup_type.label(),
                    schedule.retention_days
                ),
                Style::default().fg(c.fg),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("Automatic: ", Styles::muted()),
            Span::styled("Off", Style::default().fg(c.warning)),
        ])
    };

    let task_line = match &app.task {
        Some(task) => Line::styled(
            format!("{} in progress", task.handle.kind().label()),
            Style::default().fg(c.warning),
        ),
        None => Line::from(vec![
            Span::styled("Alt+a", Styles::hint_key()),
            Span::styled(" new backup  ", Styles::muted()),
            Span::styled("r", Styles::hint_key()),
            Span::styled(" restore", Styles::muted()),
        ]),
    };

    frame.render_widget(Paragraph::new(vec![schedule_line, task_line]), area);
}
