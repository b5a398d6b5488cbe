//! Webhooks page

use intered_admin_core::utils::datetime::format_short;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::Cell,
    Frame,
};

use crate::model::{App, Page};
use crate::view::components::filterbar;
use crate::view::components::table::{self, status_cell, truncate, Column};
use crate::view::theme::Styles;

const COLUMNS: [Column; 5] = [
    Column::new("Name", Constraint::Percentage(24)),
    Column::new("URL", Constraint::Percentage(34)),
    Column::new("Events", Constraint::Length(7)),
    Column::new("Status", Constraint::Length(10)),
    Column::new("Last Response", Constraint::Percentage(20)),
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let list = &app.lists.webhooks;
    let (bar, body) = super::split_list(area);

    filterbar::render(frame, bar, list, app.input.as_ref(), Page::Webhooks.has_date_filter());
    table::render(frame, body, list, &COLUMNS, |hook| {
        let response = match (&hook.last_response, &hook.last_triggered) {
            (Some(response), Some(at)) => Cell::from(format!(
                "{} · {}",
                response.status_code,
                format_short(at)
            ))
            .style(Styles::badge(response.is_success())),
            (Some(response), None) => Cell::from(response.status_code.to_string())
                .style(Styles::badge(response.is_success())),
            (None, _) => Cell::from("-").style(Styles::muted()),
        };
        vec![
            Cell::from(hook.name.as_str()),
            Cell::from(truncate(&hook.url, 40)),
            Cell::from(hook.events.len().to_string()),
            status_cell(hook.status.label(), hook.status.is_active()),
            response,
        ]
    });
}
