//! Filter summary and input line above a list

use intered_admin_core::ViewStatus;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::{FilterInput, PageList};
use crate::view::theme::{colors, Styles};

/// Height the filter bar needs
pub const HEIGHT: u16 = 2;

/// Renders the active filters and, while editing, the input line.
pub fn render(frame: &mut Frame, area: Rect, list: &dyn PageList, input: Option<&FilterInput>, has_date: bool) {
    let c = colors();
    let mut spans = Vec::new();

    let search = list.search();
    spans.push(Span::styled("Search: ", Styles::muted()));
    if search.is_empty() {
        spans.push(Span::styled("-", Styles::muted()));
    } else {
        spans.push(Span::styled(format!("\"{search}\""), Style::default().fg(c.fg)));
    }

    for (i, (name, value)) in list.facets().into_iter().enumerate() {
        spans.push(Span::styled(" │ ", Styles::muted()));
        spans.push(Span::styled(format!("{} ", i + 1), Styles::hint_key()));
        spans.push(Span::styled(format!("{name}: "), Styles::muted()));
        let style = if value == "All" {
            Style::default().fg(c.fg)
        } else {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(value, style));
    }

    if has_date {
        spans.push(Span::styled(" │ ", Styles::muted()));
        spans.push(Span::styled("Date: ", Styles::muted()));
        match list.date() {
            Some(date) => spans.push(Span::styled(
                date.format("%Y-%m-%d").to_string(),
                Style::default().fg(c.highlight),
            )),
            None => spans.push(Span::styled("Any", Style::default().fg(c.fg))),
        }
    }

    let shown = match list.view_status() {
        ViewStatus::Rows(n) => n,
        _ => 0,
    };
    spans.push(Span::styled(
        format!("   {shown} of {}", list.total()),
        Styles::muted(),
    ));

    let mut lines = vec![Line::from(spans)];
    lines.push(match input {
        Some(input) => input_line(input),
        None => Line::default(),
    });

    frame.render_widget(Paragraph::new(lines), area);
}

fn input_line(input: &FilterInput) -> Line<'static> {
    let c = colors();
    let mut spans = vec![
        Span::styled(format!("{}: ", input.prompt()), Styles::hint_key()),
        Span::styled(input.buffer.clone(), Style::default().fg(c.fg)),
        Span::styled("▎", Style::default().fg(c.highlight)),
    ];
    if let Some(error) = &input.error {
        spans.push(Span::styled(format!("  {error}"), Style::default().fg(c.error)));
    }
    Line::from(spans)
}
