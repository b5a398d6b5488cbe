//! Record table shared by the list pages

use intered_admin_core::{Entity, ListManager, ViewStatus};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::view::theme::{colors, Styles};

/// Column header and width
pub struct Column {
    pub title: &'static str,
    pub width: Constraint,
}

impl Column {
    pub const fn new(title: &'static str, width: Constraint) -> Self {
        Self { title, width }
    }
}

/// Renders the visible rows of `list`, or a placeholder when there are none.
pub fn render<'a, E, F>(frame: &mut Frame, area: Rect, list: &'a ListManager<E>, columns: &[Column], to_row: F)
where
    E: Entity,
    F: Fn(&'a E) -> Vec<Cell<'a>>,
{
    let placeholder = match list.view_status() {
        ViewStatus::Empty => Some("No records yet"),
        ViewStatus::NoMatches => Some("No records match the current filters"),
        ViewStatus::Rows(_) => None,
    };
    if let Some(text) = placeholder {
        render_placeholder(frame, area, text);
        return;
    }

    let c = colors();
    let header = Row::new(columns.iter().map(|col| Cell::from(col.title)))
        .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = list.visible().map(|record| Row::new(to_row(record))).collect();
    let widths: Vec<Constraint> = columns.iter().map(|col| col.width).collect();

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(list.cursor()));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
    let paragraph = Paragraph::new(Line::from(text))
        .style(Styles::muted())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, line_area);
}

/// Active / inactive badge cell
pub fn status_cell(label: &'static str, ok: bool) -> Cell<'static> {
    Cell::from(label).style(Styles::badge(ok))
}

/// Cuts `text` to at most `max` display columns, ending with `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    let mut width = 0;
    let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if total <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max - 1 {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("Admin", 10), "Admin");
        assert_eq!(truncate("Admin", 5), "Admin");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        assert_eq!(truncate("Payment Status Updates", 8), "Payment…");
    }

    #[test]
    fn wide_characters_count_double() {
        // each CJK character is two columns wide
        assert_eq!(truncate("管理员设置", 5), "管理…");
        assert_eq!(truncate("abc", 0), "");
    }
}
