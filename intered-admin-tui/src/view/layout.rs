//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components;
use super::pages;
use super::theme::{colors, Styles};
use crate::model::{App, Page};

/// Renders the main layout
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // title bar + main area + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // modal on top
    components::modal::render(app, frame);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut title = format!(" InterEd Admin v{}", env!("CARGO_PKG_VERSION"));
    if let Some(task) = &app.task {
        title.push_str(&format!("  ·  {} running", task.handle.kind().label()));
    }
    let bar = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Overview => pages::overview::render(app, frame, inner),
        Page::ApiKeys => pages::api_keys::render(app, frame, inner),
        Page::Webhooks => pages::webhooks::render(app, frame, inner),
        Page::Users => pages::users::render(app, frame, inner),
        Page::Roles => pages::roles::render(app, frame, inner),
        Page::Workflows => pages::workflows::render(app, frame, inner),
        Page::AuditLogs => pages::audit_logs::render(app, frame, inner),
        Page::Backups => pages::backups::render(app, frame, inner),
        Page::Settings => pages::settings::render(app, frame, inner),
    }
}
