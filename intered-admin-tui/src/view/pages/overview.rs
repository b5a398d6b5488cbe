//! Overview page

use intered_admin_core::types::ActiveStatus;
use intered_admin_core::utils::datetime::format_short;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::components::table::truncate;
use crate::view::theme::{colors, Styles};

const RECENT_ACTIVITY: usize = 8;

fn active_count<'a>(statuses: impl Iterator<Item = &'a ActiveStatus>) -> usize {
    statuses.filter(|s| s.is_active()).count()
}

fn stat_line(label: &str, total: usize, detail: String) -> Line<'static> {
    let c = colors();
    Line::from(vec![
        Span::styled(format!("  {label:<14}"), Styles::muted()),
        Span::styled(
            format!("{total:>4}"),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("   {detail}"), Styles::muted()),
    ])
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let lists = &app.lists;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let api_keys = lists.api_keys.records();
    let webhooks = lists.webhooks.records();
    let users = lists.users.records();
    let roles = lists.roles.records();
    let workflows = lists.workflows.records();
    let backups = lists.backups.records();

    let mut left = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", app.settings.platform.general.company_name),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        stat_line(
            "API Keys",
            api_keys.len(),
            format!("{} active", active_count(api_keys.iter().map(|k| &k.status))),
        ),
        stat_line(
            "Webhooks",
            webhooks.len(),
            format!("{} active", active_count(webhooks.iter().map(|w| &w.status))),
        ),
        stat_line(
            "Users",
            users.len(),
            format!("{} active", active_count(users.iter().map(|u| &u.status))),
        ),
        stat_line(
            "Roles",
            roles.len(),
            format!("{} custom", roles.iter().filter(|r| !r.is_system).count()),
        ),
        stat_line(
            "Workflows",
            workflows.len(),
            format!("{} active", active_count(workflows.iter().map(|w| &w.status))),
        ),
        stat_line(
            "Backups",
            backups.len(),
            backups
                .iter()
                .map(|b| b.created_at)
                .max()
                .map_or_else(|| "none yet".to_string(), |at| format!("latest {}", format_short(&at))),
        ),
    ];

    if app.settings.platform.general.maintenance_mode {
        left.push(Line::from(""));
        left.push(Line::styled(
            "  Maintenance mode is on",
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(task) = &app.task {
        left.push(Line::from(""));
        left.push(Line::styled(
            format!("  {} in progress", task.handle.kind().label()),
            Style::default().fg(c.warning),
        ));
    }

    frame.render_widget(Paragraph::new(left), chunks[0]);

    let mut entries: Vec<_> = lists.audit_logs.records().iter().collect();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let width = usize::from(chunks[1].width.saturating_sub(22));
    let mut right = vec![
        Line::from(""),
        Line::styled(
            "Recent Activity",
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    if entries.is_empty() {
        right.push(Line::styled("No activity yet", Styles::muted()));
    }
    for entry in entries.into_iter().take(RECENT_ACTIVITY) {
        right.push(Line::from(vec![
            Span::styled(format!("{}  ", format_short(&entry.timestamp)), Styles::muted()),
            Span::styled(truncate(&entry.action, width), Style::default().fg(c.fg)),
        ]));
        right.push(Line::styled(
            format!("                  {} · {}", entry.user, entry.module.label()),
            Styles::muted(),
        ));
    }

    frame.render_widget(Paragraph::new(right), chunks[1]);
}
