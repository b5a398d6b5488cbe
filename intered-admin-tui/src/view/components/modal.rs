//! Modal rendering

use std::time::Instant;

use intered_admin_core::dialog::ConfirmDelete;
use intered_admin_core::services::WebhookService;
use intered_admin_core::types::{AuditStatus, PERMISSION_CATALOG};
use intered_admin_core::utils::datetime::format_short;
use intered_admin_core::DialogController;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::model::state::{EditableForm, FieldValue, FormDialog, Modal};
use crate::model::{App, Page};
use crate::view::theme::{colors, Styles};

const LABEL_WIDTH: usize = 16;

/// Renders the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Detail { page, cursor } => render_detail(app, frame, *page, *cursor),
        Modal::ConfirmDelete {
            dialog,
            confirm_focused,
            ..
        } => render_confirm_delete(frame, dialog, *confirm_focused),
        Modal::CreateApiKey(form) => render_form(frame, form),
        Modal::CreateWebhook(form) => render_form(frame, form),
        Modal::CreateUser(form) => render_form(frame, form),
        Modal::CreateRole(form) => render_form(frame, form),
        Modal::CreateWorkflow(form) => render_form(frame, form),
        Modal::CreateBackup(form) => render_form(frame, form),
        Modal::Restore(form) => render_form(frame, form),
        Modal::TestEmail(form) => render_form(frame, form),
    }
}

/// Computes a centered modal area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Clears the area, draws the frame and returns the padded inner area.
fn modal_frame(frame: &mut Frame, area: Rect, title: &str, danger: bool) -> Rect {
    let c = colors();
    frame.render_widget(Clear, area);

    let border = if danger { c.error } else { c.border_focused };
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(c.bg));
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// Scroll offset that keeps `line` inside a view of `height` rows.
fn scroll_to(line: usize, height: u16) -> u16 {
    let height = usize::from(height);
    let offset = (line + 2).saturating_sub(height);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::muted()));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::styled(format!(" {desc}"), Styles::muted()));
    }
    Line::from(spans)
}

fn field_line(label: &str, value: impl Into<String>) -> Line<'static> {
    let c = colors();
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), Styles::muted()),
        Span::styled(value.into(), Style::default().fg(c.fg)),
    ])
}

fn field_span_line(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), Styles::muted()),
        value,
    ])
}

fn section_line(title: &str) -> Line<'static> {
    let c = colors();
    Line::styled(
        title.to_string(),
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
    )
}

fn badge(label: &'static str, ok: bool) -> Span<'static> {
    Span::styled(label, Styles::badge(ok))
}

fn or_never(value: Option<&chrono::DateTime<chrono::Utc>>) -> String {
    value.map_or_else(|| "Never".to_string(), format_short)
}

// ===== Help / error =====

fn render_help(frame: &mut Frame) {
    let area = centered_rect(58, 26, frame.area());
    let inner = modal_frame(frame, area, "Help", false);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<9}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(colors().fg)),
        ])
    };

    let lines = vec![
        section_line("Global shortcuts"),
        entry("Tab", "Switch panel"),
        entry("↑↓", "Move up/down"),
        entry("Enter", "Open / confirm"),
        entry("Esc", "Back / cancel"),
        entry("Alt+r", "Reload all data"),
        entry("Alt+q", "Quit"),
        Line::from(""),
        section_line("Lists"),
        entry("/", "Search"),
        entry("d", "Filter by date (YYYY-MM-DD)"),
        entry("1-9", "Cycle a filter"),
        entry("x", "Clear filters"),
        entry("Alt+a", "Add"),
        entry("Alt+d", "Delete"),
        entry("s", "Activate / deactivate"),
        Line::from(""),
        section_line("Page actions"),
        entry("c  g", "Copy / regenerate an API key"),
        entry("t", "Send a webhook test"),
        entry("r", "Restore from a backup"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    let inner = modal_frame(frame, area, title, true);
    let inner = Rect::new(inner.x, inner.y + 1, inner.width, inner.height.saturating_sub(1));

    let lines = vec![
        Line::styled(message.to_string(), Style::default().fg(colors().fg)),
        Line::from(""),
        Line::styled("Press Esc or Enter to close", Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

// ===== Confirm delete =====

fn render_confirm_delete(
    frame: &mut Frame,
    dialog: &DialogController<ConfirmDelete>,
    confirm_focused: bool,
) {
    let Some(target) = dialog.form() else {
        return;
    };
    let c = colors();

    let area = centered_rect(48, 10, frame.area());
    let inner = modal_frame(frame, area, "Confirm Deletion", true);

    let cancel_style = if confirm_focused {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(c.bg).bg(c.fg)
    };
    let confirm_style = if confirm_focused {
        Style::default().fg(c.bg).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            format!("  Delete this {}?", target.kind.to_lowercase()),
            Style::default().fg(c.fg),
        ),
        Line::styled(
            format!("  \"{}\"", target.label),
            Style::default().fg(c.warning),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Delete ", confirm_style),
        ]),
    ];

    if dialog.is_submitting() {
        lines.push(Line::styled("  Deleting…", Styles::muted()));
    } else if let Some(error) = dialog.failure() {
        lines.push(Line::styled(
            format!("  ⚠ {error}"),
            Style::default().fg(c.error),
        ));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ===== Forms =====

fn render_form<F: EditableForm>(frame: &mut Frame, form: &FormDialog<F>) {
    let c = colors();
    let dialog = &form.dialog;
    let fields = form.fields();

    let mut lines: Vec<Line> = Vec::new();
    let mut focus_line = 0;

    for (i, field) in fields.iter().enumerate() {
        let focused = i == form.focus;
        if focused {
            focus_line = lines.len();
        }
        let label_style = if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Styles::muted()
        };
        let value_style = if focused {
            Style::default().fg(c.highlight)
        } else {
            Style::default().fg(c.fg)
        };

        lines.push(Line::styled(field.label, label_style));

        match &field.value {
            FieldValue::Text(text) => lines.push(text_line(text, focused, value_style)),
            FieldValue::Secret(text) => {
                let masked = "•".repeat(text.chars().count().min(20));
                lines.push(text_line(&masked, focused, value_style));
            }
            FieldValue::Choice(value) => {
                let shown = if focused {
                    format!("  ◀ {value} ▶")
                } else {
                    format!("    {value}")
                };
                lines.push(Line::styled(shown, value_style));
            }
            FieldValue::Flag(on) => {
                let mark = if *on { "[x]" } else { "[ ]" };
                lines.push(Line::styled(format!("  {mark}"), value_style));
            }
            FieldValue::Options(options) => {
                if focused {
                    for (j, (label, checked)) in options.iter().enumerate() {
                        let mark = if *checked { "[x]" } else { "[ ]" };
                        let style = if j == form.option_cursor {
                            Styles::selected()
                        } else {
                            Style::default().fg(c.fg)
                        };
                        if j == form.option_cursor {
                            focus_line = lines.len();
                        }
                        lines.push(Line::styled(format!("  {mark} {label}"), style));
                    }
                } else {
                    let chosen: Vec<&str> = options
                        .iter()
                        .filter(|(_, checked)| *checked)
                        .map(|(label, _)| *label)
                        .collect();
                    let summary = if chosen.is_empty() {
                        "  (none selected)".to_string()
                    } else {
                        format!("  {}", chosen.join(", "))
                    };
                    lines.push(Line::styled(summary, value_style));
                }
            }
        }

        if let Some(error) = dialog.error_for(field.key) {
            lines.push(Line::styled(
                format!("  ⚠ {error}"),
                Style::default().fg(c.error),
            ));
        }
        lines.push(Line::from(""));
    }

    let body_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let area = centered_rect(64, body_height.saturating_add(6), frame.area());
    let inner = modal_frame(frame, area, F::TITLE, false);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let paragraph = Paragraph::new(lines).scroll((scroll_to(focus_line, chunks[0].height), 0));
    frame.render_widget(paragraph, chunks[0]);

    let hints: &[(&'static str, &'static str)] = if dialog.is_submitting() {
        match dialog.progress() {
            Some(value) => {
                let gauge = Gauge::default()
                    .gauge_style(Style::default().fg(c.highlight))
                    .percent(u16::from(value.min(100)))
                    .label(format!("{value}%"));
                frame.render_widget(gauge, chunks[1]);
                &[("", "Please wait, this cannot be cancelled")]
            }
            None => {
                frame.render_widget(
                    Paragraph::new(Line::styled("  Submitting…", Styles::muted())),
                    chunks[1],
                );
                &[]
            }
        }
    } else if let Some(error) = dialog.failure() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("  ⚠ {error}"),
                Style::default().fg(c.error),
            )),
            chunks[1],
        );
        &[("Enter", "Retry"), ("Esc", "Cancel")]
    } else {
        &[("Tab", "Next"), ("Enter", "Confirm"), ("Esc", "Cancel")]
    };

    frame.render_widget(Paragraph::new(hint_line(hints)), chunks[2]);
}

fn text_line(text: &str, focused: bool, style: Style) -> Line<'static> {
    if focused {
        Line::styled(format!("  {text}▎"), style)
    } else if text.is_empty() {
        Line::styled("  -", Styles::muted())
    } else {
        Line::styled(format!("  {text}"), style)
    }
}

// ===== Detail =====

fn render_detail(app: &App, frame: &mut Frame, page: Page, cursor: usize) {
    let (title, lines, focus_line) = match page {
        Page::ApiKeys => api_key_detail(app),
        Page::Webhooks => webhook_detail(app, cursor),
        Page::Users => user_detail(app),
        Page::Roles => role_detail(app, cursor),
        Page::Workflows => workflow_detail(app),
        Page::AuditLogs => audit_detail(app),
        Page::Backups => backup_detail(app),
        Page::Overview | Page::Settings => return,
    };

    let area = centered_rect(72, 28, frame.area());
    let inner = modal_frame(frame, area, &title, false);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let paragraph = Paragraph::new(lines).scroll((scroll_to(focus_line, chunks[0].height), 0));
    frame.render_widget(paragraph, chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::styled("Esc Close", Styles::muted())),
        chunks[1],
    );
}

type Detail = (String, Vec<Line<'static>>, usize);

fn missing() -> Detail {
    (
        "Details".to_string(),
        vec![Line::styled("Record no longer exists", Styles::muted())],
        0,
    )
}

fn api_key_detail(app: &App) -> Detail {
    let Some(key) = app.lists.api_keys.detail() else {
        return missing();
    };
    let copied = app.copy_feedback.active(Instant::now()) == Some(key.id.to_string().as_str());

    let mut key_spans = vec![Span::styled(key.key.clone(), Style::default().fg(colors().warning))];
    if copied {
        key_spans.push(Span::styled("  Copied!", Styles::badge(true)));
    }
    let mut key_line = vec![Span::styled(format!("{:<LABEL_WIDTH$}", "Key"), Styles::muted())];
    key_line.extend(key_spans);

    let lines = vec![
        field_line("Name", key.name.clone()),
        Line::from(key_line),
        field_line("Description", key.description.clone()),
        field_span_line("Status", badge(key.status.label(), key.status.is_active())),
        field_line("Scopes", key.scope_list()),
        field_line("Created", format_short(&key.created_at)),
        field_line("Last Used", or_never(key.last_used.as_ref())),
        field_line(
            "Expires",
            key.expires_at
                .as_ref()
                .map_or_else(|| "Never".to_string(), format_short),
        ),
    ];
    (key.name.clone(), lines, 0)
}

fn webhook_detail(app: &App, cursor: usize) -> Detail {
    let Some(hook) = app.lists.webhooks.detail() else {
        return missing();
    };
    let c = colors();

    let mut lines = vec![
        field_line("Name", hook.name.clone()),
        field_line("URL", hook.url.clone()),
        field_line(
            "Secret",
            hook.secret
                .as_ref()
                .map_or_else(|| "Not set".to_string(), |s| "•".repeat(s.chars().count().min(20))),
        ),
        field_span_line("Status", badge(hook.status.label(), hook.status.is_active())),
        field_line("Created", format_short(&hook.created_at)),
        field_line("Last Triggered", or_never(hook.last_triggered.as_ref())),
    ];
    if let Some(response) = &hook.last_response {
        lines.push(field_span_line(
            "Last Response",
            Span::styled(
                format!("{} {}", response.status_code, response.message),
                Styles::badge(response.is_success()),
            ),
        ));
    }

    lines.push(Line::from(""));
    lines.push(section_line("Events"));
    let mut focus_line = 0;
    for (i, event) in hook.events.iter().enumerate() {
        let selected = i == cursor;
        if selected {
            focus_line = lines.len();
        }
        let style = if selected {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        };
        lines.push(Line::styled(
            format!("  {} ({})", event.label(), event.as_str()),
            style,
        ));
    }

    if let Some(event) = hook.events.get(cursor) {
        lines.push(Line::from(""));
        lines.push(section_line("Example Payload"));
        match WebhookService::example_payload(*event) {
            Ok(payload) => {
                for row in payload.lines() {
                    lines.push(Line::styled(format!("  {row}"), Styles::muted()));
                }
            }
            Err(e) => lines.push(Line::styled(format!("  {e}"), Style::default().fg(c.error))),
        }
    }

    (hook.name.clone(), lines, focus_line)
}

fn user_detail(app: &App) -> Detail {
    let Some(user) = app.lists.users.detail() else {
        return missing();
    };
    let lines = vec![
        field_line("Name", user.name.clone()),
        field_line("Email", user.email.clone()),
        field_span_line(
            "Role",
            Span::styled(
                format!("◀ {} ▶", user.role.label()),
                Style::default().fg(colors().highlight),
            ),
        ),
        field_span_line("Status", badge(user.status.label(), user.status.is_active())),
        field_line("Last Login", or_never(user.last_login.as_ref())),
    ];
    (user.name.clone(), lines, 0)
}

fn role_detail(app: &App, cursor: usize) -> Detail {
    let Some(role) = app.lists.roles.detail() else {
        return missing();
    };
    let c = colors();

    let mut lines = vec![
        field_line("Name", role.name.clone()),
        field_line("Description", role.description.clone()),
        field_line("Users", role.user_count.to_string()),
        field_line("Type", if role.is_system { "System" } else { "Custom" }),
        Line::from(""),
    ];

    let mut index = 0;
    let mut focus_line = 0;
    for module in PERMISSION_CATALOG {
        lines.push(section_line(module.name));
        for permission in module.permissions {
            let selected = index == cursor;
            if selected {
                focus_line = lines.len();
            }
            let mark = if role.has_permission(permission.id) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {mark} {:<28}", permission.name), style),
                Span::styled(permission.description, Styles::muted()),
            ]));
            index += 1;
        }
    }

    (role.name.clone(), lines, focus_line)
}

fn workflow_detail(app: &App) -> Detail {
    let Some(workflow) = app.lists.workflows.detail() else {
        return missing();
    };
    let lines = vec![
        field_line("Name", workflow.name.clone()),
        field_line("Description", workflow.description.clone()),
        field_line("Trigger", workflow.trigger.label()),
        field_span_line(
            "Status",
            badge(workflow.status.label(), workflow.status.is_active()),
        ),
        field_line("Last Modified", format_short(&workflow.last_modified)),
    ];
    (workflow.name.clone(), lines, 0)
}

fn audit_detail(app: &App) -> Detail {
    let Some(entry) = app.lists.audit_logs.detail() else {
        return missing();
    };
    let ok = entry.status != AuditStatus::Failed;
    let lines = vec![
        field_line("Action", entry.action.clone()),
        field_line("User", entry.user.clone()),
        field_line("Module", entry.module.label()),
        field_span_line("Status", badge(entry.status.label(), ok)),
        field_line("IP Address", entry.ip_address.clone()),
        field_line("Time", format_short(&entry.timestamp)),
        Line::from(""),
        section_line("Details"),
        Line::styled(format!("  {}", entry.details), Style::default().fg(colors().fg)),
    ];
    ("Audit Entry".to_string(), lines, 0)
}

fn backup_detail(app: &App) -> Detail {
    let Some(backup) = app.lists.backups.detail() else {
        return missing();
    };
    let lines = vec![
        field_line("Name", backup.name.clone()),
        field_line("Created", format_short(&backup.created_at)),
        field_line("Size", backup.size_label()),
        field_line("Type", backup.kind.label()),
        field_line("Status", backup.status.label()),
    ];
    (backup.name.clone(), lines, 0)
}
