//! Status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::Modal;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// Renders the status bar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the current focus, page and overlay
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.input.is_some() {
        return vec![("Enter", "Apply"), ("Esc", "Cancel")];
    }

    if let Some(modal) = &app.modal.active {
        return match modal {
            Modal::Help | Modal::Error { .. } => vec![("Esc", "Close")],
            Modal::Detail { page, .. } => detail_hints(*page),
            Modal::ConfirmDelete { .. } => {
                vec![("←→", "Choose"), ("Enter", "Confirm"), ("Esc", "Cancel")]
            }
            _ => vec![
                ("Tab", "Next Field"),
                ("←→", "Change"),
                ("Space", "Toggle"),
                ("Enter", "Submit"),
                ("Esc", "Cancel"),
            ],
        };
    }

    let mut hints = vec![("Tab", "Switch Panels")];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Overview => {}
            Page::Settings => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Change"));
                hints.push(("Enter", "Apply"));
            }
            page => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Details"));
                hints.push(("/", "Search"));
                if page.has_date_filter() {
                    hints.push(("d", "Date"));
                }
                hints.push(("1-2", "Filters"));
                if page != Page::AuditLogs {
                    hints.push(("Alt+a", "Add"));
                    hints.push(("Alt+d", "Delete"));
                }
                match page {
                    Page::ApiKeys => hints.push(("c", "Copy")),
                    Page::Webhooks => hints.push(("t", "Test")),
                    Page::Backups => hints.push(("r", "Restore")),
                    _ => {}
                }
            }
        },
    }

    hints.push(("?", "Help"));
    hints.push(("Alt+q", "Quit"));
    hints
}

fn detail_hints(page: Page) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Esc", "Close")];
    match page {
        Page::ApiKeys => {
            hints.push(("c", "Copy"));
            hints.push(("g", "Regenerate"));
            hints.push(("s", "Status"));
        }
        Page::Webhooks => {
            hints.push(("↑↓", "Event"));
            hints.push(("t", "Send Test"));
            hints.push(("s", "Status"));
        }
        Page::Users => {
            hints.push(("←→", "Role"));
            hints.push(("s", "Status"));
        }
        Page::Roles => {
            hints.push(("↑↓", "Permission"));
            hints.push(("Space", "Grant / Revoke"));
        }
        Page::Workflows => hints.push(("s", "Status")),
        _ => {}
    }
    hints
}
