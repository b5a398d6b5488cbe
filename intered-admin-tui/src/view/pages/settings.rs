//! Settings page view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::state::{close_behavior_label, day_boundary_label, SettingItem};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// Label column width (display width, for alignment)
const LABEL_WIDTH: usize = 24;
/// Value column width, including the `◀ ▶` markers
const VALUE_WIDTH: usize = 30;

fn on_off(value: bool) -> &'static str {
    if value {
        "On"
    } else {
        "Off"
    }
}

/// Current value of a setting as shown on the page
fn value_of(app: &App, item: SettingItem) -> String {
    let platform = &app.settings.platform;
    let general = &platform.general;
    let schedule = &platform.backup_schedule;

    match item {
        SettingItem::Theme => app.config.theme.label().to_string(),
        SettingItem::DayBoundary => day_boundary_label(app.config.day_boundary),
        SettingItem::DetailClose => close_behavior_label(app.config.detail_close).to_string(),
        SettingItem::Timezone => general.timezone.label().to_string(),
        SettingItem::DateFormat => general.date_format.label().to_string(),
        SettingItem::MaintenanceMode => on_off(general.maintenance_mode).to_string(),
        SettingItem::DebugMode => on_off(general.debug_mode).to_string(),
        SettingItem::UsageAnalytics => on_off(general.usage_analytics).to_string(),
        SettingItem::EmailProvider => platform.email.provider.label().to_string(),
        SettingItem::UseSsl => on_off(platform.email.use_ssl).to_string(),
        SettingItem::SendTestEmail => "Press Enter".to_string(),
        SettingItem::Channel(channel) => {
            let enabled = platform
                .notifications
                .channel(channel)
                .is_some_and(|prefs| prefs.enabled);
            on_off(enabled).to_string()
        }
        SettingItem::Digest => platform.notifications.digest.label().to_string(),
        SettingItem::BackupEnabled => on_off(schedule.enabled).to_string(),
        SettingItem::BackupFrequency => schedule.frequency.label().to_string(),
        SettingItem::BackupTime => schedule.time.label().to_string(),
        SettingItem::RetentionDays => format!("{} days", schedule.retention_days),
        SettingItem::BackupType => schedule.backup_type.label().to_string(),
    }
}

/// Renders the settings page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let selected = app.settings.current_item();

    let mut lines = Vec::new();
    let mut section = None;
    let mut selected_line = 0;

    for item in SettingItem::ALL {
        if section != Some(item.section()) {
            section = Some(item.section());
            lines.push(Line::from(""));
            lines.push(Line::styled(
                format!("  {}", item.section().title()),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ));
        }
        if item == selected {
            selected_line = lines.len();
        }
        let value = value_of(app, item);
        lines.push(render_setting_row(
            item.label(),
            &value,
            item == selected,
            item.is_action(),
        ));
    }

    let company = &app.settings.platform.general.company_name;
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("  {company} · {}", app.settings.platform.email.from_email),
        Styles::muted(),
    ));

    let offset = (selected_line + 3).saturating_sub(usize::from(area.height));
    let paragraph = Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(0), 0));
    frame.render_widget(paragraph, area);
}

/// Renders one setting row
fn render_setting_row(label: &str, value: &str, is_selected: bool, is_action: bool) -> Line<'static> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // pad by display width
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());
    let available_space = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available_space.saturating_sub(value.width()) / 2;
    let right_padding = available_space
        .saturating_sub(value.width())
        .saturating_sub(left_padding);

    let (open, close) = match (is_selected, is_action) {
        (true, false) => ("◀ ", " ▶"),
        _ => ("  ", "  "),
    };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}"), label_style),
        Span::raw(" ".repeat(label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(open, Style::default().fg(Color::Yellow)),
        Span::raw(" ".repeat(left_padding)),
        Span::styled(value.to_string(), value_style),
        Span::raw(" ".repeat(right_padding)),
        Span::styled(close, Style::default().fg(Color::Yellow)),
    ])
}
