//! Settings page state

use intered_admin_core::list::{CloseBehavior, DayBoundary};
use intered_admin_core::types::{NotificationChannel, PlatformSettings};

/// Settings section header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSection {
    Interface,
    General,
    Email,
    Notifications,
    BackupSchedule,
}

impl SettingSection {
    pub fn title(self) -> &'static str {
        match self {
            Self::Interface => "Interface",
            Self::General => "General",
            Self::Email => "Email",
            Self::Notifications => "Notifications",
            Self::BackupSchedule => "Backup Schedule",
        }
    }
}

/// Setting item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    // TUI preferences, saved through the config service
    Theme,
    DayBoundary,
    DetailClose,
    // platform settings, saved through the settings service
    Timezone,
    DateFormat,
    MaintenanceMode,
    DebugMode,
    UsageAnalytics,
    EmailProvider,
    UseSsl,
    SendTestEmail,
    Channel(NotificationChannel),
    Digest,
    BackupEnabled,
    BackupFrequency,
    BackupTime,
    RetentionDays,
    BackupType,
}

impl SettingItem {
    pub const ALL: [Self; 20] = [
        Self::Theme,
        Self::DayBoundary,
        Self::DetailClose,
        Self::Timezone,
        Self::DateFormat,
        Self::MaintenanceMode,
        Self::DebugMode,
        Self::UsageAnalytics,
        Self::EmailProvider,
        Self::UseSsl,
        Self::SendTestEmail,
        Self::Channel(NotificationChannel::Email),
        Self::Channel(NotificationChannel::App),
        Self::Channel(NotificationChannel::Sms),
        Self::Digest,
        Self::BackupEnabled,
        Self::BackupFrequency,
        Self::BackupTime,
        Self::RetentionDays,
        Self::BackupType,
    ];

    pub fn section(self) -> SettingSection {
        match self {
            Self::Theme | Self::DayBoundary | Self::DetailClose => SettingSection::Interface,
            Self::Timezone
            | Self::DateFormat
            | Self::MaintenanceMode
            | Self::DebugMode
            | Self::UsageAnalytics => SettingSection::General,
            Self::EmailProvider | Self::UseSsl | Self::SendTestEmail => SettingSection::Email,
            Self::Channel(_) | Self::Digest => SettingSection::Notifications,
            Self::BackupEnabled
            | Self::BackupFrequency
            | Self::BackupTime
            | Self::RetentionDays
            | Self::BackupType => SettingSection::BackupSchedule,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Theme => "Theme",
            Self::DayBoundary => "Date Filter Day",
            Self::DetailClose => "Keep Selection On Close",
            Self::Timezone => "Timezone",
            Self::DateFormat => "Date Format",
            Self::MaintenanceMode => "Maintenance Mode",
            Self::DebugMode => "Debug Mode",
            Self::UsageAnalytics => "Usage Analytics",
            Self::EmailProvider => "Email Provider",
            Self::UseSsl => "Use SSL/TLS",
            Self::SendTestEmail => "Send Test Email",
            Self::Channel(NotificationChannel::Email) => "Email Notifications",
            Self::Channel(NotificationChannel::App) => "In-App Notifications",
            Self::Channel(NotificationChannel::Sms) => "SMS Notifications",
            Self::Digest => "Notification Frequency",
            Self::BackupEnabled => "Automatic Backups",
            Self::BackupFrequency => "Backup Frequency",
            Self::BackupTime => "Backup Time",
            Self::RetentionDays => "Retention Period",
            Self::BackupType => "Backup Type",
        }
    }

    /// Items that run an action on Enter instead of holding a value
    pub fn is_action(self) -> bool {
        matches!(self, Self::SendTestEmail)
    }
}

/// Settings page state
pub struct SettingsState {
    /// Index into [`SettingItem::ALL`]
    pub selected: usize,
    /// Last loaded platform settings
    pub platform: PlatformSettings,
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            platform: PlatformSettings::default(),
        }
    }

    pub fn current_item(&self) -> SettingItem {
        SettingItem::ALL
            .get(self.selected)
            .copied()
            .unwrap_or(SettingItem::Theme)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < SettingItem::ALL.len() {
            self.selected += 1;
        }
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn day_boundary_label(boundary: DayBoundary) -> String {
    match boundary {
        DayBoundary::Utc => "UTC".to_string(),
        DayBoundary::Local => "Local time".to_string(),
        DayBoundary::Fixed { offset_minutes } => {
            let sign = if offset_minutes < 0 { '-' } else { '+' };
            let minutes = offset_minutes.unsigned_abs();
            format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
        }
    }
}

pub fn close_behavior_label(behavior: CloseBehavior) -> &'static str {
    match behavior {
        CloseBehavior::Retain => "Yes",
        CloseBehavior::Clear => "No",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_offsets_render_as_utc_offsets() {
        assert_eq!(
            day_boundary_label(DayBoundary::Fixed { offset_minutes: 330 }),
            "UTC+05:30"
        );
        assert_eq!(
            day_boundary_label(DayBoundary::Fixed { offset_minutes: -300 }),
            "UTC-05:00"
        );
    }

    #[test]
    fn selection_is_clamped() {
        let mut state = SettingsState::new();
        state.select_previous();
        assert_eq!(state.current_item(), SettingItem::Theme);
        for _ in 0..50 {
            state.select_next();
        }
        assert_eq!(state.current_item(), SettingItem::BackupType);
    }
}
