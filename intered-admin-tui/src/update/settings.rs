//! Settings page changes
//!
//! Interface items live in the TUI config file; everything else is platform
//! settings saved through the settings service, one panel at a time.

use intered_admin_core::list::{CloseBehavior, DayBoundary};
use intered_admin_core::types::{
    BackupFrequency, BackupSchedule, BackupTime, BackupType, DateFormat, DigestFrequency,
    EmailProvider, PlatformSettings, Timezone,
};
use intered_admin_core::CoreResult;

use super::data::reload;
use super::report;
use crate::model::state::SettingItem;
use crate::model::{App, Page};
use crate::util::step;
use crate::view::theme::set_theme;

/// Changes `item` to its previous or next value and saves it.
pub fn change(app: &mut App, item: SettingItem, forward: bool) {
    match item {
        SettingItem::Theme | SettingItem::DayBoundary | SettingItem::DetailClose => {
            change_preference(app, item);
        }
        SettingItem::SendTestEmail => {}
        _ => change_platform(app, item, forward),
    }
}

fn change_preference(app: &mut App, item: SettingItem) {
    match item {
        SettingItem::Theme => {
            app.config.theme = app.config.theme.toggled();
            set_theme(app.config.theme);
        }
        SettingItem::DayBoundary => {
            // a fixed offset can only be set in the config file
            let boundary = match app.config.day_boundary {
                DayBoundary::Utc => DayBoundary::Local,
                DayBoundary::Local | DayBoundary::Fixed { .. } => DayBoundary::Utc,
            };
            app.config.day_boundary = boundary;
            app.lists.for_each_mut(|list| list.set_day_boundary(boundary));
        }
        SettingItem::DetailClose => {
            let behavior = match app.config.detail_close {
                CloseBehavior::Retain => CloseBehavior::Clear,
                CloseBehavior::Clear => CloseBehavior::Retain,
            };
            app.config.detail_close = behavior;
            app.lists.for_each_mut(|list| list.set_close_behavior(behavior));
        }
        _ => return,
    }

    match app.config_service.save(&app.config) {
        Ok(()) => app.set_status(format!("{} updated", item.label())),
        Err(e) => {
            log::error!("Failed to save config: {e:#}");
            app.set_status(format!("Failed to save config: {e}"));
        }
    }
}

fn change_platform(app: &mut App, item: SettingItem, forward: bool) {
    let current = &app.settings.platform;
    let service = app.backend.settings();

    let result: CoreResult<PlatformSettings> = match item {
        SettingItem::Timezone
        | SettingItem::DateFormat
        | SettingItem::MaintenanceMode
        | SettingItem::DebugMode
        | SettingItem::UsageAnalytics => {
            let mut general = current.general.clone();
            match item {
                SettingItem::Timezone => {
                    general.timezone = step(general.timezone, &Timezone::ALL, forward);
                }
                SettingItem::DateFormat => {
                    general.date_format = step(general.date_format, &DateFormat::ALL, forward);
                }
                SettingItem::MaintenanceMode => general.maintenance_mode = !general.maintenance_mode,
                SettingItem::DebugMode => general.debug_mode = !general.debug_mode,
                _ => general.usage_analytics = !general.usage_analytics,
            }
            app.backend.block_on(service.save_general(general))
        }
        SettingItem::EmailProvider | SettingItem::UseSsl => {
            let mut email = current.email.clone();
            if item == SettingItem::EmailProvider {
                email.provider = step(email.provider, &EmailProvider::ALL, forward);
            } else {
                email.use_ssl = !email.use_ssl;
            }
            app.backend.block_on(service.save_email(email))
        }
        SettingItem::Channel(_) | SettingItem::Digest => {
            let mut notifications = current.notifications.clone();
            if let SettingItem::Channel(channel) = item {
                notifications.toggle_channel(channel);
            } else {
                notifications.digest = step(notifications.digest, &DigestFrequency::ALL, forward);
            }
            app.backend.block_on(service.save_notifications(notifications))
        }
        SettingItem::BackupEnabled
        | SettingItem::BackupFrequency
        | SettingItem::BackupTime
        | SettingItem::RetentionDays
        | SettingItem::BackupType => {
            let mut schedule = current.backup_schedule.clone();
            match item {
                SettingItem::BackupEnabled => schedule.enabled = !schedule.enabled,
                SettingItem::BackupFrequency => {
                    schedule.frequency = step(schedule.frequency, &BackupFrequency::ALL, forward);
                }
                SettingItem::BackupTime => {
                    schedule.time = step(schedule.time, &BackupTime::ALL, forward);
                }
                SettingItem::RetentionDays => {
                    schedule.retention_days = step(
                        schedule.retention_days,
                        &BackupSchedule::RETENTION_CHOICES,
                        forward,
                    );
                }
                _ => schedule.backup_type = step(schedule.backup_type, &BackupType::ALL, forward),
            }
            app.backend.block_on(service.save_backup_schedule(schedule))
        }
        _ => return,
    };

    match result {
        Ok(platform) => {
            app.settings.platform = platform;
            log::info!("Setting '{}' saved", item.label());
            app.set_status(format!("{} saved", item.label()));
            reload(app, Page::AuditLogs);
        }
        Err(e) => report(app, &format!("Failed to save {}", item.label()), &e),
    }
}
