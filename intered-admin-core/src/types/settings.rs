//! Platform settings type definitions

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::BackupSchedule;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Timezone {
    #[default]
    #[serde(rename = "UTC")]
    Utc,
    #[serde(rename = "America/New_York")]
    NewYork,
    #[serde(rename = "America/Chicago")]
    Chicago,
    #[serde(rename = "America/Denver")]
    Denver,
    #[serde(rename = "America/Los_Angeles")]
    LosAngeles,
    #[serde(rename = "Asia/Kolkata")]
    Kolkata,
}

impl Timezone {
    pub const ALL: [Self; 6] = [
        Self::Utc,
        Self::NewYork,
        Self::Chicago,
        Self::Denver,
        Self::LosAngeles,
        Self::Kolkata,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Utc => "UTC",
            Self::NewYork => "Eastern Time (ET)",
            Self::Chicago => "Central Time (CT)",
            Self::Denver => "Mountain Time (MT)",
            Self::LosAngeles => "Pacific Time (PT)",
            Self::Kolkata => "India Standard Time (IST)",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
}

impl DateFormat {
    pub const ALL: [Self; 3] = [Self::MonthDayYear, Self::DayMonthYear, Self::Iso];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::Iso => "YYYY-MM-DD",
        }
    }
}

/// Platform-wide settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub company_name: String,
    pub platform_name: String,
    pub logo_url: String,
    pub favicon_url: String,
    pub timezone: Timezone,
    pub date_format: DateFormat,
    pub maintenance_mode: bool,
    pub debug_mode: bool,
    pub usage_analytics: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            company_name: "InterEd".to_string(),
            platform_name: "InterEd Recruitment Platform".to_string(),
            logo_url: String::new(),
            favicon_url: String::new(),
            timezone: Timezone::default(),
            date_format: DateFormat::default(),
            maintenance_mode: false,
            debug_mode: false,
            usage_analytics: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    Custom,
    Gmail,
    Sendgrid,
    Mailchimp,
    Aws,
}

impl EmailProvider {
    pub const ALL: [Self; 5] = [
        Self::Custom,
        Self::Gmail,
        Self::Sendgrid,
        Self::Mailchimp,
        Self::Aws,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Custom => "Custom SMTP",
            Self::Gmail => "Gmail",
            Self::Sendgrid => "SendGrid",
            Self::Mailchimp => "Mailchimp",
            Self::Aws => "Amazon SES",
        }
    }
}

/// Outgoing mail configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfiguration {
    pub provider: EmailProvider,
    pub from_email: String,
    pub from_name: String,
    pub reply_to: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub password: String,
    pub use_ssl: bool,
}

impl Default for EmailConfiguration {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            from_email: "noreply@example.com".to_string(),
            from_name: "InterEd Recruitment".to_string(),
            reply_to: "support@example.com".to_string(),
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            username: "smtp_username".to_string(),
            password: String::new(),
            use_ssl: true,
        }
    }
}

/// Delivery channel for platform notifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    App,
    Sms,
}

impl NotificationChannel {
    pub const ALL: [Self; 3] = [Self::Email, Self::App, Self::Sms];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::App => "In-App",
            Self::Sms => "SMS",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigestFrequency {
    #[default]
    Realtime,
    Daily,
    Weekly,
}

impl DigestFrequency {
    pub const ALL: [Self; 3] = [Self::Realtime, Self::Daily, Self::Weekly];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Realtime => "Real-time",
            Self::Daily => "Daily Digest",
            Self::Weekly => "Weekly Digest",
        }
    }
}

/// Topic identifiers grouped by category, `(category, [(id, label)])`.
pub const NOTIFICATION_TOPICS: &[(&str, &[(&str, &str)])] = &[
    (
        "System Notifications",
        &[
            ("maintenance", "System Maintenance"),
            ("updates", "System Updates"),
            ("security", "Security Alerts"),
        ],
    ),
    (
        "Student Notifications",
        &[
            ("student_registration", "New Student Registration"),
            ("student_update", "Student Profile Updates"),
            ("student_document", "Student Document Upload"),
        ],
    ),
    (
        "Application Notifications",
        &[
            ("application_new", "New Application Submitted"),
            ("application_update", "Application Status Change"),
            ("application_document", "Application Document Added"),
        ],
    ),
    (
        "Agent Notifications",
        &[
            ("agent_registration", "New Agent Registration"),
            ("agent_approval", "Agent Approval Required"),
            ("agent_performance", "Agent Performance Updates"),
        ],
    ),
];

/// Per-channel notification preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPreferences {
    pub channel: NotificationChannel,
    pub enabled: bool,
    /// Enabled topic ids
    pub topics: BTreeSet<String>,
}

/// Notification preferences for every channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub channels: Vec<ChannelPreferences>,
    pub digest: DigestFrequency,
}

impl NotificationSettings {
    #[must_use]
    pub fn channel(&self, channel: NotificationChannel) -> Option<&ChannelPreferences> {
        self.channels.iter().find(|c| c.channel == channel)
    }

    #[must_use]
    pub fn is_enabled(&self, channel: NotificationChannel, topic: &str) -> bool {
        self.channel(channel)
            .is_some_and(|c| c.enabled && c.topics.contains(topic))
    }

    /// Flips one topic on one channel. Returns the new state.
    pub fn toggle(&mut self, channel: NotificationChannel, topic: &str) -> bool {
        let Some(prefs) = self.channels.iter_mut().find(|c| c.channel == channel) else {
            return false;
        };
        if prefs.topics.remove(topic) {
            false
        } else {
            prefs.topics.insert(topic.to_string());
            true
        }
    }

    /// Flips the "Enable all" switch of a channel. Returns the new state.
    pub fn toggle_channel(&mut self, channel: NotificationChannel) -> bool {
        match self.channels.iter_mut().find(|c| c.channel == channel) {
            Some(prefs) => {
                prefs.enabled = !prefs.enabled;
                prefs.enabled
            }
            None => false,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        let channels = NotificationChannel::ALL
            .iter()
            .map(|&channel| {
                let topics = NOTIFICATION_TOPICS
                    .iter()
                    .flat_map(|(category, items)| items.iter().map(move |(id, _)| (*category, *id)))
                    .filter(|(category, id)| match channel {
                        NotificationChannel::Email => *category != "Agent Notifications",
                        NotificationChannel::App => true,
                        NotificationChannel::Sms => *id == "security",
                    })
                    .map(|(_, id)| id.to_string())
                    .collect();
                ChannelPreferences {
                    channel,
                    enabled: channel != NotificationChannel::Sms,
                    topics,
                }
            })
            .collect();
        Self {
            channels,
            digest: DigestFrequency::default(),
        }
    }
}

/// Every settings panel in one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSettings {
    pub general: GeneralSettings,
    pub email: EmailConfiguration,
    pub notifications: NotificationSettings,
    pub backup_schedule: BackupSchedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults() {
        let settings = NotificationSettings::default();
        assert!(settings.is_enabled(NotificationChannel::Email, "maintenance"));
        assert!(!settings.is_enabled(NotificationChannel::Email, "agent_approval"));
        assert!(settings.is_enabled(NotificationChannel::App, "agent_approval"));
        // sms is switched off as a whole until enabled
        assert!(!settings.is_enabled(NotificationChannel::Sms, "security"));
        assert_eq!(settings.digest, DigestFrequency::Realtime);
    }

    #[test]
    fn toggles() {
        let mut settings = NotificationSettings::default();
        assert!(settings.toggle_channel(NotificationChannel::Sms));
        assert!(settings.is_enabled(NotificationChannel::Sms, "security"));
        assert!(!settings.toggle(NotificationChannel::Sms, "security"));
        assert!(!settings.is_enabled(NotificationChannel::Sms, "security"));
    }

    #[test]
    fn general_defaults() {
        let general = GeneralSettings::default();
        assert_eq!(general.company_name, "InterEd");
        assert_eq!(general.date_format, DateFormat::MonthDayYear);
        assert!(general.usage_analytics);
        let json = serde_json::to_value(&general).unwrap();
        assert_eq!(json["timezone"], "UTC");
        assert_eq!(json["dateFormat"], "MM/DD/YYYY");
    }
}
