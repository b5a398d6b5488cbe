//! Backup catalog and schedule type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;

const MEGABYTE: u64 = 1024 * 1024;

/// What a stored backup contains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BackupKind {
    Full,
    Database,
    Partial,
    Files,
    Configuration,
}

impl BackupKind {
    pub const ALL: [Self; 5] = [
        Self::Full,
        Self::Database,
        Self::Partial,
        Self::Files,
        Self::Configuration,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Database => "Database",
            Self::Partial => "Partial",
            Self::Files => "Files",
            Self::Configuration => "Configuration",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BackupStatus {
    Completed,
    Failed,
}

impl BackupStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

/// Stored backup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Backup {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "createdAt", with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
    #[serde(rename = "type")]
    pub kind: BackupKind,
    pub status: BackupStatus,
}

impl Backup {
    /// Size rounded to whole megabytes, e.g. `245 MB`.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{} MB", self.size_bytes / MEGABYTE)
    }

    #[must_use]
    pub fn megabytes(mb: u64) -> u64 {
        mb * MEGABYTE
    }
}

/// Content selection offered by the "Create backup" dialog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackupScope {
    #[default]
    Full,
    Database,
    Files,
    Config,
}

impl BackupScope {
    pub const ALL: [Self; 4] = [Self::Full, Self::Database, Self::Files, Self::Config];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "Full System Backup",
            Self::Database => "Database Only",
            Self::Files => "File Storage Only",
            Self::Config => "Configuration Only",
        }
    }

    /// Catalog kind a finished backup of this scope is stored as.
    #[must_use]
    pub fn kind(self) -> BackupKind {
        match self {
            Self::Full => BackupKind::Full,
            Self::Database => BackupKind::Database,
            Self::Files => BackupKind::Files,
            Self::Config => BackupKind::Configuration,
        }
    }

    /// Nominal size recorded for a simulated backup of this scope.
    #[must_use]
    pub fn nominal_size(self) -> u64 {
        Backup::megabytes(match self {
            Self::Full => 246,
            Self::Database => 128,
            Self::Files => 104,
            Self::Config => 2,
        })
    }
}

/// Parameters of a manual backup run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupJob {
    pub name: String,
    pub scope: BackupScope,
}

/// Where a restore reads its data from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", content = "value", rename_all = "lowercase")]
pub enum RestoreSource {
    /// A backup from the catalog
    Existing(EntityId),
    /// An uploaded backup file name
    Upload(String),
}

impl RestoreSource {
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Existing(id) => format!("backup #{id}"),
            Self::Upload(file) => format!("uploaded file '{file}'"),
        }
    }
}

/// Parameters of a restore run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestoreJob {
    pub source: RestoreSource,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    Daily,
    #[default]
    Weekly,
    Biweekly,
    Monthly,
}

impl BackupFrequency {
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Biweekly, Self::Monthly];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Biweekly => "Bi-weekly",
            Self::Monthly => "Monthly",
        }
    }
}

/// Time of day an automatic backup runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BackupTime {
    #[default]
    #[serde(rename = "00:00")]
    Midnight,
    #[serde(rename = "03:00")]
    ThreeAm,
    #[serde(rename = "06:00")]
    SixAm,
    #[serde(rename = "21:00")]
    NinePm,
}

impl BackupTime {
    pub const ALL: [Self; 4] = [Self::Midnight, Self::ThreeAm, Self::SixAm, Self::NinePm];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Midnight => "12:00 AM",
            Self::ThreeAm => "3:00 AM",
            Self::SixAm => "6:00 AM",
            Self::NinePm => "9:00 PM",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackupType {
    #[default]
    Full,
    Differential,
    Incremental,
}

impl BackupType {
    pub const ALL: [Self; 3] = [Self::Full, Self::Differential, Self::Incremental];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "Full Backup",
            Self::Differential => "Differential",
            Self::Incremental => "Incremental",
        }
    }
}

/// Automatic backup schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupSchedule {
    pub enabled: bool,
    pub frequency: BackupFrequency,
    pub time: BackupTime,
    /// Retention in days
    #[serde(rename = "retentionDays")]
    pub retention_days: u16,
    #[serde(rename = "backupType")]
    pub backup_type: BackupType,
}

impl BackupSchedule {
    /// Retention choices offered in the schedule form.
    pub const RETENTION_CHOICES: [u16; 5] = [7, 14, 30, 90, 365];
}

impl Default for BackupSchedule {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency: BackupFrequency::default(),
            time: BackupTime::default(),
            retention_days: 30,
            backup_type: BackupType::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_label_in_megabytes() {
        let backup = Backup {
            id: 1,
            name: "Full System Backup".to_string(),
            created_at: Utc::now(),
            size_bytes: Backup::megabytes(245),
            kind: BackupKind::Full,
            status: BackupStatus::Completed,
        };
        assert_eq!(backup.size_label(), "245 MB");
    }

    #[test]
    fn schedule_defaults() {
        let schedule = BackupSchedule::default();
        assert!(schedule.enabled);
        assert_eq!(schedule.frequency, BackupFrequency::Weekly);
        assert_eq!(schedule.retention_days, 30);
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["time"], "00:00");
    }

    #[test]
    fn restore_source_wire_format() {
        let json = serde_json::to_value(RestoreSource::Existing(3)).unwrap();
        assert_eq!(json["source"], "existing");
        assert_eq!(json["value"], 3);
    }
}
