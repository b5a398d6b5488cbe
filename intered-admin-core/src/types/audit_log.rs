//! Audit log type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Outcome recorded for an audited action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AuditStatus {
    Success,
    Failed,
    Warning,
}

impl AuditStatus {
    pub const ALL: [Self; 3] = [Self::Success, Self::Failed, Self::Warning];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failed => "Failed",
            Self::Warning => "Warning",
        }
    }
}

/// Area of the platform an audited action touched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AuditModule {
    Authentication,
    #[serde(rename = "Student Management")]
    StudentManagement,
    Applications,
    #[serde(rename = "User Management")]
    UserManagement,
    System,
    #[serde(rename = "API Management")]
    ApiManagement,
    Settings,
}

impl AuditModule {
    pub const ALL: [Self; 7] = [
        Self::Authentication,
        Self::StudentManagement,
        Self::Applications,
        Self::UserManagement,
        Self::System,
        Self::ApiManagement,
        Self::Settings,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Authentication => "Authentication",
            Self::StudentManagement => "Student Management",
            Self::Applications => "Applications",
            Self::UserManagement => "User Management",
            Self::System => "System",
            Self::ApiManagement => "API Management",
            Self::Settings => "Settings",
        }
    }
}

/// Audit log entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLogEntry {
    pub id: EntityId,
    pub action: String,
    pub user: String,
    #[serde(with = "crate::utils::datetime")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "ipAddress")]
    pub ip_address: String,
    pub status: AuditStatus,
    pub details: String,
    pub module: AuditModule,
}

/// Entry appended by the services when they mutate data.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub action: String,
    pub module: AuditModule,
    pub status: AuditStatus,
    pub details: String,
}

impl NewAuditEntry {
    pub fn success(module: AuditModule, action: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            module,
            status: AuditStatus::Success,
            details: details.into(),
        }
    }

    pub fn failed(module: AuditModule, action: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: AuditStatus::Failed,
            ..Self::success(module, action, details)
        }
    }
}
