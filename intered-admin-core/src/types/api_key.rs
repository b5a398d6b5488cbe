//! API key type definitions

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{ActiveStatus, EntityId};

/// Number of leading key characters shown in masked form.
const MASK_VISIBLE_CHARS: usize = 12;

/// Permission scope granted to an API key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ApiScope {
    #[serde(rename = "students.read")]
    StudentsRead,
    #[serde(rename = "students.write")]
    StudentsWrite,
    #[serde(rename = "applications.read")]
    ApplicationsRead,
    #[serde(rename = "applications.write")]
    ApplicationsWrite,
    #[serde(rename = "universities.read")]
    UniversitiesRead,
    #[serde(rename = "universities.write")]
    UniversitiesWrite,
    #[serde(rename = "programs.read")]
    ProgramsRead,
    #[serde(rename = "programs.write")]
    ProgramsWrite,
    #[serde(rename = "agents.read")]
    AgentsRead,
    #[serde(rename = "agents.write")]
    AgentsWrite,
    #[serde(rename = "payments.read")]
    PaymentsRead,
    #[serde(rename = "payments.write")]
    PaymentsWrite,
    /// Admin-only wildcard
    #[serde(rename = "*")]
    All,
}

impl ApiScope {
    pub const ALL: [Self; 13] = [
        Self::StudentsRead,
        Self::StudentsWrite,
        Self::ApplicationsRead,
        Self::ApplicationsWrite,
        Self::UniversitiesRead,
        Self::UniversitiesWrite,
        Self::ProgramsRead,
        Self::ProgramsWrite,
        Self::AgentsRead,
        Self::AgentsWrite,
        Self::PaymentsRead,
        Self::PaymentsWrite,
        Self::All,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StudentsRead => "students.read",
            Self::StudentsWrite => "students.write",
            Self::ApplicationsRead => "applications.read",
            Self::ApplicationsWrite => "applications.write",
            Self::UniversitiesRead => "universities.read",
            Self::UniversitiesWrite => "universities.write",
            Self::ProgramsRead => "programs.read",
            Self::ProgramsWrite => "programs.write",
            Self::AgentsRead => "agents.read",
            Self::AgentsWrite => "agents.write",
            Self::PaymentsRead => "payments.read",
            Self::PaymentsWrite => "payments.write",
            Self::All => "*",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::StudentsRead => "Read Students",
            Self::StudentsWrite => "Write Students",
            Self::ApplicationsRead => "Read Applications",
            Self::ApplicationsWrite => "Write Applications",
            Self::UniversitiesRead => "Read Universities",
            Self::UniversitiesWrite => "Write Universities",
            Self::ProgramsRead => "Read Programs",
            Self::ProgramsWrite => "Write Programs",
            Self::AgentsRead => "Read Agents",
            Self::AgentsWrite => "Write Agents",
            Self::PaymentsRead => "Read Payments",
            Self::PaymentsWrite => "Write Payments",
            Self::All => "All Permissions (Admin Only)",
        }
    }
}

/// Expiration choice offered when creating a key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum KeyExpiry {
    #[default]
    #[serde(rename = "never")]
    Never,
    #[serde(rename = "30days")]
    Days30,
    #[serde(rename = "90days")]
    Days90,
    #[serde(rename = "1year")]
    Year1,
}

impl KeyExpiry {
    pub const ALL: [Self; 4] = [Self::Never, Self::Days30, Self::Days90, Self::Year1];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Days30 => "30 days",
            Self::Days90 => "90 days",
            Self::Year1 => "1 year",
        }
    }

    /// Expiration instant for a key created at `created_at`.
    #[must_use]
    pub fn expires_at(self, created_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            Self::Never => return None,
            Self::Days30 => 30,
            Self::Days90 => 90,
            Self::Year1 => 365,
        };
        Some(created_at + Duration::days(days))
    }
}

/// API key record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiKey {
    pub id: EntityId,
    pub name: String,
    /// Full secret, `intd_<prefix>_<hex>`
    pub key: String,
    #[serde(default)]
    pub description: String,
    pub status: ActiveStatus,
    #[serde(rename = "createdAt", with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "lastUsed", with = "crate::utils::datetime::option")]
    pub last_used: Option<DateTime<Utc>>,
    #[serde(rename = "expiresAt", with = "crate::utils::datetime::option")]
    pub expires_at: Option<DateTime<Utc>>,
    pub scopes: Vec<ApiScope>,
}

impl ApiKey {
    /// First characters of the key followed by an ellipsis.
    #[must_use]
    pub fn masked_key(&self) -> String {
        let visible: String = self.key.chars().take(MASK_VISIBLE_CHARS).collect();
        format!("{visible}...")
    }

    #[must_use]
    pub fn scope_list(&self) -> String {
        self.scopes
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::datetime::ts;

    #[test]
    fn masks_all_but_prefix() {
        let key = ApiKey {
            id: 1,
            name: "Production API Key".to_string(),
            key: "intd_prod_6f8a9d73e5b2c1f4a0d9e8b7c6f5a4d3".to_string(),
            description: String::new(),
            status: ActiveStatus::Active,
            created_at: ts("2023-04-15T10:30:00Z"),
            last_used: None,
            expires_at: None,
            scopes: vec![ApiScope::StudentsRead],
        };
        assert_eq!(key.masked_key(), "intd_prod_6f...");
    }

    #[test]
    fn scope_wire_names() {
        let json = serde_json::to_string(&[ApiScope::PaymentsWrite, ApiScope::All]).unwrap();
        assert_eq!(json, r#"["payments.write","*"]"#);
    }

    #[test]
    fn expiry_offsets() {
        let created = ts("2023-01-01T00:00:00Z");
        assert_eq!(KeyExpiry::Never.expires_at(created), None);
        assert_eq!(
            KeyExpiry::Days30.expires_at(created),
            Some(ts("2023-01-31T00:00:00Z"))
        );
        assert_eq!(
            KeyExpiry::Year1.expires_at(created),
            Some(ts("2024-01-01T00:00:00Z"))
        );
    }
}
