//! User type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActiveStatus, EntityId};

/// Built-in role a back-office user is assigned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    Administrator,
    Manager,
    Staff,
}

impl UserRole {
    pub const ALL: [Self; 3] = [Self::Administrator, Self::Manager, Self::Staff];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Manager => "Manager",
            Self::Staff => "Staff",
        }
    }
}

/// Back-office user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: ActiveStatus,
    #[serde(rename = "lastLogin", with = "crate::utils::datetime::option")]
    pub last_login: Option<DateTime<Utc>>,
}
