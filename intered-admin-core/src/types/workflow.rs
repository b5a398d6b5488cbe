//! Workflow type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActiveStatus, EntityId};

/// What starts a workflow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Event,
    Manual,
    Scheduled,
}

impl TriggerType {
    pub const ALL: [Self; 3] = [Self::Event, Self::Manual, Self::Scheduled];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::Manual => "Manual",
            Self::Scheduled => "Scheduled",
        }
    }
}

/// Workflow definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workflow {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    #[serde(rename = "triggerType")]
    pub trigger: TriggerType,
    pub status: ActiveStatus,
    #[serde(rename = "lastModified", with = "crate::utils::datetime")]
    pub last_modified: DateTime<Utc>,
}
