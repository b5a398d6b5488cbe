//! Role and permission catalog definitions

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A single grantable permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permission {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

/// Permissions grouped by the platform module they guard.
#[derive(Debug, Clone, Copy)]
pub struct PermissionModule {
    pub id: u32,
    pub name: &'static str,
    pub permissions: &'static [Permission],
}

const fn perm(id: u32, name: &'static str, description: &'static str) -> Permission {
    Permission {
        id,
        name,
        description,
    }
}

/// Every permission known to the platform, by module.
pub const PERMISSION_CATALOG: &[PermissionModule] = &[
    PermissionModule {
        id: 1,
        name: "Dashboard",
        permissions: &[
            perm(1, "View Dashboard", "Access to view dashboard"),
            perm(2, "View Analytics", "Access to view analytics"),
        ],
    },
    PermissionModule {
        id: 2,
        name: "Student Management",
        permissions: &[
            perm(3, "View Students", "Access to view student records"),
            perm(4, "Create Students", "Ability to create new student records"),
            perm(5, "Edit Students", "Ability to edit student records"),
            perm(6, "Delete Students", "Ability to delete student records"),
        ],
    },
    PermissionModule {
        id: 3,
        name: "Application Management",
        permissions: &[
            perm(7, "View Applications", "Access to view applications"),
            perm(8, "Create Applications", "Ability to create new applications"),
            perm(9, "Edit Applications", "Ability to edit applications"),
            perm(10, "Delete Applications", "Ability to delete applications"),
            perm(
                11,
                "Change Application Status",
                "Ability to change application status",
            ),
        ],
    },
];

impl Permission {
    /// Looks up a permission in the catalog.
    #[must_use]
    pub fn find(id: u32) -> Option<&'static Permission> {
        PERMISSION_CATALOG
            .iter()
            .flat_map(|m| m.permissions.iter())
            .find(|p| p.id == id)
    }

    /// Iterates the whole catalog in display order.
    pub fn all() -> impl Iterator<Item = &'static Permission> {
        PERMISSION_CATALOG.iter().flat_map(|m| m.permissions.iter())
    }
}

/// Access role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    #[serde(rename = "users")]
    pub user_count: u32,
    /// Built-in roles cannot be deleted
    #[serde(rename = "isSystem")]
    pub is_system: bool,
    /// Granted permission ids
    #[serde(default)]
    pub permissions: BTreeSet<u32>,
}

impl Role {
    #[must_use]
    pub fn has_permission(&self, permission_id: u32) -> bool {
        self.permissions.contains(&permission_id)
    }
}
