//! Role and permission management service

use std::sync::Arc;

use crate::dialog::{CreateRoleForm, DialogForm};
use crate::error::{CoreError, CoreResult, FieldError};
use crate::types::{AuditModule, EntityId, NewAuditEntry, Permission, Role};

use super::{require, ServiceContext};

/// Role management service
pub struct RoleService {
    ctx: Arc<ServiceContext>,
}

impl RoleService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> CoreResult<Vec<Role>> {
        self.ctx.repositories.roles.list().await
    }

    pub async fn get(&self, id: EntityId) -> CoreResult<Role> {
        require(self.ctx.repositories.roles.as_ref(), id).await
    }

    /// Names of every existing role, for the create dialog's uniqueness check.
    pub async fn names(&self) -> CoreResult<Vec<String>> {
        Ok(self.list().await?.into_iter().map(|r| r.name).collect())
    }

    /// Creates a custom role with no permissions.
    pub async fn create(&self, form: &CreateRoleForm) -> CoreResult<Role> {
        form.validate()?;

        let name = form.name.trim().to_string();
        if self
            .list()
            .await?
            .iter()
            .any(|r| r.name.eq_ignore_ascii_case(&name))
        {
            return Err(CoreError::Conflict(format!("A role named '{name}' already exists")));
        }

        let draft = Role {
            id: 0,
            name,
            description: form.description.trim().to_string(),
            user_count: 0,
            is_system: false,
            permissions: std::collections::BTreeSet::new(),
        };
        let role = self.ctx.repositories.roles.create(draft).await?;
        log::info!("Role #{} '{}' created", role.id, role.name);
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::UserManagement,
                "Create Role",
                format!("Created role '{}'", role.name),
            ))
            .await;
        Ok(role)
    }

    /// Grants or revokes one permission. Returns the updated role.
    pub async fn toggle_permission(&self, role_id: EntityId, permission_id: u32) -> CoreResult<Role> {
        let Some(permission) = Permission::find(permission_id) else {
            return Err(CoreError::Validation(FieldError::new(
                "permission",
                format!("Unknown permission {permission_id}"),
            )));
        };
        let mut role = self.get(role_id).await?;
        let granted = if role.permissions.remove(&permission_id) {
            false
        } else {
            role.permissions.insert(permission_id);
            true
        };
        let role = self.ctx.repositories.roles.update(role).await?;
        log::info!(
            "Role #{role_id} {} '{}'",
            if granted { "granted" } else { "revoked" },
            permission.name
        );
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::UserManagement,
                "Update Role Permissions",
                format!(
                    "{} '{}' for role '{}'",
                    if granted { "Granted" } else { "Revoked" },
                    permission.name,
                    role.name
                ),
            ))
            .await;
        Ok(role)
    }

    /// Deletes a custom role. Built-in roles are protected.
    pub async fn delete(&self, id: EntityId) -> CoreResult<()> {
        let role = self.get(id).await?;
        if role.is_system {
            return Err(CoreError::Conflict(format!(
                "'{}' is a system role and cannot be deleted",
                role.name
            )));
        }
        self.ctx.repositories.roles.delete(id).await?;
        log::info!("Role #{id} deleted");
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::UserManagement,
                "Delete Role",
                format!("Deleted role '{}'", role.name),
            ))
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;

    #[tokio::test]
    async fn system_roles_cannot_be_deleted() {
        let service = RoleService::new(Arc::new(create_test_context()));
        assert!(matches!(service.delete(1).await, Err(CoreError::Conflict(_))));
        service.delete(5).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn toggle_permission_round_trip() {
        let service = RoleService::new(Arc::new(create_test_context()));
        assert!(!service.get(5).await.unwrap().has_permission(2));

        let role = service.toggle_permission(5, 2).await.unwrap();
        assert!(role.has_permission(2));
        let role = service.toggle_permission(5, 2).await.unwrap();
        assert!(!role.has_permission(2));

        assert!(matches!(
            service.toggle_permission(5, 99).await,
            Err(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn create_checks_uniqueness() {
        let service = RoleService::new(Arc::new(create_test_context()));
        let form = CreateRoleForm {
            name: "Admissions Officer".to_string(),
            description: "Reviews offers".to_string(),
            taken_names: service.names().await.unwrap(),
        };
        let role = service.create(&form).await.unwrap();
        assert!(!role.is_system);
        assert!(role.permissions.is_empty());

        // a stale name list still hits the store-side check
        let stale = CreateRoleForm {
            taken_names: Vec::new(),
            ..form
        };
        assert!(matches!(service.create(&stale).await, Err(CoreError::Conflict(_))));
    }
}
