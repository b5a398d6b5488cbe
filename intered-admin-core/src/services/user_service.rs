//! Back-office user management service

use std::sync::Arc;

use crate::dialog::{CreateUserForm, DialogForm};
use crate::error::{CoreError, CoreResult};
use crate::types::{ActiveStatus, AuditModule, EntityId, NewAuditEntry, User, UserRole};

use super::{require, ServiceContext};

/// User management service
pub struct UserService {
    ctx: Arc<ServiceContext>,
}

impl UserService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> CoreResult<Vec<User>> {
        self.ctx.repositories.users.list().await
    }

    pub async fn get(&self, id: EntityId) -> CoreResult<User> {
        require(self.ctx.repositories.users.as_ref(), id).await
    }

    /// Adds a user. Emails are unique, compared case-insensitively.
    pub async fn create(&self, form: &CreateUserForm) -> CoreResult<User> {
        form.validate()?;

        let email = form.email.trim().to_string();
        let existing = self.list().await?;
        if existing.iter().any(|u| u.email.eq_ignore_ascii_case(&email)) {
            return Err(CoreError::Conflict(format!("A user with email {email} already exists")));
        }

        let draft = User {
            id: 0,
            name: form.name.trim().to_string(),
            email,
            role: form.role,
            status: form.status(),
            last_login: None,
        };
        let user = self.ctx.repositories.users.create(draft).await?;
        log::info!("User #{} '{}' created", user.id, user.name);
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::UserManagement,
                "Create User",
                format!("Created new user '{}' with {} role", user.name, user.role.label()),
            ))
            .await;
        Ok(user)
    }

    pub async fn set_status(&self, id: EntityId, status: ActiveStatus) -> CoreResult<User> {
        let mut user = self.get(id).await?;
        if user.status == status {
            return Ok(user);
        }
        user.status = status;
        let user = self.ctx.repositories.users.update(user).await?;
        log::info!("User #{id} is now {}", status.label());
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::UserManagement,
                "Update User",
                format!("Set user '{}' to {}", user.name, status.label()),
            ))
            .await;
        Ok(user)
    }

    pub async fn set_role(&self, id: EntityId, role: UserRole) -> CoreResult<User> {
        let mut user = self.get(id).await?;
        if user.role == role {
            return Ok(user);
        }
        user.role = role;
        let user = self.ctx.repositories.users.update(user).await?;
        log::info!("User #{id} now has role {}", role.label());
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::UserManagement,
                "Change User Role",
                format!("Changed role of '{}' to {}", user.name, role.label()),
            ))
            .await;
        Ok(user)
    }

    pub async fn delete(&self, id: EntityId) -> CoreResult<()> {
        let user = self.get(id).await?;
        self.ctx.repositories.users.delete(id).await?;
        log::info!("User #{id} deleted");
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::UserManagement,
                "Delete User",
                format!("Deleted user '{}'", user.name),
            ))
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;

    fn form(email: &str) -> CreateUserForm {
        CreateUserForm {
            name: "Priya Patel".to_string(),
            email: email.to_string(),
            role: UserRole::Manager,
            active: false,
        }
    }

    #[tokio::test]
    async fn create_user() {
        let service = UserService::new(Arc::new(create_test_context()));
        let user = service.create(&form("priya.patel@intered.com")).await.unwrap();
        assert_eq!(user.id, 6);
        assert_eq!(user.status, ActiveStatus::Inactive);
        assert!(user.last_login.is_none());
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let service = UserService::new(Arc::new(create_test_context()));
        let err = service.create(&form("John.Smith@intered.com")).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn role_and_status_changes() {
        let service = UserService::new(Arc::new(create_test_context()));
        assert_eq!(service.set_role(2, UserRole::Manager).await.unwrap().role, UserRole::Manager);
        assert_eq!(
            service.set_status(4, ActiveStatus::Active).await.unwrap().status,
            ActiveStatus::Active
        );
        assert!(matches!(
            service.set_role(9, UserRole::Staff).await,
            Err(CoreError::NotFound { .. })
        ));
    }
}
