//! API key management service

use std::sync::Arc;

use chrono::Utc;

use crate::dialog::{CreateApiKeyForm, DialogForm};
use crate::error::CoreResult;
use crate::types::{ActiveStatus, ApiKey, AuditModule, EntityId, NewAuditEntry};

use super::{require, ServiceContext};

const KEY_PREFIX: &str = "intd";
const FALLBACK_TAG: &str = "key";

/// API key management service
pub struct ApiKeyService {
    ctx: Arc<ServiceContext>,
}

impl ApiKeyService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> CoreResult<Vec<ApiKey>> {
        self.ctx.repositories.api_keys.list().await
    }

    pub async fn get(&self, id: EntityId) -> CoreResult<ApiKey> {
        require(self.ctx.repositories.api_keys.as_ref(), id).await
    }

    /// Creates a key with a freshly generated secret.
    pub async fn create(&self, form: &CreateApiKeyForm) -> CoreResult<ApiKey> {
        form.validate()?;

        let now = Utc::now();
        let name = form.name.trim().to_string();
        let draft = ApiKey {
            id: 0,
            key: generate_key(&tag_from_name(&name)),
            name,
            description: form.description.trim().to_string(),
            status: ActiveStatus::Active,
            created_at: now,
            last_used: None,
            expires_at: form.expiry.expires_at(now),
            scopes: form.scopes.clone(),
        };
        let key = self.ctx.repositories.api_keys.create(draft).await?;
        log::info!("API key #{} '{}' created", key.id, key.name);
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::ApiManagement,
                "Create API Key",
                format!("Created API key '{}' with {} scope(s)", key.name, key.scopes.len()),
            ))
            .await;
        Ok(key)
    }

    /// Replaces the secret, keeping the tag of the old key.
    pub async fn regenerate(&self, id: EntityId) -> CoreResult<ApiKey> {
        let mut key = self.get(id).await?;
        let tag = key
            .key
            .split('_')
            .nth(1)
            .filter(|t| !t.is_empty())
            .unwrap_or(FALLBACK_TAG)
            .to_string();
        key.key = generate_key(&tag);
        let key = self.ctx.repositories.api_keys.update(key).await?;
        log::info!("API key #{id} regenerated");
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::ApiManagement,
                "Regenerate API Key",
                format!("Regenerated API key '{}'", key.name),
            ))
            .await;
        Ok(key)
    }

    pub async fn set_status(&self, id: EntityId, status: ActiveStatus) -> CoreResult<ApiKey> {
        let mut key = self.get(id).await?;
        if key.status == status {
            return Ok(key);
        }
        key.status = status;
        let key = self.ctx.repositories.api_keys.update(key).await?;
        log::info!("API key #{id} is now {}", status.label());
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::ApiManagement,
                "Update API Key",
                format!("Set API key '{}' to {}", key.name, status.label()),
            ))
            .await;
        Ok(key)
    }

    pub async fn delete(&self, id: EntityId) -> CoreResult<()> {
        let key = self.get(id).await?;
        self.ctx.repositories.api_keys.delete(id).await?;
        log::info!("API key #{id} deleted");
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::ApiManagement,
                "Delete API Key",
                format!("Revoked API key '{}'", key.name),
            ))
            .await;
        Ok(())
    }
}

/// `intd_<tag>_<32 hex>`
fn generate_key(tag: &str) -> String {
    format!("{KEY_PREFIX}_{tag}_{}", uuid::Uuid::new_v4().simple())
}

/// Short lowercase tag derived from the first word of a key name.
fn tag_from_name(name: &str) -> String {
    let tag: String = name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(4)
        .collect::<String>()
        .to_ascii_lowercase();
    if tag.is_empty() {
        FALLBACK_TAG.to_string()
    } else {
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::create_test_context;
    use crate::types::ApiScope;

    fn service() -> ApiKeyService {
        ApiKeyService::new(Arc::new(create_test_context()))
    }

    #[test]
    fn key_format() {
        let key = generate_key("prod");
        assert!(key.starts_with("intd_prod_"));
        let hex = key.trim_start_matches("intd_prod_");
        assert_eq!(hex.len(), 32);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tags() {
        assert_eq!(tag_from_name("Reporting Key"), "repo");
        assert_eq!(tag_from_name("CRM"), "crm");
        assert_eq!(tag_from_name("  "), "key");
        assert_eq!(tag_from_name("#!"), "key");
    }

    #[tokio::test]
    async fn create_generates_secret_and_audits() {
        let service = service();
        let form = CreateApiKeyForm {
            name: "Reporting Key".to_string(),
            scopes: vec![ApiScope::StudentsRead],
            ..CreateApiKeyForm::default()
        };
        let key = service.create(&form).await.unwrap();

        assert_eq!(key.id, 6);
        assert!(key.key.starts_with("intd_repo_"));
        assert_eq!(key.status, ActiveStatus::Active);
        assert!(key.expires_at.is_none());

        let audit = service.ctx.repositories.audit_logs.list().await.unwrap();
        assert_eq!(audit.last().map(|e| e.action.as_str()), Some("Create API Key"));
    }

    #[tokio::test]
    async fn create_rejects_invalid_form() {
        let service = service();
        let err = service.create(&CreateApiKeyForm::default()).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationErrors(_)));
        assert_eq!(service.list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn regenerate_keeps_tag() {
        let service = service();
        let before = service.get(1).await.unwrap();
        let after = service.regenerate(1).await.unwrap();
        assert_ne!(before.key, after.key);
        assert!(after.key.starts_with("intd_prod_"));
    }

    #[tokio::test]
    async fn delete_missing_key() {
        let service = service();
        assert!(matches!(service.delete(42).await, Err(CoreError::NotFound { .. })));
        service.delete(2).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 4);
    }
}
