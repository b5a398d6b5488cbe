//! Workflow configuration service

use std::sync::Arc;

use chrono::Utc;

use crate::dialog::{CreateWorkflowForm, DialogForm};
use crate::error::CoreResult;
use crate::types::{ActiveStatus, AuditModule, EntityId, NewAuditEntry, Workflow};

use super::{require, ServiceContext};

pub struct WorkflowService {
    ctx: Arc<ServiceContext>,
}

impl WorkflowService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> CoreResult<Vec<Workflow>> {
        self.ctx.repositories.workflows.list().await
    }

    pub async fn get(&self, id: EntityId) -> CoreResult<Workflow> {
        require(self.ctx.repositories.workflows.as_ref(), id).await
    }

    pub async fn create(&self, form: &CreateWorkflowForm) -> CoreResult<Workflow> {
        form.validate()?;

        let draft = Workflow {
            id: 0,
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            trigger: form.trigger,
            status: ActiveStatus::from_active(form.active),
            last_modified: Utc::now(),
        };
        let workflow = self.ctx.repositories.workflows.create(draft).await?;
        log::info!("Workflow #{} '{}' created", workflow.id, workflow.name);
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::System,
                "Create Workflow",
                format!(
                    "Created {} workflow '{}'",
                    workflow.trigger.label().to_lowercase(),
                    workflow.name
                ),
            ))
            .await;
        Ok(workflow)
    }

    /// Flips active/inactive and bumps `last_modified`.
    pub async fn toggle_status(&self, id: EntityId) -> CoreResult<Workflow> {
        let mut workflow = self.get(id).await?;
        workflow.status = workflow.status.toggled();
        workflow.last_modified = Utc::now();
        let workflow = self.ctx.repositories.workflows.update(workflow).await?;
        log::info!("Workflow #{id} is now {}", workflow.status.label());
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::System,
                "Update Workflow",
                format!("Set workflow '{}' to {}", workflow.name, workflow.status.label()),
            ))
            .await;
        Ok(workflow)
    }

    pub async fn delete(&self, id: EntityId) -> CoreResult<()> {
        let workflow = self.get(id).await?;
        self.ctx.repositories.workflows.delete(id).await?;
        log::info!("Workflow #{id} deleted");
        self.ctx
            .audit(NewAuditEntry::success(
                AuditModule::System,
                "Delete Workflow",
                format!("Deleted workflow '{}'", workflow.name),
            ))
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;
    use crate::types::TriggerType;

    #[tokio::test]
    async fn toggle_bumps_modified() {
        let service = WorkflowService::new(Arc::new(create_test_context()));
        let before = service.get(4).await.unwrap();
        let after = service.toggle_status(4).await.unwrap();
        assert_eq!(after.status, ActiveStatus::Active);
        assert!(after.last_modified > before.last_modified);
    }

    #[tokio::test]
    async fn create_scheduled_workflow() {
        let service = WorkflowService::new(Arc::new(create_test_context()));
        let form = CreateWorkflowForm {
            name: "Nightly Reminder".to_string(),
            description: "Reminds students about missing documents".to_string(),
            trigger: TriggerType::Scheduled,
            active: true,
        };
        let workflow = service.create(&form).await.unwrap();
        assert_eq!(workflow.id, 6);
        assert_eq!(workflow.trigger, TriggerType::Scheduled);

        let blank = CreateWorkflowForm::default();
        assert!(service.create(&blank).await.is_err());
    }
}
