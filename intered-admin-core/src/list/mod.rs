//! Generic list management: filtering, derived views and detail selection.
//!
//! Every management page (API keys, webhooks, audit logs, users, roles,
//! workflows, backups) is a [`ListManager`] over one [`Entity`] type.

mod entities;
mod entity;
mod filter;
mod manager;
mod selection;

pub use entities::{
    ApiKeyFacets, AuditLogFacets, BackupFacets, RoleFacets, UserFacets, WebhookFacets,
    WorkflowFacets,
};
pub use entity::{Entity, Facets};
pub use filter::{DayBoundary, FilterState};
pub use manager::{ListManager, ViewStatus};
pub use selection::{CloseBehavior, SelectionController};
