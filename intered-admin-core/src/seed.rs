//! Seed data for the back-office screens.

use std::collections::BTreeSet;

use crate::types::{
    ActiveStatus, ApiKey, ApiScope, AuditLogEntry, AuditModule, AuditStatus, Backup, BackupKind,
    BackupStatus, DeliveryResponse, PlatformSettings, Role, TriggerType, User, UserRole, Webhook,
    WebhookEvent, Workflow,
};
use crate::utils::datetime::ts;

fn s(value: &str) -> String {
    value.to_string()
}

#[must_use]
pub fn api_keys() -> Vec<ApiKey> {
    use ApiScope::{
        All, ApplicationsRead, ApplicationsWrite, PaymentsRead, PaymentsWrite, ProgramsRead,
        StudentsRead, StudentsWrite, UniversitiesRead,
    };

    let key = |id, name: &str, key: &str, status, created: &str, used: &str, scopes| ApiKey {
        id,
        name: s(name),
        key: s(key),
        description: String::new(),
        status,
        created_at: ts(created),
        last_used: Some(ts(used)),
        expires_at: None,
        scopes,
    };

    vec![
        key(
            1,
            "Production API Key",
            "intd_prod_6f8a9d73e5b2c1f4a0d9e8b7c6f5a4d3",
            ActiveStatus::Active,
            "2023-04-15T10:30:00Z",
            "2023-05-01T14:20:00Z",
            vec![StudentsRead, ApplicationsRead, ApplicationsWrite],
        ),
        key(
            2,
            "University Integration Key",
            "intd_univ_1a2b3c4d5e6f7g8h9i0j1k2l3m4n5o6p",
            ActiveStatus::Active,
            "2023-04-20T09:15:00Z",
            "2023-05-02T11:45:00Z",
            vec![UniversitiesRead, ProgramsRead],
        ),
        key(
            3,
            "CRM Integration Key",
            "intd_crm_7g8h9i0j1k2l3m4n5o6p7q8r9s0t1u2v",
            ActiveStatus::Active,
            "2023-04-25T16:20:00Z",
            "2023-05-01T09:10:00Z",
            vec![StudentsRead, StudentsWrite, ApplicationsRead],
        ),
        key(
            4,
            "Development Key",
            "intd_dev_3e4f5g6h7i8j9k0l1m2n3o4p5q6r7s8t9",
            ActiveStatus::Inactive,
            "2023-03-10T13:40:00Z",
            "2023-04-01T15:30:00Z",
            vec![All],
        ),
        key(
            5,
            "Payment Gateway Key",
            "intd_pay_9k0l1m2n3o4p5q6r7s8t9u0v1w2x3y4z",
            ActiveStatus::Active,
            "2023-04-18T11:25:00Z",
            "2023-05-02T08:50:00Z",
            vec![PaymentsRead, PaymentsWrite],
        ),
    ]
}

#[must_use]
pub fn webhooks() -> Vec<Webhook> {
    use WebhookEvent::{
        AdmissionDecision, ApplicationStatusChanged, ApplicationSubmitted, ApplicationUpdated,
        DocumentRejected, DocumentUploaded, DocumentVerified, OfferSent, PaymentFailed,
        PaymentReceived, PaymentRefunded, StudentCreated,
    };

    let hook = |id, name: &str, url: &str, events, status, created: &str, triggered: &str, code, msg: &str| Webhook {
        id,
        name: s(name),
        url: s(url),
        secret: None,
        events,
        status,
        created_at: ts(created),
        last_triggered: Some(ts(triggered)),
        last_response: Some(DeliveryResponse {
            status_code: code,
            message: s(msg),
        }),
    };

    vec![
        hook(
            1,
            "Student Application Status Updates",
            "https://crm.example.com/webhooks/intered/application-status",
            vec![ApplicationSubmitted, ApplicationUpdated, ApplicationStatusChanged],
            ActiveStatus::Active,
            "2023-04-15T10:30:00Z",
            "2023-05-02T14:20:00Z",
            200,
            "Success",
        ),
        hook(
            2,
            "Student Registration Notifications",
            "https://notifications.example.com/intered/new-student",
            vec![StudentCreated],
            ActiveStatus::Active,
            "2023-04-20T09:15:00Z",
            "2023-05-01T11:45:00Z",
            200,
            "Success",
        ),
        hook(
            3,
            "Payment Status Updates",
            "https://finance.example.org/webhooks/payment-updates",
            vec![PaymentReceived, PaymentFailed, PaymentRefunded],
            ActiveStatus::Active,
            "2023-04-25T16:20:00Z",
            "2023-05-02T09:10:00Z",
            200,
            "Success",
        ),
        hook(
            4,
            "Document Processing Updates",
            "https://docs.example.com/intered-webhook",
            vec![DocumentUploaded, DocumentVerified, DocumentRejected],
            ActiveStatus::Inactive,
            "2023-03-10T13:40:00Z",
            "2023-04-01T15:30:00Z",
            500,
            "Internal Server Error",
        ),
        hook(
            5,
            "University Admission Decisions",
            "https://integrations.example.edu/intered",
            vec![AdmissionDecision, OfferSent],
            ActiveStatus::Active,
            "2023-04-18T11:25:00Z",
            "2023-05-02T08:50:00Z",
            200,
            "Success",
        ),
    ]
}

#[must_use]
pub fn audit_logs() -> Vec<AuditLogEntry> {
    let entry = |id, action: &str, user: &str, at: &str, ip: &str, status, details: &str, module| {
        AuditLogEntry {
            id,
            action: s(action),
            user: s(user),
            timestamp: ts(at),
            ip_address: s(ip),
            status,
            details: s(details),
            module,
        }
    };

    vec![
        entry(
            1,
            "User Login",
            "admin",
            "2023-05-01T10:30:00Z",
            "192.168.1.1",
            AuditStatus::Success,
            "User 'admin' logged in successfully",
            AuditModule::Authentication,
        ),
        entry(
            2,
            "Update Student",
            "staff_user",
            "2023-05-01T11:15:00Z",
            "192.168.1.5",
            AuditStatus::Success,
            "Updated student ID #1245 (John Smith) contact information",
            AuditModule::StudentManagement,
        ),
        entry(
            3,
            "Delete Application",
            "manager",
            "2023-05-01T12:30:00Z",
            "192.168.1.10",
            AuditStatus::Success,
            "Deleted application ID #5432 for student Sarah Johnson",
            AuditModule::Applications,
        ),
        entry(
            4,
            "Password Reset Attempt",
            "unknown",
            "2023-05-01T14:45:00Z",
            "192.168.1.25",
            AuditStatus::Failed,
            "Failed password reset attempt for user 'finance_admin'",
            AuditModule::Authentication,
        ),
        entry(
            5,
            "System Backup",
            "system",
            "2023-05-01T16:00:00Z",
            "localhost",
            AuditStatus::Success,
            "Automated weekly system backup completed",
            AuditModule::System,
        ),
        entry(
            6,
            "Create User",
            "admin",
            "2023-05-01T17:30:00Z",
            "192.168.1.1",
            AuditStatus::Success,
            "Created new user 'marketing_staff' with Staff role",
            AuditModule::UserManagement,
        ),
    ]
}

#[must_use]
pub fn users() -> Vec<User> {
    let user = |id, name: &str, email: &str, role, status, login: &str| User {
        id,
        name: s(name),
        email: s(email),
        role,
        status,
        last_login: Some(ts(login)),
    };

    vec![
        user(
            1,
            "Admin User",
            "admin@intered.com",
            UserRole::Administrator,
            ActiveStatus::Active,
            "2023-05-01T10:30:00Z",
        ),
        user(
            2,
            "John Smith",
            "john.smith@intered.com",
            UserRole::Staff,
            ActiveStatus::Active,
            "2023-05-02T14:20:00Z",
        ),
        user(
            3,
            "Sarah Johnson",
            "sarah.johnson@intered.com",
            UserRole::Manager,
            ActiveStatus::Active,
            "2023-05-03T09:15:00Z",
        ),
        user(
            4,
            "Michael Brown",
            "michael.brown@intered.com",
            UserRole::Staff,
            ActiveStatus::Inactive,
            "2023-04-15T11:45:00Z",
        ),
        user(
            5,
            "Emily Davis",
            "emily.davis@intered.com",
            UserRole::Staff,
            ActiveStatus::Active,
            "2023-05-01T16:20:00Z",
        ),
    ]
}

#[must_use]
pub fn roles() -> Vec<Role> {
    let role = |id, name: &str, description: &str, user_count, is_system, permissions: &[u32]| Role {
        id,
        name: s(name),
        description: s(description),
        user_count,
        is_system,
        permissions: permissions.iter().copied().collect::<BTreeSet<_>>(),
    };

    vec![
        role(
            1,
            "Administrator",
            "Full system access",
            2,
            true,
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        ),
        role(
            2,
            "Manager",
            "Management access with limited system configuration",
            5,
            true,
            &[1, 2, 3, 4, 5, 7, 8, 9, 11],
        ),
        role(
            3,
            "Staff",
            "Standard staff access for daily operations",
            12,
            true,
            &[1, 3, 4, 5, 7, 8, 9],
        ),
        role(
            4,
            "Agent",
            "External agent access with limited student management",
            8,
            true,
            &[3, 4, 7, 8],
        ),
        role(
            5,
            "Custom Role",
            "Custom permissions for specific team",
            3,
            false,
            &[1, 3, 7],
        ),
    ]
}

#[must_use]
pub fn workflows() -> Vec<Workflow> {
    let workflow = |id, name: &str, description: &str, trigger, status, modified: &str| Workflow {
        id,
        name: s(name),
        description: s(description),
        trigger,
        status,
        last_modified: ts(modified),
    };

    vec![
        workflow(
            1,
            "New Student Application",
            "Handles the process flow for new student applications",
            TriggerType::Event,
            ActiveStatus::Active,
            "2023-04-15T10:30:00Z",
        ),
        workflow(
            2,
            "Document Verification",
            "Process for verifying student documents",
            TriggerType::Manual,
            ActiveStatus::Active,
            "2023-04-16T14:20:00Z",
        ),
        workflow(
            3,
            "Application Approval",
            "Multi-step approval process for student applications",
            TriggerType::Event,
            ActiveStatus::Active,
            "2023-04-17T09:15:00Z",
        ),
        workflow(
            4,
            "Agent Onboarding",
            "Onboarding workflow for new recruitment agents",
            TriggerType::Manual,
            ActiveStatus::Inactive,
            "2023-04-18T11:45:00Z",
        ),
        workflow(
            5,
            "Offer Letter Generation",
            "Automated offer letter creation and delivery",
            TriggerType::Event,
            ActiveStatus::Active,
            "2023-04-19T16:20:00Z",
        ),
    ]
}

#[must_use]
pub fn backups() -> Vec<Backup> {
    let backup = |id, name: &str, created: &str, mb, kind| Backup {
        id,
        name: s(name),
        created_at: ts(created),
        size_bytes: Backup::megabytes(mb),
        kind,
        status: BackupStatus::Completed,
    };

    vec![
        backup(1, "Full System Backup", "2023-05-01T10:30:00Z", 245, BackupKind::Full),
        backup(2, "Database Backup", "2023-05-02T14:20:00Z", 128, BackupKind::Database),
        backup(3, "User Data Backup", "2023-05-03T09:15:00Z", 87, BackupKind::Partial),
        backup(4, "Weekly Auto Backup", "2023-04-25T11:45:00Z", 240, BackupKind::Full),
        backup(5, "Pre-Update Snapshot", "2023-04-20T16:20:00Z", 236, BackupKind::Full),
    ]
}

#[must_use]
pub fn settings() -> PlatformSettings {
    PlatformSettings::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::Entity;

    fn ids<E: Entity>(records: &[E]) -> Vec<u32> {
        records.iter().map(Entity::id).collect()
    }

    #[test]
    fn seed_sizes_and_ids() {
        assert_eq!(ids(&api_keys()), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&webhooks()), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&audit_logs()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids(&users()), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&roles()), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&workflows()), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&backups()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn created_before_last_used() {
        for key in api_keys() {
            assert!(key.last_used.is_none_or(|used| key.created_at <= used));
        }
        for hook in webhooks() {
            assert!(hook.last_triggered.is_none_or(|t| hook.created_at <= t));
        }
    }

    #[test]
    fn every_seed_timestamp_parsed() {
        let epoch = chrono::DateTime::<chrono::Utc>::default();
        assert!(audit_logs().iter().all(|e| e.timestamp != epoch));
        assert!(backups().iter().all(|b| b.created_at != epoch));
    }
}
