//! Record actions shared by the list rows and the detail view

use std::time::Instant;

use intered_admin_core::types::{EntityId, Permission, UserRole, WebhookEvent};
use intered_admin_core::CoreResult;

use super::data::after_mutation;
use super::report;
use crate::model::{App, Page};
use crate::util::copy_to_clipboard;

/// Copies the full key of an API key.
pub fn copy_key(app: &mut App, id: EntityId) {
    let Some(key) = app.lists.api_keys.find(id) else {
        return;
    };
    let secret = key.key.clone();
    match copy_to_clipboard(&secret) {
        Ok(()) => {
            app.copy_feedback.mark(id.to_string(), Instant::now());
            app.set_status("Copied!");
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {e:#}");
            app.set_status(format!("Copy failed: {e}"));
        }
    }
}

pub fn regenerate_key(app: &mut App, id: EntityId) {
    let result = app.backend.block_on(app.backend.api_keys().regenerate(id));
    finish(app, Page::ApiKeys, "Failed to regenerate API key", result, |key| {
        format!("API key '{}' regenerated", key.name)
    });
}

/// Activates or deactivates a record of `page`.
pub fn toggle_status(app: &mut App, page: Page, id: EntityId) {
    let backend = &app.backend;
    let result: CoreResult<String> = match page {
        Page::ApiKeys => match app.lists.api_keys.find(id) {
            Some(key) => backend
                .block_on(backend.api_keys().set_status(id, key.status.toggled()))
                .map(|key| format!("API key '{}' is now {}", key.name, key.status.label())),
            None => return,
        },
        Page::Webhooks => match app.lists.webhooks.find(id) {
            Some(hook) => backend
                .block_on(backend.webhooks().set_status(id, hook.status.toggled()))
                .map(|hook| format!("Webhook '{}' is now {}", hook.name, hook.status.label())),
            None => return,
        },
        Page::Users => match app.lists.users.find(id) {
            Some(user) => backend
                .block_on(backend.users().set_status(id, user.status.toggled()))
                .map(|user| format!("User '{}' is now {}", user.name, user.status.label())),
            None => return,
        },
        Page::Workflows => backend
            .block_on(backend.workflows().toggle_status(id))
            .map(|flow| format!("Workflow '{}' is now {}", flow.name, flow.status.label())),
        _ => return,
    };
    finish(app, page, "Failed to change status", result, |message| message);
}

/// Sends a test delivery; `event` defaults to the first subscribed event.
pub fn send_test(app: &mut App, id: EntityId, event: Option<WebhookEvent>) {
    app.set_status("Sending test delivery...");
    let result = app.backend.block_on(app.backend.webhooks().send_test(id, event));
    finish(app, Page::Webhooks, "Test delivery failed", result, |receipt| {
        format!("Test delivered: {} {}", receipt.status_code, receipt.message)
    });
}

/// Moves a user to the previous or next role.
pub fn step_user_role(app: &mut App, id: EntityId, forward: bool) {
    let Some(user) = app.lists.users.find(id) else {
        return;
    };
    let role = crate::util::step(user.role, &UserRole::ALL, forward);
    let result = app.backend.block_on(app.backend.users().set_role(id, role));
    finish(app, Page::Users, "Failed to change role", result, |user| {
        format!("{} is now {}", user.name, user.role.label())
    });
}

/// Grants or revokes the `index`-th permission of the catalog on a role.
pub fn toggle_permission(app: &mut App, role_id: EntityId, index: usize) {
    let Some(permission) = Permission::all().nth(index) else {
        return;
    };
    let result = app
        .backend
        .block_on(app.backend.roles().toggle_permission(role_id, permission.id));
    finish(app, Page::Roles, "Failed to update permissions", result, |role| {
        let state = if role.has_permission(permission.id) {
            "granted"
        } else {
            "revoked"
        };
        format!("{} {state} for {}", permission.name, role.name)
    });
}

fn finish<T>(
    app: &mut App,
    page: Page,
    context: &str,
    result: CoreResult<T>,
    describe: impl FnOnce(T) -> String,
) {
    match result {
        Ok(value) => {
            let message = describe(value);
            log::info!("{message}");
            after_mutation(app, page);
            app.set_status(message);
        }
        Err(e) => report(app, context, &e),
    }
}
