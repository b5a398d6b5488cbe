//! Loading page data from the services

use intered_admin_core::CoreResult;

use super::report;
use crate::model::{App, Page};

/// Replaces the records of `page` with a fresh snapshot from its service.
pub fn reload(app: &mut App, page: Page) {
    let backend = &app.backend;
    let lists = &mut app.lists;
    let result: CoreResult<()> = match page {
        Page::ApiKeys => backend
            .block_on(backend.api_keys().list())
            .map(|records| lists.api_keys.replace_records(records)),
        Page::Webhooks => backend
            .block_on(backend.webhooks().list())
            .map(|records| lists.webhooks.replace_records(records)),
        Page::Users => backend
            .block_on(backend.users().list())
            .map(|records| lists.users.replace_records(records)),
        Page::Roles => backend
            .block_on(backend.roles().list())
            .map(|records| lists.roles.replace_records(records)),
        Page::Workflows => backend
            .block_on(backend.workflows().list())
            .map(|records| lists.workflows.replace_records(records)),
        Page::AuditLogs => backend
            .block_on(backend.audit_logs().list())
            .map(|records| lists.audit_logs.replace_records(records)),
        Page::Backups => backend
            .block_on(backend.backups().list())
            .map(|records| lists.backups.replace_records(records)),
        Page::Settings => {
            let settings = &mut app.settings;
            backend
                .block_on(backend.settings().get())
                .map(|platform| settings.platform = platform)
        }
        // derived from the other lists
        Page::Overview => Ok(()),
    };

    if let Err(e) = result {
        report(app, &format!("Failed to load {}", page.title()), &e);
    }
}

/// Reloads every page.
pub fn reload_all(app: &mut App) {
    for page in Page::ALL {
        reload(app, page);
    }
    log::debug!("All pages reloaded");
}

/// Reloads `page` and the audit trail a mutation on it has written to.
pub fn after_mutation(app: &mut App, page: Page) {
    reload(app, page);
    if page != Page::AuditLogs {
        reload(app, Page::AuditLogs);
    }
    // user counts on roles follow user changes
    if page == Page::Users {
        reload(app, Page::Roles);
    }
}
