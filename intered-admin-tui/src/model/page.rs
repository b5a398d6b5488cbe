//! Page definitions

/// Page shown in the content panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    ApiKeys,
    Webhooks,
    Users,
    Roles,
    Workflows,
    AuditLogs,
    Backups,
    Settings,
}

impl Page {
    /// Pages in navigation order
    pub const ALL: [Self; 9] = [
        Self::Overview,
        Self::ApiKeys,
        Self::Webhooks,
        Self::Users,
        Self::Roles,
        Self::Workflows,
        Self::AuditLogs,
        Self::Backups,
        Self::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::ApiKeys => "API Keys",
            Self::Webhooks => "Webhooks",
            Self::Users => "Users",
            Self::Roles => "Roles & Permissions",
            Self::Workflows => "Workflows",
            Self::AuditLogs => "Audit Logs",
            Self::Backups => "Backup & Restore",
            Self::Settings => "Settings",
        }
    }

    /// Whether the page is a filterable record list
    pub fn is_list(self) -> bool {
        !matches!(self, Self::Overview | Self::Settings)
    }

    /// Whether the list has a timestamp the date filter can use
    pub fn has_date_filter(self) -> bool {
        self.is_list() && self != Self::Roles
    }
}
