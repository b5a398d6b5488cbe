//! Application main state

use std::time::Duration;

use intered_admin_core::utils::CopyFeedback;

use super::state::{FilterInput, ListsState, ModalState, PageList, RunningTask, SettingsState};
use super::{FocusPanel, NavigationState, Page};
use crate::backend::{AppConfig, Backend, ConfigService};

/// Application state
pub struct App {
    /// Whether to quit
    pub should_quit: bool,
    /// Current focus panel
    pub focus: FocusPanel,
    /// Navigation state
    pub navigation: NavigationState,
    /// Page shown in the content panel
    pub current_page: Page,
    /// Status bar message
    pub status_message: Option<String>,

    // === Page state ===
    pub lists: ListsState,
    pub settings: SettingsState,

    // === Overlays ===
    pub modal: ModalState,
    /// Search or date input line under the list, while editing
    pub input: Option<FilterInput>,
    /// Backup or restore running in the background
    pub task: Option<RunningTask>,
    /// "Copied!" flag of the last clipboard write
    pub copy_feedback: CopyFeedback,

    // === Services ===
    pub config: AppConfig,
    pub backend: Backend,
    pub config_service: Box<dyn ConfigService>,
}

impl App {
    pub fn new(backend: Backend, config: AppConfig, config_service: Box<dyn ConfigService>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Overview,
            status_message: None,
            lists: ListsState::new(config.day_boundary, config.detail_close),
            settings: SettingsState::new(),
            modal: ModalState::new(),
            input: None,
            task: None,
            copy_feedback: CopyFeedback::new(Duration::from_millis(config.copy_feedback_ms)),
            config,
            backend,
            config_service,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// List of the current page, `None` on Overview and Settings.
    pub fn current_list(&self) -> Option<&dyn PageList> {
        self.lists.get(self.current_page)
    }

    pub fn current_list_mut(&mut self) -> Option<&mut dyn PageList> {
        self.lists.get_mut(self.current_page)
    }
}

#[cfg(test)]
impl App {
    /// App over the seeded store with an in-memory config, before the first refresh.
    pub fn for_test() -> Self {
        use crate::backend::MemoryConfigService;

        Self::new(
            Backend::seeded().unwrap(),
            AppConfig::default(),
            Box::new(MemoryConfigService::default()),
        )
    }
}
