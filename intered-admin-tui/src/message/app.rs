//! Application main message

use super::{ContentMessage, FilterMessage, ModalMessage, NavigationMessage};

/// Application main message
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Switch between the navigation and content panels
    ToggleFocus,

    /// Navigation panel messages
    Navigation(NavigationMessage),

    /// Content panel messages
    Content(ContentMessage),

    /// Modal messages
    Modal(ModalMessage),

    /// Search / date input line messages
    Filter(FilterMessage),

    /// Back to the navigation panel
    GoBack,

    /// Reload every page from the services
    Refresh,

    /// Show help
    ShowHelp,

    /// Clear the status bar message
    ClearStatus,

    /// Main loop heartbeat: task progress, expiring flags
    Tick,

    /// No operation (unhandled events)
    Noop,
}
