//! Navigation panel messages

#[derive(Debug, Clone)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Open the highlighted page
    Confirm,
}
