//! Content panel messages

/// Content panel messages
#[derive(Debug, Clone)]
pub enum ContentMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    /// Open the detail of the highlighted record, or run the highlighted setting
    Confirm,

    /// Open the create dialog of the page
    Add,

    /// Ask to delete the highlighted record
    Delete,

    /// Edit the search query
    StartSearch,

    /// Edit the date filter
    StartDate,

    /// Step the facet bound to the number key (0-based)
    CycleFacet(usize),

    /// Reset search, facets and date
    ClearFilters,

    /// Copy the highlighted API key
    Copy,

    /// Regenerate the highlighted API key
    Regenerate,

    /// Activate / deactivate the highlighted record
    ToggleStatus,

    /// Send a test delivery for the highlighted webhook
    SendTest,

    /// Open the restore dialog
    Restore,

    /// Previous value of the highlighted setting
    TogglePrev,

    /// Next value of the highlighted setting
    ToggleNext,
}
