//! Modal messages

/// Modal messages
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// Close (cancel) the modal
    Close,

    /// Next input field
    NextField,

    /// Previous input field
    PrevField,

    /// Previous choice of the focused field (←)
    Prev,

    /// Next choice of the focused field (→)
    Next,

    /// Previous row inside a detail view
    PrevItem,

    /// Next row inside a detail view
    NextItem,

    /// Confirm / submit / retry
    Confirm,

    /// Type a character
    Input(char),

    /// Delete a character
    Backspace,

    /// Toggle the highlighted row of a detail view
    Toggle,

    /// Switch between Cancel and Delete in the confirm dialog
    ToggleDeleteFocus,

    // Record actions available from the detail view
    Copy,
    Regenerate,
    ToggleStatus,
    SendTest,
}
