//! Filter input line messages

#[derive(Debug, Clone)]
pub enum FilterMessage {
    Input(char),
    Backspace,
    /// Apply and close the input line
    Commit,
    /// Restore the previous value and close
    Cancel,
}
