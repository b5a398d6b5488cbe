//! Filter input line

/// Which filter the input line edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Free-text search, applied on every keystroke
    Search,
    /// `YYYY-MM-DD` date, applied on Enter
    Date,
}

/// Input line open under a list page
#[derive(Debug, Clone)]
pub struct FilterInput {
    pub kind: FilterKind,
    pub buffer: String,
    /// Query to restore when the edit is cancelled
    pub original: String,
    /// Parse error of the last commit
    pub error: Option<String>,
}

impl FilterInput {
    pub fn new(kind: FilterKind, current: String) -> Self {
        Self {
            kind,
            buffer: current.clone(),
            original: current,
            error: None,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.kind {
            FilterKind::Search => "Search",
            FilterKind::Date => "Date (YYYY-MM-DD)",
        }
    }
}
