//! Navigation state

use super::Page;

/// Navigation item
#[derive(Debug, Clone)]
pub struct NavItem {
    pub page: Page,
    pub icon: &'static str,
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        self.page.title()
    }
}

/// Navigation state
pub struct NavigationState {
    pub items: Vec<NavItem>,
    /// Index of the highlighted item
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        let items = Page::ALL
            .iter()
            .map(|&page| NavItem {
                page,
                icon: icon(page),
            })
            .collect();
        Self { items, selected: 0 }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    pub fn current_page(&self) -> Option<Page> {
        self.current_item().map(|item| item.page)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

fn icon(page: Page) -> &'static str {
    match page {
        Page::Overview => "⌂",
        Page::ApiKeys => "⚿",
        Page::Webhooks => "⇄",
        Page::Users => "@",
        Page::Roles => "◆",
        Page::Workflows => "↻",
        Page::AuditLogs => "≣",
        Page::Backups => "▣",
        Page::Settings => "≡",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut nav = NavigationState::new();
        nav.select_previous();
        assert_eq!(nav.current_page(), Some(Page::Overview));
        nav.select_last();
        nav.select_next();
        assert_eq!(nav.current_page(), Some(Page::Settings));
    }
}
