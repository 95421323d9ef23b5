use crate::model::PageResult;

/// A navigation request from the pager controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Prev,
    Next,
    Last,
    /// Jump straight to a page number
    To(u32),
}

/// Labels and control states for the pager, derived from the latest result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub total: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

impl PaginationView {
    pub fn new(result: &PageResult, current_page: u32, limit: u32) -> Self {
        Self {
            total: result.total,
            current_page,
            total_pages: result.page_count(limit),
        }
    }

    pub fn results_label(&self) -> String {
        format!("Recipes ({} total)", self.total)
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }

    pub fn first_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn prev_disabled(&self) -> bool {
        self.first_disabled()
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn last_disabled(&self) -> bool {
        self.next_disabled()
    }

    /// Page a control leads to, or `None` when that control is disabled.
    pub fn target(&self, action: NavAction) -> Option<u32> {
        match action {
            NavAction::First if !self.first_disabled() => Some(1),
            NavAction::Prev if !self.prev_disabled() => Some(self.current_page - 1),
            NavAction::Next if !self.next_disabled() => Some(self.current_page + 1),
            NavAction::Last if !self.last_disabled() => Some(self.total_pages),
            NavAction::To(page) if (1..=self.total_pages).contains(&page) => Some(page),
            _ => None,
        }
    }
}
