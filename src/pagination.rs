use serde::Serialize;

/// Shape of the page-number strip rendered under a lead table.
#[derive(Clone, Copy, Debug)]
pub struct PageWindow {
    /// Pages always shown at the start.
    pub left_edge: usize,
    /// Pages shown before the current one.
    pub left_current: usize,
    /// Pages shown after the current one.
    pub right_current: usize,
    /// Pages always shown at the end.
    pub right_edge: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            left_edge: 2,
            left_current: 2,
            right_current: 4,
            right_edge: 2,
        }
    }
}

impl PageWindow {
    /// Page numbers to display, `None` marking an elided gap.
    ///
    /// `current_page` is clamped into `1..=total_pages`, so a page past the
    /// end centres the strip on the last page.
    pub fn pages(&self, total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
        if total_pages == 0 {
            return Vec::new();
        }

        let current = current_page.clamp(1, total_pages);
        let around = current.saturating_sub(self.left_current)
            ..=current.saturating_add(self.right_current);
        let right_start = total_pages.saturating_sub(self.right_edge).saturating_add(1);
        let shown = |page: usize| {
            page <= self.left_edge || around.contains(&page) || page >= right_start
        };

        let mut pages = Vec::new();
        for page in 1..=total_pages {
            if shown(page) {
                pages.push(Some(page));
            } else if pages.last() != Some(&None) {
                pages.push(None);
            }
        }
        pages
    }
}

/// One page of items plus the page strip around it.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let page = current_page.max(1);
        let pages = PageWindow::default().pages(total_pages, page);

        Self { items, pages, page }
    }
}
