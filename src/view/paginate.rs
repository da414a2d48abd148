/// Tracks how many items of the working set are materialized for display.
///
/// The count only ever grows within a filter context; switching filters
/// resets it (the view state wires that up).
#[derive(Debug, Clone)]
pub struct Pager {
    display_count: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager::new()
    }
}

impl Pager {
    pub const PAGE_SIZE: usize = 12;

    pub fn new() -> Pager {
        Pager::with_page_size(Self::PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Pager {
        let page_size = page_size.max(1);
        Pager {
            display_count: page_size,
            page_size,
        }
    }

    /// Back to page one.
    pub fn reset(&mut self) {
        self.display_count = self.page_size;
    }

    /// Materialize one more page.
    pub fn advance(&mut self) {
        self.display_count += self.page_size;
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    /// How many items to actually render for a working set of `total`.
    pub fn visible_len(&self, total: usize) -> usize {
        self.display_count.min(total)
    }

    /// Whether a load-more control should be offered.
    pub fn has_more(&self, total: usize) -> bool {
        self.display_count < total
    }
}
