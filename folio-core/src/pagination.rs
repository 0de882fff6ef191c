use std::collections::HashMap;
use std::ops::Range;
use tracing::debug;

use crate::category::Category;

/// Paging position for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRecord {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageRecord {
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }
}

/// Per-category pagination state, one record for every known category
#[derive(Debug, Clone)]
pub struct PaginationStore {
    records: HashMap<Category, PageRecord>,
    page_size: usize,
}

impl PaginationStore {
    /// `page_size` of zero is treated as one; callers validate configuration first
    pub fn new(page_size: usize) -> Self {
        let records = Category::all()
            .into_iter()
            .map(|category| (category, PageRecord::default()))
            .collect();
        Self {
            records,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn record(&self, category: Category) -> PageRecord {
        self.records.get(&category).copied().unwrap_or_default()
    }

    fn record_mut(&mut self, category: Category) -> &mut PageRecord {
        self.records.entry(category).or_default()
    }

    /// Derive the page count from `item_count` and go back to the first page
    pub fn recompute(&mut self, category: Category, item_count: usize) {
        let total_pages = item_count.div_ceil(self.page_size);
        let record = self.record_mut(category);
        record.total_pages = total_pages;
        record.current_page = 0;
        debug!(%category, item_count, total_pages, "Recomputed pagination");
    }

    pub fn can_retreat(&self, category: Category) -> bool {
        self.record(category).can_go_prev()
    }

    pub fn can_advance(&self, category: Category) -> bool {
        self.record(category).can_go_next()
    }

    pub fn advance(&mut self, category: Category) -> bool {
        let record = self.record_mut(category);
        if record.can_go_next() {
            record.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn retreat(&mut self, category: Category) -> bool {
        let record = self.record_mut(category);
        if record.can_go_prev() {
            record.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn go_to(&mut self, category: Category, page: usize) -> bool {
        let record = self.record_mut(category);
        if page < record.total_pages {
            record.current_page = page;
            true
        } else {
            false
        }
    }

    /// Positions within the category's item list that fall on the current page
    pub fn page_range(&self, category: Category, item_count: usize) -> Range<usize> {
        let start = self.record(category).current_page * self.page_size;
        let end = (start + self.page_size).min(item_count);
        start.min(end)..end
    }
}
