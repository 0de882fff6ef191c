use crate::category::Category;
use crate::pagination::PaginationStore;

/// One clickable page dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub page: usize,
    pub current: bool,
}

impl Marker {
    /// 1-based page number as shown to users
    pub fn label(&self) -> usize {
        self.page + 1
    }
}

/// Page markers for the active category
#[derive(Debug, Clone, Default)]
pub struct PageIndicator {
    markers: Vec<Marker>,
}

impl PageIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the previous markers with one per page of `category`
    pub fn render(&mut self, store: &PaginationStore, category: Category) {
        let record = store.record(category);
        self.markers.clear();
        self.markers.extend((0..record.total_pages).map(|page| Marker {
            page,
            current: page == record.current_page,
        }));
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn current(&self) -> Option<Marker> {
        self.markers.iter().copied().find(|marker| marker.current)
    }
}
