use std::time::Duration;
use tracing::debug;

use crate::catalog::Catalog;
use crate::category::Category;
use crate::pagination::PaginationStore;

pub const PLACEHOLDER_TITLE: &str = "No projects available in this category";
pub const PLACEHOLDER_DETAIL: &str = "Check back later for new projects!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Revealing, // Displayed, waiting for its staggered fade-in
    Shown,
}

impl Visibility {
    pub fn is_displayed(&self) -> bool {
        !matches!(self, Visibility::Hidden)
    }
}

/// A pending fade-in for one item, valid only for the refresh that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    pub item: usize,
    pub delay: Duration,
    pub generation: u64,
}

/// Message shown in place of the grid when a category has no items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub title: &'static str,
    pub detail: &'static str,
    pub visible: bool,
}

impl Placeholder {
    fn new() -> Self {
        Self {
            title: PLACEHOLDER_TITLE,
            detail: PLACEHOLDER_DETAIL,
            visible: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub delay: Duration,
    pub stagger: Duration,
}

impl RevealTiming {
    pub fn delay_for(&self, position: usize) -> Duration {
        self.delay + self.stagger * position as u32
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(50),
            stagger: Duration::from_millis(100),
        }
    }
}

/// Catalog indices visible for `category` on its current page, in document order
pub fn visible_items(catalog: &Catalog, store: &PaginationStore, category: Category) -> Vec<usize> {
    let indices = catalog.indices_in(category);
    let range = store.page_range(category, indices.len());
    indices[range].to_vec()
}

/// Owns item visibility and the empty-category placeholder
#[derive(Debug, Clone)]
pub struct Pager {
    visibility: Vec<Visibility>,
    generation: u64,
    placeholder: Option<Placeholder>,
    timing: RevealTiming,
}

impl Pager {
    pub fn new(item_count: usize, timing: RevealTiming) -> Self {
        Self {
            visibility: vec![Visibility::Hidden; item_count],
            generation: 0,
            placeholder: None,
            timing,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn visibility(&self, item: usize) -> Visibility {
        self.visibility
            .get(item)
            .copied()
            .unwrap_or(Visibility::Hidden)
    }

    /// Catalog indices currently displayed (revealing or shown)
    pub fn displayed(&self) -> Vec<usize> {
        self.visibility
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_displayed())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder.as_ref().is_some_and(|p| p.visible)
    }

    /// Hide everything, then display the current page of `category`.
    /// Returns one reveal ticket per displayed item.
    pub fn refresh(
        &mut self,
        catalog: &Catalog,
        store: &PaginationStore,
        category: Category,
    ) -> Vec<RevealTicket> {
        self.generation += 1;
        self.visibility.fill(Visibility::Hidden);

        let visible = visible_items(catalog, store, category);
        let mut tickets = Vec::with_capacity(visible.len());
        for (position, &item) in visible.iter().enumerate() {
            if let Some(slot) = self.visibility.get_mut(item) {
                *slot = Visibility::Revealing;
                tickets.push(RevealTicket {
                    item,
                    delay: self.timing.delay_for(position),
                    generation: self.generation,
                });
            }
        }

        if catalog.count_in(category) == 0 {
            self.placeholder.get_or_insert_with(Placeholder::new).visible = true;
        } else if let Some(placeholder) = self.placeholder.as_mut() {
            placeholder.visible = false;
        }

        debug!(
            %category,
            generation = self.generation,
            visible = ?visible,
            "Pager refreshed"
        );
        tickets
    }

    /// Finish a staggered reveal; stale tickets from an earlier refresh are ignored
    pub fn complete_reveal(&mut self, ticket: RevealTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match self.visibility.get_mut(ticket.item) {
            Some(slot) if *slot == Visibility::Revealing => {
                *slot = Visibility::Shown;
                true
            }
            _ => false,
        }
    }

    /// Skip the fade-in for every pending item
    pub fn finish_reveals(&mut self) {
        for slot in self.visibility.iter_mut() {
            if *slot == Visibility::Revealing {
                *slot = Visibility::Shown;
            }
        }
    }
}
