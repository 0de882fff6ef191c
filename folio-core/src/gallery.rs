//! Event-level glue between the category filter, pagination store, pager,
//! page indicator and navigation controls.
//!
//! Every mutation goes through one method here and ends with a full refresh,
//! so visibility, markers and arrow states never disagree with the store.

use std::str::FromStr;
use tracing::{debug, info};

use crate::catalog::{Catalog, Item};
use crate::category::{Category, CategoryFilter};
use crate::config::FolioConfig;
use crate::controls::NavigationControls;
use crate::error::FolioError;
use crate::indicator::{Marker, PageIndicator};
use crate::pager::{self, Pager, Placeholder, RevealTicket, Visibility};
use crate::pagination::{PageRecord, PaginationStore};

/// User interaction the gallery responds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    /// Filter button, by attribute label
    Select(String),
    Previous,
    Next,
    /// Marker click, 0-based page index
    GoTo(usize),
}

impl FromStr for GalleryAction {
    type Err = FolioError;

    /// Accepts `next`, `prev`/`previous`, `goto:<page>` (1-based) and `filter:<label>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "next" => return Ok(GalleryAction::Next),
            "prev" | "previous" => return Ok(GalleryAction::Previous),
            _ => {}
        }

        if let Some((verb, arg)) = s.split_once(':') {
            let arg = arg.trim();
            match verb.trim().to_ascii_lowercase().as_str() {
                "filter" if !arg.is_empty() => {
                    return Ok(GalleryAction::Select(arg.to_string()));
                }
                "goto" => {
                    return match arg.parse::<usize>() {
                        Ok(page) if page > 0 => Ok(GalleryAction::GoTo(page - 1)),
                        _ => Err(FolioError::InvalidAction(format!(
                            "'{}': page numbers start at 1",
                            s
                        ))),
                    };
                }
                _ => {}
            }
        }

        Err(FolioError::InvalidAction(format!("'{}'", s)))
    }
}

#[derive(Debug)]
pub struct Gallery {
    catalog: Catalog,
    filter: CategoryFilter,
    store: PaginationStore,
    pager: Pager,
    indicator: PageIndicator,
    controls: NavigationControls,
    pending_reveals: Vec<RevealTicket>,
}

impl Gallery {
    pub fn new(catalog: Catalog, config: &FolioConfig) -> Self {
        let mut store = PaginationStore::new(config.items_per_page);
        for category in Category::all() {
            store.recompute(category, catalog.count_in(category));
        }

        let pager = Pager::new(catalog.len(), config.reveal_timing());
        let mut gallery = Self {
            catalog,
            filter: CategoryFilter::new(config.initial_category),
            store,
            pager,
            indicator: PageIndicator::new(),
            controls: NavigationControls::new(),
            pending_reveals: Vec::new(),
        };
        gallery.pending_reveals = gallery.refresh();

        info!(
            items = gallery.catalog.len(),
            page_size = gallery.store.page_size(),
            active = %gallery.active_category(),
            "Gallery initialized"
        );
        gallery
    }

    /// Reveal tickets issued while constructing the gallery
    pub fn take_pending_reveals(&mut self) -> Vec<RevealTicket> {
        std::mem::take(&mut self.pending_reveals)
    }

    pub fn apply(&mut self, action: GalleryAction) -> Vec<RevealTicket> {
        debug!(?action, "Applying gallery action");
        match action {
            GalleryAction::Select(label) => self.select_label(&label),
            GalleryAction::Previous => self.previous(),
            GalleryAction::Next => self.next(),
            GalleryAction::GoTo(page) => self.go_to(page),
        }
    }

    /// Activate `category`, starting it over from its first page
    pub fn select_category(&mut self, category: Category) -> Vec<RevealTicket> {
        self.filter.set_active(category);
        self.store.recompute(category, self.catalog.count_in(category));
        self.refresh()
    }

    /// Unknown labels are ignored
    pub fn select_label(&mut self, label: &str) -> Vec<RevealTicket> {
        match self.filter.select_label(label) {
            Some(category) => self.select_category(category),
            None => Vec::new(),
        }
    }

    pub fn previous(&mut self) -> Vec<RevealTicket> {
        let category = self.active_category();
        if self.controls.previous.is_enabled() && self.store.retreat(category) {
            self.refresh()
        } else {
            Vec::new()
        }
    }

    pub fn next(&mut self) -> Vec<RevealTicket> {
        let category = self.active_category();
        if self.controls.next.is_enabled() && self.store.advance(category) {
            self.refresh()
        } else {
            Vec::new()
        }
    }

    pub fn go_to(&mut self, page: usize) -> Vec<RevealTicket> {
        let category = self.active_category();
        if self.store.go_to(category, page) {
            self.refresh()
        } else {
            debug!(%category, page, "Ignoring jump to missing page");
            Vec::new()
        }
    }

    // Visibility first, then markers and arrows
    fn refresh(&mut self) -> Vec<RevealTicket> {
        let category = self.active_category();
        let tickets = self.pager.refresh(&self.catalog, &self.store, category);
        self.indicator.render(&self.store, category);
        self.controls.update(&self.store, category);
        tickets
    }

    /// Bumped by every refresh, including ones that display nothing
    pub fn generation(&self) -> u64 {
        self.pager.generation()
    }

    pub fn complete_reveal(&mut self, ticket: RevealTicket) -> bool {
        self.pager.complete_reveal(ticket)
    }

    pub fn finish_reveals(&mut self) {
        self.pager.finish_reveals();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn page_size(&self) -> usize {
        self.store.page_size()
    }

    pub fn active_category(&self) -> Category {
        self.filter.active()
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.filter.is_active(category)
    }

    pub fn record(&self, category: Category) -> PageRecord {
        self.store.record(category)
    }

    pub fn active_record(&self) -> PageRecord {
        self.store.record(self.active_category())
    }

    /// Catalog indices on the active page, computed from the store
    pub fn visible_items(&self) -> Vec<usize> {
        pager::visible_items(&self.catalog, &self.store, self.active_category())
    }

    /// Items on the active page, in document order
    pub fn visible_entries(&self) -> Vec<&Item> {
        self.visible_items()
            .into_iter()
            .filter_map(|index| self.catalog.get(index))
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible_entries()
            .into_iter()
            .map(|item| item.id.as_str())
            .collect()
    }

    /// Catalog indices the pager currently displays
    pub fn displayed_items(&self) -> Vec<usize> {
        self.pager.displayed()
    }

    pub fn visibility(&self, item: usize) -> Visibility {
        self.pager.visibility(item)
    }

    pub fn markers(&self) -> &[Marker] {
        self.indicator.markers()
    }

    pub fn controls(&self) -> NavigationControls {
        self.controls
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.pager.placeholder()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.pager.placeholder_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ControlState;

    fn portfolio(academic: usize, non_academic: usize) -> Catalog {
        let mut items = Vec::new();
        for i in 0..academic {
            items.push(Item::new(&format!("a{}", i), "Academic", Category::Academic));
        }
        for i in 0..non_academic {
            items.push(Item::new(&format!("n{}", i), "Other", Category::NonAcademic));
        }
        Catalog::new(items).unwrap()
    }

    fn gallery(academic: usize, non_academic: usize) -> Gallery {
        Gallery::new(portfolio(academic, non_academic), &FolioConfig::default())
    }

    fn assert_markers_match(gallery: &Gallery) {
        let record = gallery.active_record();
        assert_eq!(gallery.markers().len(), record.total_pages);
        let current: Vec<_> = gallery.markers().iter().filter(|m| m.current).collect();
        if record.total_pages == 0 {
            assert!(current.is_empty());
        } else {
            assert_eq!(current.len(), 1);
            assert_eq!(current[0].page, record.current_page);
        }
    }

    #[test]
    fn startup_shows_first_page_of_initial_category() {
        let mut gallery = gallery(8, 4);
        assert_eq!(gallery.active_category(), Category::Academic);
        assert_eq!(gallery.visible_ids(), vec!["a0", "a1", "a2"]);
        assert_eq!(gallery.take_pending_reveals().len(), 3);
        assert!(gallery.take_pending_reveals().is_empty());
        assert_markers_match(&gallery);
    }

    #[test]
    fn every_category_recomputed_at_startup() {
        let gallery = gallery(8, 4);
        assert_eq!(gallery.record(Category::Academic).total_pages, 3);
        assert_eq!(gallery.record(Category::NonAcademic).total_pages, 2);
        assert_eq!(gallery.record(Category::Clients).total_pages, 0);
    }

    #[test]
    fn academic_walkthrough() {
        let mut gallery = gallery(8, 0);

        gallery.next();
        gallery.next();
        assert_eq!(gallery.active_record().current_page, 2);
        assert_eq!(gallery.visible_ids(), vec!["a6", "a7"]);
        assert_eq!(gallery.controls().next, ControlState::Disabled);

        assert!(gallery.next().is_empty());
        assert_eq!(gallery.active_record().current_page, 2);
        assert_markers_match(&gallery);
    }

    #[test]
    fn previous_at_first_page_is_noop() {
        let mut gallery = gallery(8, 0);
        assert_eq!(gallery.controls().previous, ControlState::Disabled);
        assert!(gallery.previous().is_empty());
        assert_eq!(gallery.active_record().current_page, 0);
    }

    #[test]
    fn empty_category_shows_placeholder_and_hides_controls() {
        let mut gallery = gallery(8, 4);
        let tickets = gallery.select_category(Category::Clients);

        assert!(tickets.is_empty());
        assert_eq!(gallery.active_record().total_pages, 0);
        assert!(gallery.visible_items().is_empty());
        assert!(gallery.displayed_items().is_empty());
        assert!(gallery.placeholder_visible());
        assert!(!gallery.controls().visible);
        assert!(!gallery.controls().previous.is_enabled());
        assert!(!gallery.controls().next.is_enabled());
        assert_markers_match(&gallery);
    }

    #[test]
    fn reactivation_resets_page() {
        let mut gallery = gallery(8, 4);
        gallery.next();
        gallery.next();
        assert_eq!(gallery.active_record().current_page, 2);

        gallery.select_category(Category::NonAcademic);
        assert_eq!(gallery.active_record().current_page, 0);
        assert_eq!(gallery.visible_ids(), vec!["n0", "n1", "n2"]);

        gallery.select_category(Category::Academic);
        assert_eq!(gallery.active_record().current_page, 0);
        assert_eq!(gallery.visible_ids(), vec!["a0", "a1", "a2"]);
    }

    #[test]
    fn reselecting_active_category_resets_page() {
        let mut gallery = gallery(8, 0);
        gallery.next();
        gallery.select_category(Category::Academic);
        assert_eq!(gallery.active_record().current_page, 0);
    }

    #[test]
    fn only_refreshing_actions_bump_generation() {
        let mut gallery = gallery(8, 0);
        let start = gallery.generation();
        gallery.previous();
        assert_eq!(gallery.generation(), start);
        gallery.select_category(Category::Clients);
        assert_eq!(gallery.generation(), start + 1);
    }

    #[test]
    fn marker_jump_sets_page_directly() {
        let mut gallery = gallery(8, 0);
        let tickets = gallery.go_to(1);
        assert_eq!(gallery.active_record().current_page, 1);
        assert_eq!(gallery.visible_ids(), vec!["a3", "a4", "a5"]);
        assert_eq!(tickets.len(), 3);
        assert_markers_match(&gallery);
    }

    #[test]
    fn marker_jump_out_of_range_is_ignored() {
        let mut gallery = gallery(8, 0);
        gallery.go_to(1);
        assert!(gallery.go_to(7).is_empty());
        assert_eq!(gallery.active_record().current_page, 1);
    }

    #[test]
    fn unknown_label_leaves_state_untouched() {
        let mut gallery = gallery(8, 4);
        gallery.next();
        assert!(gallery.select_label("sculpture").is_empty());
        assert_eq!(gallery.active_category(), Category::Academic);
        assert_eq!(gallery.active_record().current_page, 1);
    }

    #[test]
    fn pager_display_matches_visible_items() {
        let mut gallery = gallery(8, 4);
        gallery.next();
        assert_eq!(gallery.displayed_items(), gallery.visible_items());
        gallery.select_label("non-academic");
        assert_eq!(gallery.displayed_items(), gallery.visible_items());
    }

    #[test]
    fn reveal_from_previous_page_is_discarded() {
        let mut gallery = gallery(8, 0);
        let stale = gallery.take_pending_reveals();
        gallery.next();
        for ticket in stale {
            assert!(!gallery.complete_reveal(ticket));
            assert_eq!(gallery.visibility(ticket.item), Visibility::Hidden);
        }
    }

    #[test]
    fn custom_page_size() {
        let config = FolioConfig {
            items_per_page: 4,
            initial_category: Category::NonAcademic,
            ..Default::default()
        };
        let gallery = Gallery::new(portfolio(8, 5), &config);
        assert_eq!(gallery.active_category(), Category::NonAcademic);
        assert_eq!(gallery.record(Category::NonAcademic).total_pages, 2);
        assert_eq!(gallery.record(Category::Academic).total_pages, 2);
        assert_eq!(gallery.visible_ids().len(), 4);
    }

    #[test]
    fn invariants_hold_across_action_sequence() {
        let mut gallery = gallery(7, 5);
        let script = [
            "next", "next", "next", "prev", "goto:3", "filter:non-academic", "next", "next",
            "goto:1", "filter:clients", "next", "prev", "filter:academic", "goto:9", "prev",
        ];
        for step in script {
            let action: GalleryAction = step.parse().unwrap();
            gallery.apply(action);

            let record = gallery.active_record();
            if record.total_pages > 0 {
                assert!(record.current_page < record.total_pages);
            } else {
                assert_eq!(record.current_page, 0);
            }
            assert!(gallery.visible_items().len() <= gallery.page_size());
            assert_eq!(gallery.displayed_items(), gallery.visible_items());
            assert_markers_match(&gallery);
        }
    }

    #[test]
    fn parse_actions() {
        assert_eq!("next".parse::<GalleryAction>().unwrap(), GalleryAction::Next);
        assert_eq!(" Prev ".parse::<GalleryAction>().unwrap(), GalleryAction::Previous);
        assert_eq!(
            "previous".parse::<GalleryAction>().unwrap(),
            GalleryAction::Previous
        );
        assert_eq!(
            "goto:2".parse::<GalleryAction>().unwrap(),
            GalleryAction::GoTo(1)
        );
        assert_eq!(
            "filter:clients".parse::<GalleryAction>().unwrap(),
            GalleryAction::Select("clients".to_string())
        );
    }

    #[test]
    fn malformed_actions_are_rejected() {
        for bad in ["", "jump", "goto:0", "goto:x", "filter:", "rewind:2"] {
            assert!(
                matches!(bad.parse::<GalleryAction>(), Err(FolioError::InvalidAction(_))),
                "expected '{}' to be rejected",
                bad
            );
        }
    }
}
