use crate::category::Category;
use crate::pagination::PaginationStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Enabled,
    Disabled,
}

impl ControlState {
    fn from_enabled(enabled: bool) -> Self {
        if enabled {
            ControlState::Enabled
        } else {
            ControlState::Disabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self == ControlState::Enabled
    }
}

/// Previous/next arrows plus the visibility of the whole pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationControls {
    pub previous: ControlState,
    pub next: ControlState,
    pub visible: bool,
}

impl NavigationControls {
    pub fn new() -> Self {
        Self {
            previous: ControlState::Disabled,
            next: ControlState::Disabled,
            visible: false,
        }
    }

    pub fn update(&mut self, store: &PaginationStore, category: Category) {
        let record = store.record(category);
        self.previous = ControlState::from_enabled(record.can_go_prev());
        self.next = ControlState::from_enabled(record.can_go_next());
        self.visible = !record.is_empty();
    }
}

impl Default for NavigationControls {
    fn default() -> Self {
        Self::new()
    }
}
