use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::FolioError;

/// Project category - every catalog item carries exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Academic,
    NonAcademic,
    Clients,
}

impl Category {
    /// All categories in filter-button order
    pub fn all() -> Vec<Category> {
        vec![Category::Academic, Category::NonAcademic, Category::Clients]
    }

    /// Attribute label as it appears in catalog files and on the command line
    pub fn label(&self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::NonAcademic => "non-academic",
            Category::Clients => "clients",
        }
    }

    /// Human-readable name for filter buttons
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Academic => "Academic",
            Category::NonAcademic => "Non-Academic",
            Category::Clients => "Clients",
        }
    }

    pub fn parse_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Category::all()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse_label(s)
            .ok_or_else(|| FolioError::Config(format!("unknown category '{}'", s.trim())))
    }
}

/// Tracks the single active category
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    active: Category,
}

impl CategoryFilter {
    pub fn new(initial: Category) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.active == category
    }

    /// Returns whether the active category changed
    pub fn set_active(&mut self, category: Category) -> bool {
        if self.active == category {
            return false;
        }
        debug!(from = %self.active, to = %category, "Active category changed");
        self.active = category;
        true
    }

    /// String-facing selection; unknown labels leave the filter untouched
    pub fn select_label(&mut self, label: &str) -> Option<Category> {
        match Category::parse_label(label) {
            Some(category) => {
                self.set_active(category);
                Some(category)
            }
            None => {
                warn!(label, "Ignoring unknown category");
                None
            }
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new(Category::Academic)
    }
}
