pub mod catalog;
pub mod category;
pub mod config;
pub mod controls;
pub mod error;
pub mod format;
pub mod gallery;
pub mod indicator;
pub mod pager;
pub mod pagination;
pub mod reveal;

use std::path::Path;

pub use catalog::{Catalog, Item};
pub use category::{Category, CategoryFilter};
pub use config::FolioConfig;
pub use controls::{ControlState, NavigationControls};
pub use error::FolioError;
pub use format::{format_category_summary, format_controls, format_markers, format_page};
pub use gallery::{Gallery, GalleryAction};
pub use indicator::{Marker, PageIndicator};
pub use pager::{Pager, Placeholder, RevealTicket, RevealTiming, Visibility, visible_items};
pub use pagination::{PageRecord, PaginationStore};
pub use reveal::{RevealScheduler, wait_for_reveal};

/// Build a gallery from a catalog file, or the built-in sample when no path is given
pub fn open_gallery(
    catalog_path: Option<&Path>,
    config: &FolioConfig,
) -> Result<Gallery, FolioError> {
    config.validate()?;
    let catalog = match catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample()?,
    };
    Ok(Gallery::new(catalog, config))
}
