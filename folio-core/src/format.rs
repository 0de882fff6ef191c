use crate::category::Category;
use crate::controls::NavigationControls;
use crate::gallery::Gallery;
use crate::indicator::Marker;

/// Page dots, the current page filled in
pub fn format_markers(markers: &[Marker]) -> String {
    markers
        .iter()
        .map(|marker| if marker.current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Arrows around the page dots; disabled arrows render as empty brackets
pub fn format_controls(controls: &NavigationControls, markers: &[Marker]) -> String {
    if !controls.visible {
        return String::new();
    }
    let prev = if controls.previous.is_enabled() { "[<]" } else { "[ ]" };
    let next = if controls.next.is_enabled() { "[>]" } else { "[ ]" };
    format!("{} {} {}", prev, format_markers(markers), next)
}

/// Text rendering of the active page
pub fn format_page(gallery: &Gallery) -> String {
    let category = gallery.active_category();
    let record = gallery.active_record();
    let mut lines = Vec::new();

    if record.is_empty() {
        lines.push(format!("{} • no pages", category.display_name()));
    } else {
        lines.push(format!(
            "{} • Page {} of {}",
            category.display_name(),
            record.current_page + 1,
            record.total_pages
        ));
    }

    if gallery.placeholder_visible() {
        if let Some(placeholder) = gallery.placeholder() {
            lines.push(format!("  {}", placeholder.title));
            lines.push(format!("  {}", placeholder.detail));
        }
    }

    let first = record.current_page * gallery.page_size();
    for (offset, item) in gallery.visible_entries().into_iter().enumerate() {
        let images = match item.images.len() {
            0 => String::new(),
            1 => " (1 image)".to_string(),
            n => format!(" ({} images)", n),
        };
        lines.push(format!("  {}. {}{}", first + offset + 1, item.title, images));
    }

    let bar = format_controls(&gallery.controls(), gallery.markers());
    if !bar.is_empty() {
        lines.push(bar);
    }

    lines.join("\n")
}

/// One line per category with item and page counts; the active one is starred
pub fn format_category_summary(gallery: &Gallery) -> String {
    Category::all()
        .into_iter()
        .map(|category| {
            let count = gallery.catalog().count_in(category);
            let pages = gallery.record(category).total_pages;
            let marker = if gallery.is_active(category) { "*" } else { " " };
            let items = if count == 1 { "item" } else { "items" };
            let page_word = if pages == 1 { "page" } else { "pages" };
            format!(
                "{} {:<14} {:>3} {}, {} {}",
                marker,
                category.label(),
                count,
                items,
                pages,
                page_word
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
