mod app;

use folio_core::{FolioConfig, open_gallery};
use std::path::PathBuf;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            // Override via RUST_LOG, e.g. RUST_LOG=folio_core::pager=debug
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_core=info,folio_gui=info".into()),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    // Optional catalog file as the only argument
    let catalog_path = std::env::args().nth(1).map(PathBuf::from);

    let config = match FolioConfig::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let gallery = match open_gallery(catalog_path.as_deref(), &config) {
        Ok(gallery) => gallery,
        Err(e) => {
            eprintln!("Failed to open catalog: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Opened gallery with {} projects", gallery.catalog().len());

    iced::application("Portfolio Projects", app::update, app::view)
        .run_with(move || app::initialize(gallery))
}
