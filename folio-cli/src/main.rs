use clap::{Parser, Subcommand};
use folio_core::{
    Category, FolioConfig, Gallery, GalleryAction, format_category_summary, format_page,
    open_gallery,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio-cli")]
#[command(about = "Browse a portfolio project catalog page by page")]
struct Cli {
    /// Catalog JSON file (defaults to the built-in sample catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Configuration JSON file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the number of projects per page
    #[arg(long, global = true)]
    per_page: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories with item and page counts
    Categories,
    /// Print one page of a category
    Show {
        /// Category label (academic, non-academic, clients)
        #[arg(short, long)]
        category: Option<String>,
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Replay a sequence of actions and print the page after each one
    Browse {
        /// Actions: next, prev, goto:<page>, filter:<category>
        #[arg(required = true)]
        actions: Vec<String>,
    },
}

fn load_config(cli: &Cli) -> Result<FolioConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => FolioConfig::load(path)?,
        None => FolioConfig::load_or_default()?,
    };
    if let Some(per_page) = cli.per_page {
        config.items_per_page = per_page;
    }
    Ok(config)
}

/// 0-based page index from a user-facing page number
fn page_index(page: usize) -> Result<usize, String> {
    page.checked_sub(1)
        .ok_or_else(|| "Page numbers start at 1".to_string())
}

fn print_page(gallery: &mut Gallery) {
    // No animation in a terminal
    gallery.finish_reveals();
    println!("{}", format_page(gallery));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut gallery = open_gallery(cli.catalog.as_deref(), &config)?;
    log::debug!("Loaded {} projects", gallery.catalog().len());

    match cli.command {
        Commands::Categories => {
            println!("{}", format_category_summary(&gallery));
        }
        Commands::Show { category, page } => {
            if let Some(label) = category {
                if Category::parse_label(&label).is_none() {
                    eprintln!("Unknown category '{}'", label);
                    std::process::exit(1);
                }
                gallery.select_label(&label);
            }
            let index = match page_index(page) {
                Ok(index) => index,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            if index > 0 && gallery.go_to(index).is_empty() {
                eprintln!(
                    "Page {} does not exist, {} has {} page(s)",
                    page,
                    gallery.active_category(),
                    gallery.active_record().total_pages
                );
                std::process::exit(1);
            }
            print_page(&mut gallery);
        }
        Commands::Browse { actions } => {
            print_page(&mut gallery);
            for raw in actions {
                let action: GalleryAction = match raw.parse() {
                    Ok(action) => action,
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                };
                gallery.apply(action);
                println!("\n> {}", raw);
                print_page(&mut gallery);
            }
        }
    }

    Ok(())
}
