//! AndroNES library launcher
//!
//! # Commands
//!
//! - `andrones` / `andrones list` - Show the catalog
//! - `andrones import <file>` - Copy a cartridge into private storage
//! - `andrones launch <query>` - Start the engine for a title
//! - `andrones provision` - Write the default companion script
//! - `andrones config` - Print the effective configuration
//!
//! Display flags (`--width`, `--height`, `--tv`, `--api-level`) override
//! the `[display]` section of config.toml for this run.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use andrones_core::app::{Config, LibraryView, config};
use andrones_core::launch_entry;
use andrones_core::library::{
    CatalogEntry, CatalogScanner, CategoryStore, DirAssetSource, FileReference, JsonCategoryStore,
    LookupError,
};
use andrones_library::{DesktopHost, EngineLauncher, provision_companion_script};

/// AndroNES - cartridge library and engine launcher
#[derive(Parser)]
#[command(name = "andrones")]
#[command(about = "Cartridge library and engine launcher for AndroNES")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Display width in pixels
    #[arg(long, global = true)]
    width: Option<i32>,

    /// Display height in pixels
    #[arg(long, global = true)]
    height: Option<i32>,

    /// Report a television-class display
    #[arg(long, global = true)]
    tv: bool,

    /// Host API level used to pick the dimension probe
    #[arg(long, global = true)]
    api_level: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog
    List,

    /// Import a cartridge file into private storage
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Launch a title by name
    Launch {
        /// Title, unique prefix, or source path
        query: String,

        /// Alternate mode (adds the overlay cartridge)
        #[arg(long)]
        alt: bool,

        /// Wait for the engine to exit
        #[arg(long)]
        wait: bool,
    },

    /// Write the default companion script if missing
    Provision,

    /// Print the effective configuration
    Config,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.display.width = width;
        }
        if let Some(height) = self.height {
            config.display.height = height;
        }
        if self.tv {
            config.display.tv_mode = true;
        }
        if let Some(api_level) = self.api_level {
            config.display.api_level = api_level;
        }
    }
}

/// Category store used when no data directory exists.
struct Unrecorded;

impl CategoryStore for Unrecorded {
    fn add_to_category(&mut self, entry: &CatalogEntry, category: &str) -> Result<()> {
        tracing::debug!(
            "No data directory, not recording {} in '{}'",
            entry.display_name,
            category
        );
        Ok(())
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = config::load();
    cli.apply_overrides(&mut config);

    let storage = config.storage_layout();
    let assets = DirAssetSource::new(config.assets_dir());
    let scanner = CatalogScanner::new(&storage, &assets);

    let provisioned = provision_companion_script(&storage);

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => {
            let view = LibraryView::scanned(&scanner);
            print!("{}", view.presentation());
        }
        Commands::Import { file } => {
            let mut view = LibraryView::scanned(&scanner);
            let notification = view.import(&FileReference::new(file), &scanner);
            println!("{}", notification);
            print!("{}", view.presentation());
        }
        Commands::Launch { query, alt, wait } => {
            let view = LibraryView::scanned(&scanner);

            let entry = match view.catalog().lookup(&query) {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("{}", e);
                    let (heading, titles) = match &e {
                        LookupError::NotFound { suggestions, .. } => ("Did you mean", suggestions),
                        LookupError::Ambiguous { titles, .. } => ("Matching games", titles),
                        LookupError::EmptyQuery => ("", &Vec::new()),
                    };
                    if !titles.is_empty() {
                        eprintln!("\n{}:", heading);
                        for title in titles {
                            eprintln!("  - {}", title);
                        }
                    }
                    if view.is_empty_state() {
                        eprintln!("\nNo games found. Import a .nes file with `andrones import`.");
                    }
                    std::process::exit(1);
                }
            };

            let mut host = DesktopHost::new(config.display.clone());
            let mut recents: Box<dyn CategoryStore> = match config.recents_path() {
                Some(path) => Box::new(JsonCategoryStore::new(path, config.recents.limit)),
                None => Box::new(Unrecorded),
            };

            let launch = launch_entry(entry, &mut host, recents.as_mut(), alt)?;

            let launcher = EngineLauncher::new(launch)
                .binary(config.engine.binary.as_str())
                .assets_root(assets.root());
            if wait {
                launcher.run()?;
            } else {
                launcher.launch()?;
            }
        }
        Commands::Provision => {
            println!("{}", provisioned);
        }
        Commands::Config => {
            print!("{}", config::to_toml(&config)?);
        }
    }

    Ok(())
}
