//! Libris - Library Catalog and Lending Manager
//!
//! Console entry point: loads configuration and the snapshot, then hands
//! control to the menu loop.

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::{
    config::AppConfig,
    console::Console,
    services::LibraryService,
    snapshot,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris={}", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Libris v{}", env!("CARGO_PKG_VERSION"));

    // Restore the library from the last snapshot
    let library = snapshot::load(Path::new(&config.storage.snapshot_path))?;
    let service = LibraryService::with_library(library, config.lending.clone());

    let mut console = Console::new(service, config);
    console.run()?;

    tracing::info!("Goodbye");
    Ok(())
}
