//! Ideafeed CLI binary.
//!
//! This binary drives the client core against a live backend:
//! - Load the related-ideas feed and preload every carousel
//! - Resolve attachment keys to display URLs
//! - Create a post from files on disk

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, create_post, resolve_keys, show_feed};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Feed { config } => {
            show_feed(config.as_deref()).await?;
        }

        Commands::Resolve { config, keys } => {
            resolve_keys(config.as_deref(), keys).await?;
        }

        Commands::Post {
            config,
            title,
            description,
            files,
        } => {
            create_post(config.as_deref(), title, description, files).await?;
        }
    }

    Ok(())
}
