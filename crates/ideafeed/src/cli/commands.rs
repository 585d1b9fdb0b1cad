//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ideafeed - browse the idea feed and publish posts from the terminal
#[derive(Parser, Debug)]
#[command(name = "ideafeed")]
#[command(about = "Browse the idea feed and publish posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load related ideas and preload every carousel
    Feed {
        /// Configuration file to use instead of the layered defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Resolve attachment keys to display URLs
    Resolve {
        /// Configuration file to use instead of the layered defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Attachment keys, in display order
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Create a post from files on disk
    Post {
        /// Configuration file to use instead of the layered defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Post title
        #[arg(long, default_value = "")]
        title: String,

        /// Post description
        #[arg(long, default_value = "")]
        description: String,

        /// Files to attach, uploaded in this order
        files: Vec<PathBuf>,
    },
}
