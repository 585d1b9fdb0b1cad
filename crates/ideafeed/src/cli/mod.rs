//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the ideafeed binary.

mod commands;
mod feed;
mod post;
mod resolve;

pub use commands::{Cli, Commands};
pub use feed::show_feed;
pub use post::create_post;
pub use resolve::resolve_keys;

use ideafeed::{IdeafeedConfig, IdeafeedResult, ToastLog};
use std::path::Path;

/// Configuration from `path`, or the layered defaults when none is given.
fn load_config(path: Option<&Path>) -> IdeafeedResult<IdeafeedConfig> {
    match path {
        Some(path) => IdeafeedConfig::from_file(path),
        None => IdeafeedConfig::load(),
    }
}

/// Print and discard every toast raised so far.
fn print_toasts(toasts: &ToastLog) {
    for toast in toasts.drain() {
        let marker = if toast.is_error() { "!" } else { "*" };
        println!("{} {}: {}", marker, toast.title, toast.description);
    }
}
