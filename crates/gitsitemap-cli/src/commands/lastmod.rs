//! Lastmod command implementation.

use anyhow::Result;
use colored::Colorize;
use gitsitemap_core::{format_lastmod, Resolver};
use gitsitemap_git::Backend;
use std::path::PathBuf;

/// Run the lastmod command.
pub fn run(file: PathBuf, backend: Backend) -> Result<()> {
    let resolver = Resolver::new(backend.provider());

    match resolver.resolve(&file) {
        Some(ts) => println!("{} {}", format_lastmod(&ts), file.display()),
        None => eprintln!(
            "{} No commit history available for: {}",
            "⚠".yellow(),
            file.display()
        ),
    }

    Ok(())
}
