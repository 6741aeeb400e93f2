//! Generate command implementation.

use anyhow::Result;
use colored::Colorize;
use gitsitemap_core::{BuildConfig, Error, SitemapBuilder, SourceLayout};
use gitsitemap_git::Backend;
use std::path::PathBuf;

/// Run the generate command.
pub fn run(
    manifest: PathBuf,
    output: PathBuf,
    source_template: String,
    backend: Backend,
    pretty: bool,
) -> Result<()> {
    let layout = SourceLayout::new(source_template)?;
    println!("{} Generating sitemap from {}", "→".blue(), manifest.display());

    let config = BuildConfig {
        output,
        layout,
        pretty,
    };
    let builder = SitemapBuilder::with_config(backend.provider(), config);

    let report = match builder.build(&manifest) {
        Ok(report) => report,
        Err(Error::ManifestNotFound(path)) => {
            eprintln!("{} Manifest not found: {}", "✗".red(), path.display());
            return Ok(());
        }
        Err(e @ (Error::Manifest(_) | Error::Json(_))) => {
            eprintln!("{} {}", "✗".red(), e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{} Sitemap successfully generated: {}",
        "✓".green(),
        report.output.display()
    );
    println!("  URLs: {}", report.urls);
    println!("  With lastmod: {}", report.with_lastmod);
    if report.excluded > 0 {
        println!("  Excluded: {}", report.excluded);
    }
    if report.skipped > 0 {
        println!("  Skipped (not records): {}", report.skipped);
    }

    Ok(())
}
