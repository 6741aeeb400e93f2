//! gitsitemap Core Library
//!
//! Manifest parsing, sitemap documents, and the commit-history seam used to
//! stamp each URL with the last commit time of its source file.

pub mod builder;
pub mod config;
pub mod error;
pub mod history;
pub mod manifest;
pub mod sitemap;

#[cfg(test)]
pub mod testutils;

pub use builder::{BuildReport, SitemapBuilder};
pub use config::{BuildConfig, SourceLayout};
pub use error::{Error, ResolveError, Result};
pub use history::{format_lastmod, CommitHistoryProvider, Resolver};
pub use manifest::{Entry, Manifest, ManifestItem, Priority};
pub use sitemap::{SitemapDocument, UrlNode, SITEMAP_NS};
