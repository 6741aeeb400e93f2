//! Manifest to sitemap transformation.

use crate::config::BuildConfig;
use crate::error::Result;
use crate::history::{CommitHistoryProvider, Resolver};
use crate::manifest::{Entry, Manifest, ManifestItem};
use crate::sitemap::{SitemapDocument, UrlNode};
use std::path::{Path, PathBuf};

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// File the sitemap was written to
    pub output: PathBuf,
    /// `<url>` elements written
    pub urls: usize,
    /// Manifest values that were not page records
    pub skipped: usize,
    /// Records with `sitemap_include: false`
    pub excluded: usize,
    /// Elements that received a `<lastmod>`
    pub with_lastmod: usize,
}

/// Builds sitemap documents from manifests.
pub struct SitemapBuilder<P> {
    resolver: Resolver<P>,
    config: BuildConfig,
}

impl<P: CommitHistoryProvider> SitemapBuilder<P> {
    /// Create a builder with the default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, BuildConfig::default())
    }

    /// Create a builder with a custom configuration.
    pub fn with_config(provider: P, config: BuildConfig) -> Self {
        Self {
            resolver: Resolver::new(provider),
            config,
        }
    }

    /// Build the document for a manifest.
    ///
    /// Entries are processed in manifest order; each included entry with a
    /// `srcFile` triggers one resolver lookup.
    pub fn document(&self, manifest: &Manifest) -> SitemapDocument {
        self.document_with_stats(manifest).0
    }

    /// Parse `manifest_path`, build the document and write it to the configured output.
    ///
    /// Nothing is written when the manifest is missing or invalid.
    pub fn build(&self, manifest_path: impl AsRef<Path>) -> Result<BuildReport> {
        let manifest_path = manifest_path.as_ref();
        let manifest = Manifest::from_path(manifest_path)?;
        if manifest.is_empty() {
            tracing::warn!("Manifest {} has no entries", manifest_path.display());
        } else {
            tracing::debug!(
                "Loaded {} manifest values from {}",
                manifest.len(),
                manifest_path.display()
            );
        }

        let output = &self.config.output;
        let (document, mut report) = self.document_with_stats(&manifest);
        document.write_to(output, self.config.pretty)?;
        tracing::info!("Wrote {} urls to {}", document.len(), output.display());

        report.output = output.clone();
        Ok(report)
    }

    /// Source file path for an entry, if it names one.
    pub fn source_path(&self, entry: &Entry) -> Option<PathBuf> {
        entry
            .src_file
            .as_deref()
            .map(|src| self.config.layout.source_path(src))
    }

    fn document_with_stats(&self, manifest: &Manifest) -> (SitemapDocument, BuildReport) {
        let mut document = SitemapDocument::new();
        let mut report = BuildReport {
            output: PathBuf::new(),
            urls: 0,
            skipped: 0,
            excluded: 0,
            with_lastmod: 0,
        };

        for (key, item) in manifest.items() {
            let entry = match item {
                ManifestItem::Entry(entry) => entry,
                ManifestItem::Skipped(_) => {
                    report.skipped += 1;
                    continue;
                }
            };

            if !entry.is_included() {
                tracing::debug!("Excluding '{}' from sitemap", key);
                report.excluded += 1;
                continue;
            }

            let node = self.url_node(entry);
            if node.lastmod.is_some() {
                report.with_lastmod += 1;
            }
            document.push(node);
        }

        report.urls = document.len();
        (document, report)
    }

    fn url_node(&self, entry: &Entry) -> UrlNode {
        let mut node = UrlNode::new(entry.loc());
        node.priority = entry.priority.as_ref().map(|p| p.as_str().to_string());
        node.changefreq = entry.changefreq().map(String::from);
        node.lastmod = self
            .source_path(entry)
            .and_then(|path| self.resolver.resolve(&path));
        node
    }
}
