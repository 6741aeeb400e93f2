//! End-to-end tests for gitsitemap-core.
//!
//! These tests run the full workflow: manifest file → builder → sitemap file.

use chrono::{DateTime, TimeZone, Utc};
use gitsitemap_core::{
    BuildConfig, CommitHistoryProvider, Error, ResolveError, SitemapBuilder, SourceLayout,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// History keyed by file name, so fixtures don't depend on the template prefix.
struct NamedHistory(HashMap<&'static str, i64>);

impl CommitHistoryProvider for NamedHistory {
    fn last_commit_time(&self, path: &Path) -> Result<DateTime<Utc>, ResolveError> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        self.0
            .get(name)
            .map(|secs| Utc.timestamp_opt(*secs, 0).unwrap())
            .ok_or_else(|| ResolveError::NoHistory(path.to_path_buf()))
    }
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn history() -> NamedHistory {
    NamedHistory(HashMap::from([("Home.tsx", 1_700_000_000), ("About.tsx", 1_650_000_000)]))
}

/// Test the full build against the sample manifest.
#[test]
fn test_build_sample_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let config = BuildConfig {
        output: temp_dir.path().join("sitemap.xml"),
        ..BuildConfig::default()
    };

    let builder = SitemapBuilder::with_config(history(), config.clone());
    let report = builder.build(fixture("pages.json")).unwrap();

    assert_eq!(report.urls, 4);
    assert_eq!(report.excluded, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.with_lastmod, 2);

    let xml = std::fs::read_to_string(&config.output).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert!(xml.contains(
        "<url><loc>/</loc><priority>1.0</priority><changefreq>daily</changefreq>\
         <lastmod>2023-11-14T22:13:20Z</lastmod></url>"
    ));
    assert!(xml.contains("<lastmod>2022-04-15T05:20:00Z</lastmod>"));
    assert!(!xml.contains("/login"));
    assert!(xml.contains("<url><loc>/contact</loc><changefreq>yearly</changefreq></url>"));
    // "legacy" has no loc and no history
    assert!(xml.contains("<url><loc>/</loc></url>"));
}

/// Test that output order follows the manifest.
#[test]
fn test_output_follows_manifest_order() {
    let temp_dir = TempDir::new().unwrap();
    let config = BuildConfig {
        output: temp_dir.path().join("sitemap.xml"),
        ..BuildConfig::default()
    };

    SitemapBuilder::with_config(history(), config.clone())
        .build(fixture("pages.json"))
        .unwrap();

    let xml = std::fs::read_to_string(&config.output).unwrap();
    let about = xml.find("<loc>/about</loc>").unwrap();
    let contact = xml.find("<loc>/contact</loc>").unwrap();
    assert!(about < contact);
}

/// Test that an existing sitemap is replaced.
#[test]
fn test_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("sitemap.xml");
    std::fs::write(&output, "stale").unwrap();

    let config = BuildConfig {
        output: output.clone(),
        layout: SourceLayout::new("src/{src}.tsx").unwrap(),
        pretty: true,
    };
    SitemapBuilder::with_config(history(), config)
        .build(fixture("pages.json"))
        .unwrap();

    let xml = std::fs::read_to_string(&output).unwrap();
    assert!(!xml.contains("stale"));
    assert!(xml.contains("\n  <url>"));
}

/// Test that a missing manifest leaves no output behind.
#[test]
fn test_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let config = BuildConfig {
        output: temp_dir.path().join("sitemap.xml"),
        ..BuildConfig::default()
    };

    let result = SitemapBuilder::with_config(history(), config.clone())
        .build(temp_dir.path().join("nope.json"));

    assert!(matches!(result, Err(Error::ManifestNotFound(_))));
    assert!(!config.output.exists());
}

/// Test that a manifest with a non-object root is rejected before writing.
#[test]
fn test_invalid_manifest_root() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("pages.json");
    std::fs::write(&manifest, r#"["/", "/about"]"#).unwrap();
    let config = BuildConfig {
        output: temp_dir.path().join("sitemap.xml"),
        ..BuildConfig::default()
    };

    let result = SitemapBuilder::with_config(history(), config.clone()).build(&manifest);

    assert!(matches!(result, Err(Error::Manifest(_))));
    assert!(!config.output.exists());
}
