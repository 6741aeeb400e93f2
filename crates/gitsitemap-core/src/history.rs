//! Commit-time resolution.
//!
//! A [`CommitHistoryProvider`] answers "when was this file last committed?".
//! The [`Resolver`] wraps a provider and turns every failure into an absent
//! timestamp plus a diagnostic, so one bad entry never stops a run.

use crate::error::ResolveError;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::path::{Path, PathBuf};

/// Source of last-commit timestamps.
pub trait CommitHistoryProvider {
    /// Timestamp of the most recent commit touching `path`.
    fn last_commit_time(&self, path: &Path) -> Result<DateTime<Utc>, ResolveError>;
}

impl<P: CommitHistoryProvider + ?Sized> CommitHistoryProvider for &P {
    fn last_commit_time(&self, path: &Path) -> Result<DateTime<Utc>, ResolveError> {
        (**self).last_commit_time(path)
    }
}

impl<P: CommitHistoryProvider + ?Sized> CommitHistoryProvider for Box<P> {
    fn last_commit_time(&self, path: &Path) -> Result<DateTime<Utc>, ResolveError> {
        (**self).last_commit_time(path)
    }
}

/// Maps file paths to last-commit timestamps, or nothing.
pub struct Resolver<P> {
    provider: P,
}

impl<P: CommitHistoryProvider> Resolver<P> {
    /// Create a resolver over a provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve the last commit time of `path`.
    ///
    /// Failures are logged and reported as `None`.
    pub fn resolve(&self, path: &Path) -> Option<DateTime<Utc>> {
        match self.provider.last_commit_time(path) {
            Ok(ts) => {
                tracing::debug!("{} last committed at {}", path.display(), format_lastmod(&ts));
                Some(ts)
            }
            Err(e) => {
                tracing::warn!("No lastmod for '{}': {}", path.display(), e);
                None
            }
        }
    }
}

/// Format a timestamp the way sitemaps expect it: `2023-11-14T22:13:20Z`.
pub fn format_lastmod(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Convert seconds since the epoch to a UTC timestamp.
pub fn timestamp_from_epoch(seconds: i64) -> Result<DateTime<Utc>, ResolveError> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| ResolveError::Git(format!("commit time {} is out of range", seconds)))
}

/// Check that `path` exists and return its canonical form.
pub fn existing_file(path: &Path) -> Result<PathBuf, ResolveError> {
    if !path.exists() {
        return Err(ResolveError::MissingFile(path.to_path_buf()));
    }
    path.canonicalize()
        .map_err(|_| ResolveError::MissingFile(path.to_path_buf()))
}

/// Directory to start repository discovery from.
///
/// This is the directory the caller named, before symlinks are resolved, so a
/// link inside a work tree pointing elsewhere is reported as outside it.
pub fn discovery_start(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Express a canonical file path relative to a repository work tree.
pub fn repo_relative_path(file: &Path, root: &Path) -> Result<PathBuf, ResolveError> {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    file.strip_prefix(&root)
        .map(Path::to_path_buf)
        .map_err(|_| ResolveError::OutsideRepository {
            path: file.to_path_buf(),
            root,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::FakeHistory;

    #[test]
    fn test_format_lastmod() {
        let ts = timestamp_from_epoch(1_700_000_000).unwrap();
        assert_eq!(format_lastmod(&ts), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_resolver_maps_errors_to_none() {
        let history = FakeHistory::new().with_commit("../Client/Home.tsx", 1_700_000_000);
        let resolver = Resolver::new(&history);

        assert!(resolver.resolve(Path::new("../Client/Home.tsx")).is_some());
        assert!(resolver.resolve(Path::new("../Client/Untracked.tsx")).is_none());
        assert_eq!(history.calls().len(), 2);
    }

    #[test]
    fn test_existing_file_missing() {
        let result = existing_file(Path::new("/no/such/file.tsx"));
        assert!(matches!(result, Err(ResolveError::MissingFile(_))));
    }

    #[test]
    fn test_discovery_start() {
        assert_eq!(discovery_start(Path::new("../Client/Home.tsx")), PathBuf::from("../Client"));
        assert_eq!(discovery_start(Path::new("Home.tsx")), PathBuf::from("."));
    }

    #[test]
    fn test_repo_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let file = root.join("src").join("Home.tsx");

        let rel = repo_relative_path(&file, &root).unwrap();
        assert_eq!(rel, PathBuf::from("src").join("Home.tsx"));

        let outside = PathBuf::from("/elsewhere/Home.tsx");
        assert!(matches!(
            repo_relative_path(&outside, &root),
            Err(ResolveError::OutsideRepository { .. })
        ));
    }
}
