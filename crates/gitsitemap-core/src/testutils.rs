//! Test utilities for gitsitemap.
//!
//! Provides an in-memory commit history so builder tests never touch git.

use crate::error::ResolveError;
use crate::history::{timestamp_from_epoch, CommitHistoryProvider};
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Canned commit history.
///
/// Known paths return their timestamp, paths marked missing return
/// `MissingFile`, everything else returns `NoHistory`.
#[derive(Default)]
pub struct FakeHistory {
    commits: HashMap<PathBuf, i64>,
    missing: HashSet<PathBuf>,
    calls: RefCell<Vec<PathBuf>>,
}

impl FakeHistory {
    /// Create a history with no commits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a commit at `seconds` since the epoch for `path`.
    pub fn with_commit(mut self, path: impl Into<PathBuf>, seconds: i64) -> Self {
        self.commits.insert(path.into(), seconds);
        self
    }

    /// Treat `path` as absent from disk.
    pub fn with_missing(mut self, path: impl Into<PathBuf>) -> Self {
        self.missing.insert(path.into());
        self
    }

    /// Every path queried so far, in order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl CommitHistoryProvider for FakeHistory {
    fn last_commit_time(&self, path: &Path) -> Result<DateTime<Utc>, ResolveError> {
        self.calls.borrow_mut().push(path.to_path_buf());

        if self.missing.contains(path) {
            return Err(ResolveError::MissingFile(path.to_path_buf()));
        }
        match self.commits.get(path) {
            Some(seconds) => timestamp_from_epoch(*seconds),
            None => Err(ResolveError::NoHistory(path.to_path_buf())),
        }
    }
}
