//! Commit information structures.

use chrono::{DateTime, Utc};
use git2::Commit;
use crate::repository::{GitError, Result};
use gitsitemap_core::history::timestamp_from_epoch;

/// Information about a git commit.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    /// Full commit hash (40 hex characters).
    pub hash: String,
    /// Short commit hash (7 characters).
    pub short_hash: String,
    /// Commit message summary (first line).
    pub summary: String,
    /// Committer timestamp.
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    /// Create from a git2 commit.
    pub fn from_commit(commit: &Commit) -> Result<Self> {
        let hash = commit.id().to_string();
        let short_hash = hash[..7.min(hash.len())].to_string();
        let summary = commit.summary().unwrap_or("").to_string();
        let seconds = commit.time().seconds();
        let timestamp =
            timestamp_from_epoch(seconds).map_err(|_| GitError::InvalidTime(hash.clone(), seconds))?;

        Ok(Self {
            hash,
            short_hash,
            summary,
            timestamp,
        })
    }
}
