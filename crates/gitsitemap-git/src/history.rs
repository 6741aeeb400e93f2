//! libgit2-backed commit history.

use crate::commit::CommitInfo;
use crate::repository::{GitError, GitRepository};
use chrono::{DateTime, Utc};
use gitsitemap_core::history::{discovery_start, existing_file, repo_relative_path};
use gitsitemap_core::{CommitHistoryProvider, ResolveError};
use std::path::Path;

/// Resolves commit times by walking history in-process with libgit2.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibGitHistory;

impl LibGitHistory {
    pub fn new() -> Self {
        Self
    }

    /// The most recent commit touching `path`.
    pub fn last_commit(&self, path: &Path) -> Result<CommitInfo, ResolveError> {
        let file = existing_file(path)?;
        let repo = GitRepository::open(discovery_start(path)).map_err(|e| match e {
            GitError::NotARepository(_) => ResolveError::NotARepository(path.to_path_buf()),
            other => ResolveError::Git(other.to_string()),
        })?;

        let rel_path = repo_relative_path(&file, &repo.root())?;
        let commit = repo
            .last_commit_for(&rel_path)
            .map_err(|e| ResolveError::Git(e.to_string()))?
            .ok_or_else(|| ResolveError::NoHistory(path.to_path_buf()))?;

        tracing::debug!(
            "{} last touched by {} ({})",
            rel_path.display(),
            commit.short_hash,
            commit.summary
        );
        Ok(commit)
    }
}

impl CommitHistoryProvider for LibGitHistory {
    fn last_commit_time(&self, path: &Path) -> Result<DateTime<Utc>, ResolveError> {
        self.last_commit(path).map(|commit| commit.timestamp)
    }
}
