//! Git repository wrapper.

use crate::commit::CommitInfo;
use git2::{ErrorClass, ErrorCode, Oid, Repository, Sort, Tree};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("Commit {0} has an out-of-range time {1}")]
    InvalidTime(String, i64),
}

/// Result type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

/// Wrapper around a git repository.
pub struct GitRepository {
    repo: Repository,
    path: PathBuf,
}

impl GitRepository {
    /// Open the repository enclosing `path`, searching parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let repo = Repository::discover(&path).map_err(|e| {
            if e.code() == ErrorCode::NotFound && e.class() == ErrorClass::Repository {
                GitError::NotARepository(path.clone())
            } else {
                GitError::Git(e)
            }
        })?;

        Ok(Self { repo, path })
    }

    /// Get the repository root path.
    pub fn root(&self) -> PathBuf {
        self.repo.workdir()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| self.path.clone())
    }

    /// Get the HEAD commit, or `None` on a branch with no commits yet.
    pub fn head_commit(&self) -> Result<Option<CommitInfo>> {
        match self.repo.head() {
            Ok(head) => {
                let commit = head.peel_to_commit()?;
                Ok(Some(CommitInfo::from_commit(&commit)?))
            }
            Err(e) if is_unborn(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Find the most recent commit reachable from HEAD that touched `rel_path`.
    ///
    /// `rel_path` is relative to the work tree. A commit touches the path when
    /// the path's tree entry differs from every parent's, or when it is a root
    /// commit containing the path.
    pub fn last_commit_for(&self, rel_path: &Path) -> Result<Option<CommitInfo>> {
        if self.head_commit()?.is_none() {
            return Ok(None);
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TIME)?;

        for oid_result in revwalk {
            let commit = self.repo.find_commit(oid_result?)?;
            let current = entry_id(&commit.tree()?, rel_path);

            let touched = if commit.parent_count() == 0 {
                current.is_some()
            } else {
                let mut differs_from_all = true;
                for parent in commit.parents() {
                    if entry_id(&parent.tree()?, rel_path) == current {
                        differs_from_all = false;
                        break;
                    }
                }
                differs_from_all
            };

            if touched {
                return Ok(Some(CommitInfo::from_commit(&commit)?));
            }
        }

        Ok(None)
    }
}

fn entry_id(tree: &Tree, rel_path: &Path) -> Option<Oid> {
    tree.get_path(rel_path).ok().map(|entry| entry.id())
}

fn is_unborn(e: &git2::Error) -> bool {
    matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound)
}
