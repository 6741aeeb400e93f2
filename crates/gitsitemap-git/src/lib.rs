//! gitsitemap Git Integration
//!
//! Commit history providers: one shelling out to `git log`, one walking
//! history in-process through libgit2.

pub mod command;
pub mod commit;
pub mod history;
pub mod repository;

pub use command::GitCliHistory;
pub use commit::CommitInfo;
pub use history::LibGitHistory;
pub use repository::{GitError, GitRepository};

use gitsitemap_core::CommitHistoryProvider;

/// Which provider resolves commit times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Run the `git` executable
    Cli,
    /// Use libgit2 in-process
    LibGit2,
}

impl Backend {
    /// Instantiate the provider for this backend.
    pub fn provider(self) -> Box<dyn CommitHistoryProvider> {
        match self {
            Backend::Cli => Box::new(GitCliHistory::new()),
            Backend::LibGit2 => Box::new(LibGitHistory::new()),
        }
    }
}
