//! Commit history from the `git` command-line tool.

use chrono::{DateTime, Utc};
use gitsitemap_core::history::{
    discovery_start, existing_file, repo_relative_path, timestamp_from_epoch,
};
use gitsitemap_core::{CommitHistoryProvider, ResolveError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Resolves commit times by running `git log` once per file.
#[derive(Debug, Clone)]
pub struct GitCliHistory {
    program: OsString,
}

impl GitCliHistory {
    /// Use `git` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Work tree root of the repository enclosing `dir`.
    pub fn toplevel(&self, dir: &Path) -> Result<PathBuf, ResolveError> {
        let output = self.run(dir, &["rev-parse", "--show-toplevel"], None)?;
        if !output.status.success() {
            return Err(ResolveError::NotARepository(dir.to_path_buf()));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if root.is_empty() {
            // bare repositories have no work tree
            return Err(ResolveError::NotARepository(dir.to_path_buf()));
        }
        Ok(PathBuf::from(root))
    }

    fn run(&self, dir: &Path, args: &[&str], path: Option<&Path>) -> Result<Output, ResolveError> {
        let mut command = Command::new(&self.program);
        command.arg("-C").arg(dir).args(args);
        if let Some(path) = path {
            command.arg("--").arg(path);
        }

        command.output().map_err(|e| {
            ResolveError::Subprocess(format!(
                "failed to run {}: {}",
                self.program.to_string_lossy(),
                e
            ))
        })
    }
}

impl Default for GitCliHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitHistoryProvider for GitCliHistory {
    fn last_commit_time(&self, path: &Path) -> Result<DateTime<Utc>, ResolveError> {
        let file = existing_file(path)?;
        let root = self
            .toplevel(&discovery_start(path))
            .map_err(|e| match e {
                ResolveError::NotARepository(_) => ResolveError::NotARepository(path.to_path_buf()),
                other => other,
            })?;
        let rel_path = repo_relative_path(&file, &root)?;

        let output = self.run(&root, &["log", "-1", "--format=%ct"], Some(&rel_path))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("does not have any commits") {
                return Err(ResolveError::NoHistory(path.to_path_buf()));
            }
            return Err(ResolveError::Subprocess(format!(
                "git log exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let seconds = stdout.trim();
        if seconds.is_empty() {
            return Err(ResolveError::NoHistory(path.to_path_buf()));
        }

        let seconds: i64 = seconds.parse().map_err(|_| {
            ResolveError::Subprocess(format!("unexpected git log output '{}'", seconds))
        })?;
        timestamp_from_epoch(seconds)
    }
}
