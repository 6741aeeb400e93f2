//! Error types for gitsitemap.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// gitsitemap error types.
#[derive(Debug, Error)]
pub enum Error {
    /// The manifest file does not exist
    #[error("Manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// The manifest exists but is not a usable JSON object
    #[error("Invalid manifest: {0}")]
    Manifest(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML serialization error
    #[error("XML error: {0}")]
    Xml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons a commit timestamp could not be resolved for a file.
///
/// None of these stop a sitemap run; the entry is emitted without `lastmod`.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The file does not exist on disk.
    #[error("file '{}' not found", .0.display())]
    MissingFile(PathBuf),

    /// No repository encloses the file.
    #[error("'{}' is not inside a git repository", .0.display())]
    NotARepository(PathBuf),

    /// The file resolves to a location outside the discovered work tree.
    #[error("'{}' is outside the git repository '{}'", .path.display(), .root.display())]
    OutsideRepository { path: PathBuf, root: PathBuf },

    /// The file exists but no commit touches it.
    #[error("no commit history found for '{}'", .0.display())]
    NoHistory(PathBuf),

    /// The `git` process could not be launched or failed.
    #[error("git command failed: {0}")]
    Subprocess(String),

    /// libgit2 reported an error.
    #[error("git error: {0}")]
    Git(String),
}
