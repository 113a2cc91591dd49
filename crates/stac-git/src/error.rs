//! Error types for stac-git

use std::path::PathBuf;

/// Result type for stac-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading repository coordinates
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("No git repository found at {path}")]
    NotARepository { path: PathBuf },

    #[error("Remote '{name}' not found")]
    RemoteNotFound { name: String },

    #[error("Remote '{name}' has no URL")]
    MissingRemoteUrl { name: String },

    #[error("Unrecognized remote URL format: {url}")]
    UnrecognizedRemoteUrl { url: String },

    #[error("HEAD is detached; pass --branch to choose the branch for links")]
    DetachedHead,
}
