//! Error types for popo-git

use std::path::PathBuf;

/// Result type for popo-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in popo-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Not a git repository (searched upward from {path})")]
    NotARepository { path: PathBuf },

    #[error("Repository at {path} has no working tree")]
    BareRepository { path: PathBuf },
}
