//! Error types for popo-context

/// Result type for popo-context operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in popo-context operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] popo_git::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown prompt template '{name}'")]
    TemplateNotFound { name: String },
}
