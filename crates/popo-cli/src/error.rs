//! Error types for popo-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from popo-agent
    #[error(transparent)]
    Agent(#[from] popo_agent::Error),

    /// Error from popo-context
    #[error(transparent)]
    Context(#[from] popo_context::Error),

    /// Error from popo-git
    #[error(transparent)]
    Git(#[from] popo_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
