//! Error types for popo-agent

/// Result type for popo-agent operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in popo-agent operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown tool '{name}'")]
    UnknownTool { name: String },

    #[error("Context error: {0}")]
    Context(#[from] popo_context::Error),

    #[error("Git error: {0}")]
    Git(#[from] popo_git::Error),

    #[error("Agent did not finish within {limit} iterations")]
    MaxIterations { limit: usize },
}
