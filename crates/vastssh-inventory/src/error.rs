//! Error types for vastssh-inventory

/// Result type for vastssh-inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching the instance list
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to run `{command}`: {message}")]
    FetchFailed { command: String, message: String },

    #[error("Failed to parse instance list: {0}")]
    Parse(#[from] serde_json::Error),
}
