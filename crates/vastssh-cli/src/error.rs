//! Error types for vastssh-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while synchronizing the ssh config file
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the block splicing core
    #[error(transparent)]
    Block(#[from] vastssh_block::Error),

    /// Error from the inventory source
    #[error(transparent)]
    Inventory(#[from] vastssh_inventory::Error),

    /// Could not resolve the default config path
    #[error("Could not determine the home directory; pass --config-path explicitly")]
    NoHomeDir,
}
