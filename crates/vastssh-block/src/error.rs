//! Error types for vastssh-block

use std::path::PathBuf;

/// Result type for vastssh-block operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vastssh-block operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error(
        "Managed block in {path} is corrupted (lines {lines:?}). \
         Please fix it manually and re-run the tool."
    )]
    CorruptedRegion { path: PathBuf, lines: Vec<usize> },

    #[error("Failed to create a managed block inside {path}")]
    RegionInitFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
