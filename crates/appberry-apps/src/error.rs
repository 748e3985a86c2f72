//! Error types for Appberry apps.

use thiserror::Error;

/// Errors that can occur in app execution
#[derive(Debug, Error)]
pub enum AppError {
    /// Grid parameters cannot describe a playable game
    #[error("invalid configuration: a {rows}x{cols} grid cannot hold {bombs} bombs")]
    InvalidConfiguration {
        rows: usize,
        cols: usize,
        bombs: usize,
    },

    /// Explicit bomb layout names a cell twice or a cell off the grid
    #[error("invalid bomb position ({row}, {col})")]
    InvalidBombPosition { row: usize, col: usize },

    /// Backing file of a store could not be read or written
    #[error("storage I/O error: {0}")]
    StorageIo(#[from] std::io::Error),

    /// Backing file of a store holds malformed data
    #[error("storage format error: {0}")]
    StorageFormat(#[from] serde_json::Error),
}
