//! Error types for the mini golf core.
//!
//! Malformed level text is not an error (see `level::parser`); these cover
//! the cases where the caller must refuse to go on.

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum GolfError {
    /// No level at the requested index. The level must not be started.
    #[error("Level {index} not found (catalog has {count} levels)")]
    LevelNotFound { index: usize, count: usize },

    /// A tuning value is out of range
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Reading a level, catalog or settings file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog or settings JSON is malformed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, GolfError>`
pub type GolfResult<T> = Result<T, GolfError>;
