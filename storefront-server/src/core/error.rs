//! Server-level errors
//!
//! Failures raised while bootstrapping or running the server, outside
//! the per-request [`shared::AppError`] path.

use shared::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    App(#[from] AppError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for server startup and runtime paths
pub type Result<T> = std::result::Result<T, ServerError>;
