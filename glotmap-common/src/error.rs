//! Common error types for glotmap

use thiserror::Error;

/// Common result type for glotmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the glotmap workspace
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset deserialization error (wraps serde_json::Error)
    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
