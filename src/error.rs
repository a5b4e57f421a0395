//! Unified error types for the demo API.

use thiserror::Error;

/// Unified error type for the demo API.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration validation error.
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// IO error (e.g. failing to bind the listen address).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
