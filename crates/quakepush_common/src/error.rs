// --- File: crates/quakepush_common/src/error.rs ---
use thiserror::Error;

/// Errors that can stop the service from starting or serving.
///
/// Request-level failures never surface as this type; they are translated
/// into a status code by the handler that hit them.
#[derive(Error, Debug)]
pub enum QuakepushError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Storage could not be set up
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Socket or other I/O failure
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error that doesn't fit into any other category
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

// Utility functions for error handling
pub fn config_error<T: std::fmt::Display>(message: T) -> QuakepushError {
    QuakepushError::ConfigError(message.to_string())
}

pub fn database_error<T: std::fmt::Display>(message: T) -> QuakepushError {
    QuakepushError::DatabaseError(message.to_string())
}
