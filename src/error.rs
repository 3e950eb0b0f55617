//! Error types for service discovery configuration.

use thiserror::Error;

/// Lookup errors raised by registry accessors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Unable to find the configuration for service '{0}'")]
    ServiceNotFound(String),
}

/// Crate-level errors for loading and building configuration
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Duplicate service name: {0}")]
    DuplicateService(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Structural validation failure for one part of a loaded document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Default security: {0}")]
    DefaultSecurity(String),

    #[error("Service '{0}': {1}")]
    Service(String, String),
}
