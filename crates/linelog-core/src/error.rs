//! Logger error types

use thiserror::Error;

use crate::logging::Destination;

/// Errors that can occur while setting up a logger
///
/// Writing records never fails from the caller's point of view; only
/// initialization and configuration loading report errors.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// `init` was called on a logger that is already running
    #[error("Logger is already initialized")]
    AlreadyInitialized,

    /// A destination was requested that has no sink behind it
    #[error("Unsupported log destination: {0}")]
    UnsupportedDestination(Destination),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoggerError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;
