//! Error types and handling for the MCP server.
//!
//! Lookup failures never surface here: the tools domain turns them into
//! user-facing text. This type covers startup and transport failures.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The transport failed to start or stopped with an error.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("timeout must be positive");
        assert_eq!(err.to_string(), "Configuration error: timeout must be positive");

        let err: Error = TransportError::init("stdin closed").into();
        assert!(err.to_string().starts_with("Transport error:"));
    }
}
