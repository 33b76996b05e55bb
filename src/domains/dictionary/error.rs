//! Lookup error types.

use thiserror::Error;

/// Conditions a dictionary lookup can end in.
///
/// None of these are allowed past the tool boundary; they are turned into
/// user-facing messages by the tools domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Empty or whitespace-only input. No request was issued.
    #[error("Invalid input: word must not be empty")]
    InvalidInput,

    /// The API answered with a non-200 status.
    #[error("No entry for '{word}' (HTTP {status})")]
    NotFound { word: String, status: u16 },

    /// Timeout, connection, or DNS failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not the expected JSON shape.
    #[error("Unexpected response format: {0}")]
    Parse(String),
}

impl LookupError {
    /// Create a new "not found" error.
    pub fn not_found(word: impl Into<String>, status: u16) -> Self {
        Self::NotFound {
            word: word.into(),
            status,
        }
    }

    /// Create a new network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
