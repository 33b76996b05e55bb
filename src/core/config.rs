//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::dictionary::client::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream dictionary API configuration.
    pub dictionary: DictionaryConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the dictionary API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Entries endpoint; the word is appended as the last path segment.
    pub api_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("dictionary-mcp-server/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl DictionaryConfig {
    /// Check that the endpoint is an absolute http(s) URL and the timeout
    /// is non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::config("dictionary timeout must be greater than zero"));
        }

        let url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| Error::config(format!("invalid dictionary API URL '{}': {}", self.api_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "dictionary API URL must be an absolute http(s) URL: {}",
                self.api_url
            )));
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Load only the logging settings, so the subscriber can be installed
    /// before the rest of the configuration logs anything.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            logging.with_timestamps = timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        logging
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "dictionary-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            dictionary: DictionaryConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Dictionary API
        if let Ok(api_url) = std::env::var("MCP_DICTIONARY_API_URL") {
            info!("Dictionary API endpoint overridden: {}", api_url);
            config.dictionary.api_url = api_url;
        }

        if let Ok(timeout) = std::env::var("MCP_DICTIONARY_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.dictionary.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_DICTIONARY_TIMEOUT_SECS '{}', using {}s",
                    timeout, config.dictionary.timeout_secs
                ),
            }
        }

        if let Ok(user_agent) = std::env::var("MCP_DICTIONARY_USER_AGENT") {
            config.dictionary.user_agent = user_agent;
        }

        config
    }

    /// Validate the loaded configuration.
    pub fn validate(&self) -> Result<()> {
        self.dictionary.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_dictionary_defaults() {
        let config = Config::default();
        assert_eq!(
            config.dictionary.api_url,
            "https://api.dictionaryapi.dev/api/v2/entries/en"
        );
        assert_eq!(config.dictionary.timeout_secs, 10);
        assert!(config.dictionary.user_agent.starts_with("dictionary-mcp-server/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dictionary_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DICTIONARY_API_URL", "http://localhost:9000/entries/en");
            std::env::set_var("MCP_DICTIONARY_TIMEOUT_SECS", "3");
        }
        let config = Config::from_env();
        assert_eq!(config.dictionary.api_url, "http://localhost:9000/entries/en");
        assert_eq!(config.dictionary.timeout_secs, 3);
        unsafe {
            std::env::remove_var("MCP_DICTIONARY_API_URL");
            std::env::remove_var("MCP_DICTIONARY_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DICTIONARY_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.dictionary.timeout_secs, 10);
        unsafe {
            std::env::remove_var("MCP_DICTIONARY_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_logging_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
            std::env::set_var("MCP_LOG_TIMESTAMPS", "false");
        }
        let logging = LoggingConfig::from_env();
        assert_eq!(logging.level, "debug");
        assert!(!logging.with_timestamps);

        let config = Config::from_env();
        assert_eq!(config.logging.level, logging.level);
        assert_eq!(config.logging.with_timestamps, logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.dictionary.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        for url in ["not a url", "ftp://example.com/en", "mailto:someone@example.com"] {
            let mut config = Config::default();
            config.dictionary.api_url = url.to_string();
            assert!(config.validate().is_err(), "{url} should be rejected");
        }
    }
}
