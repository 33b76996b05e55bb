//! HTTP client for the Free Dictionary API.
//!
//! One blocking GET per lookup, no retries and no caching. Callers running on
//! an async runtime must offload [`DictionarySource::fetch`] to a blocking
//! thread (see the tools domain).

use std::time::Duration;

use reqwest::{StatusCode, Url};
use tracing::{debug, instrument};

use super::error::LookupError;
use super::model::LookupResult;
use crate::core::config::DictionaryConfig;

/// Default entries endpoint. The word is appended as the last path segment.
pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Anything that can resolve a word into its first dictionary entry.
///
/// Implementations normalize the word themselves (see [`normalize_word`]) so
/// that inputs differing only in case or surrounding whitespace behave
/// identically.
pub trait DictionarySource: Send + Sync {
    fn fetch(&self, word: &str) -> Result<LookupResult, LookupError>;
}

/// Trim and lower-case a word, rejecting blank input.
pub fn normalize_word(word: &str) -> Result<String, LookupError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(LookupError::InvalidInput);
    }
    Ok(word.to_lowercase())
}

/// Turn a raw API response into a lookup result.
///
/// Anything but HTTP 200 is "not found". A 200 must carry a non-empty JSON
/// array of entries; only the first one is kept.
pub fn parse_response(word: &str, status: u16, body: &[u8]) -> Result<LookupResult, LookupError> {
    if status != StatusCode::OK.as_u16() {
        return Err(LookupError::not_found(word, status));
    }

    // Later entries are never inspected, so they are kept untyped.
    let entries: Vec<serde_json::Value> = serde_json::from_slice(body)
        .map_err(|e| LookupError::parse(format!("JSON parse error: {e}")))?;

    let first = entries
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::parse("empty entry list"))?;

    serde_json::from_value(first)
        .map_err(|e| LookupError::parse(format!("Unexpected entry shape: {e}")))
}

/// Blocking `reqwest` client for the dictionary API.
#[derive(Debug, Clone)]
pub struct HttpDictionaryClient {
    config: DictionaryConfig,
}

impl HttpDictionaryClient {
    pub fn new(config: DictionaryConfig) -> Self {
        Self { config }
    }

    /// Build the entry URL for an already-normalized word.
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.config.api_url)
            .map_err(|e| LookupError::network(format!("Invalid endpoint URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::network("Endpoint URL cannot take a path"))?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }
}

impl DictionarySource for HttpDictionaryClient {
    #[instrument(skip(self))]
    fn fetch(&self, word: &str) -> Result<LookupResult, LookupError> {
        let word = normalize_word(word)?;
        let url = self.entry_url(&word)?;

        // Built per call: a blocking client must not be created or dropped
        // on an async runtime thread.
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout())
            .user_agent(self.config.user_agent.as_str())
            .build()
            .map_err(|e| LookupError::network(format!("Failed to create HTTP client: {e}")))?;

        debug!("GET {}", url);

        let response = client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                LookupError::network(format!(
                    "Request timed out after {}s",
                    self.config.timeout_secs
                ))
            } else if e.is_connect() {
                LookupError::network(format!("Connection failed: {e}"))
            } else {
                LookupError::network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| LookupError::network(format!("Failed to read response body: {e}")))?;

        debug!("API response received: status={}, {} bytes", status, body.len());

        parse_response(&word, status, &body)
    }
}
