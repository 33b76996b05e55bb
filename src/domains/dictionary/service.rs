//! Dictionary service: lookup, rendering and the search fallback.
//!
//! Every method here is synchronous and may block on the network. The tools
//! domain is responsible for running them off the async runtime.

use std::fmt;
use std::sync::Arc;

use super::client::{DictionarySource, HttpDictionaryClient, normalize_word};
use super::error::LookupError;
use super::format::{NO_DEFINITIONS, NO_DETAILS, render_details, try_render_definitions};
use super::model::LookupResult;
use super::observer::{LookupObserver, TracingObserver};
use super::variants::{MAX_SUGGESTIONS, candidate_variants};
use crate::core::config::DictionaryConfig;

/// Outcome of a search with variant fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query itself has definitions.
    Exact { query: String, definitions: String },

    /// The query failed but some variants have definitions.
    Suggestions { query: String, variants: Vec<String> },

    /// Neither the query nor any variant has definitions.
    NoResults { query: String },
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact { query, definitions } => {
                write!(f, "Found '{}':\n\n{}", query, definitions)
            }
            Self::Suggestions { query, variants } => write!(
                f,
                "'{}' not found. Did you mean: {}?",
                query,
                variants.join(", ")
            ),
            Self::NoResults { query } => write!(
                f,
                "No results found for '{}'. Please check the spelling.",
                query
            ),
        }
    }
}

/// Looks words up through a [`DictionarySource`] and renders the results.
#[derive(Clone)]
pub struct DictionaryService {
    source: Arc<dyn DictionarySource>,
    observer: Arc<dyn LookupObserver>,
}

impl DictionaryService {
    /// Create a service over an arbitrary source and observer.
    pub fn new(source: Arc<dyn DictionarySource>, observer: Arc<dyn LookupObserver>) -> Self {
        Self { source, observer }
    }

    /// Create a service backed by the HTTP client, logging through `tracing`.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(
            Arc::new(HttpDictionaryClient::new(config.clone())),
            Arc::new(TracingObserver),
        )
    }

    /// Fetch and log. Blank input never reaches the source.
    fn lookup(&self, word: &str) -> Result<(String, LookupResult), LookupError> {
        let word = normalize_word(word)?;
        self.observer.info(&format!("Fetching entry for: {}", word));

        match self.source.fetch(&word) {
            Ok(result) => Ok((word, result)),
            Err(e) => {
                match &e {
                    LookupError::NotFound { status, .. } => self.observer.warn(&format!(
                        "API returned status code {} for word: {}",
                        status, word
                    )),
                    LookupError::Network(msg) => self.observer.error(&format!(
                        "Network error while fetching {}: {}",
                        word, msg
                    )),
                    LookupError::Parse(msg) => self.observer.error(&format!(
                        "Unexpected response for {}: {}",
                        word, msg
                    )),
                    LookupError::InvalidInput => {}
                }
                Err(e)
            }
        }
    }

    /// Definitions view, distinguishing "no definitions" (`Ok(None)`) from
    /// a failed lookup.
    pub fn try_definitions(&self, word: &str) -> Result<Option<String>, LookupError> {
        let (word, result) = self.lookup(word)?;
        let rendered = try_render_definitions(&result);

        if rendered.is_some() {
            self.observer.info(&format!(
                "Successfully found {} definitions for: {}",
                result.definition_count(),
                word
            ));
        }

        Ok(rendered)
    }

    /// Definitions view, or [`NO_DEFINITIONS`] for any failure.
    pub fn definitions(&self, word: &str) -> String {
        self.try_definitions(word)
            .ok()
            .flatten()
            .unwrap_or_else(|| NO_DEFINITIONS.to_string())
    }

    /// Detailed view of a word.
    pub fn try_details(&self, word: &str) -> Result<String, LookupError> {
        let (word, result) = self.lookup(word)?;
        Ok(render_details(&result, &word))
    }

    /// Detailed view, or [`NO_DETAILS`] for any failure.
    pub fn word_details(&self, word: &str) -> String {
        self.try_details(word).unwrap_or_else(|_| NO_DETAILS.to_string())
    }

    /// Look a query up, falling back to naive variants when it has no
    /// definitions. At most [`MAX_SUGGESTIONS`] variants are collected;
    /// failing variants are skipped.
    pub fn search(&self, query: &str) -> Result<SearchOutcome, LookupError> {
        let query = normalize_word(query)?;
        self.observer.info(&format!("Searching for: {}", query));

        if let Ok(Some(definitions)) = self.try_definitions(&query) {
            return Ok(SearchOutcome::Exact { query, definitions });
        }

        let mut found = Vec::new();
        for variant in candidate_variants(&query) {
            match self.try_definitions(&variant) {
                Ok(Some(_)) => {
                    found.push(variant);
                    if found.len() >= MAX_SUGGESTIONS {
                        break;
                    }
                }
                Ok(None) | Err(_) => continue,
            }
        }

        if found.is_empty() {
            Ok(SearchOutcome::NoResults { query })
        } else {
            Ok(SearchOutcome::Suggestions {
                query,
                variants: found,
            })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{FixtureSource, hello_fixture};
    use super::*;
    use crate::domains::dictionary::observer::testing::{Level, RecordingObserver};

    fn service_with(source: FixtureSource) -> (DictionaryService, Arc<FixtureSource>) {
        let source = Arc::new(source);
        let service = DictionaryService::new(source.clone(), Arc::new(RecordingObserver::default()));
        (service, source)
    }

    #[test]
    fn test_definitions_hello() {
        let (service, _) = service_with(hello_fixture());
        assert_eq!(
            service.definitions("hello"),
            "(exclamation) used as a greeting or to begin a phone conversation."
        );
    }

    #[test]
    fn test_lookup_normalizes_word() {
        let (service, source) = service_with(hello_fixture());
        let a = service.definitions("  HeLLo ");
        let b = service.definitions("hello");
        assert_eq!(a, b);
        assert_eq!(source.calls(), vec!["hello", "hello"]);
    }

    #[test]
    fn test_blank_input_issues_no_request() {
        let (service, source) = service_with(hello_fixture());
        assert_eq!(service.try_definitions("   "), Err(LookupError::InvalidInput));
        assert_eq!(service.definitions(""), NO_DEFINITIONS);
        assert_eq!(service.word_details("\t"), NO_DETAILS);
        assert_eq!(service.search(" "), Err(LookupError::InvalidInput));
        assert!(source.calls().is_empty());
    }

    #[test]
    fn test_failures_collapse_to_sentinels() {
        let source = FixtureSource::new()
            .with_offline("down")
            .with_body("broken", "{\"not\": \"an array\"}")
            .with_body("empty", "[{\"word\": \"empty\", \"meanings\": []}]");
        let (service, _) = service_with(source);

        for word in ["missing", "down", "broken", "empty"] {
            assert_eq!(service.definitions(word), NO_DEFINITIONS);
        }
        for word in ["missing", "down", "broken"] {
            assert_eq!(service.word_details(word), NO_DETAILS);
        }
    }

    #[test]
    fn test_try_definitions_separates_empty_from_failure() {
        let source = FixtureSource::new()
            .with_body("empty", "[{\"word\": \"empty\", \"meanings\": []}]")
            .with_offline("down");
        let (service, _) = service_with(source);

        assert_eq!(service.try_definitions("empty"), Ok(None));
        assert!(matches!(
            service.try_definitions("missing"),
            Err(LookupError::NotFound { status: 404, .. })
        ));
        assert!(matches!(
            service.try_definitions("down"),
            Err(LookupError::Network(_))
        ));
    }

    #[test]
    fn test_word_details_uses_headword() {
        let (service, _) = service_with(hello_fixture());
        let details = service.word_details("Hello");
        assert!(details.starts_with("Word: HELLO\n\nPart of Speech: Exclamation\n"));
        assert!(details.ends_with("  1. used as a greeting or to begin a phone conversation."));
    }

    #[test]
    fn test_observer_records_conditions() {
        let source = Arc::new(hello_fixture().with_offline("down"));
        let observer = Arc::new(RecordingObserver::default());
        let service = DictionaryService::new(source, observer.clone());

        service.definitions("hello");
        service.definitions("missing");
        service.definitions("down");

        assert_eq!(observer.count(Level::Warn), 1);
        assert_eq!(observer.count(Level::Error), 1);
        assert!(
            observer
                .events()
                .iter()
                .any(|(_, m)| m == "Successfully found 1 definitions for: hello")
        );
    }

    #[test]
    fn test_search_exact_match() {
        let (service, source) = service_with(hello_fixture());
        let outcome = service.search(" Hello ").unwrap();
        assert_eq!(
            outcome.to_string(),
            "Found 'hello':\n\n(exclamation) used as a greeting or to begin a phone conversation."
        );
        assert_eq!(source.calls(), vec!["hello"]);
    }

    #[test]
    fn test_search_suggests_variants() {
        let source = FixtureSource::new()
            .with_definition("walks", "verb", "moves on foot")
            .with_definition("wal", "noun", "a made-up entry");
        let (service, source) = service_with(source);

        let outcome = service.search("walk").unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Suggestions {
                query: "walk".to_string(),
                variants: vec!["walks".to_string(), "wal".to_string()],
            }
        );
        assert_eq!(
            outcome.to_string(),
            "'walk' not found. Did you mean: walks, wal?"
        );
        assert_eq!(
            source.calls(),
            vec!["walk", "walks", "walked", "walking", "wal", "walk"]
        );
    }

    #[test]
    fn test_search_stops_after_three_suggestions() {
        let source = FixtureSource::new()
            .with_definition("jumpss", "noun", "a")
            .with_definition("jumpsed", "verb", "b")
            .with_definition("jumpsing", "verb", "c")
            .with_definition("jump", "verb", "d")
            .with_definition("jum", "noun", "e");
        let (service, source) = service_with(source);

        let outcome = service.search("jumps").unwrap();
        assert_eq!(
            outcome.to_string(),
            "'jumps' not found. Did you mean: jumpss, jumpsed, jumpsing?"
        );
        assert_eq!(source.calls(), vec!["jumps", "jumpss", "jumpsed", "jumpsing"]);
    }

    #[test]
    fn test_search_swallows_variant_failures() {
        let source = FixtureSource::new()
            .with_offline("cats")
            .with_body("cated", "garbage")
            .with_definition("cating", "verb", "made up");
        let (service, _) = service_with(source);

        assert_eq!(
            service.search("cat").unwrap().to_string(),
            "'cat' not found. Did you mean: cating?"
        );
    }

    #[test]
    fn test_search_short_word_rechecks_original() {
        let (service, source) = service_with(FixtureSource::new());
        let outcome = service.search("cat").unwrap();
        assert_eq!(
            outcome.to_string(),
            "No results found for 'cat'. Please check the spelling."
        );
        assert_eq!(
            source.calls(),
            vec!["cat", "cats", "cated", "cating", "cat", "cat"]
        );
    }
}
