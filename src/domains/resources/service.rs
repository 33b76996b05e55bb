//! Resource service implementation.
//!
//! The ResourceService lists the registered resources and templates and
//! resolves read requests against them.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceTemplate};
use tracing::{debug, info};

use super::definitions::{ResourceDefinition, ServerInfoResource, ServerSummary, WordEntryTemplate};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::domains::dictionary::DictionaryService;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// What `dictionary://server/info` reports.
    summary: ServerSummary,

    /// Backend for word entries.
    dictionary: Arc<DictionaryService>,

    /// Fixed resources.
    resources: Vec<Resource>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService.
    pub fn new(summary: ServerSummary, dictionary: Arc<DictionaryService>) -> Self {
        info!("Initializing ResourceService");

        Self {
            summary,
            dictionary,
            resources: get_all_resources(),
            templates: get_all_resource_templates(),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Word entries hit the network, so they are resolved on the blocking
    /// thread pool.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if uri == ServerInfoResource::URI {
            let content = ServerInfoResource::resolve(uri, &self.summary)?;
            return Ok(ReadResourceResult {
                contents: vec![content],
            });
        }

        let Some(word) = WordEntryTemplate::parse_word(uri) else {
            return Err(ResourceError::not_found(uri));
        };
        let word = word?;
        debug!("Resolving word entry: {}", word);

        let dictionary = self.dictionary.clone();
        let owned_uri = uri.to_string();
        let content = tokio::task::spawn_blocking(move || {
            WordEntryTemplate::resolve(&owned_uri, &word, &dictionary)
        })
        .await
        .map_err(|e| ResourceError::internal(e.to_string()))??;

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ResourceContents;

    use super::*;
    use crate::core::config::Config;
    use crate::domains::dictionary::TracingObserver;
    use crate::domains::dictionary::testing::{FixtureSource, hello_fixture};

    fn service_with(source: Arc<FixtureSource>) -> ResourceService {
        let dictionary = Arc::new(DictionaryService::new(source, Arc::new(TracingObserver)));
        ResourceService::new(ServerSummary::from_config(&Config::default()), dictionary)
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            other => panic!("expected text contents, got {:?}", other),
        }
    }

    #[test]
    fn test_resource_service_creation() {
        let service = service_with(Arc::new(FixtureSource::new()));

        let resources = tokio_test::block_on(service.list_resources());
        assert_eq!(resources.len(), 1);

        let templates = tokio_test::block_on(service.list_resource_templates());
        assert_eq!(templates.len(), 1);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let service = service_with(Arc::new(FixtureSource::new()));

        let result = service.read_resource("dictionary://server/info").await.unwrap();
        assert!(text_of(&result).contains("\"server\": \"dictionary-mcp\""));
    }

    #[tokio::test]
    async fn test_read_word_entry() {
        let source = Arc::new(hello_fixture());
        let service = service_with(source.clone());

        let result = service.read_resource("dictionary://word/Hello").await.unwrap();
        assert!(text_of(&result).starts_with("Word: HELLO"));
        assert_eq!(source.calls(), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_read_word_entry_missing() {
        let service = service_with(Arc::new(FixtureSource::new()));

        let result = service.read_resource("dictionary://word/qwzx").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_blank_word_skips_lookup() {
        let source = Arc::new(FixtureSource::new());
        let service = service_with(source.clone());

        let result = service.read_resource("dictionary://word/%20").await;
        assert!(matches!(result, Err(ResourceError::InvalidUri(_))));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = service_with(Arc::new(FixtureSource::new()));

        let result = service.read_resource("dictionary://server/nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
