//! Server info resource definition.

use rmcp::model::ResourceContents;
use serde::Serialize;

use super::ResourceDefinition;
use crate::core::config::Config;
use crate::domains::resources::error::ResourceError;
use crate::domains::tools::ToolRegistry;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "dictionary://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Server name, version, upstream dictionary endpoint and available tools";
    const MIME_TYPE: &'static str = "application/json";
}

/// Snapshot of what the server reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSummary {
    pub server: String,
    pub version: String,
    pub api_url: String,
    pub timeout_secs: u64,
    pub tools: Vec<String>,
}

impl ServerSummary {
    /// Build the summary from the server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            server: config.server.name.clone(),
            version: config.server.version.clone(),
            api_url: config.dictionary.api_url.clone(),
            timeout_secs: config.dictionary.timeout_secs,
            tools: ToolRegistry::tool_names()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ServerInfoResource {
    /// Render the summary as pretty JSON.
    pub fn resolve(uri: &str, summary: &ServerSummary) -> Result<ResourceContents, ResourceError> {
        let json = serde_json::to_string_pretty(summary)
            .map_err(|e| ResourceError::internal(e.to_string()))?;

        Ok(ResourceContents::text(json, uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "dictionary://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_summary_from_config() {
        let summary = ServerSummary::from_config(&Config::default());
        assert_eq!(summary.server, "dictionary-mcp");
        assert_eq!(
            summary.api_url,
            "https://api.dictionaryapi.dev/api/v2/entries/en"
        );
        assert_eq!(summary.timeout_secs, 10);
        assert_eq!(
            summary.tools,
            vec!["get_definitions", "get_word_details", "search_word"]
        );
    }

    #[test]
    fn test_server_info_resolve() {
        let summary = ServerSummary::from_config(&Config::default());
        let contents = ServerInfoResource::resolve(ServerInfoResource::URI, &summary).unwrap();

        let ResourceContents::TextResourceContents { text, .. } = contents else {
            panic!("expected text contents");
        };
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["server"], "dictionary-mcp");
        assert_eq!(value["timeoutSecs"], 10);
        assert_eq!(value["tools"][2], "search_word");
    }
}
