//! Word search tool.
//!
//! Tries the query itself first, then a fixed list of naive variants
//! (plural, past tense, gerund, one or two letters dropped) and suggests up
//! to three that exist.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, instrument};

use super::common::{INVALID_QUERY, non_blank, run_blocking, text_result};
use crate::domains::dictionary::DictionaryService;

#[cfg(feature = "http")]
use super::common::http_response;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchWordParams {
    /// The word to search for.
    #[schemars(description = "The word or phrase to search for")]
    pub query: String,
}

/// Word search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchWordTool;

impl SearchWordTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_word";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for an English word. Returns its definitions on an exact match; \
         otherwise suggests up to three simple variants (plural, past tense, -ing form, shortened spellings) that exist.";

    /// Execute the tool logic. Blocks on the network, up to six lookups.
    pub fn execute(params: &SearchWordParams, service: &DictionaryService) -> String {
        let Some(query) = non_blank(&params.query) else {
            return INVALID_QUERY.to_string();
        };

        match service.search(query) {
            Ok(outcome) => outcome.to_string(),
            Err(_) => INVALID_QUERY.to_string(),
        }
    }

    /// Run the tool off the async runtime and wrap the text in a result.
    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn call(params: SearchWordParams, service: Arc<DictionaryService>) -> CallToolResult {
        let text = run_blocking(move || Self::execute(&params, &service))
            .await
            .unwrap_or_else(|e| {
                let msg = format!("Error during search: {}", e);
                error!("{}", msg);
                msg
            });

        text_result(text)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        service: Arc<DictionaryService>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: SearchWordParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        Ok(http_response(Self::call(params, service).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchWordParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(service: Arc<DictionaryService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let service = service.clone();
            async move {
                let params: SearchWordParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::call(params, service).await)
            }
            .boxed()
        })
    }
}
