//! Definitions lookup tool.
//!
//! Lists every definition of a word, one per paragraph, prefixed with its
//! part of speech.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, info, instrument};

use super::common::{INVALID_WORD, non_blank, run_blocking, text_result};
use crate::domains::dictionary::DictionaryService;

#[cfg(feature = "http")]
use super::common::http_response;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the definitions tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDefinitionsParams {
    /// The word to get definitions for.
    #[schemars(description = "The word to get definitions for")]
    pub word: String,
}

/// Definitions lookup tool implementation.
#[derive(Debug, Clone)]
pub struct GetDefinitionsTool;

impl GetDefinitionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_definitions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get definitions for an English word using the Free Dictionary API. \
         Returns every definition across all parts of speech, each prefixed with its part of speech.";

    /// Execute the tool logic. Blocks on the network.
    pub fn execute(params: &GetDefinitionsParams, service: &DictionaryService) -> String {
        let Some(word) = non_blank(&params.word) else {
            return INVALID_WORD.to_string();
        };

        info!("Getting definitions for: {}", word);

        match service.try_definitions(word) {
            Ok(Some(definitions)) => {
                format!("Definitions for '{}':\n\n{}", word.to_uppercase(), definitions)
            }
            Ok(None) | Err(_) => format!("No definitions found for '{}'.", word),
        }
    }

    /// Run the tool off the async runtime and wrap the text in a result.
    #[instrument(skip_all, fields(word = %params.word))]
    pub async fn call(params: GetDefinitionsParams, service: Arc<DictionaryService>) -> CallToolResult {
        let text = run_blocking(move || Self::execute(&params, &service))
            .await
            .unwrap_or_else(|e| {
                let msg = format!("Error getting definitions: {}", e);
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
        let params: GetDefinitionsParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        Ok(http_response(Self::call(params, service).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetDefinitionsParams>(),
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
                let params: GetDefinitionsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::call(params, service).await)
            }
            .boxed()
        })
    }
}
