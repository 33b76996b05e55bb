//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{GetDefinitionsTool, GetWordDetailsTool, SearchWordTool};
use crate::domains::dictionary::DictionaryService;

#[cfg(feature = "http")]
use super::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    service: Arc<DictionaryService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(service: Arc<DictionaryService>) -> Self {
        Self { service }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetDefinitionsTool::NAME,
            GetWordDetailsTool::NAME,
            SearchWordTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetDefinitionsTool::to_tool(),
            GetWordDetailsTool::to_tool(),
            SearchWordTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let service = self.service.clone();
        match name {
            GetDefinitionsTool::NAME => GetDefinitionsTool::http_handler(arguments, service).await,
            GetWordDetailsTool::NAME => GetWordDetailsTool::http_handler(arguments, service).await,
            SearchWordTool::NAME => SearchWordTool::http_handler(arguments, service).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
