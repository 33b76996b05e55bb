//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only lists them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{GetDefinitionsTool, GetWordDetailsTool, SearchWordTool};
use crate::domains::dictionary::DictionaryService;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: Arc<DictionaryService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetDefinitionsTool::create_route(service.clone()))
        .with_route(GetWordDetailsTool::create_route(service.clone()))
        .with_route(SearchWordTool::create_route(service))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::DictionaryConfig;

    struct TestServer {}

    fn test_service() -> Arc<DictionaryService> {
        Arc::new(DictionaryService::from_config(&DictionaryConfig::default()))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_service());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_definitions"));
        assert!(names.contains(&"get_word_details"));
        assert!(names.contains(&"search_word"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_service());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
