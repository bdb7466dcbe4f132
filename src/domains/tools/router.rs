//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires the
//! shared state (registry, opener) into them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::opener::DirectoryOpener;
use crate::domains::projects::ProjectRegistry;

use super::definitions::{CreateProjectTool, OpenProjectTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(
    registry: Arc<ProjectRegistry>,
    opener: Arc<DirectoryOpener>,
) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreateProjectTool::create_route(registry))
        .with_route(OpenProjectTool::create_route(opener))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RegistryConfig;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let registry = Arc::new(ProjectRegistry::new(RegistryConfig::default()));
        let opener = Arc::new(DirectoryOpener::new());

        let router: ToolRouter<TestServer> = build_tool_router(registry, opener);
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"create_project"));
        assert!(names.contains(&"open_project"));

        // Anything else is rejected by the router at dispatch time
        assert!(!names.contains(&"delete_project"));
    }

    #[test]
    fn test_tools_carry_schemas() {
        let registry = Arc::new(ProjectRegistry::new(RegistryConfig::default()));
        let opener = Arc::new(DirectoryOpener::new());

        let router: ToolRouter<TestServer> = build_tool_router(registry, opener);
        for tool in router.list_all() {
            assert!(tool.description.is_some());
            let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
            assert!(schema["properties"].is_object());
        }
    }
}
