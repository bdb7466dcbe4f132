//! Create project tool definition.
//!
//! A tool that inserts a new record into the projects registry.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::projects::ProjectRegistry;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create project tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    /// Title of the project.
    pub title: String,

    /// Filesystem path of the project.
    pub path: String,
}

// ============================================================================
// Output Structure (JSON format for AI agents)
// ============================================================================

/// Result of a create operation
#[derive(Debug, Serialize, JsonSchema)]
struct CreateResult {
    /// Identifier assigned to the new project
    id: String,
    /// Title of the new project
    title: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create project tool - adds a new project record to the registry.
pub struct CreateProjectTool;

impl CreateProjectTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_project";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a new project with a title and a filesystem path.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(title = %params.title))]
    pub async fn execute(
        params: &CreateProjectParams,
        registry: &ProjectRegistry,
    ) -> CallToolResult {
        info!("Create project tool called: '{}'", params.title);

        match registry.create(&params.title, &params.path).await {
            Ok(id) => {
                let summary = format!("Created project {}: {}", id, params.title);

                let result = CreateResult {
                    id,
                    title: params.title.clone(),
                };

                // Return with text summary + structured content
                CallToolResult {
                    content: vec![Content::text(summary)],
                    structured_content: Some(serde_json::to_value(&result).unwrap()),
                    is_error: Some(false),
                    meta: None,
                }
            }
            Err(e) => {
                warn!("Create project failed: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CreateProjectParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<CreateResult>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    pub fn create_route<S>(registry: Arc<ProjectRegistry>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let registry = registry.clone();
            async move {
                let params: CreateProjectParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &registry).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
