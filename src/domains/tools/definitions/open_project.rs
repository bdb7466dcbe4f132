//! Open project tool definition.
//!
//! A tool that reveals a project path in the host OS file browser.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::opener::DirectoryOpener;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the open project tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OpenProjectParams {
    /// Path of the project to open.
    pub path: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Open project tool - opens a project directory in the file browser.
pub struct OpenProjectTool;

impl OpenProjectTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "open_project";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Open a project from the file system.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(path = %params.path))]
    pub async fn execute(params: &OpenProjectParams, opener: &DirectoryOpener) -> CallToolResult {
        info!("Open project tool called: '{}'", params.path);

        match opener.open(&params.path).await {
            Ok(()) => CallToolResult::success(vec![Content::text(format!(
                "Successfully opened directory: {}",
                params.path
            ))]),
            Err(e) => {
                warn!("Open project failed: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<OpenProjectParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    pub fn create_route<S>(opener: Arc<DirectoryOpener>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let opener = opener.clone();
            async move {
                let params: OpenProjectParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &opener).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_project_empty_path() {
        // The opener rejects an empty path before any process is launched,
        // so the real launcher is safe here.
        let opener = DirectoryOpener::new();

        let params = OpenProjectParams {
            path: String::new(),
        };

        let result = OpenProjectTool::execute(&params, &opener).await;
        assert!(result.is_error.unwrap_or(false));

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.contains("path must not be empty"));
    }

    #[test]
    fn test_params_reject_missing_path() {
        let result: Result<OpenProjectParams, _> =
            serde_json::from_value(serde_json::json!({}));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    mod with_stub_launcher {
        use super::*;
        use crate::domains::opener::CommandLauncher;
        use async_trait::async_trait;
        use std::os::unix::process::ExitStatusExt;
        use std::process::{ExitStatus, Output};

        struct StubLauncher {
            raw_status: i32,
        }

        #[async_trait]
        impl CommandLauncher for StubLauncher {
            async fn launch(&self, _program: &str, _args: &[&str]) -> std::io::Result<Output> {
                Ok(Output {
                    status: ExitStatus::from_raw(self.raw_status),
                    stdout: Vec::new(),
                    stderr: b"boom".to_vec(),
                })
            }
        }

        #[tokio::test]
        async fn test_open_project_success() {
            let opener = DirectoryOpener::with_launcher(Arc::new(StubLauncher { raw_status: 0 }));

            let params = OpenProjectParams {
                path: "/tmp/demo".to_string(),
            };

            let result = OpenProjectTool::execute(&params, &opener).await;
            assert!(result.is_error.is_none() || !result.is_error.unwrap());

            let text = match &result.content[0].raw {
                rmcp::model::RawContent::Text(text) => &text.text,
                _ => panic!("Expected text content"),
            };
            assert_eq!(text, "Successfully opened directory: /tmp/demo");
        }

        #[tokio::test]
        async fn test_open_project_command_failure() {
            let opener =
                DirectoryOpener::with_launcher(Arc::new(StubLauncher { raw_status: 256 }));

            let params = OpenProjectParams {
                path: "/tmp/demo".to_string(),
            };

            let result = OpenProjectTool::execute(&params, &opener).await;
            assert!(result.is_error.unwrap_or(false));

            let text = match &result.content[0].raw {
                rmcp::model::RawContent::Text(text) => &text.text,
                _ => panic!("Expected text content"),
            };
            assert!(text.contains("Failed to open directory"));
            assert!(text.contains("boom"));
        }
    }
}
