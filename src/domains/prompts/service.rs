//! Prompt service implementation.
//!
//! The one prompt this server offers is rendered from the live registry
//! contents rather than from a static template, so there is no argument
//! substitution involved.

use std::sync::Arc;

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use tracing::info;

use super::error::PromptError;
use crate::domains::projects::ProjectRegistry;

/// Name of the prompt that summarizes every project in the registry.
pub const SUMMARIZE_PROJECTS: &str = "summarize_projects";

const SUMMARIZE_DESCRIPTION: &str = "Summarize all projects currently in the registry";

/// Service for listing and rendering prompts.
pub struct PromptService {
    registry: Arc<ProjectRegistry>,
}

impl PromptService {
    /// Create a new PromptService over the given registry.
    pub fn new(registry: Arc<ProjectRegistry>) -> Self {
        info!("Initializing PromptService");
        Self { registry }
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        vec![Prompt {
            name: SUMMARIZE_PROJECTS.to_string(),
            title: None,
            description: Some(SUMMARIZE_DESCRIPTION.to_string()),
            arguments: None,
            icons: None,
            meta: None,
        }]
    }

    /// Render a prompt by name.
    pub async fn get_prompt(&self, name: &str) -> Result<GetPromptResult, PromptError> {
        if name != SUMMARIZE_PROJECTS {
            return Err(PromptError::not_found(name));
        }

        info!("Rendering prompt: {}", name);

        let mut text = String::from("Please summarize the following projects:\n");
        for (id, project) in self.registry.snapshot().await {
            text.push_str(&format!("\n{}. {} ({})", id, project.title, project.path));
        }

        Ok(GetPromptResult {
            description: Some(SUMMARIZE_DESCRIPTION.to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}
