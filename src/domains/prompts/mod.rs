//! Prompts domain module.
//!
//! This module exposes prompts built from the registry contents. A single
//! prompt is offered: `summarize_projects`, which asks the model to
//! summarize every record currently in the registry.

mod error;
mod service;

pub use error::PromptError;
pub use service::{PromptService, SUMMARIZE_PROJECTS};
