//! Projects domain module.
//!
//! This module holds the projects registry: an in-memory mapping from
//! string identifiers to project records, exposed to MCP clients as
//! resources. The registry serves three operations:
//!
//! - listing every record as a resource descriptor
//! - reading a record by its `project:///{id}` locator
//! - creating a new record (via the `create_project` tool)
//!
//! There is no update or delete, and no persistence.

pub mod locator;

mod error;
mod service;

pub use error::ProjectError;
pub use service::{PROJECT_MIME_TYPE, Project, ProjectRegistry};
