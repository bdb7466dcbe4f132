//! Project registry error types.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// No record exists for the requested identifier.
    #[error("Project {0} not found")]
    NotFound(String),

    /// The locator does not carry the `project://` scheme or has no identifier.
    #[error("Invalid project locator: {0}")]
    InvalidLocator(String),

    /// A required field was empty or missing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ProjectError {
    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a new "invalid locator" error.
    pub fn invalid_locator(uri: impl Into<String>) -> Self {
        Self::InvalidLocator(uri.into())
    }

    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
