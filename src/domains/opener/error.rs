//! Directory opener error types.

use thiserror::Error;

/// Errors that can occur while revealing a directory.
#[derive(Debug, Error)]
pub enum OpenerError {
    /// No path was provided.
    #[error("Invalid argument: path must not be empty")]
    EmptyPath,

    /// The reveal command could not be spawned at all.
    #[error("Failed to launch {command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The reveal command ran but reported failure.
    #[error("Failed to open directory: {command} exited with {status}{detail}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        detail: String,
    },
}

impl OpenerError {
    /// Create a launch error for the given command.
    pub fn launch(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            command: command.into(),
            source,
        }
    }

    /// Create a command-failed error, folding stderr into the detail.
    pub fn command_failed(
        command: impl Into<String>,
        status: std::process::ExitStatus,
        stderr: &[u8],
    ) -> Self {
        let stderr = String::from_utf8_lossy(stderr);
        let stderr = stderr.trim();
        let detail = if stderr.is_empty() {
            String::new()
        } else {
            format!(": {stderr}")
        };

        Self::CommandFailed {
            command: command.into(),
            status,
            detail,
        }
    }
}
