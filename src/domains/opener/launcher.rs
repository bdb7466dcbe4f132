//! Process launcher seam.
//!
//! The opener talks to the OS through this trait so that tests can stub
//! the launch without spawning real processes.

use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

/// Launches an external command and waits for it to complete.
#[async_trait]
pub trait CommandLauncher: Send + Sync {
    /// Run `program` with the given arguments, collecting its output.
    async fn launch(&self, program: &str, args: &[&str]) -> std::io::Result<Output>;
}

/// Production launcher backed by `tokio::process`.
///
/// Arguments are passed as an array, never interpolated into a shell
/// string, so quote characters in a path cannot escape the argument.
pub struct SystemLauncher;

#[async_trait]
impl CommandLauncher for SystemLauncher {
    async fn launch(&self, program: &str, args: &[&str]) -> std::io::Result<Output> {
        Command::new(program).args(args).output().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_launcher_runs_command() {
        let output = SystemLauncher.launch("true", &[]).await.unwrap();
        assert!(output.status.success());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_launcher_reports_failure_status() {
        let output = SystemLauncher.launch("false", &[]).await.unwrap();
        assert!(!output.status.success());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_launcher_passes_arguments() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();

        let path = dir.path().to_string_lossy().to_string();
        let output = SystemLauncher.launch("ls", &[&path]).await.unwrap();

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("marker.txt"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_launcher_missing_program() {
        let result = SystemLauncher
            .launch("definitely-not-a-real-program-12345", &[])
            .await;
        assert!(result.is_err());
    }
}
