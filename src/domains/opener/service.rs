//! Directory opener service implementation.
//!
//! Translates a filesystem path into the platform's "reveal directory"
//! command and drives the launch to completion.

use std::sync::Arc;

use tracing::{info, warn};

use super::error::OpenerError;
use super::launcher::{CommandLauncher, SystemLauncher};

/// Select the reveal program for the host platform family.
///
/// Windows gets the file explorer, macOS gets `open`, everything else is
/// assumed to have `xdg-open`.
pub fn reveal_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Opens filesystem paths in the host OS file browser.
pub struct DirectoryOpener {
    launcher: Arc<dyn CommandLauncher>,
}

impl DirectoryOpener {
    /// Create an opener backed by the real OS process launcher.
    pub fn new() -> Self {
        Self::with_launcher(Arc::new(SystemLauncher))
    }

    /// Create an opener with a custom launcher (used by tests).
    pub fn with_launcher(launcher: Arc<dyn CommandLauncher>) -> Self {
        Self { launcher }
    }

    /// Reveal `path` in the file browser, waiting for the command to finish.
    ///
    /// The await suspends only this request; other requests keep running on
    /// the async runtime. No timeout is imposed on the external process, so
    /// a hung reveal command hangs this request indefinitely.
    pub async fn open(&self, path: &str) -> Result<(), OpenerError> {
        if path.is_empty() {
            return Err(OpenerError::EmptyPath);
        }

        let program = reveal_program();
        info!("Opening directory with {}: {}", program, path);

        let output = self
            .launcher
            .launch(program, &[path])
            .await
            .map_err(|e| OpenerError::launch(program, e))?;

        if !output.status.success() {
            warn!("{} reported failure for {}", program, path);
            return Err(OpenerError::command_failed(
                program,
                output.status,
                &output.stderr,
            ));
        }

        info!("Opened directory: {}", path);
        Ok(())
    }
}

impl Default for DirectoryOpener {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::os::unix::process::ExitStatusExt;
    use std::process::{ExitStatus, Output};
    use std::sync::Mutex;

    /// Launcher stub that records invocations instead of spawning anything.
    struct StubLauncher {
        /// Raw wait status to report (0 = success, 256 = exit code 1).
        raw_status: i32,
        stderr: Vec<u8>,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl StubLauncher {
        fn new(raw_status: i32, stderr: &str) -> Arc<Self> {
            Arc::new(Self {
                raw_status,
                stderr: stderr.as_bytes().to_vec(),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandLauncher for StubLauncher {
        async fn launch(&self, program: &str, args: &[&str]) -> std::io::Result<Output> {
            self.calls.lock().unwrap().push((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            ));

            Ok(Output {
                status: ExitStatus::from_raw(self.raw_status),
                stdout: Vec::new(),
                stderr: self.stderr.clone(),
            })
        }
    }

    /// Launcher stub whose spawn itself fails.
    struct FailingLauncher;

    #[async_trait]
    impl CommandLauncher for FailingLauncher {
        async fn launch(&self, _program: &str, _args: &[&str]) -> std::io::Result<Output> {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            ))
        }
    }

    #[test]
    fn test_reveal_program_for_platform() {
        let program = reveal_program();
        if cfg!(target_os = "macos") {
            assert_eq!(program, "open");
        } else {
            assert_eq!(program, "xdg-open");
        }
    }

    #[tokio::test]
    async fn test_open_empty_path_never_launches() {
        let launcher = StubLauncher::new(0, "");
        let opener = DirectoryOpener::with_launcher(launcher.clone());

        let err = opener.open("").await.unwrap_err();
        assert!(matches!(err, OpenerError::EmptyPath));
        assert!(launcher.calls().is_empty());
    }

    #[tokio::test]
    async fn test_open_passes_path_as_single_argument() {
        let launcher = StubLauncher::new(0, "");
        let opener = DirectoryOpener::with_launcher(launcher.clone());

        opener.open("/tmp/with \"quotes\"").await.unwrap();

        let calls = launcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, reveal_program());
        assert_eq!(calls[0].1, vec!["/tmp/with \"quotes\"".to_string()]);
    }

    #[tokio::test]
    async fn test_open_reports_command_failure() {
        let launcher = StubLauncher::new(256, "no display available");
        let opener = DirectoryOpener::with_launcher(launcher);

        let err = opener.open("/tmp/demo").await.unwrap_err();
        assert!(matches!(err, OpenerError::CommandFailed { .. }));

        let message = err.to_string();
        assert!(message.contains(reveal_program()));
        assert!(message.contains("no display available"));
    }

    #[tokio::test]
    async fn test_open_reports_launch_failure() {
        let opener = DirectoryOpener::with_launcher(Arc::new(FailingLauncher));

        let err = opener.open("/tmp/demo").await.unwrap_err();
        assert!(matches!(err, OpenerError::Launch { .. }));
        assert!(err.to_string().contains("No such file or directory"));
    }
}
