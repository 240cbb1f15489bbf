//! Process manager adapter that spawns the real `pm2` binary.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::process::{
    domain::{CommandOutput, ExecutionError, Pm2Command},
    ports::{ProcessManager, ProcessManagerResult},
};

/// Default program name resolved through `PATH`.
pub const DEFAULT_PM2_BINARY: &str = "pm2";

/// Runs `pm2` as a child process with an explicit argument vector.
#[derive(Debug, Clone)]
pub struct Pm2Cli {
    program: String,
}

impl Pm2Cli {
    /// Creates an adapter for the given binary path or program name.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the configured program.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for Pm2Cli {
    fn default() -> Self {
        Self::new(DEFAULT_PM2_BINARY)
    }
}

#[async_trait]
impl ProcessManager for Pm2Cli {
    async fn run(&self, command: &Pm2Command) -> ProcessManagerResult<CommandOutput> {
        let command_line = self.describe(command);
        info!(command = %command_line, "invoking process manager");

        let output = Command::new(&self.program)
            .args(command.args())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|err| {
                warn!(command = %command_line, error = %err, "failed to spawn process manager");
                ExecutionError::Spawn {
                    command: command_line.clone(),
                    reason: err.to_string(),
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            warn!(
                command = %command_line,
                code = ?output.status.code(),
                "process manager exited unsuccessfully"
            );
            return Err(ExecutionError::non_zero_exit(
                command_line,
                output.status.code(),
                &stdout,
                &stderr,
            ));
        }

        debug!(
            command = %command_line,
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "process manager finished"
        );
        Ok(CommandOutput::new(stdout, stderr))
    }

    fn describe(&self, command: &Pm2Command) -> String {
        command.command_line(&self.program)
    }
}
