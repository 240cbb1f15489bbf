//! Execution port for the external process manager.

use async_trait::async_trait;

use crate::process::domain::{CommandOutput, ExecutionError, Pm2Command};

/// Result type for process manager invocations.
pub type ProcessManagerResult<T> = Result<T, ExecutionError>;

/// Single-shot execution contract for `pm2` commands.
///
/// Implementations run exactly one invocation per call, never retry, and
/// apply no timeout. A pending invocation suspends only the calling flow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessManager: Send + Sync {
    /// Runs the command and captures its output.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] when the binary cannot be spawned or exits
    /// unsuccessfully.
    async fn run(&self, command: &Pm2Command) -> ProcessManagerResult<CommandOutput>;

    /// Renders the command line this manager runs for `command`, for logs
    /// and error text.
    fn describe(&self, command: &Pm2Command) -> String;
}
