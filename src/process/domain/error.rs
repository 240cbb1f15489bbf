//! Failures of the external `pm2` invocation.

use thiserror::Error;

/// Errors raised while running a `pm2` command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutionError {
    /// The binary could not be started.
    #[error("failed to spawn `{command}`: {reason}")]
    Spawn {
        /// Rendered command line.
        command: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The binary ran but exited unsuccessfully.
    #[error("command failed: {command}\n{diagnostics}")]
    NonZeroExit {
        /// Rendered command line.
        command: String,
        /// Exit code, absent when the process was killed by a signal.
        code: Option<i32>,
        /// Standard error, or standard output when standard error was empty.
        diagnostics: String,
    },

    /// The binary exited cleanly but printed something unparseable.
    #[error("unexpected output from `{command}`: {reason}")]
    MalformedOutput {
        /// Rendered command line.
        command: String,
        /// Parse failure.
        reason: String,
    },
}

impl ExecutionError {
    /// Builds a [`Self::NonZeroExit`] from captured streams.
    #[must_use]
    pub fn non_zero_exit(
        command: impl Into<String>,
        code: Option<i32>,
        stdout: &str,
        stderr: &str,
    ) -> Self {
        let trimmed_stderr = stderr.trim_end();
        let diagnostics = if trimmed_stderr.is_empty() {
            stdout.trim_end()
        } else {
            trimmed_stderr
        };
        Self::NonZeroExit {
            command: command.into(),
            code,
            diagnostics: diagnostics.to_owned(),
        }
    }
}
