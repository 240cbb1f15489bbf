//! Captured output of a successful invocation.

/// Standard output and standard error of a `pm2` run that exited cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    stdout: String,
    stderr: String,
}

impl CommandOutput {
    /// Creates captured output.
    #[must_use]
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates output with only standard output populated.
    #[must_use]
    pub fn stdout_only(stdout: impl Into<String>) -> Self {
        Self::new(stdout, String::new())
    }

    /// Returns captured standard output.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Returns captured standard error.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
