//! Argument vectors issued to the `pm2` binary.

use std::fmt;

/// A process name or numeric PM2 identifier.
///
/// The value is passed to `pm2` as a single argument, so whitespace and
/// shell metacharacters are never interpreted by a shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessTarget(String);

impl ProcessTarget {
    /// Creates a target from a process name or ID.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the target as passed to `pm2`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Log stream selected by the `logs` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogType {
    /// Standard output log (`--out`).
    Out,
    /// Error log (`--err`).
    Err,
    /// Error log, long spelling (`--error`).
    Error,
}

impl LogType {
    /// Parses the literal tokens `out`, `err` and `error`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "out" => Some(Self::Out),
            "err" => Some(Self::Err),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Returns the token as typed by the user and forwarded to `pm2`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Out => "out",
            Self::Err => "err",
            Self::Error => "error",
        }
    }

    /// Returns the human name of the log file (`err` reads as `error`).
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Out => "out",
            Self::Err | Self::Error => "error",
        }
    }

    /// Returns `true` when the log content arrives on standard output.
    #[must_use]
    pub const fn is_stdout(self) -> bool {
        matches!(self, Self::Out)
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated arguments of a log-tail request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogsRequest {
    /// Number of trailing lines to read.
    pub lines: u32,
    /// Log stream to read.
    pub log_type: LogType,
    /// Process whose logs are read.
    pub target: ProcessTarget,
}

impl LogsRequest {
    /// Creates a log-tail request.
    #[must_use]
    pub const fn new(lines: u32, log_type: LogType, target: ProcessTarget) -> Self {
        Self {
            lines,
            log_type,
            target,
        }
    }
}

/// A single `pm2` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pm2Command {
    /// `pm2 restart <target>`.
    Restart(ProcessTarget),
    /// `pm2 stop <target>`.
    Stop(ProcessTarget),
    /// `pm2 logs <target> --raw --nostream --<type> --lines <n>`.
    Logs(LogsRequest),
    /// `pm2 jlist`.
    List,
}

impl Pm2Command {
    /// Returns the argument vector passed to the `pm2` binary.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Restart(target) => vec!["restart".to_owned(), target.as_str().to_owned()],
            Self::Stop(target) => vec!["stop".to_owned(), target.as_str().to_owned()],
            Self::Logs(request) => vec![
                "logs".to_owned(),
                request.target.as_str().to_owned(),
                "--raw".to_owned(),
                "--nostream".to_owned(),
                format!("--{}", request.log_type),
                "--lines".to_owned(),
                request.lines.to_string(),
            ],
            Self::List => vec!["jlist".to_owned()],
        }
    }

    /// Renders the invocation as a command line for logs and error text.
    ///
    /// The result is for display only and is never handed to a shell.
    #[must_use]
    pub fn command_line(&self, program: &str) -> String {
        let mut line = program.to_owned();
        for arg in self.args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}
