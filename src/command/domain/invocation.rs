//! Prefixed chat-message parser.

/// A command name and its raw argument tokens, parsed from one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    command: String,
    arguments: Vec<String>,
}

impl CommandInvocation {
    /// Creates an invocation from already-split parts.
    #[must_use]
    pub fn new(command: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            command: command.into(),
            arguments,
        }
    }

    /// Parses `<prefix><command> [arg ...]`.
    ///
    /// Returns `None` when the message does not start with `prefix` or has
    /// no command name right after it; such messages are ordinary chat.
    /// Arguments are split on whitespace and keep their case.
    #[must_use]
    pub fn parse(prefix: &str, content: &str) -> Option<Self> {
        let rest = content.trim_start().strip_prefix(prefix)?;
        if rest.starts_with(char::is_whitespace) {
            return None;
        }

        let mut tokens = rest.split_whitespace();
        let command = tokens.next()?;
        Some(Self {
            command: command.to_owned(),
            arguments: tokens.map(str::to_owned).collect(),
        })
    }

    /// Returns the command name or alias as typed.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the argument tokens in order.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}
