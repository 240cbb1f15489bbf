//! Command definitions consumed by the dispatcher and the help listing.

/// Handler selected for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Restart a process.
    Restart,
    /// Stop a process.
    Stop,
    /// Tail a process log.
    Logs,
    /// List all processes.
    Processes,
    /// Show command help.
    Help,
}

/// Static metadata for one chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    /// Canonical name, lowercase.
    pub label: String,
    /// Alternative names, lowercase.
    pub aliases: Vec<String>,
    /// One-line description for the help listing.
    pub description: String,
    /// Argument synopsis shown after the label, e.g. `[process name or ID]`.
    pub usage: String,
    /// Extra usage notes.
    pub details: Option<String>,
    /// Whether the command refuses to run without arguments.
    pub args_required: bool,
    /// Handler variant.
    pub kind: CommandKind,
}

impl CommandDefinition {
    /// Creates a definition with no aliases and optional arguments.
    #[must_use]
    pub fn new(label: impl Into<String>, kind: CommandKind, description: impl Into<String>) -> Self {
        Self {
            label: label.into().to_ascii_lowercase(),
            aliases: Vec::new(),
            description: description.into(),
            usage: String::new(),
            details: None,
            args_required: false,
            kind,
        }
    }

    /// Adds an alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_ascii_lowercase());
        self
    }

    /// Sets the argument synopsis.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Sets extra usage notes.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Marks the command as requiring at least one argument.
    #[must_use]
    pub const fn requiring_args(mut self) -> Self {
        self.args_required = true;
        self
    }

    /// Returns the label followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}
