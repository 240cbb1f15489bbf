//! Static command registry with label and alias lookup.

use std::collections::HashMap;

use crate::command::domain::{CommandDefinition, CommandKind, RegistryError};

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Read-only set of command definitions.
///
/// Built once at start-up and never mutated. Every label and alias maps to
/// exactly one definition; construction fails on any overlap.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates the registry of built-in commands.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the built-in table is ambiguous.
    pub fn builtin() -> RegistryResult<Self> {
        Self::with_commands(default_commands())
    }

    /// Creates a registry from supplied definitions, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] for empty or whitespace-bearing
    /// names and [`RegistryError::DuplicateName`] when a label or alias is
    /// claimed twice.
    pub fn with_commands(
        definitions: impl IntoIterator<Item = CommandDefinition>,
    ) -> RegistryResult<Self> {
        let mut registry = Self {
            definitions: Vec::new(),
            index: HashMap::new(),
        };

        for definition in definitions {
            let position = registry.definitions.len();
            for name in definition.names() {
                if name.is_empty() || name.contains(char::is_whitespace) {
                    return Err(RegistryError::InvalidName(name.to_owned()));
                }
                if let Some(&existing) = registry.index.get(name) {
                    let existing_label = registry
                        .definitions
                        .get(existing)
                        .map_or_else(|| definition.label.clone(), |found| found.label.clone());
                    return Err(RegistryError::DuplicateName {
                        name: name.to_owned(),
                        existing: existing_label,
                        conflicting: definition.label.clone(),
                    });
                }
                registry.index.insert(name.to_owned(), position);
            }
            registry.definitions.push(definition);
        }

        Ok(registry)
    }

    /// Finds a definition by label or alias, ignoring ASCII case.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&CommandDefinition> {
        self.index
            .get(&name.to_ascii_lowercase())
            .and_then(|&position| self.definitions.get(position))
    }

    /// Returns all definitions in registration order.
    #[must_use]
    pub fn definitions(&self) -> &[CommandDefinition] {
        &self.definitions
    }
}

fn default_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("restart", CommandKind::Restart, "Restarts a pm2 process.")
            .with_alias("r")
            .with_alias("start")
            .with_usage("[process name or ID]")
            .requiring_args(),
        CommandDefinition::new("stop", CommandKind::Stop, "Stops a pm2 process.")
            .with_alias("s")
            .with_usage("[process name or ID]")
            .requiring_args(),
        CommandDefinition::new(
            "logs",
            CommandKind::Logs,
            "Shows the content of either the .out or .err file of a specified pm2 process.",
        )
        .with_alias("l")
        .with_usage("[lines] [log type] [process name or ID]")
        .with_details(
            "The \"lines\" argument has to be a number and it has to be 15 or above. \
             The \"log type\" argument has to be one of these 3 values: out, err, or error.",
        )
        .requiring_args(),
        CommandDefinition::new("processes", CommandKind::Processes, "Shows all pm2 processes.")
            .with_alias("p"),
        CommandDefinition::new("help", CommandKind::Help, "Shows this help listing.")
            .with_usage("<command name>"),
    ]
}
