//! Help pages derived from registry metadata.

use crate::command::{
    domain::{CommandError, CommandKind, CommandReply, CommandResult, HelpEntry, HelpPage},
    registry::CommandRegistry,
};

/// Builds the help reply for `help [command name]`.
///
/// Without arguments the overview lists every process-management command.
/// With a name (label or alias, any case) the command's usage is shown.
///
/// # Errors
///
/// Returns [`CommandError::UnknownHelpTopic`] when the name is not
/// registered.
pub fn help_page(
    registry: &CommandRegistry,
    prefix: &str,
    arguments: &[String],
) -> CommandResult<CommandReply> {
    let Some(topic) = arguments.first() else {
        let entries = registry
            .definitions()
            .iter()
            .filter(|definition| definition.kind != CommandKind::Help)
            .map(|definition| HelpEntry {
                label: definition.label.clone(),
                description: definition.description.clone(),
            })
            .collect();
        return Ok(CommandReply::Help(HelpPage::Overview {
            prefix: prefix.to_owned(),
            entries,
        }));
    };

    let name = topic.to_ascii_lowercase();
    registry.resolve(&name).map_or_else(
        || Err(CommandError::UnknownHelpTopic(name.clone())),
        |definition| {
            Ok(CommandReply::Help(HelpPage::Command {
                prefix: prefix.to_owned(),
                definition: definition.clone(),
            }))
        },
    )
}
