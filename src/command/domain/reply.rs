//! Success payloads returned by command handlers.

use crate::process::domain::{LogsRequest, ProcessDescriptor, ProcessTarget};

use super::CommandDefinition;

/// Successful outcome of a command, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    /// A process was restarted; `output` holds the `[PM2]` lines.
    Restarted {
        /// Restarted process.
        target: ProcessTarget,
        /// Filtered `pm2` output.
        output: String,
    },
    /// A process was stopped; `output` holds the `[PM2]` lines.
    Stopped {
        /// Stopped process.
        target: ProcessTarget,
        /// Filtered `pm2` output.
        output: String,
    },
    /// A log tail was read.
    LogTail {
        /// Validated request.
        request: LogsRequest,
        /// Shaped log content.
        content: String,
    },
    /// All supervised processes, in `pm2` order.
    ProcessList(Vec<ProcessDescriptor>),
    /// A help page.
    Help(HelpPage),
}

/// One line of the help overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    /// Command label.
    pub label: String,
    /// Command description.
    pub description: String,
}

/// Content of a help reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpPage {
    /// Listing of every process-management command.
    Overview {
        /// Configured command prefix.
        prefix: String,
        /// Listed commands, in registration order.
        entries: Vec<HelpEntry>,
    },
    /// Usage details of a single command.
    Command {
        /// Configured command prefix.
        prefix: String,
        /// The described command.
        definition: CommandDefinition,
    },
}
