//! Rendered reply shape and the outcome renderer.

use crate::command::domain::{
    CommandDefinition, CommandError, CommandReply, CommandResult, HelpEntry, HelpPage,
};
use crate::process::domain::{LogsRequest, ProcessDescriptor};

use super::bytes::{ByteUnits, humanize_bytes};

const EXEC_FAILED_TITLE: &str = "Exec command failed! Details below:";
const TOO_LONG_TITLE: &str = "Embed is too long! Details:";
const PROCESS_LIST_TITLE: &str = "All PM2 Processes";
const HELP_SECTION: &str = "PM2 Process Management";
const BRACKET_CONVENTION: &str = "If a command argument is enclosed in square brackets ([ ]), \
    then the argument is required. If it's enclosed in angle brackets (< >), then it's optional.";

/// Semantic status of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyColor {
    /// Informational output.
    Normal,
    /// A command completed.
    Success,
    /// A command was rejected or failed.
    Error,
}

impl ReplyColor {
    /// Returns the RGB colour used by embed-style transports.
    #[must_use]
    pub const fn rgb(self) -> u32 {
        match self {
            Self::Normal => 0x0034_98DB,
            Self::Success => 0x002E_CC71,
            Self::Error => 0x00E7_4C3C,
        }
    }
}

/// A named block of reply content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyField {
    /// Field heading.
    pub name: String,
    /// Field content.
    pub value: String,
    /// Whether the field may sit next to others.
    pub inline: bool,
}

impl ReplyField {
    /// Creates a block-level field.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    /// Creates an inline field.
    #[must_use]
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inline: true,
            ..Self::new(name, value)
        }
    }
}

/// A reply ready for delivery by the chat layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReply {
    /// Semantic colour tag.
    pub color: ReplyColor,
    /// Small heading above the title.
    pub author: Option<String>,
    /// Reply title.
    pub title: Option<String>,
    /// Main text.
    pub body: Option<String>,
    /// Structured fields.
    pub fields: Vec<ReplyField>,
    /// Trailing note.
    pub footer: Option<String>,
}

impl RenderedReply {
    /// Creates an empty reply with the given colour.
    #[must_use]
    pub const fn new(color: ReplyColor) -> Self {
        Self {
            color,
            author: None,
            title: None,
            body: None,
            fields: Vec::new(),
            footer: None,
        }
    }

    /// Sets the author heading.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: ReplyField) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends several fields.
    #[must_use]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = ReplyField>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Sets the footer.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Counts the characters of every text part of the reply.
    #[must_use]
    pub fn char_count(&self) -> usize {
        let headings = [&self.author, &self.title, &self.body, &self.footer]
            .into_iter()
            .flatten()
            .map(|text| text.chars().count());
        let fields = self
            .fields
            .iter()
            .map(|field| field.name.chars().count() + field.value.chars().count());
        headings.chain(fields).sum()
    }
}

/// Renders any handler outcome into a reply.
#[must_use]
pub fn render_outcome(outcome: &CommandResult<CommandReply>) -> RenderedReply {
    match outcome {
        Ok(reply) => render_reply(reply),
        Err(error) => render_error(error),
    }
}

/// Renders a successful handler result.
#[must_use]
pub fn render_reply(reply: &CommandReply) -> RenderedReply {
    match reply {
        CommandReply::Restarted { output, .. } => RenderedReply::new(ReplyColor::Success)
            .with_title("Restart successful!")
            .with_body(code_block(output)),
        CommandReply::Stopped { output, .. } => RenderedReply::new(ReplyColor::Success)
            .with_title("Stop successful!")
            .with_body(code_block(output)),
        CommandReply::LogTail { request, content } => RenderedReply::new(ReplyColor::Success)
            .with_title(log_tail_title(request))
            .with_body(code_block(content)),
        CommandReply::ProcessList(processes) => RenderedReply::new(ReplyColor::Normal)
            .with_title(PROCESS_LIST_TITLE)
            .with_fields(project_processes(processes)),
        CommandReply::Help(page) => render_help(page),
    }
}

/// Renders a handler failure as an error-coloured reply.
#[must_use]
pub fn render_error(error: &CommandError) -> RenderedReply {
    match error {
        CommandError::Validation(validation) => {
            RenderedReply::new(ReplyColor::Error).with_body(format!("❌ {validation}"))
        }
        CommandError::Execution(execution) => RenderedReply::new(ReplyColor::Error)
            .with_title(EXEC_FAILED_TITLE)
            .with_body(code_block(&execution.to_string())),
        CommandError::Delivery { length, source } => RenderedReply::new(ReplyColor::Error)
            .with_title(TOO_LONG_TITLE)
            .with_body(code_block(&format!(
                "Exec result is {length} characters long\n\n{source}"
            ))),
        CommandError::UnknownHelpTopic(_) => RenderedReply::new(ReplyColor::Error)
            .with_author("Help")
            .with_body(format!("❌ {error}")),
    }
}

/// Projects process descriptors into one inline field each, in order.
#[must_use]
pub fn project_processes(processes: &[ProcessDescriptor]) -> Vec<ReplyField> {
    processes
        .iter()
        .map(|process| {
            ReplyField::inline(
                process.name.clone(),
                format!(
                    "ID: {}\nStatus: {}\nMemory: {}\n",
                    process.id,
                    process.status,
                    humanize_bytes(process.memory_bytes, ByteUnits::Decimal)
                ),
            )
        })
        .collect()
}

fn log_tail_title(request: &LogsRequest) -> String {
    format!(
        "Tailing last {} lines of {} file for process {}:",
        request.lines,
        request.log_type.display_name(),
        request.target
    )
}

fn render_help(page: &HelpPage) -> RenderedReply {
    match page {
        HelpPage::Overview { prefix, entries } => RenderedReply::new(ReplyColor::Normal)
            .with_author("Help: All Commands")
            .with_body(format!(
                "To see more detailed information about a command, do `{prefix}help [command name]`."
            ))
            .with_field(ReplyField::new(HELP_SECTION, help_listing(prefix, entries))),
        HelpPage::Command { prefix, definition } => RenderedReply::new(ReplyColor::Normal)
            .with_author(format!("Help: {prefix}{}", definition.label))
            .with_body(BRACKET_CONVENTION)
            .with_fields(usage_fields(prefix, definition)),
    }
}

fn help_listing(prefix: &str, entries: &[HelpEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("`{prefix}{}` — {}", entry.label, entry.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn usage_fields(prefix: &str, definition: &CommandDefinition) -> Vec<ReplyField> {
    let invocation = if definition.usage.is_empty() {
        format!("`{prefix}{}`", definition.label)
    } else {
        format!("`{prefix}{} {}`", definition.label, definition.usage)
    };
    let usage = match &definition.details {
        Some(details) => format!("{invocation}\n{details}"),
        None => invocation,
    };

    let mut fields = vec![ReplyField::new("Usage", usage)];
    if !definition.aliases.is_empty() {
        fields.push(ReplyField::new(
            "Aliases",
            format!("`{}`", definition.aliases.join(", ")),
        ));
    }
    fields
}

fn code_block(text: &str) -> String {
    format!("```js\n{text}```")
}
