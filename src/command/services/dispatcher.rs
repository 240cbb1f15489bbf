//! Command dispatch: validate, invoke, format, reply.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::command::{
    domain::{
        CommandDefinition, CommandError, CommandInvocation, CommandKind, CommandReply,
        CommandResult, ValidationError, validation,
    },
    ports::{ReplySink, ReplySinkResult},
    registry::CommandRegistry,
};
use crate::process::{
    domain::{ExecutionError, Pm2Command, parse_process_list},
    ports::ProcessManager,
};
use crate::render::{filter_tagged_lines, render_error, render_outcome, shape_log_tail};

use super::help::help_page;

/// Routes chat commands to the process manager and replies with the result.
///
/// Each call is an independent flow; the dispatcher holds no per-request
/// state, so concurrent calls need no coordination.
#[derive(Clone)]
pub struct CommandDispatcher<P>
where
    P: ProcessManager,
{
    registry: Arc<CommandRegistry>,
    process_manager: Arc<P>,
    prefix: String,
}

impl<P> CommandDispatcher<P>
where
    P: ProcessManager,
{
    /// Creates a dispatcher.
    #[must_use]
    pub fn new(
        registry: Arc<CommandRegistry>,
        process_manager: Arc<P>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            process_manager,
            prefix: prefix.into(),
        }
    }

    /// Returns the command prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the registry used for lookup.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Handles a raw chat message.
    ///
    /// Messages without the prefix and unknown command names are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::command::domain::DeliveryError`] when the reply could
    /// not be delivered.
    pub async fn dispatch_message<S>(
        &self,
        content: &str,
        author: Option<&str>,
        sink: &S,
    ) -> ReplySinkResult<()>
    where
        S: ReplySink + ?Sized,
    {
        match CommandInvocation::parse(&self.prefix, content) {
            Some(invocation) => self.dispatch(&invocation, author, sink).await,
            None => Ok(()),
        }
    }

    /// Handles a parsed invocation and delivers exactly one reply.
    ///
    /// A reply the transport refuses is replaced by an error reply carrying
    /// its length and the delivery error. Log tails report the length of the
    /// tail itself.
    ///
    /// # Errors
    ///
    /// Returns [`crate::command::domain::DeliveryError`] when the fallback
    /// could not be delivered either.
    pub async fn dispatch<S>(
        &self,
        invocation: &CommandInvocation,
        author: Option<&str>,
        sink: &S,
    ) -> ReplySinkResult<()>
    where
        S: ReplySink + ?Sized,
    {
        let Some(definition) = self.registry.resolve(invocation.command()) else {
            debug!(command = invocation.command(), "ignoring unknown command");
            return Ok(());
        };

        let outcome = self.execute(definition, invocation.arguments()).await;
        if let Err(error) = &outcome {
            warn!(command = %definition.label, %error, "command failed");
        }

        let mut reply = render_outcome(&outcome);
        if let (CommandKind::Help, Some(author)) = (definition.kind, author) {
            reply = reply.with_footer(format!("Requested by: {author}"));
        }

        let Err(delivery_error) = sink.send(&reply).await else {
            return Ok(());
        };
        warn!(command = %definition.label, error = %delivery_error, "reply rejected by chat layer");

        let length = match &outcome {
            Ok(CommandReply::LogTail { content, .. }) => content.chars().count(),
            _ => reply.char_count(),
        };
        let fallback = render_error(&CommandError::Delivery {
            length,
            source: delivery_error,
        });
        sink.send(&fallback).await
    }

    /// Runs the handler for `definition` and returns its discriminated
    /// outcome.
    ///
    /// Validation failures return before the process manager is called.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for validation, execution, or help lookup
    /// failures.
    pub async fn execute(
        &self,
        definition: &CommandDefinition,
        arguments: &[String],
    ) -> CommandResult<CommandReply> {
        if definition.args_required && arguments.is_empty() {
            return Err(ValidationError::MissingArguments {
                prefix: self.prefix.clone(),
                label: definition.label.clone(),
            }
            .into());
        }

        match definition.kind {
            CommandKind::Restart => self.restart(arguments).await,
            CommandKind::Stop => self.stop(arguments).await,
            CommandKind::Logs => self.logs(arguments).await,
            CommandKind::Processes => self.processes().await,
            CommandKind::Help => help_page(&self.registry, &self.prefix, arguments),
        }
    }

    async fn restart(&self, arguments: &[String]) -> CommandResult<CommandReply> {
        let target = validation::process_target(arguments)?;
        info!(process = %target, "restarting process");
        let output = self.run_control(Pm2Command::Restart(target.clone())).await?;
        Ok(CommandReply::Restarted { target, output })
    }

    async fn stop(&self, arguments: &[String]) -> CommandResult<CommandReply> {
        let target = validation::process_target(arguments)?;
        info!(process = %target, "stopping process");
        let output = self.run_control(Pm2Command::Stop(target.clone())).await?;
        Ok(CommandReply::Stopped { target, output })
    }

    async fn run_control(&self, command: Pm2Command) -> CommandResult<String> {
        let output = self.process_manager.run(&command).await?;
        Ok(filter_tagged_lines(output.stdout()))
    }

    async fn logs(&self, arguments: &[String]) -> CommandResult<CommandReply> {
        let request = validation::logs_request(arguments)?;
        info!(
            process = %request.target,
            lines = request.lines,
            log_type = %request.log_type,
            "tailing process log"
        );
        let output = self
            .process_manager
            .run(&Pm2Command::Logs(request.clone()))
            .await?;
        let content = shape_log_tail(request.log_type, &output);
        Ok(CommandReply::LogTail { request, content })
    }

    async fn processes(&self) -> CommandResult<CommandReply> {
        let command = Pm2Command::List;
        let output = self.process_manager.run(&command).await?;
        let processes = parse_process_list(output.stdout()).map_err(|err| {
            ExecutionError::MalformedOutput {
                command: self.process_manager.describe(&command),
                reason: err.to_string(),
            }
        })?;
        debug!(count = processes.len(), "listed processes");
        Ok(CommandReply::ProcessList(processes))
    }
}
